//! Page Footer

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-inner">
                <a href="/upcominggames" class="footer-link">"Upcoming Games"</a>
                <h2>"\u{00A9} 2026 Gamerfeeds. All rights reserved."</h2>
                <a href="/events" class="footer-link">"Events"</a>
            </div>
        </footer>
    }
}
