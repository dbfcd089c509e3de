//! Navigation Bar
//!
//! Brand link, section links, the debounced search box with its results
//! dropdown, and the persisted dark-mode toggle.

use leptos::prelude::*;

use crate::store::{use_search_store, use_theme_store, SearchStateStoreFields};

use super::SearchDropdown;

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = use_theme_store();
    let search = use_search_store();
    let (search_open, set_search_open) = signal(false);

    let on_search_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_search_open.set(!value.trim().is_empty());
        search.set_query(value);
    };

    let close_search = Callback::new(move |_: ()| {
        set_search_open.set(false);
        search.clear();
    });

    view! {
        <header class="navbar">
            <nav class="navbar-inner">
                <div class="navbar-left">
                    <a href="/" class="navbar-brand">"Gamerfeeds"</a>
                    <div class="navbar-search">
                        <input
                            type="text"
                            placeholder="Search"
                            autocomplete="off"
                            prop:value=move || search.state.query().get()
                            on:input=on_search_input
                        />
                        {move || {
                            search_open
                                .get()
                                .then(|| view! { <SearchDropdown on_link_click=close_search /> })
                        }}
                    </div>
                </div>
                <ul class="navbar-links">
                    <li>
                        <a href="/upcominggames">"Upcoming Games"</a>
                    </li>
                    <li>
                        <a href="/events">"Events"</a>
                    </li>
                </ul>
                <div class="navbar-actions">
                    <button
                        type="button"
                        class="theme-toggle"
                        aria-pressed=move || theme.is_dark.get().to_string()
                        on:click=move |_| theme.toggle()
                    >
                        <span class="sr-only">"Toggle dark mode"</span>
                        {move || if theme.is_dark.get() { "\u{263E}" } else { "\u{2600}" }}
                    </button>
                </div>
            </nav>
        </header>
    }
}
