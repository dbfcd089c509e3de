//! Loading Spinner

use leptos::prelude::*;

/// Animated loading indicator; `small` fits inside dropdowns
#[component]
pub fn Spinner(#[prop(optional)] small: bool) -> impl IntoView {
    let class = if small {
        "spinner spinner-small"
    } else {
        "spinner"
    };
    view! {
        <div class="spinner-wrap">
            <div class=class></div>
        </div>
    }
}
