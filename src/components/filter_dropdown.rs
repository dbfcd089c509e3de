//! Filter Dropdown Component
//!
//! Collapsible option list for one filter dimension: a checkbox per
//! vocabulary entry, with the dimension's own loading and error state.

use leptos::prelude::*;

use crate::models::FilterOption;
use crate::store::FetchStatus;

use super::Spinner;

#[component]
pub fn FilterDropdown(
    label: &'static str,
    options: Signal<Vec<FilterOption>>,
    selected: Signal<Vec<String>>,
    status: Signal<FetchStatus>,
    #[prop(into)] on_toggle: Callback<String>,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="filter-dropdown">
            <button
                class="filter-dropdown-header"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <span>{label}</span>
                <span class="filter-dropdown-chevron">
                    {move || if open.get() { "^" } else { "v" }}
                </span>
            </button>
            {move || {
                open.get().then(|| match status.get() {
                    FetchStatus::Idle | FetchStatus::Loading => {
                        view! { <Spinner small=true /> }.into_any()
                    }
                    FetchStatus::Error(message) => {
                        view! { <p class="filter-error">{message}</p> }.into_any()
                    }
                    FetchStatus::Success => {
                        view! {
                            <ul class="filter-options">
                                <For
                                    each=move || options.get()
                                    key=|option| option.id
                                    children=move |option| {
                                        let name = option.name;
                                        let checked_name = name.clone();
                                        let toggled_name = name.clone();
                                        view! {
                                            <li>
                                                <label class="filter-option">
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=move || {
                                                            selected.get().iter().any(|n| *n == checked_name)
                                                        }
                                                        on:change=move |_| on_toggle.run(toggled_name.clone())
                                                    />
                                                    <span>{name}</span>
                                                </label>
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        }
                        .into_any()
                    }
                })
            }}
        </div>
    }
}
