//! Search Results Dropdown
//!
//! Renders under the navbar search box while a query is active.

use leptos::prelude::*;

use crate::dates::format_release_date;
use crate::store::{use_search_store, FetchStatus, SearchStateStoreFields};

use super::Spinner;

/// Upper bound on rendered results
const MAX_RESULTS: usize = 5;

#[component]
pub fn SearchDropdown(#[prop(into)] on_link_click: Callback<()>) -> impl IntoView {
    let search = use_search_store().state;

    view! {
        <div class="search-dropdown">
            {move || match search.status().get() {
                FetchStatus::Idle => ().into_any(),
                FetchStatus::Loading => view! { <Spinner small=true /> }.into_any(),
                FetchStatus::Error(message) => {
                    view! { <p class="search-error">{message}</p> }.into_any()
                }
                FetchStatus::Success => {
                    let results = search.results().get();
                    if results.is_empty() {
                        view! { <p class="search-empty">"No results found"</p> }.into_any()
                    } else {
                        view! {
                            <ul class="search-results">
                                {results
                                    .into_iter()
                                    .take(MAX_RESULTS)
                                    .map(|game| {
                                        let href = format!("/games/{}", game.id);
                                        let release = format_release_date(&game.release_date);
                                        view! {
                                            <li>
                                                <a
                                                    href=href
                                                    class="search-result"
                                                    on:click=move |_| on_link_click.run(())
                                                >
                                                    <img src=game.cover_image_url alt=game.name.clone() />
                                                    <div>
                                                        <span class="search-result-name">{game.name}</span>
                                                        <span class="search-result-date">{release}</span>
                                                    </div>
                                                </a>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_any()
                    }
                }
            }}
        </div>
    }
}
