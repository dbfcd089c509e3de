//! Upcoming Games Page
//!
//! The filtered, paginated game listing. Filter and page state lives in one
//! `FilterState` signal, initialized from the URL at mount and mirrored back
//! into it on every change; every change also issues one guarded listing
//! fetch.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::components::{FilterDropdown, GameCard, Pagination, Spinner};
use crate::filters::Dimension;
use crate::store::{use_game_store, FetchStatus, GamesStateStoreFields};
use crate::url_state;

/// Listing path the filter reset navigates to
const LISTING_PATH: &str = "/upcominggames";

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[component]
pub fn UpcomingGamesPage() -> impl IntoView {
    let games = use_game_store();
    let state = games.state;
    let filters = RwSignal::new(url_state::from_location());

    // The four vocabularies load independently and in parallel
    Effect::new(move |_| {
        for dim in Dimension::ALL {
            spawn_local(games.load_vocabulary(dim));
        }
    });

    // Mirror every change into the address bar (replace, not navigate)
    Effect::new(move |_| {
        url_state::replace_query(&filters.get());
    });

    // One listing fetch per change; stale responses are dropped in the store
    Effect::new(move |_| {
        spawn_local(games.load_upcoming(filters.get()));
    });

    let total_pages = move || {
        state
            .pagination()
            .get()
            .map(|p| p.total_pages)
            .unwrap_or(1)
    };

    let on_page_change = move |page: u32| {
        let total = state.pagination().get_untracked().map(|p| p.total_pages);
        filters.update(|f| f.set_page(page, total));
        scroll_to_top();
    };

    let navigate = use_navigate();
    let reset_filters = Callback::new(move |_: ()| {
        filters.update(|f| f.reset());
        navigate(LISTING_PATH, Default::default());
    });

    let content = move || match state.upcoming_status().get() {
        FetchStatus::Idle | FetchStatus::Loading => view! { <Spinner /> }.into_any(),
        FetchStatus::Error(message) => {
            view! { <p class="error-text">{format!("Error: {message}")}</p> }.into_any()
        }
        FetchStatus::Success => {
            let items = state.upcoming().get();
            if items.is_empty() {
                if filters.with(|f| f.has_filters()) {
                    view! {
                        <div class="no-results card-background">
                            <p class="no-results-title">"No games matching the selected filters"</p>
                            <p>"Try adjusting your filters or"</p>
                            <button class="filter-button" on:click=move |_| reset_filters.run(())>
                                "Reset Filters"
                            </button>
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <p class="empty-text">"No games available"</p> }.into_any()
                }
            } else {
                view! {
                    <div class="game-grid">
                        {items
                            .into_iter()
                            .map(|game| view! { <GameCard game=game /> })
                            .collect_view()}
                    </div>
                    {move || {
                        (total_pages() > 1)
                            .then(|| {
                                view! {
                                    <Pagination
                                        current_page=Signal::derive(move || filters.with(|f| f.page))
                                        total_pages=Signal::derive(total_pages)
                                        on_page_change=Callback::new(on_page_change)
                                    />
                                }
                            })
                    }}
                }
                .into_any()
            }
        }
    };

    view! {
        <div class="listing-layout">
            <section class="listing-main">
                <h1 class="page-heading">"Upcoming Games"</h1>
                {content}
            </section>
            <aside class="filter-sidebar">
                <h2 class="section-heading">"Filter"</h2>
                <div class="filter-panel">
                    {Dimension::ALL
                        .into_iter()
                        .map(|dim| {
                            let options =
                                Signal::derive(move || games.vocabulary_items(dim).get());
                            let status =
                                Signal::derive(move || games.vocabulary_status(dim).get());
                            let selected =
                                Signal::derive(move || filters.with(|f| f.selected(dim).to_vec()));
                            view! {
                                <FilterDropdown
                                    label=dim.label()
                                    options=options
                                    selected=selected
                                    status=status
                                    on_toggle=Callback::new(move |name: String| {
                                        filters.update(|f| f.toggle(dim, &name));
                                    })
                                />
                            }
                        })
                        .collect_view()}
                    <button class="filter-button" on:click=move |_| reset_filters.run(())>
                        "Reset Filters"
                    </button>
                    <p class="filter-count">
                        {move || {
                            let shown = state.upcoming().read().len();
                            let total = state
                                .pagination()
                                .get()
                                .map(|p| p.total_items)
                                .unwrap_or(0);
                            format!("Showing {shown} of {total} games")
                        }}
                    </p>
                </div>
            </aside>
        </div>
    }
}
