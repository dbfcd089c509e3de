//! Events Page
//!
//! Paginated listing of events; each card links to its detail page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Pagination, Spinner};
use crate::store::{use_event_store, EventsStateStoreFields, FetchStatus};

#[component]
pub fn EventsPage() -> impl IntoView {
    let events = use_event_store();
    let state = events.state;
    let (page, set_page) = signal(1u32);

    Effect::new(move |_| {
        spawn_local(events.load_events(page.get()));
    });

    let total_pages = move || {
        state
            .pagination()
            .get()
            .map(|p| p.total_pages)
            .unwrap_or(1)
    };

    let on_page_change = move |next: u32| {
        let last = state
            .pagination()
            .get_untracked()
            .map(|p| p.total_pages.max(1))
            .unwrap_or(1);
        set_page.set(next.clamp(1, last));
    };

    view! {
        <div class="listing-layout">
            <section class="listing-main">
                <h1 class="page-heading">"Events"</h1>
                {move || match state.events_status().get() {
                    FetchStatus::Idle | FetchStatus::Loading => view! { <Spinner /> }.into_any(),
                    FetchStatus::Error(message) => {
                        view! { <p class="error-text">{format!("Error: {message}")}</p> }
                            .into_any()
                    }
                    FetchStatus::Success => {
                        let items = state.events().get();
                        if items.is_empty() {
                            view! { <p class="empty-text">"No events available"</p> }.into_any()
                        } else {
                            view! {
                                <div class="event-grid">
                                    {items
                                        .into_iter()
                                        .map(|event| {
                                            let href = format!("/events/{}", event.id);
                                            view! {
                                                <a href=href class="event-card">
                                                    <img src=event.logo_url alt=event.name.clone() />
                                                    <div class="event-card-overlay">
                                                        <h3>{event.name}</h3>
                                                    </div>
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                {move || {
                                    (total_pages() > 1)
                                        .then(|| {
                                            view! {
                                                <Pagination
                                                    current_page=page.into()
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
                }}
            </section>
        </div>
    }
}
