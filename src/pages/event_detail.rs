//! Event Detail Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::components::Spinner;
use crate::dates::format_event_time;
use crate::store::{use_event_store, EventsStateStoreFields, FetchStatus};

#[component]
pub fn EventDetailPage() -> impl IntoView {
    let events = use_event_store();
    let state = events.state;
    let params = use_params_map();

    Effect::new(move |_| {
        let id = params.read().get("id").and_then(|id| id.parse::<u32>().ok());
        if let Some(id) = id {
            spawn_local(events.load_event(id));
        }
    });

    view! {
        <div class="detail-layout">
            {move || match state.event_status().get() {
                FetchStatus::Idle | FetchStatus::Loading => view! { <Spinner /> }.into_any(),
                FetchStatus::Error(message) => {
                    view! { <p class="error-text">{format!("Error: {message}")}</p> }.into_any()
                }
                FetchStatus::Success => {
                    match state.event().get() {
                        Some(event) => {
                            let times = format!(
                                "{} to {}",
                                format_event_time(&event.start_time),
                                format_event_time(&event.end_time)
                            );
                            view! {
                                <article class="event-detail card-background">
                                    <img
                                        src=event.logo_url
                                        alt=event.name.clone()
                                        class="event-detail-logo"
                                    />
                                    <div class="event-detail-body">
                                        <h1 class="page-heading">{event.name}</h1>
                                        <p class="event-times">{times}</p>
                                        <p class="event-description">{event.description}</p>
                                        {event
                                            .live_stream_url
                                            .map(|url| {
                                                view! {
                                                    <p>
                                                        <a href=url class="event-link" target="_blank">
                                                            "Watch live"
                                                        </a>
                                                    </p>
                                                }
                                            })}
                                        {(!event.event_urls.is_empty())
                                            .then(|| {
                                                view! {
                                                    <h3>"Links"</h3>
                                                    <ul class="event-links">
                                                        {event
                                                            .event_urls
                                                            .into_iter()
                                                            .map(|url| {
                                                                view! {
                                                                    <li>
                                                                        <a href=url.clone() target="_blank">{url.clone()}</a>
                                                                    </li>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </ul>
                                                }
                                            })}
                                        {(!event.videos.is_empty())
                                            .then(|| {
                                                view! {
                                                    <h3>"Videos"</h3>
                                                    <ul class="event-links">
                                                        {event
                                                            .videos
                                                            .into_iter()
                                                            .map(|url| {
                                                                view! {
                                                                    <li>
                                                                        <a href=url.clone() target="_blank">{url.clone()}</a>
                                                                    </li>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </ul>
                                                }
                                            })}
                                    </div>
                                </article>
                            }
                                .into_any()
                        }
                        None => view! { <p class="empty-text">"Event not found"</p> }.into_any(),
                    }
                }
            }}
        </div>
    }
}
