//! Game Detail Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::components::Spinner;
use crate::dates::format_release_date;
use crate::store::{use_game_store, FetchStatus, GamesStateStoreFields};

#[component]
pub fn GameDetailPage() -> impl IntoView {
    let games = use_game_store();
    let state = games.state;
    let params = use_params_map();

    Effect::new(move |_| {
        let id = params.read().get("id").and_then(|id| id.parse::<u32>().ok());
        if let Some(id) = id {
            spawn_local(games.load_game(id));
        }
    });

    view! {
        <div class="detail-layout">
            {move || match state.game_status().get() {
                FetchStatus::Idle | FetchStatus::Loading => view! { <Spinner /> }.into_any(),
                FetchStatus::Error(message) => {
                    view! { <p class="error-text">{format!("Error: {message}")}</p> }.into_any()
                }
                FetchStatus::Success => {
                    match state.game().get() {
                        Some(game) => {
                            view! {
                                <article class="game-detail card-background">
                                    <img
                                        src=game.cover_image_url
                                        alt=game.name.clone()
                                        class="game-detail-cover"
                                    />
                                    <div class="game-detail-body">
                                        <h1 class="page-heading">{game.name}</h1>
                                        <p>
                                            {format!(
                                                "Release date: {}",
                                                format_release_date(&game.release_date)
                                            )}
                                        </p>
                                        <p>{format!("Rating: {:.1}", game.rating)}</p>
                                    </div>
                                </article>
                            }
                                .into_any()
                        }
                        None => view! { <p class="empty-text">"Game not found"</p> }.into_any(),
                    }
                }
            }}
        </div>
    }
}
