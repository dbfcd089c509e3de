//! Game Card Component

use leptos::prelude::*;

use crate::dates::format_release_date;
use crate::models::Game;

/// Cover card for one game; the whole card links to the detail page
#[component]
pub fn GameCard(game: Game) -> impl IntoView {
    let href = format!("/games/{}", game.id);
    let release = format_release_date(&game.release_date);
    view! {
        <a href=href class="game-card">
            <img src=game.cover_image_url alt=game.name.clone() class="game-card-cover" />
            <div class="game-card-overlay">
                <h3 class="game-card-name">{game.name}</h3>
                <div class="game-card-meta">
                    <span>{release}</span>
                    <span class="game-card-rating">{format!("{:.1}", game.rating)}</span>
                </div>
            </div>
        </a>
    }
}
