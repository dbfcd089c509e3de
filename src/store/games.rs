//! Game Store
//!
//! State for the upcoming-games listing, the filter vocabularies and the
//! game detail view. Uses reactive_stores for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::{Store, Subfield};

use crate::api;
use crate::filters::{Dimension, FilterState};
use crate::models::{FilterOption, Game, PaginationData};

use super::{FetchStatus, RequestSequence};

#[derive(Clone, Debug, Default, Store)]
pub struct GamesState {
    /// Current page of the filtered listing, replaced wholesale on each fetch
    pub upcoming: Vec<Game>,
    pub pagination: Option<PaginationData>,
    pub upcoming_status: FetchStatus,
    /// Game shown on the detail page
    pub game: Option<Game>,
    pub game_status: FetchStatus,
    /// Filter vocabularies, each with its own status
    pub developers: Vec<FilterOption>,
    pub developers_status: FetchStatus,
    pub platforms: Vec<FilterOption>,
    pub platforms_status: FetchStatus,
    pub genres: Vec<FilterOption>,
    pub genres_status: FetchStatus,
    pub languages: Vec<FilterOption>,
    pub languages_status: FetchStatus,
}

/// Handle to the games store; cheap to copy into closures
#[derive(Clone, Copy)]
pub struct GameStore {
    pub state: Store<GamesState>,
    listing_requests: StoredValue<RequestSequence>,
}

/// Get the games store from context
pub fn use_game_store() -> GameStore {
    expect_context::<GameStore>()
}

impl GameStore {
    pub fn new() -> Self {
        Self {
            state: Store::new(GamesState::default()),
            listing_requests: StoredValue::new(RequestSequence::default()),
        }
    }

    pub fn vocabulary_items(
        self,
        dim: Dimension,
    ) -> Subfield<Store<GamesState>, GamesState, Vec<FilterOption>> {
        match dim {
            Dimension::Developers => self.state.developers(),
            Dimension::Platforms => self.state.platforms(),
            Dimension::Genres => self.state.genres(),
            Dimension::Languages => self.state.languages(),
        }
    }

    pub fn vocabulary_status(
        self,
        dim: Dimension,
    ) -> Subfield<Store<GamesState>, GamesState, FetchStatus> {
        match dim {
            Dimension::Developers => self.state.developers_status(),
            Dimension::Platforms => self.state.platforms_status(),
            Dimension::Genres => self.state.genres_status(),
            Dimension::Languages => self.state.languages_status(),
        }
    }

    /// Fetch the listing page matching `filters`. Stale responses are
    /// discarded: only the most recently issued request may write state.
    pub async fn load_upcoming(self, filters: FilterState) {
        let seq = self
            .listing_requests
            .try_update_value(|requests| requests.begin())
            .unwrap_or_default();
        self.state.upcoming_status().set(FetchStatus::Loading);

        let result = api::fetch_upcoming_games(&filters).await;
        if !self.listing_requests.with_value(|requests| requests.is_current(seq)) {
            return;
        }
        match result {
            Ok(page) => {
                web_sys::console::log_1(
                    &format!(
                        "[GAMES] loaded page {} ({} items)",
                        page.pagination.page,
                        page.items.len()
                    )
                    .into(),
                );
                self.state.upcoming().set(page.items);
                self.state.pagination().set(Some(page.pagination));
                self.state.upcoming_status().set(FetchStatus::Success);
            }
            Err(error) => {
                // Stale items must not be displayed next to an error
                self.state.upcoming().set(Vec::new());
                self.state.pagination().set(None);
                self.state
                    .upcoming_status()
                    .set(FetchStatus::Error(error.to_string()));
            }
        }
    }

    /// Fetch one dimension's vocabulary; each dimension tracks its own status
    pub async fn load_vocabulary(self, dim: Dimension) {
        self.vocabulary_status(dim).set(FetchStatus::Loading);
        match api::fetch_vocabulary(dim).await {
            Ok(options) => {
                self.vocabulary_items(dim).set(options);
                self.vocabulary_status(dim).set(FetchStatus::Success);
            }
            Err(error) => {
                self.vocabulary_items(dim).set(Vec::new());
                self.vocabulary_status(dim)
                    .set(FetchStatus::Error(error.to_string()));
            }
        }
    }

    /// Fetch a single game for the detail page; errors clear the stale record
    pub async fn load_game(self, id: u32) {
        self.state.game_status().set(FetchStatus::Loading);
        match api::fetch_game(id).await {
            Ok(game) => {
                self.state.game().set(Some(game));
                self.state.game_status().set(FetchStatus::Success);
            }
            Err(error) => {
                self.state.game().set(None);
                self.state
                    .game_status()
                    .set(FetchStatus::Error(error.to_string()));
            }
        }
    }
}
