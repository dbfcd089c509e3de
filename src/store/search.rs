//! Search Store
//!
//! Debounced passthrough search for the navbar dropdown. The debounce and
//! the stale-response guard share one sequence: a new keystroke supersedes
//! both the pending delay and any in-flight request.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::models::Game;

use super::{FetchStatus, RequestSequence};

/// Delay between the last keystroke and the search request
const DEBOUNCE_MS: u32 = 300;

#[derive(Clone, Debug, Default, Store)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<Game>,
    pub status: FetchStatus,
}

/// Handle to the search store; cheap to copy into closures
#[derive(Clone, Copy)]
pub struct SearchStore {
    pub state: Store<SearchState>,
    requests: StoredValue<RequestSequence>,
}

/// Get the search store from context
pub fn use_search_store() -> SearchStore {
    expect_context::<SearchStore>()
}

impl SearchStore {
    pub fn new() -> Self {
        Self {
            state: Store::new(SearchState::default()),
            requests: StoredValue::new(RequestSequence::default()),
        }
    }

    /// Record a new query and schedule its debounced fetch
    pub fn set_query(self, query: String) {
        self.state.query().set(query.clone());
        spawn_local(self.run(query));
    }

    /// Drop the query, results and any pending request
    pub fn clear(self) {
        self.requests.update_value(|requests| {
            requests.begin();
        });
        self.state.query().set(String::new());
        self.state.results().set(Vec::new());
        self.state.status().set(FetchStatus::Idle);
    }

    async fn run(self, query: String) {
        let seq = self
            .requests
            .try_update_value(|requests| requests.begin())
            .unwrap_or_default();
        TimeoutFuture::new(DEBOUNCE_MS).await;
        if !self.requests.with_value(|requests| requests.is_current(seq)) {
            return;
        }

        let query = query.trim().to_string();
        if query.is_empty() {
            self.state.results().set(Vec::new());
            self.state.status().set(FetchStatus::Idle);
            return;
        }

        self.state.status().set(FetchStatus::Loading);
        let result = api::search_games(&query).await;
        if !self.requests.with_value(|requests| requests.is_current(seq)) {
            return;
        }
        match result {
            Ok(results) => {
                self.state.results().set(results);
                self.state.status().set(FetchStatus::Success);
            }
            Err(error) => {
                self.state.results().set(Vec::new());
                self.state
                    .status()
                    .set(FetchStatus::Error(error.to_string()));
            }
        }
    }
}
