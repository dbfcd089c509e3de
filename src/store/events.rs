//! Event Store

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api;
use crate::models::{EventData, PaginationData, SimpleEventData};

use super::{FetchStatus, RequestSequence};

#[derive(Clone, Debug, Default, Store)]
pub struct EventsState {
    pub events: Vec<SimpleEventData>,
    pub pagination: Option<PaginationData>,
    pub events_status: FetchStatus,
    pub event: Option<EventData>,
    pub event_status: FetchStatus,
}

/// Handle to the events store; cheap to copy into closures
#[derive(Clone, Copy)]
pub struct EventStore {
    pub state: Store<EventsState>,
    listing_requests: StoredValue<RequestSequence>,
}

/// Get the events store from context
pub fn use_event_store() -> EventStore {
    expect_context::<EventStore>()
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            state: Store::new(EventsState::default()),
            listing_requests: StoredValue::new(RequestSequence::default()),
        }
    }

    /// Fetch one page of events; stale responses are discarded
    pub async fn load_events(self, page: u32) {
        let seq = self
            .listing_requests
            .try_update_value(|requests| requests.begin())
            .unwrap_or_default();
        self.state.events_status().set(FetchStatus::Loading);

        let result = api::fetch_events(page).await;
        if !self.listing_requests.with_value(|requests| requests.is_current(seq)) {
            return;
        }
        match result {
            Ok(page) => {
                self.state.events().set(page.items);
                self.state.pagination().set(Some(page.pagination));
                self.state.events_status().set(FetchStatus::Success);
            }
            Err(error) => {
                self.state.events().set(Vec::new());
                self.state.pagination().set(None);
                self.state
                    .events_status()
                    .set(FetchStatus::Error(error.to_string()));
            }
        }
    }

    /// Fetch one event for the detail page; errors clear the stale record
    pub async fn load_event(self, id: u32) {
        self.state.event_status().set(FetchStatus::Loading);
        match api::fetch_event(id).await {
            Ok(event) => {
                self.state.event().set(Some(event));
                self.state.event_status().set(FetchStatus::Success);
            }
            Err(error) => {
                self.state.event().set(None);
                self.state
                    .event_status()
                    .set(FetchStatus::Error(error.to_string()));
            }
        }
    }
}
