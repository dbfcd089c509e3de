//! Event Calls

use crate::error::FetchError;
use crate::filters::PER_PAGE;
use crate::models::{EventData, Paginated, SimpleEventData};

use super::get_json;

/// One page of events; 404 maps to an empty page like the game listing
pub async fn fetch_events(page: u32) -> Result<Paginated<SimpleEventData>, FetchError> {
    match get_json(&format!("/events?page={page}&perPage={PER_PAGE}")).await {
        Err(FetchError::NotFound) => Ok(Paginated::empty(page, PER_PAGE)),
        result => result,
    }
}

/// Single event for the detail page
pub async fn fetch_event(id: u32) -> Result<EventData, FetchError> {
    get_json(&format!("/events/{id}")).await
}
