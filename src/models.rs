//! Wire Models
//!
//! Data structures matching the REST API payloads.

use serde::{Deserialize, Serialize};

/// Game record as returned by the catalog endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: u32,
    pub name: String,
    pub cover_image_url: String,
    /// ISO date string, e.g. "2026-03-14"
    pub release_date: String,
    pub rating: f64,
}

/// One selectable value for a filter dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
    pub id: u32,
    pub name: String,
}

/// Pagination record reported by listing endpoints.
/// `perPage` is camelCase on the wire, the rest is snake_case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationData {
    pub page: u32,
    #[serde(rename = "perPage")]
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

impl PaginationData {
    /// Zero-result record synthesized for a 404 listing response
    pub fn empty(page: u32, per_page: u32) -> Self {
        Self {
            page,
            per_page,
            total_items: 0,
            total_pages: 0,
        }
    }
}

/// Listing envelope: one page of items plus its pagination record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: PaginationData,
}

impl<T> Paginated<T> {
    pub fn empty(page: u32, per_page: u32) -> Self {
        Self {
            items: Vec::new(),
            pagination: PaginationData::empty(page, per_page),
        }
    }
}

/// Event as listed on the events page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleEventData {
    pub id: u32,
    pub name: String,
    pub logo_url: String,
}

/// Full event record for the detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventData {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub logo_url: String,
    #[serde(default)]
    pub live_stream_url: Option<String>,
    #[serde(default)]
    pub event_urls: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_per_page_is_camel_case_on_the_wire() {
        let json = r#"{"page":1,"perPage":12,"total_items":30,"total_pages":3}"#;
        let pagination: PaginationData = serde_json::from_str(json).unwrap();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.per_page, 12);
        assert_eq!(pagination.total_items, 30);
        assert_eq!(pagination.total_pages, 3);
    }

    #[test]
    fn empty_pagination_synthesizes_zero_totals() {
        let pagination = PaginationData::empty(4, 12);
        assert_eq!(pagination.page, 4);
        assert_eq!(pagination.per_page, 12);
        assert_eq!(pagination.total_items, 0);
        assert_eq!(pagination.total_pages, 0);
    }

    #[test]
    fn listing_envelope_decodes() {
        let json = r#"{
            "items": [
                {"id": 7, "name": "Starfall", "cover_image_url": "http://img/7.jpg",
                 "release_date": "2026-03-14", "rating": 8.5}
            ],
            "pagination": {"page": 1, "perPage": 12, "total_items": 1, "total_pages": 1}
        }"#;
        let page: Paginated<Game> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Starfall");
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn event_optional_fields_default() {
        let json = r#"{
            "id": 3, "name": "Summer Fest", "description": "d",
            "start_time": "2026-06-10T18:00:00+00:00",
            "end_time": "2026-06-10T20:00:00+00:00",
            "logo_url": "http://img/e.png"
        }"#;
        let event: EventData = serde_json::from_str(json).unwrap();
        assert_eq!(event.live_stream_url, None);
        assert!(event.event_urls.is_empty());
        assert!(event.videos.is_empty());
    }
}
