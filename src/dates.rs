//! Date Display Helpers
//!
//! The API sends ISO strings; these helpers format them for cards and
//! detail pages, falling back to the raw string for anything unexpected.

use chrono::{DateTime, NaiveDate};

/// Format an ISO release date for display, e.g. "Mar 14, 2026"
pub fn format_release_date(iso: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        return date.format("%b %-d, %Y").to_string();
    }
    if let Ok(date) = DateTime::parse_from_rfc3339(iso) {
        return date.format("%b %-d, %Y").to_string();
    }
    iso.to_string()
}

/// Format an RFC 3339 event timestamp, e.g. "Jun 10, 2026 18:00"
pub fn format_event_time(iso: &str) -> String {
    DateTime::parse_from_rfc3339(iso)
        .map(|time| time.format("%b %-d, %Y %H:%M").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_release_dates() {
        assert_eq!(format_release_date("2026-03-14"), "Mar 14, 2026");
        assert_eq!(format_release_date("2025-12-01"), "Dec 1, 2025");
    }

    #[test]
    fn passes_through_unparsable_dates() {
        assert_eq!(format_release_date("TBA"), "TBA");
        assert_eq!(format_event_time("soon"), "soon");
    }

    #[test]
    fn formats_event_timestamps() {
        assert_eq!(
            format_event_time("2026-06-10T18:00:00+00:00"),
            "Jun 10, 2026 18:00"
        );
    }
}
