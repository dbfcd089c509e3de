//! URL Query-String State
//!
//! Bidirectional mapping between `FilterState` and the listing URL so the
//! selection survives reloads and back-navigation. `page` is omitted when it
//! equals 1 and empty dimensions omit their key, keeping URLs minimal.
//! Writing goes through history replacement and never navigates.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use wasm_bindgen::JsValue;

use crate::filters::{Dimension, FilterState};

/// Characters escaped inside query values. Commas separate list entries, so
/// a comma inside a value must be escaped as well.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b',')
    .add(b'<')
    .add(b'>')
    .add(b'=')
    .add(b'?');

/// Percent-encode one filter value
pub(crate) fn encode_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Comma-join a dimension's values, escaping each entry
pub(crate) fn join_encoded(values: &[String]) -> String {
    values
        .iter()
        .map(|value| encode_value(value))
        .collect::<Vec<_>>()
        .join(",")
}

/// Serialize state into a query string without the leading '?'.
/// The default state encodes to an empty string.
pub fn encode(state: &FilterState) -> String {
    let mut params: Vec<String> = Vec::new();
    if state.page > 1 {
        params.push(format!("page={}", state.page));
    }
    for dim in Dimension::ALL {
        let values = state.selected(dim);
        if !values.is_empty() {
            params.push(format!("{}={}", dim.key(), join_encoded(values)));
        }
    }
    params.join("&")
}

/// Parse a query string (with or without the leading '?') into state.
/// Unknown keys are ignored; a missing or unparsable page defaults to 1.
pub fn decode(query: &str) -> FilterState {
    let mut state = FilterState::default();
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut page = 1;
    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        if key == "page" {
            page = value.parse().unwrap_or(1).max(1);
            continue;
        }
        let Some(dim) = Dimension::ALL.iter().copied().find(|d| d.key() == key) else {
            continue;
        };
        for entry in value.split(',') {
            let entry = percent_decode_str(entry).decode_utf8_lossy();
            if !entry.is_empty() {
                state.insert(dim, &entry);
            }
        }
    }
    state.page = page;
    state
}

/// Initial state for the listing view, read from the current location
pub fn from_location() -> FilterState {
    let Some(window) = web_sys::window() else {
        return FilterState::default();
    };
    let query = window.location().search().unwrap_or_default();
    decode(&query)
}

/// Mirror state into the address bar via history replacement; keeps the
/// in-memory state and never triggers a navigation
pub fn replace_query(state: &FilterState) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(path) = window.location().pathname() else {
        return;
    };
    let query = encode(state);
    let url = if query.is_empty() {
        path
    } else {
        format!("{path}?{query}")
    };
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&url));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_defaults_to_first_page_and_no_filters() {
        for query in ["", "?", "page=abc", "foo=bar"] {
            let state = decode(query);
            assert_eq!(state, FilterState::default(), "query: {query:?}");
        }
    }

    #[test]
    fn decode_reads_page_and_dimensions() {
        let state = decode("?developers=Valve,Id%20Software&page=2&genres=RPG");
        assert_eq!(state.page, 2);
        assert_eq!(
            state.selected(Dimension::Developers).to_vec(),
            ["Valve", "Id Software"]
        );
        assert_eq!(state.selected(Dimension::Genres).to_vec(), ["RPG"]);
        assert!(state.selected(Dimension::Platforms).is_empty());
    }

    #[test]
    fn encode_omits_page_one_and_empty_dimensions() {
        assert_eq!(encode(&FilterState::default()), "");
        let mut state = FilterState::default();
        state.toggle(Dimension::Platforms, "PC");
        assert_eq!(encode(&state), "platforms=PC");
    }

    #[test]
    fn encode_orders_page_before_dimensions() {
        let mut state = FilterState::default();
        state.toggle(Dimension::Developers, "Valve");
        state.toggle(Dimension::Developers, "Id Software");
        state.set_page(2, Some(3));
        assert_eq!(encode(&state), "page=2&developers=Valve,Id%20Software");
    }

    #[test]
    fn round_trip_is_idempotent() {
        let query = "?developers=Valve,Id%20Software&platforms=PC&page=3";
        let state = decode(query);
        assert_eq!(decode(&encode(&state)), state);
        assert_eq!(encode(&decode(&encode(&state))), encode(&state));
    }

    #[test]
    fn commas_inside_values_survive_the_round_trip() {
        let mut state = FilterState::default();
        state.toggle(Dimension::Developers, "Good, Bad & Ugly");
        let encoded = encode(&state);
        assert_eq!(encoded, "developers=Good%2C%20Bad%20%26%20Ugly");
        assert_eq!(decode(&encoded), state);
    }
}
