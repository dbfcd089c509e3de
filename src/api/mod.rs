//! Remote Data Client
//!
//! Thin typed wrappers over the browser fetch API. Every call is a
//! single-shot GET; callers decide what a failure means for their state.

mod events;
mod games;

pub use events::*;
pub use games::*;

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::config;
use crate::error::FetchError;

/// Best-effort message out of a JS exception value
fn js_message(value: JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .unwrap_or_else(|| format!("{value:?}"))
}

/// GET `base + path_and_query` and decode the JSON body
async fn get_json<T: DeserializeOwned>(path_and_query: &str) -> Result<T, FetchError> {
    let url = format!("{}{}", config::api_url(), path_and_query);
    let window =
        web_sys::window().ok_or_else(|| FetchError::Network("no window".to_string()))?;

    let response = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(|e| FetchError::Network(js_message(e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| FetchError::Network("fetch returned a non-Response value".to_string()))?;

    if response.status() == 404 {
        return Err(FetchError::NotFound);
    }
    if !response.ok() {
        return Err(FetchError::Http {
            status: response.status(),
            message: response.status_text(),
        });
    }

    let body = JsFuture::from(response.json().map_err(|e| FetchError::Parse(js_message(e)))?)
        .await
        .map_err(|e| FetchError::Parse(js_message(e)))?;
    serde_wasm_bindgen::from_value(body).map_err(|e| FetchError::Parse(e.to_string()))
}
