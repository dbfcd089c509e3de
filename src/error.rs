//! Fetch Error Taxonomy

use thiserror::Error;

/// Failure surfaced by the remote data client.
///
/// A 404 is reported as `NotFound`; listing calls map it to an empty page
/// before it ever reaches a store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The request never completed (connection refused, DNS failure, abort).
    /// Displays as the underlying message so the UI can show it verbatim.
    #[error("{0}")]
    Network(String),
    /// Non-2xx response
    #[error("request failed with status {status}: {message}")]
    Http { status: u16, message: String },
    /// HTTP 404
    #[error("not found")]
    NotFound,
    /// Response body did not match the expected shape
    #[error("unexpected response: {0}")]
    Parse(String),
}
