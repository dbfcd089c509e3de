//! Application Stores
//!
//! Explicit owned state containers constructed at app start and provided via
//! context. Leptos signals are the subscription contract: every mutation
//! notifies subscribed views synchronously.

mod request;

pub mod events;
pub mod games;
pub mod search;
pub mod theme;

pub use events::{use_event_store, EventStore, EventsStateStoreFields};
pub use games::{use_game_store, GameStore, GamesStateStoreFields};
pub use request::RequestSequence;
pub use search::{use_search_store, SearchStateStoreFields, SearchStore};
pub use theme::{use_theme_store, ThemeStore};

/// Lifecycle of one fetched resource. Exactly one status holds at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}
