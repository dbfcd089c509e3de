//! Theme Store
//!
//! Dark-mode preference persisted to localStorage: serialized on every
//! toggle, read back on startup. A first visit follows the
//! `prefers-color-scheme` media query.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "gamerfeeds-theme";

#[derive(Clone, Debug, Serialize, Deserialize)]
struct PersistedTheme {
    dark: bool,
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_persisted() -> Option<bool> {
    let raw = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    serde_json::from_str::<PersistedTheme>(&raw)
        .ok()
        .map(|persisted| persisted.dark)
}

fn save_persisted(dark: bool) {
    let Some(storage) = storage() else { return };
    let Ok(raw) = serde_json::to_string(&PersistedTheme { dark }) else {
        return;
    };
    let _ = storage.set_item(STORAGE_KEY, &raw);
}

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|media| media.matches())
        .unwrap_or(false)
}

/// Handle to the theme preference; cheap to copy into closures
#[derive(Clone, Copy)]
pub struct ThemeStore {
    pub is_dark: RwSignal<bool>,
}

/// Get the theme store from context
pub fn use_theme_store() -> ThemeStore {
    expect_context::<ThemeStore>()
}

impl ThemeStore {
    pub fn new() -> Self {
        let initial = load_persisted().unwrap_or_else(prefers_dark);
        Self {
            is_dark: RwSignal::new(initial),
        }
    }

    pub fn toggle(self) {
        let next = !self.is_dark.get_untracked();
        self.is_dark.set(next);
        save_persisted(next);
    }
}
