//! # localStorage session slot — browser-side persistence
//!
//! [`WebSlot`] is the [`SessionSlot`] implementation used on the **web
//! platform**. It keeps the serialized session under a single
//! `localStorage` key so a logged-in user survives page reloads.
//!
//! All operations silently swallow storage errors (returning `None` for
//! reads, doing nothing for writes). An unavailable or restricted
//! `localStorage` degrades to an anonymous session rather than crashing;
//! the authoritative account data always lives on the backend.

use crate::slot::SessionSlot;

const SESSION_KEY: &str = "user";

/// localStorage-backed SessionSlot for the web platform.
#[derive(Clone, Debug, Default)]
pub struct WebSlot;

impl WebSlot {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionSlot for WebSlot {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(SESSION_KEY).ok().flatten()
    }

    fn save(&self, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(SESSION_KEY, value);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}
