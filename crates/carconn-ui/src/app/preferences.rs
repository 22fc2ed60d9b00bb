//! Browser-backed theme preference slot.

use crate::core::theme::{PreferenceStore, ThemeMode};
use gloo::console;
use gloo::utils::window;
use web_sys::Storage;

/// `localStorage` slot holding the raw `light`/`dark` string.
///
/// Values are stored unencoded so pages and other scripts can read the same key.
/// An unavailable storage area behaves like an empty slot.
pub(crate) struct BrowserPreferenceStore {
    key: String,
}

impl BrowserPreferenceStore {
    pub(crate) fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<Storage> {
        window().local_storage().ok().flatten()
    }
}

impl PreferenceStore for BrowserPreferenceStore {
    fn load(&self) -> Option<ThemeMode> {
        let raw = Self::storage()?.get_item(&self.key).ok().flatten()?;
        ThemeMode::parse(&raw).ok()
    }

    fn save(&mut self, mode: ThemeMode) {
        let Some(storage) = Self::storage() else {
            log_storage_error("set", &self.key, "storage unavailable");
            return;
        };
        if let Err(err) = storage.set_item(&self.key, mode.as_str()) {
            console::error!("storage operation failed", "set", self.key.as_str(), err);
        }
    }

    fn clear(&mut self) {
        if let Some(storage) = Self::storage()
            && let Err(err) = storage.remove_item(&self.key)
        {
            console::error!("storage operation failed", "delete", self.key.as_str(), err);
        }
    }
}

fn log_storage_error(operation: &'static str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
