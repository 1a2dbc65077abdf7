//! Local key-value persistence for the session and organization settings.
//!
//! SYSTEM CONTEXT
//! ==============
//! The console keeps everything in the browser's `localStorage`. These helpers
//! centralize the hydrate-only web-sys glue behind [`KeyValueStore`] so state
//! modules can be exercised against [`MemoryStorage`] in tests and during
//! server rendering.
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail loudly: a missing key falls back to defaults and a
//! malformed value is discarded with a `log::warn!` for the maintainer.
//! Writes return `StorageError` so the save flow can show its error badge.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::state::session::Session;
use crate::state::settings::OrganizationSettings;

/// Storage key holding the signed-in [`Session`].
pub const AUTH_KEY: &str = "lms_auth";
/// Storage key holding the saved [`OrganizationSettings`].
pub const SETTINGS_KEY: &str = "lms_settings";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("local storage write failed: {0}")]
    Write(String),
    #[error("failed to encode value: {0}")]
    Encode(String),
}

/// Minimal string key-value store with `localStorage` semantics.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` when the backing store is missing.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Write` when the backing store rejects the write
    /// (quota exceeded, private mode, etc.).
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Write` when the backing store rejects the removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// =============================================================================
// BROWSER STORAGE
// =============================================================================

/// `window.localStorage`. Outside hydrate builds every call reports
/// `StorageError::Unavailable` so SSR stays deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn js_error(err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Write(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|_| StorageError::Unavailable)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.remove_item(key).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

// =============================================================================
// MEMORY STORAGE
// =============================================================================

/// In-process store. `fail_writes` makes every `set`/`remove` fail, which is
/// how tests reach the save error path.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Write("quota exceeded".to_owned()));
        }
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Write("quota exceeded".to_owned()));
        }
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

// =============================================================================
// JSON HELPERS
// =============================================================================

/// Load a JSON value for `key`. Missing, unreadable, or malformed values all
/// yield `None`; malformed ones are logged.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(raw) => raw?,
        Err(e) => {
            log::debug!("skipping {key}: {e}");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("failed to load {key}: {e}");
            None
        }
    }
}

/// Save a JSON value for `key`.
///
/// # Errors
///
/// Returns `StorageError::Encode` if `value` cannot be serialized, or the
/// store's write error.
pub fn save_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Encode(e.to_string()))?;
    store.set(key, &raw)
}

/// Saved settings, or the defaults when nothing usable is stored.
pub fn load_settings(store: &impl KeyValueStore) -> OrganizationSettings {
    load_json(store, SETTINGS_KEY).unwrap_or_default()
}

/// Restored session, if one was stored and parses.
pub fn load_session(store: &impl KeyValueStore) -> Option<Session> {
    load_json(store, AUTH_KEY)
}

/// # Errors
///
/// Propagates the store's write error.
pub fn save_settings(store: &impl KeyValueStore, settings: &OrganizationSettings) -> Result<(), StorageError> {
    save_json(store, SETTINGS_KEY, settings)
}

/// # Errors
///
/// Propagates the store's write error.
pub fn save_session(store: &impl KeyValueStore, session: &Session) -> Result<(), StorageError> {
    save_json(store, AUTH_KEY, session)
}

/// # Errors
///
/// Propagates the store's write error.
pub fn clear_session(store: &impl KeyValueStore) -> Result<(), StorageError> {
    store.remove(AUTH_KEY)
}
