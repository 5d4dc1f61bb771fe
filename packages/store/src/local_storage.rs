//! # Browser localStorage session store
//!
//! [`LocalStorageStore`] is the [`SessionStore`] used on the **web platform**.
//! It reads and writes `window.localStorage` through `web-sys`.
//!
//! The handle is zero-size: `window.localStorage` is looked up on every call,
//! since `web_sys::Storage` is neither `Send` nor cheap to keep around across
//! page reloads.
//!
//! ## Error handling
//!
//! Every method swallows JavaScript exceptions (quota exceeded, storage
//! disabled in private mode, ...). Reads become `None` and writes are
//! dropped with a warning, so a broken storage degrades to "logged out".

use tracing::warn;

use crate::session_store::SessionStore;

/// `window.localStorage`-backed SessionStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            warn!(key, "localStorage unavailable, dropping write");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            warn!(key, error = ?e, "localStorage write failed");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(key) {
                warn!(key, error = ?e, "localStorage remove failed");
            }
        }
    }

    fn clear_all(&self) -> usize {
        let Some(storage) = Self::storage() else {
            return 0;
        };
        let count = storage.length().unwrap_or(0) as usize;
        match storage.clear() {
            Ok(()) => count,
            Err(e) => {
                warn!(error = ?e, "localStorage clear failed");
                0
            }
        }
    }
}
