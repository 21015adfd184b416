//! Browser localStorage backend for the web platform.
//!
//! Values are stored as raw strings via [`gloo_storage`]. All errors
//! (storage disabled, quota exceeded, private-mode restrictions) are
//! swallowed: the UI degrades to a logged-out session rather than
//! crashing. localStorage is origin-scoped and survives page reloads,
//! which is exactly the durability the session needs.

use gloo_storage::{LocalStorage, Storage};

use crate::kv::KeyValueStore;

/// localStorage-backed KeyValueStore.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match LocalStorage::raw().get_item(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!("localStorage read for {key:?} failed: {err:?}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = LocalStorage::raw().set_item(key, value) {
            tracing::warn!("localStorage write for {key:?} failed: {err:?}");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(err) = LocalStorage::raw().remove_item(key) {
            tracing::warn!("localStorage delete for {key:?} failed: {err:?}");
        }
    }
}
