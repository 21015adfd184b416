use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for testing and native development builds.
///
/// Clones share the same underlying map, so a clone handed to one consumer
/// observes writes made through another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let store = MemoryStore::new();
        assert!(store.get("missing").is_none());

        store.set("key", "value");
        assert_eq!(store.get("key").as_deref(), Some("value"));

        store.set("key", "updated");
        assert_eq!(store.get("key").as_deref(), Some("updated"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let store = MemoryStore::new();
        store.set("key", "value");

        store.remove("key");
        assert!(store.get("key").is_none());

        // Removing again must not fail.
        store.remove("key");
        assert!(store.get("key").is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let clone = store.clone();

        store.set("key", "value");
        assert_eq!(clone.get("key").as_deref(), Some("value"));

        clone.remove("key");
        assert!(store.get("key").is_none());
    }
}
