/// A synchronous string key/value store.
///
/// Mirrors the localStorage contract: reads and writes are synchronous and
/// backend failures degrade to "no data" instead of surfacing to the caller.
/// A corrupted or unavailable backend must never crash the application.
pub trait KeyValueStore {
    /// Read a value, `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value. Failures are swallowed by the implementation.
    fn set(&self, key: &str, value: &str);

    /// Remove a value. Removing an absent key is a no-op.
    fn remove(&self, key: &str);
}
