//! Storage backend contract

use crate::Result;

/// A tab-scoped, synchronous, string-keyed, string-valued key/value store.
///
/// Contents persist across page reloads within one tab but not across tabs
/// or after the tab closes. Cross-tab writers are uncoordinated:
/// last-write-wins.
pub trait StorageBackend: Send + Sync {
    /// Read the value stored under `key`. An absent key is `None`, not an
    /// error.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<()>;

    /// Enumerate every key currently in the backend, in no particular order.
    fn keys(&self) -> Result<Vec<String>>;
}
