//! In-memory tab-scoped storage

use parking_lot::Mutex;
use std::collections::HashMap;

use crate::backend::StorageBackend;
use crate::error::StorageError;
use crate::Result;

/// In-memory backend with `sessionStorage` semantics: contents live only as
/// long as the owning process.
///
/// An optional byte quota lets tests reach the quota-exceeded path. A write
/// over quota fails and leaves the map unchanged.
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            quota_bytes: None,
        }
    }

    /// Backend that rejects writes once keys plus values exceed `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            quota_bytes: Some(bytes),
        }
    }

    fn used_bytes(entries: &HashMap<String, String>) -> usize {
        entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock();
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock();

        if let Some(quota) = self.quota_bytes {
            let replaced = entries.get(key).map(|v| key.len() + v.len()).unwrap_or(0);
            let used = Self::used_bytes(&entries) - replaced;
            if used + key.len() + value.len() > quota {
                return Err(StorageError::QuotaExceeded);
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock();
        entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let entries = self.entries.lock();
        Ok(entries.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let storage = MemoryStorage::new();
        storage.set("a", "1").unwrap();

        assert_eq!(storage.get("a").unwrap(), Some("1".to_string()));
        assert_eq!(storage.get("b").unwrap(), None);
    }

    #[test]
    fn set_replaces_previous_value() {
        let storage = MemoryStorage::new();
        storage.set("a", "1").unwrap();
        storage.set("a", "2").unwrap();

        assert_eq!(storage.get("a").unwrap(), Some("2".to_string()));
    }

    #[test]
    fn remove_is_idempotent() {
        let storage = MemoryStorage::new();
        storage.set("a", "1").unwrap();

        storage.remove("a").unwrap();
        storage.remove("a").unwrap();
        assert_eq!(storage.get("a").unwrap(), None);
    }

    #[test]
    fn keys_enumerates_everything() {
        let storage = MemoryStorage::new();
        storage.set("a", "1").unwrap();
        storage.set("b", "2").unwrap();

        let mut keys = storage.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn quota_rejects_oversized_write() {
        let storage = MemoryStorage::with_quota(8);
        storage.set("a", "123").unwrap();

        let err = storage.set("b", "1234567").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded));

        // The failed write must not disturb existing entries
        assert_eq!(storage.get("a").unwrap(), Some("123".to_string()));
        assert_eq!(storage.get("b").unwrap(), None);
    }

    #[test]
    fn quota_accounts_for_replaced_value() {
        let storage = MemoryStorage::with_quota(8);
        storage.set("a", "1234567").unwrap();

        // Replacing with a smaller value stays under quota
        storage.set("a", "1").unwrap();
        assert_eq!(storage.get("a").unwrap(), Some("1".to_string()));
    }
}
