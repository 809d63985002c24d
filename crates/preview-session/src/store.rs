//! Session state store
//!
//! Maps a preview session id to a persisted, reloadable state record under
//! a private key namespace. Preview state loss is recoverable, so every
//! failure degrades to "no saved state" rather than an error.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use preview_storage::StorageBackend;

use crate::error::StateError;
use crate::state::PreviewState;
use crate::Result;

/// Namespace prefix for every key the store writes.
///
/// Reserved exclusively for preview state. Changing it orphans existing
/// persisted records, so treat it as frozen absent a key migration.
pub const KEY_PREFIX: &str = "mastra-preview-";

/// Namespaced key-value cache for preview session state.
///
/// The backend is the sole owner of the data between calls; the store holds
/// no in-memory copy. Cross-tab writers race with last-write-wins.
pub struct SessionStateStore {
    backend: Arc<dyn StorageBackend>,
}

impl SessionStateStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Persist `payload` as the state record for `session_id`.
    ///
    /// The record's `sessionId` field is set to `session_id`, overriding any
    /// value in the payload. Repeated saves overwrite in full. Failures are
    /// logged and the record is simply not persisted.
    pub fn save<T: Serialize>(&self, session_id: &str, payload: &T) {
        if let Err(e) = self.try_save(session_id, payload) {
            tracing::warn!(session_id, error = %e, "Failed to save preview state");
        }
    }

    fn try_save<T: Serialize>(&self, session_id: &str, payload: &T) -> Result<()> {
        let mut fields = match serde_json::to_value(payload)? {
            Value::Object(fields) => fields,
            _ => return Err(StateError::NotAnObject),
        };
        fields.insert(
            "sessionId".to_string(),
            Value::String(session_id.to_string()),
        );

        let text = serde_json::to_string(&Value::Object(fields))?;
        self.backend.set(&self.key(session_id), &text)?;
        Ok(())
    }

    /// Fetch the state record for `session_id`.
    ///
    /// `None` means no saved state: the normal case for a brand-new session,
    /// and also the reported outcome of any read or parse failure. A stored
    /// record is returned as-is, without validating its payload shape.
    pub fn load(&self, session_id: &str) -> Option<PreviewState> {
        match self.try_load(session_id) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(session_id, error = %e, "Failed to load preview state");
                None
            }
        }
    }

    fn try_load(&self, session_id: &str) -> Result<Option<PreviewState>> {
        let text = match self.backend.get(&self.key(session_id))? {
            Some(text) => text,
            None => return Ok(None),
        };
        Ok(Some(serde_json::from_str(&text)?))
    }

    /// Delete the state record for `session_id`.
    ///
    /// Clearing a session that was never saved is a no-op. Backend failures
    /// are logged and swallowed.
    pub fn clear(&self, session_id: &str) {
        if let Err(e) = self.backend.remove(&self.key(session_id)) {
            tracing::warn!(session_id, error = %e, "Failed to clear preview state");
        }
    }

    /// Delete every record in the store's namespace.
    ///
    /// Keys outside the namespace are untouched. Deletion order is
    /// unspecified; a per-key failure is logged and the sweep continues, so
    /// partial completion is possible and not rolled back.
    pub fn clear_all(&self) {
        let keys = match self.backend.keys() {
            Ok(keys) => keys,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to enumerate preview state keys");
                return;
            }
        };

        for key in keys.iter().filter(|k| k.starts_with(KEY_PREFIX)) {
            if let Err(e) = self.backend.remove(key) {
                tracing::warn!(key = %key, error = %e, "Failed to clear preview state");
            }
        }
    }

    /// Generate a session id for `project_id`.
    ///
    /// The id is the project id joined with a millisecond timestamp. Two
    /// calls within the same clock tick collide (known limitation).
    /// Nothing is persisted.
    pub fn new_session_id(project_id: &str) -> String {
        format!("{}-{}", project_id, Utc::now().timestamp_millis())
    }

    fn key(&self, session_id: &str) -> String {
        format!("{}{}", KEY_PREFIX, session_id)
    }
}

impl Clone for SessionStateStore {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}
