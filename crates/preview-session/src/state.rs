//! Persisted preview state record

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The record persisted for one preview session.
///
/// The payload is opaque to the store: whatever fields the caller saved come
/// back verbatim in `payload`, with no validation of their shape — schema
/// validity is the caller's responsibility. `session_id` equals the session
/// id the record was stored under; the store injects it on save, overriding
/// any `sessionId` supplied in the payload. Records written before the
/// field existed deserialize with an empty `session_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewState {
    /// Session identifier, also the storage key suffix
    #[serde(rename = "sessionId", default)]
    pub session_id: String,
    /// Caller-supplied payload fields, carried as-is
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl PreviewState {
    /// Look up a payload field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.payload.get(name)
    }
}
