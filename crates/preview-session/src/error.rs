//! Session state error types
//!
//! Internal only: the store catches every one of these and logs it, so no
//! error crosses the public API.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StateError {
    #[error("Storage error: {0}")]
    Storage(#[from] preview_storage::StorageError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Payload did not serialize to a JSON object")]
    NotAnObject,
}
