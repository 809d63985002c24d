//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] preview_storage::StorageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
