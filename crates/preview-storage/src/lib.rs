//! Mastra Preview Storage Layer
//!
//! Tab-scoped, synchronous, string-keyed storage backends for preview
//! session state. The browser's storage object is modeled as an injected
//! [`StorageBackend`] so the consumers above this crate stay testable with
//! an in-memory fake and portable to non-browser hosts.

mod backend;
mod error;
mod memory;
mod sqlite;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

pub type Result<T> = std::result::Result<T, StorageError>;
