//! Mastra Preview Core
//!
//! Coordination layer for preview session state: host configuration,
//! logging, and wiring of a durable backend to the session state store.

mod config;
mod error;
mod host;

pub use config::Config;
pub use error::CoreError;
pub use host::PreviewHost;

// Re-export core components
pub use preview_session::{PreviewState, SessionStateStore, KEY_PREFIX};
pub use preview_storage::{MemoryStorage, SqliteStorage, StorageBackend, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
