//! Preview host wiring
//!
//! A browser embeds the store over the tab's own storage object; any other
//! host gets the durable SQLite adapter opened from [`Config`].

use std::sync::Arc;

use preview_session::SessionStateStore;
use preview_storage::SqliteStorage;

use crate::config::Config;
use crate::Result;

/// Owns the durable backend for a non-browser host and hands out session
/// state stores over it.
pub struct PreviewHost {
    config: Config,
    storage: Arc<SqliteStorage>,
}

impl PreviewHost {
    pub fn new(config: Config) -> Result<Self> {
        // Ensure data directory exists
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let storage = Arc::new(SqliteStorage::open(&config.database_path)?);

        tracing::info!(path = %config.database_path.display(), "Opened preview state database");

        Ok(Self { config, storage })
    }

    /// A store handle over this host's backend. Handles share the backend,
    /// so state saved through one is visible through the others.
    pub fn state_store(&self) -> SessionStateStore {
        SessionStateStore::new(self.storage.clone() as Arc<dyn preview_storage::StorageBackend>)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
