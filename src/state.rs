//! Application State
//!
//! State owned by the desktop shell for the lifetime of the process:
//! the opened database and the loaded configuration. All store operations
//! run synchronously on the calling thread; the single-writer model needs
//! no internal locking.

use std::path::PathBuf;

use crate::models::settings::AppConfig;
use crate::storage::{ConfigService, Database};
use crate::utils::error::AppResult;
use crate::utils::paths::DATABASE_FILE_NAME;

/// Application state shared with the presentation layer
pub struct AppState {
    database: Database,
    config: AppConfig,
}

impl AppState {
    /// Load configuration and open the database at its configured location
    pub fn initialize() -> AppResult<Self> {
        let config = ConfigService::new()?.get_config_clone();

        let database = match &config.data_dir {
            Some(dir) => Database::open(PathBuf::from(dir).join(DATABASE_FILE_NAME))?,
            None => Database::new()?,
        };

        tracing::info!("application state initialized");
        Ok(Self { database, config })
    }

    /// State over an in-memory database with default configuration.
    /// Useful for integration and unit tests.
    pub fn new_in_memory() -> AppResult<Self> {
        Ok(Self {
            database: Database::new_in_memory()?,
            config: AppConfig::default(),
        })
    }

    /// The opened database
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// The loaded configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Check if the database is healthy
    pub fn is_database_healthy(&self) -> bool {
        self.database.is_healthy()
    }
}
