//! Cross-Platform Path Utilities
//!
//! Functions for resolving application directories across platforms.
//! All persistent state lives under ~/.gym-management/.

use std::path::PathBuf;

use crate::utils::error::{AppError, AppResult};

/// File name of the SQLite database, kept for compatibility with
/// pre-existing installations.
pub const DATABASE_FILE_NAME: &str = "gym_management.db";

/// File name of the JSON configuration file
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Get the user's home directory
pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::config("Could not determine home directory"))
}

/// Get the application data directory (~/.gym-management/)
pub fn app_data_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(".gym-management"))
}

/// Get the config file path (~/.gym-management/config.json)
pub fn config_path() -> AppResult<PathBuf> {
    Ok(app_data_dir()?.join(CONFIG_FILE_NAME))
}

/// Get the database file path (~/.gym-management/gym_management.db)
pub fn database_path() -> AppResult<PathBuf> {
    Ok(app_data_dir()?.join(DATABASE_FILE_NAME))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &PathBuf) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Get the application data directory, creating if it doesn't exist
pub fn ensure_app_data_dir() -> AppResult<PathBuf> {
    let path = app_data_dir()?;
    ensure_dir(&path)?;
    Ok(path)
}
