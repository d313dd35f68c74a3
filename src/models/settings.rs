//! Settings Models
//!
//! Application configuration and settings data structures.

use serde::{Deserialize, Serialize};

fn default_clock_refresh_secs() -> u32 {
    1
}

/// Application configuration stored in config.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Override for the storage directory; default is ~/.gym-management/
    #[serde(default)]
    pub data_dir: Option<String>,
    /// Dashboard clock/stats refresh interval in seconds
    #[serde(default = "default_clock_refresh_secs")]
    pub clock_refresh_secs: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            clock_refresh_secs: 1,
        }
    }
}

/// Settings update request (partial update)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SettingsUpdate {
    pub data_dir: Option<String>,
    pub clock_refresh_secs: Option<u32>,
}

impl AppConfig {
    /// Apply a partial update to the configuration
    pub fn apply_update(&mut self, update: SettingsUpdate) {
        if let Some(data_dir) = update.data_dir {
            self.data_dir = Some(data_dir);
        }
        if let Some(secs) = update.clock_refresh_secs {
            self.clock_refresh_secs = secs;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.clock_refresh_secs == 0 {
            return Err("clock_refresh_secs must be at least 1".to_string());
        }
        if let Some(dir) = &self.data_dir {
            if dir.trim().is_empty() {
                return Err("data_dir must not be blank when set".to_string());
            }
        }
        Ok(())
    }
}
