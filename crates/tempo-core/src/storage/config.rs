//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Data directory override
//! - Refresh cadence of the live timer view
//! - Default color offered for new activities and events
//!
//! Configuration is stored at `<data dir>/config.toml`. Every field has a
//! default, so a missing or partial file always yields a usable config.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Directory holding the five documents. Defaults to the config dir.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Seconds between re-renders while a session is running.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
    /// Color offered when the user doesn't pick one.
    #[serde(default = "default_color")]
    pub default_color: String,
}

/// Application configuration, serialized to/from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval(),
            default_color: default_color(),
        }
    }
}

fn default_refresh_interval() -> u64 {
    1
}

fn default_color() -> String {
    "#4a90e2".to_string()
}

impl Config {
    /// Path of the config file inside the default data directory.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be prepared.
    pub fn path() -> Result<PathBuf, StorageError> {
        Ok(super::data_dir()?.join("config.toml"))
    }

    /// Load the configuration, falling back to defaults.
    ///
    /// A missing file is normal; a malformed one is logged and ignored so
    /// a bad edit never locks the user out.
    pub fn load() -> Self {
        let path = match Self::path() {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(error = %e, "config directory unavailable, using defaults");
                return Self::default();
            }
        };
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read config, using defaults");
                return Self::default();
            }
        };
        match toml::from_str(&text) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "malformed config, using defaults");
                Self::default()
            }
        }
    }

    /// The directory documents live in: the override if set, otherwise the
    /// default data directory.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be prepared.
    pub fn data_dir(&self) -> Result<PathBuf, StorageError> {
        match &self.storage.data_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir).map_err(|source| StorageError::DataDir {
                    path: dir.clone(),
                    source,
                })?;
                Ok(dir.clone())
            }
            None => super::data_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.ui.refresh_interval_secs, 1);
        assert_eq!(config.ui.default_color, "#4a90e2");
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn partial_sections_fill_in() {
        let config: Config = toml::from_str("[ui]\nrefresh_interval_secs = 5\n").unwrap();
        assert_eq!(config.ui.refresh_interval_secs, 5);
        assert_eq!(config.ui.default_color, "#4a90e2");
    }
}
