//! Configuration management for recipebook.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "recipebook";

/// Default database file name.
const DATABASE_FILE_NAME: &str = "recipes.db";

/// Default directory name for the file backend.
const STORE_DIR_NAME: &str = "store";

/// Default key under which the recipe list is persisted.
pub const DEFAULT_STORAGE_KEY: &str = "recipes";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `RECIPEBOOK_`, sections separated
///    by a double underscore, e.g. `RECIPEBOOK_STORAGE__BACKEND=file`)
/// 2. TOML config file at `~/.config/recipebook/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
}

/// Which key-value backend holds the persisted recipes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// A `SQLite` database file.
    #[default]
    Sqlite,
    /// A directory of JSON files, one per key.
    File,
    /// Volatile in-process storage; nothing survives exit.
    Memory,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite => write!(f, "sqlite"),
            Self::File => write!(f, "file"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Storage-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Backend to use.
    pub backend: StorageBackend,
    /// Path to the database file for the `sqlite` backend.
    /// Defaults to `~/.local/share/recipebook/recipes.db`
    pub database_path: Option<PathBuf>,
    /// Directory for the `file` backend.
    /// Defaults to `~/.local/share/recipebook/store`
    pub directory: Option<PathBuf>,
    /// Key under which the recipe list is stored.
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            database_path: None,
            directory: None,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("RECIPEBOOK_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        let key = &self.storage.key;
        if key.is_empty() {
            return Err(Error::ConfigValidation {
                message: "storage.key must not be empty".to_string(),
            });
        }

        // The file backend uses the key as a file stem.
        if key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(Error::ConfigValidation {
                message: format!("storage.key must be a plain name, got: {key}"),
            });
        }

        Ok(())
    }

    /// Get the database path, resolving defaults if not set.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.storage
            .database_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(DATABASE_FILE_NAME))
    }

    /// Get the file-backend directory, resolving defaults if not set.
    #[must_use]
    pub fn store_directory(&self) -> PathBuf {
        self.storage
            .directory
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(STORE_DIR_NAME))
    }

    /// Get the key under which recipes are persisted.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage.key
    }
}
