//! Configuration file loading for the registry.
//!
//! This module provides types and functions for loading registry
//! configuration from TOML files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Registry configuration.
///
/// Loaded from `registry.toml` in the current working directory. Every
/// field has a default, so embedding applications can run with no file
/// at all.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RegistryConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("data/boxing.db")
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

impl RegistryConfig {
    /// Loads the registry configuration from disk.
    ///
    /// If the configuration file does not exist, returns the defaults.
    /// The `BOXING_DB` environment variable overrides the configured
    /// database path either way.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be
    /// read, or [`ConfigError::ParseError`] if it contains invalid TOML.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_file()?;
        if let Ok(path) = std::env::var("BOXING_DB") {
            config.db_path = PathBuf::from(path);
        }
        Ok(config)
    }

    fn load_file() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// Currently returns `registry.toml` in the current working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("registry.toml")
    }
}
