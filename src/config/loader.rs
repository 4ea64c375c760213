use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/statebox/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("statebox").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "config file missing, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Task and contact ids are unique within their section
    /// - Selected ids refer to a seeded entry (when the section seeds any)
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_unique("tasks", self.tasks.tasks.iter().map(|t| t.id))?;
        ensure_unique("contacts", self.contacts.contacts.iter().map(|c| c.id))?;
        ensure_unique("messenger", self.messenger.contacts.iter().copied())?;

        let messenger = &self.messenger;
        if !messenger.contacts.is_empty() && !messenger.contacts.contains(&messenger.selected_id) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "messenger.selected_id {} is not one of messenger.contacts",
                    messenger.selected_id
                ),
            });
        }

        if let Some(selected) = self.contacts.selected_id {
            if !self.contacts.contacts.iter().any(|c| c.id == selected) {
                return Err(ConfigError::ValidationError {
                    message: format!("contacts.selected_id {} has no matching contact", selected),
                });
            }
        }

        Ok(())
    }
}

fn ensure_unique(section: &str, ids: impl Iterator<Item = u64>) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ConfigError::ValidationError {
                message: format!("Duplicate id {} in [{}]", id, section),
            });
        }
    }
    Ok(())
}
