use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Settings, MAX_DUMP_INDENT};

/// Errors that can occur when loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read settings file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings: {source}")]
    ParseError {
        #[source]
        source: toml::de::Error,
    },

    #[error("Settings validation failed: {message}")]
    ValidationError { message: String },
}

impl Settings {
    /// Parses and validates settings from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings =
            toml::from_str(content).map_err(|e| ConfigError::ParseError { source: e })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a TOML file.
    ///
    /// - If the file doesn't exist, returns `Settings::default()`.
    /// - Otherwise parses and validates it.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!("Settings file {} not found, using defaults", path.display());
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_toml_str(&content)
    }

    /// Validates the settings.
    ///
    /// Checks:
    /// - `dump_indent` does not exceed [`MAX_DUMP_INDENT`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.diagnostics.dump_indent > MAX_DUMP_INDENT {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "diagnostics.dump_indent must be at most {}, got {}",
                    MAX_DUMP_INDENT, self.diagnostics.dump_indent
                ),
            });
        }

        Ok(())
    }
}
