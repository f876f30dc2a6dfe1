//! Configuration management for the Warden CLI
//!
//! Settings control presentation and logging only; the access-control policy
//! itself is built in. Sources, highest precedence first:
//! 1. CLI arguments
//! 2. Environment variables (WARDEN_* prefix)
//! 3. warden.local.toml (gitignored, local overrides)
//! 4. warden.toml (project config)
//! 5. ~/.config/warden/config.toml (user defaults)
//! 6. Built-in defaults

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod error;
mod loader;
mod paths;

pub use error::SettingsError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Log levels accepted for `logging.level`.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Main Warden CLI settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WardenSettings {
    pub output: OutputSettings,
    pub audit: AuditSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub color: bool,
    pub format: OutputFormat,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditSettings {
    /// Maximum access-log entries kept per session; 0 keeps everything.
    pub capacity: usize,
}

impl AuditSettings {
    /// Returns the bound, or `None` when the log is unbounded.
    pub fn bound(&self) -> Option<usize> {
        (self.capacity > 0).then_some(self.capacity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default tracing filter level when RUST_LOG is unset.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "error".to_string(),
        }
    }
}

impl WardenSettings {
    /// Load settings from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load settings from a specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Read a single TOML file, without layering.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = toml::from_str(&content).map_err(|source| SettingsError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(SettingsError::ValidationError(format!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.logging.level
            )));
        }
        Ok(())
    }
}
