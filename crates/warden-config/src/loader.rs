//! Configuration loader with multi-source merging

use crate::{Paths, WardenSettings};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
    include_user_config: bool,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "WARDEN".to_string(),
            include_user_config: true,
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the environment variable prefix (default: "WARDEN")
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skip ~/.config/warden/config.toml
    pub fn without_user_config(mut self) -> Self {
        self.include_user_config = false;
        self
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<WardenSettings> {
        let mut builder = config::Config::builder();

        // 1. Built-in defaults
        let defaults = WardenSettings::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. User config (~/.config/warden/config.toml)
        if self.include_user_config {
            if let Ok(user_config_file) = Paths::new().user_config_file() {
                if user_config_file.exists() {
                    builder = builder.add_source(
                        config::File::from(user_config_file)
                            .required(false)
                            .format(config::FileFormat::Toml),
                    );
                }
            }
        }

        // 3. Project config (warden.toml)
        let project_config_file = Paths::project_config_file(&self.project_dir);
        if project_config_file.exists() {
            builder = builder.add_source(
                config::File::from(project_config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // 4. Local config (warden.local.toml)
        let local_config_file = Paths::local_config_file(&self.project_dir);
        if local_config_file.exists() {
            builder = builder.add_source(
                config::File::from(local_config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // 5. Environment variables (WARDEN_*)
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        let settings: WardenSettings = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        settings.validate()?;

        Ok(settings)
    }

    /// Load configuration or return defaults if anything fails
    pub fn load_or_default(self) -> WardenSettings {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OutputFormat;
    use std::fs;
    use tempfile::tempdir;

    fn loader(dir: &Path) -> ConfigLoader {
        // Unique prefix keeps the host environment out of these tests.
        ConfigLoader::new()
            .with_project_dir(dir)
            .with_env_prefix("WARDEN_LOADER_TEST")
            .without_user_config()
    }

    #[test]
    fn test_load_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let settings = loader(temp_dir.path()).load().expect("Failed to load config");

        assert_eq!(settings, WardenSettings::default());
    }

    #[test]
    fn test_load_project_config() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("warden.toml"),
            r#"
[output]
color = false
format = "json"

[audit]
capacity = 25

[logging]
level = "info"
"#,
        )
        .expect("Failed to write config");

        let settings = loader(project_dir).load().expect("Failed to load config");

        assert!(!settings.output.color);
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert_eq!(settings.audit.bound(), Some(25));
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_local_overrides() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("warden.toml"),
            r#"
[audit]
capacity = 25
"#,
        )
        .expect("Failed to write project config");

        fs::write(
            project_dir.join("warden.local.toml"),
            r#"
[audit]
capacity = 5
"#,
        )
        .expect("Failed to write local config");

        let settings = loader(project_dir).load().expect("Failed to load config");

        assert_eq!(settings.audit.bound(), Some(5));
    }

    #[test]
    fn test_invalid_level_fails_load() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("warden.toml"),
            r#"
[logging]
level = "verbose"
"#,
        )
        .expect("Failed to write config");

        assert!(loader(project_dir).load().is_err());
        assert_eq!(
            loader(project_dir).load_or_default(),
            WardenSettings::default()
        );
    }

    // Environment overrides follow the section_key form, e.g.
    // WARDEN_AUDIT_CAPACITY=100 or WARDEN_OUTPUT_COLOR=false.
}
