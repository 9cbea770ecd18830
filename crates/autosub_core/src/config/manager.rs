//! Config manager for loading settings from disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::settings::Settings;

/// Errors that can occur during config operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Manages application configuration.
pub struct ConfigManager {
    /// Path to the config file.
    config_path: PathBuf,
    /// Current settings loaded in memory.
    settings: Settings,
}

impl ConfigManager {
    /// Create a new config manager with the given config file path.
    ///
    /// Does not load the config - call `load()` or `load_or_default()` after.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            settings: Settings::default(),
        }
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Get a reference to the current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Load config from file.
    ///
    /// Returns error if file doesn't exist.
    pub fn load(&mut self) -> ConfigResult<()> {
        if !self.config_path.exists() {
            return Err(ConfigError::NotFound(self.config_path.clone()));
        }

        let content = fs::read_to_string(&self.config_path)?;
        self.settings = toml::from_str(&content)?;
        Ok(())
    }

    /// Load config from file, keeping defaults if it doesn't exist.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(&mut self) -> ConfigResult<()> {
        match self.load() {
            Err(ConfigError::NotFound(path)) => {
                debug!(path = %path.display(), "No config file, using defaults");
                self.settings = Settings::default();
                Ok(())
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subtitles::RoundingMode;
    use tempfile::tempdir;

    #[test]
    fn load_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let mut manager = ConfigManager::new(dir.path().join("settings.toml"));

        assert!(matches!(manager.load(), Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn load_or_default_without_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let mut manager = ConfigManager::new(&path);

        manager.load_or_default().unwrap();
        assert_eq!(manager.settings(), &Settings::default());
        assert_eq!(manager.path(), path.as_path());
        assert!(!path.exists());
    }

    #[test]
    fn load_reads_sections() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(
            &path,
            "[render]\nrounding = \"round\"\ndefault_theme = \"karaoke\"\n\n[themes]\ndirectory = \"/opt/themes\"\n",
        )
        .unwrap();

        let mut manager = ConfigManager::new(&path);
        manager.load().unwrap();

        let settings = manager.settings();
        assert_eq!(settings.render.rounding, RoundingMode::Round);
        assert_eq!(settings.render.default_theme, "karaoke");
        assert_eq!(settings.themes.directory, "/opt/themes");
        assert_eq!(settings.render.canvas_height, 1920);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[render]\nrounding = \"sideways\"\n").unwrap();

        let mut manager = ConfigManager::new(&path);
        assert!(matches!(
            manager.load_or_default(),
            Err(ConfigError::ParseError(_))
        ));
    }
}
