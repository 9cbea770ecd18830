//! Configuration management for Auto Subtitle.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Defaults for every field, so partial files are valid
//! - Helpers that turn settings into render parameters
//!
//! # Example
//!
//! ```no_run
//! use autosub_core::config::ConfigManager;
//!
//! let mut config = ConfigManager::new("autosub.toml");
//! config.load_or_default().unwrap();
//!
//! let canvas = config.settings().canvas();
//! println!("Canvas: {}x{}", canvas.width, canvas.height);
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{LoggingSettings, RenderSettings, Settings, ThemeSettings};
