//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Every field has a default so a partial file is valid.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::subtitles::{Canvas, RenderOptions, RoundingMode, SubtitleFormat};
use crate::theme::ThemeLibrary;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Render defaults.
    #[serde(default)]
    pub render: RenderSettings,

    /// Theme lookup.
    #[serde(default)]
    pub themes: ThemeSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Canvas from the configured dimensions.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.render.canvas_width, self.render.canvas_height)
    }

    /// Render options from the configured rounding mode.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            rounding: self.render.rounding,
        }
    }

    /// Theme library over the configured directory.
    pub fn theme_library(&self) -> ThemeLibrary {
        ThemeLibrary::new(&self.themes.directory)
    }
}

/// Render defaults used when the caller does not override them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Canvas width in pixels (PlayResX).
    #[serde(default = "default_canvas_width")]
    pub canvas_width: u32,

    /// Canvas height in pixels (PlayResY).
    #[serde(default = "default_canvas_height")]
    pub canvas_height: u32,

    /// Rounding for event times.
    #[serde(default)]
    pub rounding: RoundingMode,

    /// Theme used when none is given.
    #[serde(default = "default_theme_name")]
    pub default_theme: String,

    /// Output format when the output path has no recognized extension.
    #[serde(default)]
    pub output_format: SubtitleFormat,
}

fn default_canvas_width() -> u32 {
    1080
}

fn default_canvas_height() -> u32 {
    1920
}

fn default_theme_name() -> String {
    "default".to_string()
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            rounding: RoundingMode::default(),
            default_theme: default_theme_name(),
            output_format: SubtitleFormat::default(),
        }
    }
}

/// Where built-in themes live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSettings {
    /// Built-in themes directory.
    #[serde(default = "default_themes_directory")]
    pub directory: String,
}

fn default_themes_directory() -> String {
    "themes".to_string()
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            directory: default_themes_directory(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level when `RUST_LOG` is unset.
    #[serde(default)]
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let settings = Settings::default();
        assert_eq!(settings.render.canvas_width, 1080);
        assert_eq!(settings.render.canvas_height, 1920);
        assert_eq!(settings.render.rounding, RoundingMode::Floor);
        assert_eq!(settings.render.default_theme, "default");
        assert_eq!(settings.render.output_format, SubtitleFormat::Ass);
        assert_eq!(settings.themes.directory, "themes");
        assert_eq!(settings.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[render]
canvas_width = 1920
rounding = "ceil"
"#,
        )
        .unwrap();

        assert_eq!(settings.canvas(), Canvas::new(1920, 1920));
        assert_eq!(settings.render_options().rounding, RoundingMode::Ceil);
        assert_eq!(settings.themes, ThemeSettings::default());
    }

    #[test]
    fn serializes_round_trip() {
        let settings = Settings::default();
        let toml_str = toml::to_string_pretty(&settings).unwrap();
        assert!(toml_str.contains("[render]"));
        assert!(toml_str.contains("output_format = \"ass\""));

        let parsed: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, settings);
    }
}
