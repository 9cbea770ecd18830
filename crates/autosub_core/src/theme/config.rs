//! Theme model with per-section defaults.
//!
//! Theme documents supply any subset of fields; every section uses
//! `#[serde(default)]` so absent keys keep their defaults, recursively.

use serde::{Deserialize, Serialize};

use super::enums::{
    Alignment, AnimationEffect, BackgroundStyle, FontStyle, FontWeight, HighlightMode,
    HighlightStyle, HighlightTransition, Position,
};
use super::error::ThemeError;

/// Maximum supported words per display line.
pub const MAX_WORDS_PER_LINE_LIMIT: u32 = 10;

/// Longest entry/exit animation, in milliseconds.
pub const MAX_ANIMATION_DURATION_MS: u32 = 60_000;

/// Complete subtitle theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Theme name, written as the document title.
    pub name: String,
    /// Theme document version.
    pub version: String,
    pub font: FontConfig,
    pub colors: ColorConfig,
    pub highlight: HighlightConfig,
    pub layout: LayoutConfig,
    pub background: BackgroundConfig,
    pub effects: EffectsConfig,
    pub animation: AnimationConfig,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            version: "1.0".to_string(),
            font: FontConfig::default(),
            colors: ColorConfig::default(),
            highlight: HighlightConfig::default(),
            layout: LayoutConfig::default(),
            background: BackgroundConfig::default(),
            effects: EffectsConfig::default(),
            animation: AnimationConfig::default(),
        }
    }
}

/// Font settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub family: String,
    /// Font size in canvas pixels.
    pub size: u32,
    pub weight: FontWeight,
    pub style: FontStyle,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "Arial".to_string(),
            size: 72,
            weight: FontWeight::Bold,
            style: FontStyle::Normal,
        }
    }
}

/// Colors as `#RRGGBB` or `#RRGGBBAA` strings.
///
/// Colors are checked when rendering, not when loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub primary: String,
    pub highlight: String,
    pub background: String,
    pub outline: String,
    pub shadow: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: "#FFFFFF".to_string(),
            highlight: "#00FF88".to_string(),
            background: "#000000CC".to_string(),
            outline: "#000000".to_string(),
            shadow: "#00000080".to_string(),
        }
    }
}

/// Karaoke highlight settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enabled: bool,
    pub mode: HighlightMode,
    pub style: HighlightStyle,
    pub transition: HighlightTransition,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: HighlightMode::Word,
            style: HighlightStyle::Color,
            transition: HighlightTransition::Instant,
        }
    }
}

/// Layout and positioning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub position: Position,
    /// Vertical margin as a percentage of canvas height (`custom` position).
    pub custom_y: Option<f64>,
    pub max_words_per_line: u32,
    pub alignment: Alignment,
    /// Horizontal margin in pixels.
    pub margin_x: i32,
    /// Vertical margin in pixels.
    pub margin_y: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            position: Position::Bottom,
            custom_y: None,
            max_words_per_line: 5,
            alignment: Alignment::Center,
            margin_x: 50,
            margin_y: 100,
        }
    }
}

/// Background box settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub enabled: bool,
    pub style: BackgroundStyle,
    pub padding: u32,
    pub border_radius: u32,
    /// Box opacity, 0.0..=1.0.
    pub opacity: f64,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            style: BackgroundStyle::Single,
            padding: 20,
            border_radius: 15,
            opacity: 0.8,
        }
    }
}

/// Text effects.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub outline: OutlineEffect,
    pub shadow: ShadowEffect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineEffect {
    pub enabled: bool,
    pub width: u32,
}

impl Default for OutlineEffect {
    fn default() -> Self {
        Self {
            enabled: true,
            width: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowEffect {
    pub enabled: bool,
    pub offset_x: i32,
    pub offset_y: i32,
    pub blur: u32,
}

impl Default for ShadowEffect {
    fn default() -> Self {
        Self {
            enabled: false,
            offset_x: 4,
            offset_y: 4,
            blur: 2,
        }
    }
}

/// Entry/exit animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub entry: AnimationEffect,
    pub exit: AnimationEffect,
    /// Animation duration in milliseconds.
    pub duration: u32,
    /// Delay between word animations in milliseconds.
    pub word_stagger: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            entry: AnimationEffect::Pop,
            exit: AnimationEffect::Fade,
            duration: 200,
            word_stagger: 50,
        }
    }
}

impl ThemeConfig {
    /// Check numeric ranges.
    ///
    /// Enumerated fields are already closed by their types.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.font.size == 0 {
            return Err(ThemeError::invalid("font.size", "must be greater than 0"));
        }

        let max_words = self.layout.max_words_per_line;
        if !(1..=MAX_WORDS_PER_LINE_LIMIT).contains(&max_words) {
            return Err(ThemeError::invalid(
                "layout.max_words_per_line",
                format!("{max_words} is outside 1..={MAX_WORDS_PER_LINE_LIMIT}"),
            ));
        }

        if let Some(custom_y) = self.layout.custom_y {
            if !(0.0..=100.0).contains(&custom_y) {
                return Err(ThemeError::invalid(
                    "layout.custom_y",
                    format!("{custom_y} is not a percentage"),
                ));
            }
        }

        let duration = self.animation.duration;
        if duration > MAX_ANIMATION_DURATION_MS {
            return Err(ThemeError::invalid(
                "animation.duration",
                format!("{duration}ms exceeds {MAX_ANIMATION_DURATION_MS}ms"),
            ));
        }

        let opacity = self.background.opacity;
        if !(0.0..=1.0).contains(&opacity) {
            return Err(ThemeError::invalid(
                "background.opacity",
                format!("{opacity} is outside 0.0..=1.0"),
            ));
        }

        Ok(())
    }
}
