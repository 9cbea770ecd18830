//! Immutable theme edits.
//!
//! An editor panel builds a `ThemePatch` from its widgets and applies it
//! to the current theme, getting a new validated `ThemeConfig` back. The
//! original theme is never modified, so a render in flight keeps the
//! theme it started with.

use serde::{Deserialize, Serialize};

use super::config::ThemeConfig;
use super::enums::{AnimationEffect, Position};
use super::error::ThemeError;

/// Editor-facing theme overrides.
///
/// All fields are optional; only set fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    // === Layout ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_words_per_line: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    // === Font ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,

    // === Colors (#RRGGBB or #RRGGBBAA) ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_color: Option<String>,

    // === Toggles ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_enabled: Option<bool>,

    // === Animation ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<AnimationEffect>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit: Option<AnimationEffect>,
}

impl ThemePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if this patch has any properties set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn max_words_per_line(mut self, value: u32) -> Self {
        self.max_words_per_line = Some(value);
        self
    }

    pub fn position(mut self, value: Position) -> Self {
        self.position = Some(value);
        self
    }

    pub fn font_size(mut self, value: u32) -> Self {
        self.font_size = Some(value);
        self
    }

    pub fn primary_color(mut self, value: impl Into<String>) -> Self {
        self.primary_color = Some(value.into());
        self
    }

    pub fn highlight_color(mut self, value: impl Into<String>) -> Self {
        self.highlight_color = Some(value.into());
        self
    }

    pub fn highlight_enabled(mut self, value: bool) -> Self {
        self.highlight_enabled = Some(value);
        self
    }

    pub fn outline_enabled(mut self, value: bool) -> Self {
        self.outline_enabled = Some(value);
        self
    }

    pub fn shadow_enabled(mut self, value: bool) -> Self {
        self.shadow_enabled = Some(value);
        self
    }

    pub fn entry(mut self, value: AnimationEffect) -> Self {
        self.entry = Some(value);
        self
    }

    pub fn exit(mut self, value: AnimationEffect) -> Self {
        self.exit = Some(value);
        self
    }
}

impl ThemeConfig {
    /// Return a copy of this theme with `patch` applied.
    ///
    /// The result is validated; on error `self` is untouched and no new
    /// theme is produced.
    pub fn apply(&self, patch: &ThemePatch) -> Result<ThemeConfig, ThemeError> {
        let mut theme = self.clone();

        if let Some(name) = &patch.name {
            theme.name = name.clone();
        }
        if let Some(max_words) = patch.max_words_per_line {
            theme.layout.max_words_per_line = max_words;
        }
        if let Some(position) = patch.position {
            theme.layout.position = position;
        }
        if let Some(size) = patch.font_size {
            theme.font.size = size;
        }
        if let Some(color) = &patch.primary_color {
            theme.colors.primary = color.clone();
        }
        if let Some(color) = &patch.highlight_color {
            theme.colors.highlight = color.clone();
        }
        if let Some(enabled) = patch.highlight_enabled {
            theme.highlight.enabled = enabled;
        }
        if let Some(enabled) = patch.outline_enabled {
            theme.effects.outline.enabled = enabled;
        }
        if let Some(enabled) = patch.shadow_enabled {
            theme.effects.shadow.enabled = enabled;
        }
        if let Some(entry) = patch.entry {
            theme.animation.entry = entry;
        }
        if let Some(exit) = patch.exit {
            theme.animation.exit = exit;
        }

        theme.validate()?;
        Ok(theme)
    }
}
