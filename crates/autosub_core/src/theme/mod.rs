//! Subtitle themes.
//!
//! A theme is a hierarchical, fully defaulted configuration (font, colors,
//! highlight, layout, background, effects, animation). Themes are immutable
//! during a render; edits go through `ThemePatch` and produce a new theme.
//!
//! # Components
//!
//! - **config**: `ThemeConfig` and its sections, with defaults and validation
//! - **enums**: closed value sets for enumerated fields
//! - **document**: YAML/TOML/JSON structured-document conversion
//! - **patch**: immutable editor edits
//! - **library**: name-or-path resolution with default fallback

mod config;
mod document;
mod enums;
mod error;
mod library;
mod patch;

pub use config::{
    AnimationConfig, BackgroundConfig, ColorConfig, EffectsConfig, FontConfig, HighlightConfig,
    LayoutConfig, OutlineEffect, ShadowEffect, ThemeConfig, MAX_ANIMATION_DURATION_MS,
    MAX_WORDS_PER_LINE_LIMIT,
};
pub use document::ThemeFormat;
pub use enums::{
    Alignment, AnimationEffect, BackgroundStyle, FontStyle, FontWeight, HighlightMode,
    HighlightStyle, HighlightTransition, Position,
};
pub use error::ThemeError;
pub use library::{ResolvedTheme, ThemeLibrary, ThemeSource};
pub use patch::ThemePatch;
