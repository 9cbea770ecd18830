//! Per-segment rendering strategies.
//!
//! # Architecture
//!
//! Strategies implement the `RenderStrategy` trait and are created via the
//! factory function. The strategy is picked once per render from theme
//! flags, so every segment and chunk of a document follows one policy.
//!
//! # Available Strategies
//!
//! - **Plain**: one event per segment, whole text, segment-level animation.
//! - **Karaoke**: one event per chunk, instant color switch at word boundaries.
//! - **PerWordBackground**: one event per chunk, 50ms color transitions and a
//!   single combined fade.

mod karaoke;
mod per_word;
mod plain;

pub use karaoke::Karaoke;
pub use per_word::PerWordBackground;
pub use plain::Plain;

use serde::{Deserialize, Serialize};

use crate::models::{Segment, WordTiming};
use crate::subtitles::chunker::{chunk_words, Chunk};
use crate::subtitles::codec::hex_to_ass_color;
use crate::subtitles::error::RenderError;
use crate::subtitles::timing::estimate_word_timings;
use crate::subtitles::types::SubtitleEvent;
use crate::theme::{BackgroundStyle, ThemeConfig};

/// Available rendering strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderStrategyType {
    Plain,
    Karaoke,
    PerWordBackground,
}

impl RenderStrategyType {
    /// Pick the strategy a theme asks for.
    ///
    /// Per-word background wins over karaoke highlighting.
    pub fn for_theme(theme: &ThemeConfig) -> Self {
        if theme.background.style == BackgroundStyle::PerWord {
            Self::PerWordBackground
        } else if theme.highlight.enabled {
            Self::Karaoke
        } else {
            Self::Plain
        }
    }

    /// Get the display name for this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Karaoke => "karaoke",
            Self::PerWordBackground => "per-word-background",
        }
    }
}

/// Theme values shared by every segment of one render.
///
/// Colors are converted once up front, so a malformed color fails the
/// render before any event is produced.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub theme: &'a ThemeConfig,
    /// Primary color as an ASS token.
    pub primary: String,
    /// Highlight color as an ASS token.
    pub highlight: String,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a ThemeConfig) -> Result<Self, RenderError> {
        // Shadow has no style slot but is still a theme color.
        hex_to_ass_color(&theme.colors.shadow)?;

        Ok(Self {
            theme,
            primary: hex_to_ass_color(&theme.colors.primary)?,
            highlight: hex_to_ass_color(&theme.colors.highlight)?,
        })
    }

    /// Animation duration in milliseconds.
    pub fn animation_ms(&self) -> u32 {
        self.theme.animation.duration
    }

    /// Estimate word timings and chunk them by the theme's line length.
    ///
    /// Returns `None` when the segment has no words at all.
    pub fn chunk_segment(&self, segment: &Segment) -> Result<Option<Vec<Chunk>>, RenderError> {
        let words: Vec<WordTiming> = estimate_word_timings(segment);
        if words.is_empty() {
            return Ok(None);
        }

        let max_words = self.theme.layout.max_words_per_line as usize;
        Ok(Some(chunk_words(&words, max_words)?))
    }
}

/// Trait for rendering strategy implementations.
pub trait RenderStrategy: Send + Sync {
    /// Get the name of this strategy.
    fn name(&self) -> &str;

    /// Render one segment into zero or more events, in display order.
    ///
    /// # Returns
    /// * `Ok(events)` - Events for this segment.
    /// * `Err(RenderError)` - Invalid configuration; the render is aborted.
    fn render_segment(
        &self,
        segment: &Segment,
        ctx: &RenderContext<'_>,
    ) -> Result<Vec<SubtitleEvent>, RenderError>;
}

/// Create a strategy from type enum.
pub fn create_strategy(strategy: RenderStrategyType) -> Box<dyn RenderStrategy> {
    match strategy {
        RenderStrategyType::Plain => Box::new(Plain),
        RenderStrategyType::Karaoke => Box::new(Karaoke),
        RenderStrategyType::PerWordBackground => Box::new(PerWordBackground),
    }
}

/// Replace embedded line breaks with the ASS hard break `\N`.
pub(crate) fn hard_breaks(text: &str) -> String {
    text.replace("\r\n", "\\N").replace(['\n', '\r'], "\\N")
}

/// Join `{tags}word` parts with spaces behind an optional preamble.
pub(crate) fn join_words(preamble: &str, parts: impl Iterator<Item = String>) -> String {
    let body: Vec<String> = parts.collect();
    format!("{}{}", preamble, body.join(" "))
}
