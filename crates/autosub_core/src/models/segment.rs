//! Transcript segment and word timing types.
//!
//! Segments come from the speech-recognition collaborator and are never
//! mutated by the renderer. All times are `f64` seconds, matching the
//! transcript JSON shape.

use serde::{Deserialize, Serialize};

/// A transcribed utterance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Segment {
    /// Start time in seconds.
    #[serde(default)]
    pub start: f64,
    /// End time in seconds (>= start).
    #[serde(default)]
    pub end: f64,
    /// Display text.
    #[serde(default)]
    pub text: String,
    /// Per-word timestamps, when the recognizer produced them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<WordTiming>>,
}

impl Segment {
    /// Create a segment without word timestamps.
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
            words: None,
        }
    }

    /// Attach word timestamps.
    pub fn with_words(mut self, words: Vec<WordTiming>) -> Self {
        self.words = Some(words);
        self
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Trimmed display text.
    pub fn display_text(&self) -> &str {
        self.text.trim()
    }
}

/// One word with its start/end time in seconds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WordTiming {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub end: f64,
}

impl WordTiming {
    pub fn new(word: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            word: word.into(),
            start,
            end,
        }
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Parse a JSON array of segments.
pub fn parse_segments_json(content: &str) -> Result<Vec<Segment>, serde_json::Error> {
    serde_json::from_str(content)
}
