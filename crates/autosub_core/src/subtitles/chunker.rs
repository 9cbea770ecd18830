//! Groups timed words into display lines.

use crate::models::WordTiming;

use super::error::RenderError;

/// A non-empty run of consecutive words shown as one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    words: Vec<WordTiming>,
}

impl Chunk {
    pub fn words(&self) -> &[WordTiming] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// First word start, in seconds.
    pub fn start(&self) -> f64 {
        self.words.first().map_or(0.0, |w| w.start)
    }

    /// Last word end, in seconds.
    pub fn end(&self) -> f64 {
        self.words.last().map_or(0.0, |w| w.end)
    }

    /// Offset of `seconds` from the chunk start, in whole milliseconds.
    ///
    /// Rounds to nearest so a 0.4s word boundary stored as 0.39999 lands
    /// on 400, not 399.
    pub fn relative_ms(&self, seconds: f64) -> i64 {
        ((seconds - self.start()) * 1000.0).round() as i64
    }

    /// Chunk length in whole milliseconds.
    pub fn duration_ms(&self) -> u32 {
        self.relative_ms(self.end()).max(0) as u32
    }
}

/// Split `words` into chunks of at most `max_words`.
///
/// The last chunk may be shorter. Empty input gives no chunks.
pub fn chunk_words(words: &[WordTiming], max_words: usize) -> Result<Vec<Chunk>, RenderError> {
    if max_words < 1 {
        return Err(RenderError::InvalidConfiguration(format!(
            "max words per line must be at least 1, got {max_words}"
        )));
    }

    Ok(words
        .chunks(max_words)
        .map(|run| Chunk {
            words: run.to_vec(),
        })
        .collect())
}
