//! Per-word background strategy.
//!
//! One event per chunk. Words fade to the highlight color over 50ms at
//! their start and back over 50ms at their end. Chunk animation is a
//! single `\fad` covering whichever of entry and exit are enabled.

use crate::models::Segment;
use crate::subtitles::codec::{color_sweep_tags, fade_tag, wrap_override};
use crate::subtitles::error::RenderError;
use crate::subtitles::types::SubtitleEvent;

use super::{hard_breaks, join_words, Plain, RenderContext, RenderStrategy};

/// Width of each per-word color transition, in milliseconds.
pub const PER_WORD_TRANSITION_MS: i64 = 50;

/// Per-word background rendering strategy.
pub struct PerWordBackground;

impl PerWordBackground {
    fn preamble(ctx: &RenderContext<'_>) -> String {
        let animation = &ctx.theme.animation;
        let entry_ms = if animation.entry.is_none() { 0 } else { animation.duration };
        let exit_ms = if animation.exit.is_none() { 0 } else { animation.duration };

        if entry_ms == 0 && exit_ms == 0 {
            String::new()
        } else {
            wrap_override(&fade_tag(entry_ms, exit_ms))
        }
    }
}

impl RenderStrategy for PerWordBackground {
    fn name(&self) -> &str {
        "per-word-background"
    }

    fn render_segment(
        &self,
        segment: &Segment,
        ctx: &RenderContext<'_>,
    ) -> Result<Vec<SubtitleEvent>, RenderError> {
        let Some(chunks) = ctx.chunk_segment(segment)? else {
            return Plain.render_segment(segment, ctx);
        };

        let preamble = Self::preamble(ctx);

        let events = chunks
            .iter()
            .map(|chunk| {
                let parts = chunk.words().iter().map(|word| {
                    let tags = color_sweep_tags(
                        &ctx.primary,
                        &ctx.highlight,
                        chunk.relative_ms(word.start),
                        chunk.relative_ms(word.end),
                        PER_WORD_TRANSITION_MS,
                    );
                    format!("{}{}", wrap_override(&tags), hard_breaks(&word.word))
                });

                let text = join_words(&preamble, parts);
                SubtitleEvent::from_secs(chunk.start(), chunk.end(), text)
            })
            .collect();

        Ok(events)
    }
}
