//! Karaoke strategy.
//!
//! One event per chunk. Each word switches to the highlight color at its
//! start and back at its end with zero-width transforms. The chunk
//! preamble uses the full entry/exit catalog against the chunk duration.

use crate::models::Segment;
use crate::subtitles::codec::{color_sweep_tags, entry_effect, exit_effect, wrap_override};
use crate::subtitles::error::RenderError;
use crate::subtitles::types::SubtitleEvent;

use super::{hard_breaks, join_words, Plain, RenderContext, RenderStrategy};

/// Karaoke-highlighted rendering strategy.
pub struct Karaoke;

impl RenderStrategy for Karaoke {
    fn name(&self) -> &str {
        "karaoke"
    }

    fn render_segment(
        &self,
        segment: &Segment,
        ctx: &RenderContext<'_>,
    ) -> Result<Vec<SubtitleEvent>, RenderError> {
        let Some(chunks) = ctx.chunk_segment(segment)? else {
            return Plain.render_segment(segment, ctx);
        };

        let animation = &ctx.theme.animation;

        let events = chunks
            .iter()
            .map(|chunk| {
                let mut effects = entry_effect(animation.entry, animation.duration);
                effects.push_str(&exit_effect(
                    animation.exit,
                    animation.duration,
                    chunk.duration_ms(),
                ));

                let parts = chunk.words().iter().map(|word| {
                    let tags = color_sweep_tags(
                        &ctx.primary,
                        &ctx.highlight,
                        chunk.relative_ms(word.start),
                        chunk.relative_ms(word.end),
                        0,
                    );
                    format!("{}{}", wrap_override(&tags), hard_breaks(&word.word))
                });

                let text = join_words(&wrap_override(&effects), parts);
                SubtitleEvent::from_secs(chunk.start(), chunk.end(), text)
            })
            .collect();

        Ok(events)
    }
}
