//! Plain strategy.
//!
//! One event per segment carrying the trimmed segment text. Only the entry
//! and exit animations decorate it, timed against the segment duration.
//! Word timings are never computed.

use crate::models::Segment;
use crate::subtitles::codec::{entry_effect, exit_effect, wrap_override};
use crate::subtitles::error::RenderError;
use crate::subtitles::types::SubtitleEvent;

use super::{hard_breaks, RenderContext, RenderStrategy};

/// Plain rendering strategy.
pub struct Plain;

impl RenderStrategy for Plain {
    fn name(&self) -> &str {
        "plain"
    }

    fn render_segment(
        &self,
        segment: &Segment,
        ctx: &RenderContext<'_>,
    ) -> Result<Vec<SubtitleEvent>, RenderError> {
        let animation = &ctx.theme.animation;
        let total_ms = (segment.duration() * 1000.0).round().max(0.0) as u32;

        let mut effects = entry_effect(animation.entry, animation.duration);
        effects.push_str(&exit_effect(animation.exit, animation.duration, total_ms));

        let text = format!(
            "{}{}",
            wrap_override(&effects),
            hard_breaks(segment.display_text())
        );

        Ok(vec![SubtitleEvent::from_secs(segment.start, segment.end, text)])
    }
}
