//! Entry/exit animation catalog.
//!
//! Slides have no anchor coordinates at event level, so they degrade to
//! fades here. Positioned slides are available through `slide_up_tag` and
//! `slide_down_tag`.

use crate::theme::AnimationEffect;

use super::tags::{bounce_tag, fade_tag, pop_in_tag, pop_out_tag};

/// Entry animation fragment for an event.
pub fn entry_effect(effect: AnimationEffect, duration_ms: u32) -> String {
    match effect {
        AnimationEffect::None => String::new(),
        AnimationEffect::Fade | AnimationEffect::SlideUp | AnimationEffect::SlideDown => {
            fade_tag(duration_ms, 0)
        }
        AnimationEffect::Pop => pop_in_tag(duration_ms),
        AnimationEffect::Bounce => bounce_tag(duration_ms),
    }
}

/// Exit animation fragment for an event lasting `total_ms`.
///
/// The exit starts `duration_ms` before the end, clamped to the event start.
pub fn exit_effect(effect: AnimationEffect, duration_ms: u32, total_ms: u32) -> String {
    match effect {
        AnimationEffect::None => String::new(),
        AnimationEffect::Pop => pop_out_tag(total_ms.saturating_sub(duration_ms), duration_ms),
        AnimationEffect::Fade
        | AnimationEffect::SlideUp
        | AnimationEffect::SlideDown
        | AnimationEffect::Bounce => fade_tag(0, duration_ms),
    }
}
