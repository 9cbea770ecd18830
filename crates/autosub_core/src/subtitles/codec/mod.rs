//! Color and override-tag codec.
//!
//! Pure string builders for ASS color tokens, alignment codes and
//! override tags. Nothing here touches I/O; the only failure is a
//! malformed color.

mod color;
mod effects;
mod tags;

pub use color::{hex_to_ass_color, highlight_style_tags};
pub use effects::{entry_effect, exit_effect};
pub use tags::{
    bounce_tag, color_sweep_tags, fade_tag, karaoke_fill_tag, karaoke_tag, move_tag, pop_in_tag,
    pop_out_tag, reset_tag, scale_tag, slide_down_tag, slide_up_tag, wrap_override,
};

use crate::theme::{Alignment, Position};

/// Numpad-style ASS alignment code.
///
/// ```text
/// 7 8 9   top
/// 4 5 6   center
/// 1 2 3   bottom (and custom)
/// ```
pub fn alignment_code(position: Position, alignment: Alignment) -> i32 {
    let base = match position {
        Position::Bottom | Position::Custom => 1,
        Position::Center => 4,
        Position::Top => 7,
    };
    let offset = match alignment {
        Alignment::Left => 0,
        Alignment::Center => 1,
        Alignment::Right => 2,
    };
    base + offset
}
