//! Script info and the two style records derived from a theme.

use crate::subtitles::codec::alignment_code;
use crate::subtitles::error::RenderError;
use crate::subtitles::types::{AssColor, SubtitleMetadata, SubtitleStyle};
use crate::theme::{BackgroundStyle, LayoutConfig, Position, ThemeConfig};

use super::Canvas;

/// Name of the base style every event uses.
pub const DEFAULT_STYLE: &str = "Default";
/// Name of the style whose primary color is the highlight color.
pub const HIGHLIGHT_STYLE: &str = "Highlight";

/// `[Script Info]` fields for a theme and canvas.
pub fn build_metadata(theme: &ThemeConfig, canvas: Canvas) -> SubtitleMetadata {
    SubtitleMetadata {
        title: Some(theme.name.clone()),
        script_type: Some("v4.00+".to_string()),
        wrap_style: Some(0),
        scaled_border_and_shadow: Some(true),
        ycbcr_matrix: Some("TV.709".to_string()),
        play_res_x: Some(canvas.width),
        play_res_y: Some(canvas.height),
    }
}

/// The `Default` and `Highlight` styles, in that order.
///
/// They differ only in primary color.
pub fn build_styles(theme: &ThemeConfig, canvas: Canvas) -> Result<Vec<SubtitleStyle>, RenderError> {
    let primary = AssColor::from_hex(&theme.colors.primary)?;
    let highlight = AssColor::from_hex(&theme.colors.highlight)?;
    let outline = AssColor::from_hex(&theme.colors.outline)?;
    let background = AssColor::from_hex(&theme.colors.background)?;

    let opaque_box =
        theme.background.enabled && theme.background.style == BackgroundStyle::Single;
    let outline_width = if theme.effects.outline.enabled {
        theme.effects.outline.width
    } else {
        0
    };
    let shadow_depth = if theme.effects.shadow.enabled {
        theme.effects.shadow.offset_x
    } else {
        0
    };

    let base = SubtitleStyle {
        name: DEFAULT_STYLE.to_string(),
        fontname: theme.font.family.clone(),
        fontsize: f64::from(theme.font.size),
        primary_color: primary,
        secondary_color: highlight,
        outline_color: outline,
        back_color: background,
        bold: theme.font.weight.is_bold(),
        italic: theme.font.style.is_italic(),
        border_style: if opaque_box { 3 } else { 1 },
        outline: f64::from(outline_width),
        shadow: f64::from(shadow_depth),
        alignment: alignment_code(theme.layout.position, theme.layout.alignment),
        margin_l: theme.layout.margin_x,
        margin_r: theme.layout.margin_x,
        margin_v: vertical_margin(&theme.layout, canvas),
        ..SubtitleStyle::default()
    };

    let highlight_style = SubtitleStyle {
        name: HIGHLIGHT_STYLE.to_string(),
        primary_color: highlight,
        ..base.clone()
    };

    Ok(vec![base, highlight_style])
}

/// Style `MarginV` for the layout position.
///
/// `top` always uses `margin_y`. `center` sits 100px above the middle of
/// the canvas and goes negative on canvases under 200px. Any other
/// position uses `custom_y` percent of the canvas height when set.
pub fn vertical_margin(layout: &LayoutConfig, canvas: Canvas) -> i32 {
    match (layout.position, layout.custom_y) {
        (Position::Top, _) => layout.margin_y,
        (Position::Center, _) => canvas.height as i32 / 2 - 100,
        (_, Some(percent)) => (f64::from(canvas.height) * percent / 100.0) as i32,
        (_, None) => layout.margin_y,
    }
}
