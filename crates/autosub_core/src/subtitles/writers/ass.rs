//! ASS subtitle writer.
//!
//! Writes SubtitleData to Advanced SubStation Alpha v4.00+ text.
//!
//! # Layout
//!
//! Sections are always written in the order `[Script Info]`,
//! `[V4+ Styles]`, `[Events]`, each followed by its `Format:` line where
//! the format has one. Video compositors match these lines verbatim.
//!
//! # Timing Precision
//!
//! ASS uses centisecond timing (H:MM:SS.cc, hours unpadded). Internal float
//! milliseconds are rounded according to the configured RoundingMode.

use crate::subtitles::types::{
    RoundingMode, SubtitleData, SubtitleEvent, SubtitleMetadata, SubtitleStyle, WriteOptions,
};

const STYLES_FORMAT: &str = "Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding";

const EVENTS_FORMAT: &str =
    "Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text";

/// Write SubtitleData to ASS format string.
///
/// # Arguments
/// * `data` - The subtitle data to write.
/// * `options` - Write options (rounding mode).
///
/// # Returns
/// The ASS document as a string, ending with a newline.
pub fn write_ass(data: &SubtitleData, options: &WriteOptions) -> String {
    let mut output = String::new();

    output.push_str("[Script Info]\n");
    write_metadata(&mut output, &data.metadata);
    output.push('\n');

    output.push_str("[V4+ Styles]\n");
    output.push_str(STYLES_FORMAT);
    output.push('\n');
    for style in &data.styles {
        output.push_str(&format_style_line(style));
        output.push('\n');
    }
    output.push('\n');

    output.push_str("[Events]\n");
    output.push_str(EVENTS_FORMAT);
    output.push('\n');
    for event in &data.events {
        output.push_str(&format_dialogue_line(event, options.rounding));
        output.push('\n');
    }

    output
}

fn write_metadata(output: &mut String, metadata: &SubtitleMetadata) {
    if let Some(title) = &metadata.title {
        output.push_str(&format!("Title: {}\n", title));
    }
    if let Some(script_type) = &metadata.script_type {
        output.push_str(&format!("ScriptType: {}\n", script_type));
    }
    if let Some(wrap_style) = metadata.wrap_style {
        output.push_str(&format!("WrapStyle: {}\n", wrap_style));
    }
    if let Some(scaled) = metadata.scaled_border_and_shadow {
        let value = if scaled { "yes" } else { "no" };
        output.push_str(&format!("ScaledBorderAndShadow: {}\n", value));
    }
    if let Some(matrix) = &metadata.ycbcr_matrix {
        output.push_str(&format!("YCbCr Matrix: {}\n", matrix));
    }
    if let Some(x) = metadata.play_res_x {
        output.push_str(&format!("PlayResX: {}\n", x));
    }
    if let Some(y) = metadata.play_res_y {
        output.push_str(&format!("PlayResY: {}\n", y));
    }
}

/// Format a `Style:` record (without trailing newline).
pub fn format_style_line(style: &SubtitleStyle) -> String {
    format!(
        "Style: {},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
        style.name,
        style.fontname,
        style.fontsize,
        style.primary_color.to_ass_string(),
        style.secondary_color.to_ass_string(),
        style.outline_color.to_ass_string(),
        style.back_color.to_ass_string(),
        ass_bool(style.bold),
        ass_bool(style.italic),
        ass_bool(style.underline),
        ass_bool(style.strikeout),
        style.scale_x,
        style.scale_y,
        style.spacing,
        style.angle,
        style.border_style,
        style.outline,
        style.shadow,
        style.alignment,
        style.margin_l,
        style.margin_r,
        style.margin_v,
        style.encoding,
    )
}

/// Format a `Dialogue:` record (without trailing newline).
///
/// Per-event margins and effect are not used, so they are written as
/// zeros and empty fields.
pub fn format_dialogue_line(event: &SubtitleEvent, rounding: RoundingMode) -> String {
    format!(
        "Dialogue: {},{},{},{},,0,0,0,,{}",
        event.layer,
        format_ass_time(event.start_ms, rounding),
        format_ass_time(event.end_ms, rounding),
        event.style_name(),
        event.text,
    )
}

/// Format milliseconds as ASS timestamp (H:MM:SS.cc).
///
/// Negative times are written as zero.
pub fn format_ass_time(ms: f64, rounding: RoundingMode) -> String {
    let ms = rounding.apply_ass(ms).max(0.0);
    let total_cs = (ms / 10.0).round() as u64;

    let cs = total_cs % 100;
    let total_secs = total_cs / 100;
    let secs = total_secs % 60;
    let total_mins = total_secs / 60;
    let mins = total_mins % 60;
    let hours = total_mins / 60;

    format!("{}:{:02}:{:02}.{:02}", hours, mins, secs, cs)
}

/// ASS booleans are -1 (true) and 0 (false).
fn ass_bool(value: bool) -> i32 {
    if value {
        -1
    } else {
        0
    }
}
