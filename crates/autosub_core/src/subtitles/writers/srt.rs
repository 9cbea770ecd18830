//! SRT subtitle writer.
//!
//! Writes SubtitleData to SRT format.
//!
//! # Timing Precision
//!
//! SRT uses millisecond timing (HH:MM:SS,mmm). Internal float milliseconds
//! are rounded according to the configured RoundingMode at write time.

use crate::subtitles::types::{RoundingMode, SubtitleData, WriteOptions};

/// Write SubtitleData to SRT format string.
///
/// Override blocks are stripped and `\N` hard breaks become newlines, so
/// a rendered ASS document can be exported as plain cues.
pub fn write_srt(data: &SubtitleData, options: &WriteOptions) -> String {
    let mut output = String::new();

    for (i, event) in data.events.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        // Index (1-based)
        output.push_str(&format!("{}\n", i + 1));

        let start = format_srt_time(event.start_ms, options.rounding);
        let end = format_srt_time(event.end_ms, options.rounding);
        output.push_str(&format!("{} --> {}\n", start, end));

        output.push_str(&strip_ass_tags(&event.text));
        output.push('\n');
    }

    output
}

/// Format milliseconds as SRT timestamp (HH:MM:SS,mmm).
pub fn format_srt_time(ms: f64, rounding: RoundingMode) -> String {
    let ms = rounding.apply_srt(ms).max(0.0) as u64;

    let millis = ms % 1000;
    let total_secs = ms / 1000;
    let secs = total_secs % 60;
    let total_mins = total_secs / 60;
    let mins = total_mins % 60;
    let hours = total_mins / 60;

    format!("{:02}:{:02}:{:02},{:03}", hours, mins, secs, millis)
}

/// Strip ASS override blocks from text.
///
/// Converts `{\i1}text{\i0}` to `text`.
fn strip_ass_tags(text: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '{' && chars.peek() == Some(&'\\') {
            in_tag = true;
            continue;
        }

        if c == '}' && in_tag {
            in_tag = false;
            continue;
        }

        if !in_tag {
            result.push(c);
        }
    }

    result.replace("\\N", "\n").replace("\\n", "\n")
}
