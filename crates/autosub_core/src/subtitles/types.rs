//! Core subtitle document types.
//!
//! All timing values are stored as `f64` milliseconds. Rounding to
//! centiseconds (ASS) or milliseconds (SRT) happens only at write time.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::RenderError;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubtitleFormat {
    /// Advanced SubStation Alpha (.ass)
    #[default]
    Ass,
    /// SubRip (.srt)
    Srt,
}

impl SubtitleFormat {
    /// Detect format from file extension.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "ass" | "ssa" => Some(Self::Ass),
            "srt" => Some(Self::Srt),
            _ => None,
        }
    }

    /// Get the typical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Ass => "ass",
            Self::Srt => "srt",
        }
    }
}

/// Generated subtitle document.
///
/// Holds metadata, styles and events. Format only matters at write time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubtitleData {
    /// Dialogue events in output order.
    pub events: Vec<SubtitleEvent>,
    /// ASS styles (ignored for SRT).
    pub styles: Vec<SubtitleStyle>,
    /// Document-level metadata.
    pub metadata: SubtitleMetadata,
    /// Preferred output format.
    pub format: SubtitleFormat,
}

impl SubtitleData {
    /// Create empty subtitle data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with specified format.
    pub fn with_format(format: SubtitleFormat) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }

    /// Total duration in milliseconds (end of last event).
    pub fn duration_ms(&self) -> f64 {
        self.events.iter().map(|e| e.end_ms).fold(0.0, f64::max)
    }

    /// Get style by name.
    pub fn get_style(&self, name: &str) -> Option<&SubtitleStyle> {
        self.styles.iter().find(|s| s.name == name)
    }
}

/// A single dialogue event.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleEvent {
    /// Start time in milliseconds.
    pub start_ms: f64,
    /// End time in milliseconds.
    pub end_ms: f64,
    /// Text content (may contain override tags).
    pub text: String,
    /// Style name; `Default` when unset.
    pub style: Option<String>,
    /// Layer number.
    pub layer: i32,
}

impl SubtitleEvent {
    /// Create a new dialogue event on layer 0.
    pub fn new(start_ms: f64, end_ms: f64, text: impl Into<String>) -> Self {
        Self {
            start_ms,
            end_ms,
            text: text.into(),
            style: None,
            layer: 0,
        }
    }

    /// Create from second-based times.
    pub fn from_secs(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self::new(start * 1000.0, end * 1000.0, text)
    }

    /// Create with style.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Style name as written to the document.
    pub fn style_name(&self) -> &str {
        self.style.as_deref().unwrap_or("Default")
    }

    /// Duration in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.end_ms - self.start_ms
    }
}

/// ASS style definition.
///
/// Contains all 23 fields of a `[V4+ Styles]` record.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleStyle {
    /// Style name (required).
    pub name: String,
    /// Font name.
    pub fontname: String,
    /// Font size.
    pub fontsize: f64,
    /// Primary fill color.
    pub primary_color: AssColor,
    /// Secondary (karaoke) color.
    pub secondary_color: AssColor,
    /// Outline color.
    pub outline_color: AssColor,
    /// Back/shadow color, also the box color for border style 3.
    pub back_color: AssColor,
    /// Bold (-1 = true, 0 = false).
    pub bold: bool,
    /// Italic (-1 = true, 0 = false).
    pub italic: bool,
    /// Underline (-1 = true, 0 = false).
    pub underline: bool,
    /// Strikeout (-1 = true, 0 = false).
    pub strikeout: bool,
    /// Horizontal scale (100 = normal).
    pub scale_x: f64,
    /// Vertical scale (100 = normal).
    pub scale_y: f64,
    /// Spacing between characters.
    pub spacing: f64,
    /// Rotation angle in degrees.
    pub angle: f64,
    /// Border style (1 = outline + shadow, 3 = opaque box).
    pub border_style: i32,
    /// Outline width.
    pub outline: f64,
    /// Shadow depth.
    pub shadow: f64,
    /// Alignment (numpad style: 1-9).
    pub alignment: i32,
    /// Left margin.
    pub margin_l: i32,
    /// Right margin.
    pub margin_r: i32,
    /// Vertical margin.
    pub margin_v: i32,
    /// Encoding (1 = default).
    pub encoding: i32,
}

impl Default for SubtitleStyle {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            fontname: "Arial".to_string(),
            fontsize: 20.0,
            primary_color: AssColor::from_rgb(255, 255, 255), // White
            secondary_color: AssColor::from_rgb(255, 0, 0),   // Red
            outline_color: AssColor::from_rgb(0, 0, 0),       // Black
            back_color: AssColor::from_rgb(0, 0, 0),          // Black
            bold: false,
            italic: false,
            underline: false,
            strikeout: false,
            scale_x: 100.0,
            scale_y: 100.0,
            spacing: 0.0,
            angle: 0.0,
            border_style: 1,
            outline: 2.0,
            shadow: 2.0,
            alignment: 2, // Bottom center
            margin_l: 10,
            margin_r: 10,
            margin_v: 10,
            encoding: 1,
        }
    }
}

impl SubtitleStyle {
    /// Create a new style with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// ASS color in ABGR format.
///
/// ASS uses &HAABBGGRR (alpha, blue, green, red), with alpha inverted:
/// 0 is opaque, 255 is transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssColor {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 0 = opaque, 255 = transparent).
    pub a: u8,
}

impl Default for AssColor {
    fn default() -> Self {
        Self::from_rgb(255, 255, 255) // White, opaque
    }
}

impl AssColor {
    /// Create from RGB values (alpha = 0, opaque).
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0 }
    }

    /// Create from RGBA values (ASS alpha).
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a web hex color (`#RRGGBB` or `#RRGGBBAA`).
    ///
    /// Web alpha is opacity, so the stored ASS alpha is `255 - AA`.
    /// A 6-digit color is fully opaque.
    pub fn from_hex(hex: &str) -> Result<Self, RenderError> {
        let invalid = || RenderError::InvalidColorFormat(hex.to_string());

        let digits = hex.trim_start_matches('#');
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());

        match digits.len() {
            6 => Ok(Self::from_rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Self::from_rgba(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                255 - channel(6)?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Convert to ASS color string (&HAABBGGRR).
    pub fn to_ass_string(&self) -> String {
        format!("&H{:02X}{:02X}{:02X}{:02X}", self.a, self.b, self.g, self.r)
    }
}

/// Document-level metadata written to `[Script Info]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubtitleMetadata {
    /// Title.
    pub title: Option<String>,
    /// Script type (e.g., "v4.00+").
    pub script_type: Option<String>,
    /// Wrap style.
    pub wrap_style: Option<i32>,
    /// Scaled border and shadow.
    pub scaled_border_and_shadow: Option<bool>,
    /// YCbCr matrix (e.g., "TV.709").
    pub ycbcr_matrix: Option<String>,
    /// Play resolution X.
    pub play_res_x: Option<u32>,
    /// Play resolution Y.
    pub play_res_y: Option<u32>,
}

/// Rounding mode for time values when writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Round down (truncate), the classic ASS writer behaviour.
    #[default]
    Floor,
    /// Round to nearest.
    Round,
    /// Round up.
    Ceil,
}

/// Absorbs float error so 2.3s floors to 230cs, not 229cs.
const FLOOR_EPSILON: f64 = 1e-6;

impl RoundingMode {
    /// Apply rounding to a millisecond value at centisecond precision.
    pub fn apply_ass(&self, ms: f64) -> f64 {
        let cs = ms / 10.0;
        let rounded = match self {
            Self::Floor => (cs + FLOOR_EPSILON).floor(),
            Self::Round => cs.round(),
            Self::Ceil => (cs - FLOOR_EPSILON).ceil(),
        };
        rounded * 10.0
    }

    /// Apply rounding at millisecond precision.
    pub fn apply_srt(&self, ms: f64) -> f64 {
        match self {
            Self::Floor => (ms + FLOOR_EPSILON).floor(),
            Self::Round => ms.round(),
            Self::Ceil => (ms - FLOOR_EPSILON).ceil(),
        }
    }
}

/// Options for writing subtitle documents.
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Rounding mode for time values.
    pub rounding: RoundingMode,
}

impl WriteOptions {
    pub fn with_rounding(rounding: RoundingMode) -> Self {
        Self { rounding }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtitle_format_detection() {
        assert_eq!(
            SubtitleFormat::from_extension(Path::new("out.ass")),
            Some(SubtitleFormat::Ass)
        );
        assert_eq!(
            SubtitleFormat::from_extension(Path::new("out.SRT")),
            Some(SubtitleFormat::Srt)
        );
        assert_eq!(SubtitleFormat::from_extension(Path::new("out.txt")), None);
        assert_eq!(SubtitleFormat::Srt.extension(), "srt");
    }

    #[test]
    fn test_hex_six_digits_is_opaque() {
        let color = AssColor::from_hex("#FF8800").unwrap();
        assert_eq!(color, AssColor::from_rgb(0xFF, 0x88, 0x00));
        assert_eq!(color.to_ass_string(), "&H000088FF");
    }

    #[test]
    fn test_hex_alpha_is_inverted() {
        let color = AssColor::from_hex("#000000CC").unwrap();
        assert_eq!(color.a, 0x33);
        assert_eq!(color.to_ass_string(), "&H33000000");

        assert_eq!(AssColor::from_hex("#FFFFFFFF").unwrap().a, 0);
        assert_eq!(AssColor::from_hex("#FFFFFF00").unwrap().a, 255);
    }

    #[test]
    fn test_hex_accepts_missing_hash_and_lowercase() {
        assert_eq!(
            AssColor::from_hex("00ff88").unwrap().to_ass_string(),
            "&H0088FF00"
        );
    }

    #[test]
    fn test_hex_rejects_bad_input() {
        for bad in ["", "#FFF", "#FFFFF", "#FFFFFFF", "#FFFFFFFFF", "#GGGGGG", "#+FFFFF"] {
            assert_eq!(
                AssColor::from_hex(bad),
                Err(RenderError::InvalidColorFormat(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_event_helpers() {
        let event = SubtitleEvent::from_secs(1.0, 2.5, "Test");
        assert_eq!(event.start_ms, 1000.0);
        assert_eq!(event.duration_ms(), 1500.0);
        assert_eq!(event.style_name(), "Default");
        assert_eq!(event.with_style("Highlight").style_name(), "Highlight");
    }

    #[test]
    fn test_rounding_modes() {
        // ASS rounding (centiseconds)
        assert_eq!(RoundingMode::Floor.apply_ass(1234.5), 1230.0);
        assert_eq!(RoundingMode::Round.apply_ass(1234.5), 1230.0);
        assert_eq!(RoundingMode::Round.apply_ass(1235.0), 1240.0);
        assert_eq!(RoundingMode::Ceil.apply_ass(1234.5), 1240.0);
        assert_eq!(RoundingMode::Ceil.apply_ass(1230.0), 1230.0);

        // SRT rounding (milliseconds)
        assert_eq!(RoundingMode::Floor.apply_srt(1234.5), 1234.0);
        assert_eq!(RoundingMode::Round.apply_srt(1234.5), 1235.0);
        assert_eq!(RoundingMode::Ceil.apply_srt(1234.5), 1235.0);
    }

    #[test]
    fn test_floor_absorbs_float_error() {
        // Products like 2.3 * 1000.0 can land just under the boundary
        assert_eq!(RoundingMode::Floor.apply_ass(2.3 * 1000.0), 2300.0);
        assert_eq!(RoundingMode::Floor.apply_ass(0.29 * 1000.0), 290.0);
    }
}
