//! Theme-driven document rendering.
//!
//! Rendering is stateless: every call takes the segments, theme, canvas
//! and options it needs, so concurrent renders never share state.
//!
//! The pipeline is: strategy selection from the theme, per-segment events
//! from the strategy, header styles from theme and canvas, then a writer
//! serializes the resulting `SubtitleData`.

mod header;
pub mod strategy;

pub use header::{build_metadata, build_styles, vertical_margin, DEFAULT_STYLE, HIGHLIGHT_STYLE};
pub use strategy::{
    create_strategy, Karaoke, PerWordBackground, Plain, RenderContext, RenderStrategy,
    RenderStrategyType,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Segment;
use crate::theme::ThemeConfig;

use super::error::RenderError;
use super::types::{RoundingMode, SubtitleData, SubtitleEvent, SubtitleFormat, WriteOptions};
use super::writers::{write_ass, write_srt};

/// Coordinate space the document is authored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    /// Vertical 1080x1920, the short-form video default.
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1920,
        }
    }
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Options for a render call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Rounding mode for event times.
    pub rounding: RoundingMode,
}

impl RenderOptions {
    fn write_options(&self) -> WriteOptions {
        WriteOptions::with_rounding(self.rounding)
    }
}

/// Build the styled document for `segments`.
///
/// Events keep segment order; overlapping segments are not merged.
pub fn build_document(
    segments: &[Segment],
    theme: &ThemeConfig,
    canvas: Canvas,
) -> Result<SubtitleData, RenderError> {
    let ctx = RenderContext::new(theme)?;
    let kind = RenderStrategyType::for_theme(theme);
    let strategy = create_strategy(kind);

    let mut data = SubtitleData::with_format(SubtitleFormat::Ass);
    data.metadata = build_metadata(theme, canvas);
    data.styles = build_styles(theme, canvas)?;

    for segment in segments {
        data.events.extend(strategy.render_segment(segment, &ctx)?);
    }

    debug!(
        strategy = strategy.name(),
        segments = segments.len(),
        events = data.events.len(),
        "Rendered subtitle document"
    );

    Ok(data)
}

/// Render `segments` to a complete ASS document.
///
/// Identical inputs always give byte-identical output.
pub fn render_document(
    segments: &[Segment],
    theme: &ThemeConfig,
    canvas: Canvas,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let data = build_document(segments, theme, canvas)?;
    Ok(write_ass(&data, &options.write_options()))
}

/// Plain cue data: one event per segment with its trimmed text.
pub fn build_plain_data(segments: &[Segment]) -> SubtitleData {
    let mut data = SubtitleData::with_format(SubtitleFormat::Srt);
    data.events = segments
        .iter()
        .map(|s| SubtitleEvent::from_secs(s.start, s.end, s.display_text()))
        .collect();
    data
}

/// Render `segments` as numbered SRT cues without markup.
pub fn render_srt(segments: &[Segment], options: &RenderOptions) -> String {
    write_srt(&build_plain_data(segments), &options.write_options())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WordTiming;
    use crate::theme::{AnimationEffect, BackgroundStyle};

    fn hi_there() -> Segment {
        Segment::new(1.0, 2.0, "hi there").with_words(vec![
            WordTiming::new("hi", 1.0, 1.4),
            WordTiming::new("there", 1.4, 2.0),
        ])
    }

    fn dialogue_lines(doc: &str) -> Vec<&str> {
        doc.lines().filter(|l| l.starts_with("Dialogue:")).collect()
    }

    #[test]
    fn end_to_end_karaoke_line() {
        let mut theme = ThemeConfig::default();
        theme.layout.max_words_per_line = 5;

        let doc = render_document(&[hi_there()], &theme, Canvas::default(), &RenderOptions::default())
            .unwrap();

        let lines = dialogue_lines(&doc);
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0],
            "Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,\
             {\\fscx50\\fscy50\\t(0,200,\\fscx100\\fscy100)\\fad(0,200)}\
             {\\c&H00FFFFFF\\t(0,0,\\c&H0088FF00)\\t(400,400,\\c&H00FFFFFF)}hi \
             {\\c&H00FFFFFF\\t(400,400,\\c&H0088FF00)\\t(1000,1000,\\c&H00FFFFFF)}there"
        );

        let hi = lines[0].find("}hi").unwrap();
        let there = lines[0].find("}there").unwrap();
        assert!(hi < there);
    }

    #[test]
    fn full_header_layout() {
        let doc = render_document(&[], &ThemeConfig::default(), Canvas::default(), &RenderOptions::default())
            .unwrap();

        let expected = "[Script Info]\n\
Title: default\n\
ScriptType: v4.00+\n\
WrapStyle: 0\n\
ScaledBorderAndShadow: yes\n\
YCbCr Matrix: TV.709\n\
PlayResX: 1080\n\
PlayResY: 1920\n\
\n\
[V4+ Styles]\n\
Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding\n\
Style: Default,Arial,72,&H00FFFFFF,&H0088FF00,&H00000000,&H33000000,-1,0,0,0,100,100,0,0,3,3,0,2,50,50,100,1\n\
Style: Highlight,Arial,72,&H0088FF00,&H0088FF00,&H00000000,&H33000000,-1,0,0,0,100,100,0,0,3,3,0,2,50,50,100,1\n\
\n\
[Events]\n\
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n";

        assert_eq!(doc, expected);
    }

    #[test]
    fn exactly_two_styles_in_order() {
        let mut theme = ThemeConfig::default();
        theme.layout.position = crate::theme::Position::Custom;
        theme.layout.custom_y = Some(10.0);

        let doc = render_document(&[hi_there()], &theme, Canvas::new(1920, 1080), &RenderOptions::default())
            .unwrap();
        let styles: Vec<&str> = doc.lines().filter(|l| l.starts_with("Style:")).collect();

        assert_eq!(styles.len(), 2);
        assert!(styles[0].starts_with("Style: Default,"));
        assert!(styles[1].starts_with("Style: Highlight,"));
        assert!(styles[0].ends_with(",50,50,108,1"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let theme = ThemeConfig::default();
        let segments = vec![
            hi_there(),
            Segment::new(2.5, 6.1, "estimated words with no timestamps at all"),
        ];

        let first = render_document(&segments, &theme, Canvas::default(), &RenderOptions::default())
            .unwrap();
        let second = render_document(&segments, &theme, Canvas::default(), &RenderOptions::default())
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn events_keep_segment_order() {
        let mut theme = ThemeConfig::default();
        theme.highlight.enabled = false;

        let segments = vec![
            Segment::new(0.0, 1.0, "first"),
            Segment::new(1.0, 2.3, "second"),
            Segment::new(2.3, 3.0, "third"),
        ];
        let doc = render_document(&segments, &theme, Canvas::default(), &RenderOptions::default())
            .unwrap();
        let lines = dialogue_lines(&doc);

        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("first"));
        assert!(lines[1].contains(",0:00:01.00,0:00:02.30,"));
        assert!(lines[2].ends_with("third"));
    }

    #[test]
    fn per_word_and_karaoke_paths_differ() {
        let mut theme = ThemeConfig::default();
        theme.animation.entry = AnimationEffect::None;
        theme.animation.exit = AnimationEffect::None;

        let karaoke = build_document(&[hi_there()], &theme, Canvas::default()).unwrap();
        assert!(karaoke.events[0].text.contains("\\t(400,400,"));

        theme.background.style = BackgroundStyle::PerWord;
        let per_word = build_document(&[hi_there()], &theme, Canvas::default()).unwrap();
        assert!(per_word.events[0].text.contains("\\t(400,450,"));
    }

    #[test]
    fn bad_color_aborts_without_document() {
        let mut theme = ThemeConfig::default();
        theme.colors.background = "#0000".to_string();

        assert_eq!(
            render_document(&[hi_there()], &theme, Canvas::default(), &RenderOptions::default()),
            Err(RenderError::InvalidColorFormat("#0000".to_string()))
        );
    }

    #[test]
    fn huge_animation_duration_is_rejected_or_rendered() {
        let err = ThemeConfig::from_yaml_str("animation:\n  entry: bounce\n  duration: 3000000000\n")
            .unwrap_err();
        assert!(matches!(err, crate::theme::ThemeError::InvalidConfiguration { .. }));

        let mut theme = ThemeConfig::default();
        theme.animation.entry = AnimationEffect::Bounce;
        theme.animation.exit = AnimationEffect::Pop;
        theme.animation.duration = u32::MAX;

        let doc = render_document(&[hi_there()], &theme, Canvas::default(), &RenderOptions::default())
            .unwrap();
        assert_eq!(dialogue_lines(&doc).len(), 1);
    }

    #[test]
    fn bad_shadow_color_aborts_render() {
        let mut theme = ThemeConfig::default();
        theme.colors.shadow = "nonsense".to_string();

        assert_eq!(
            render_document(&[hi_there()], &theme, Canvas::default(), &RenderOptions::default()),
            Err(RenderError::InvalidColorFormat("nonsense".to_string()))
        );
    }

    #[test]
    fn srt_export_is_plain() {
        let segments = vec![hi_there(), Segment::new(2.0, 3.25, "  next line ")];
        let srt = render_srt(&segments, &RenderOptions::default());

        assert_eq!(
            srt,
            "1\n00:00:01,000 --> 00:00:02,000\nhi there\n\n2\n00:00:02,000 --> 00:00:03,250\nnext line\n"
        );
    }
}
