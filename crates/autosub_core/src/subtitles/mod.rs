//! Subtitle document generation.
//!
//! Turns transcript segments and a theme into a styled ASS document with
//! word-level karaoke highlighting and entry/exit animation.
//!
//! # Architecture
//!
//! - **Pure functions** in submodules for business logic
//! - **Pluggable strategies** for per-segment rendering
//! - **Clean public API** via re-exports
//!
//! # Components
//!
//! - **types**: Core data structures (SubtitleData, Event, Style, AssColor)
//! - **codec**: Color tokens, alignment codes and override tags
//! - **timing**: Per-word timing from segments
//! - **chunker**: Groups words into display lines
//! - **render**: Strategies and document assembly
//! - **writers**: Format-specific writers (ASS, SRT)
//!
//! # Usage
//!
//! ```ignore
//! use autosub_core::subtitles::{load_segments, render_to_file, Canvas, RenderOptions};
//! use autosub_core::theme::ThemeLibrary;
//!
//! let segments = load_segments("transcript.json")?;
//! let theme = ThemeLibrary::new("themes").resolve("karaoke").theme;
//! render_to_file(&segments, &theme, Canvas::default(), &RenderOptions::default(), None, "out.ass")?;
//! ```

pub mod chunker;
pub mod codec;
mod error;
pub mod render;
pub mod timing;
mod types;
pub mod writers;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::models::{parse_segments_json, Segment};
use crate::theme::ThemeConfig;

// Re-export core types
pub use types::{
    AssColor, RoundingMode, SubtitleData, SubtitleEvent, SubtitleFormat, SubtitleMetadata,
    SubtitleStyle, WriteOptions,
};

// Re-export errors
pub use error::{RenderError, SubtitleError};

// Re-export pipeline stages
pub use chunker::{chunk_words, Chunk};
pub use codec::{alignment_code, entry_effect, exit_effect, hex_to_ass_color};
pub use timing::estimate_word_timings;

// Re-export rendering
pub use render::{
    build_document, build_plain_data, create_strategy, render_document, render_srt, Canvas,
    RenderContext, RenderOptions, RenderStrategy, RenderStrategyType,
};

// Re-export writers
pub use writers::{format_ass_time, format_srt_time, write_ass, write_content, write_srt};

/// Load a JSON array of transcript segments.
///
/// # Returns
/// * `Ok(Vec<Segment>)` - Segments in file order.
/// * `Err(SubtitleError)` - If reading or parsing fails.
pub fn load_segments(path: impl AsRef<Path>) -> Result<Vec<Segment>, SubtitleError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| SubtitleError::read(path, e))?;

    parse_segments_json(&content).map_err(|source| SubtitleError::SegmentParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write subtitle data to a file.
///
/// Uses the format from the file extension, falling back to the data's
/// own format. The file is replaced atomically.
pub fn write_file(
    data: &SubtitleData,
    path: impl AsRef<Path>,
    options: &WriteOptions,
) -> Result<(), SubtitleError> {
    let path = path.as_ref();
    let format = SubtitleFormat::from_extension(path).unwrap_or(data.format);
    write_file_as(data, format, path, options)
}

/// Write subtitle data to a file in an explicit format.
pub fn write_file_as(
    data: &SubtitleData,
    format: SubtitleFormat,
    path: impl AsRef<Path>,
    options: &WriteOptions,
) -> Result<(), SubtitleError> {
    let path = path.as_ref();
    let content = write_content(data, format, options);

    atomic_write(path, &content).map_err(|e| SubtitleError::write(path, e))?;

    info!(
        path = %path.display(),
        format = format.extension(),
        events = data.events.len(),
        "Wrote subtitle document"
    );
    Ok(())
}

/// Render `segments` and write them to `path`.
///
/// Without an explicit `format` the extension decides, defaulting to ASS.
/// SRT gets plain cues; ASS gets the styled document. Nothing is written
/// if rendering fails.
pub fn render_to_file(
    segments: &[Segment],
    theme: &ThemeConfig,
    canvas: Canvas,
    options: &RenderOptions,
    format: Option<SubtitleFormat>,
    path: impl AsRef<Path>,
) -> Result<SubtitleFormat, SubtitleError> {
    let path = path.as_ref();
    let format = format
        .or_else(|| SubtitleFormat::from_extension(path))
        .unwrap_or_default();

    let data = match format {
        SubtitleFormat::Srt => build_plain_data(segments),
        SubtitleFormat::Ass => build_document(segments, theme, canvas)?,
    };

    write_file_as(&data, format, path, &WriteOptions::with_rounding(options.rounding))?;
    Ok(format)
}

/// Write to a temp file beside `path`, then rename over it.
///
/// The temp file handle is dropped before the rename on every path.
fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let written = (|| {
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()
    })();

    if let Err(e) = written.and_then(|()| fs::rename(&temp_path, path)) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeLibrary;
    use tempfile::{tempdir, NamedTempFile};

    const SEGMENTS_JSON: &str = r#"[
        {"start": 1.0, "end": 2.0, "text": " hi there",
         "words": [{"word": " hi", "start": 1.0, "end": 1.4},
                   {"word": " there", "start": 1.4, "end": 2.0}]},
        {"start": 2.5, "end": 4.0, "text": " no word timestamps"}
    ]"#;

    #[test]
    fn test_load_segments() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        file.write_all(SEGMENTS_JSON.as_bytes()).unwrap();

        let segments = load_segments(file.path()).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].words.as_ref().map(Vec::len), Some(2));
        assert!(segments[1].words.is_none());
    }

    #[test]
    fn test_load_segments_errors() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            load_segments(dir.path().join("missing.json")),
            Err(SubtitleError::ReadError { .. })
        ));

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{\"start\": 1}").unwrap();
        assert!(matches!(
            load_segments(&bad),
            Err(SubtitleError::SegmentParse { .. })
        ));
    }

    #[test]
    fn test_render_to_ass_file() {
        let dir = tempdir().unwrap();
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        file.write_all(SEGMENTS_JSON.as_bytes()).unwrap();

        let segments = load_segments(file.path()).unwrap();
        let theme = ThemeLibrary::new(dir.path()).resolve("default").theme;
        let out = dir.path().join("nested").join("out.ass");

        let format = render_to_file(
            &segments,
            &theme,
            Canvas::default(),
            &RenderOptions::default(),
            None,
            &out,
        )
        .unwrap();
        assert_eq!(format, SubtitleFormat::Ass);

        let written = fs::read_to_string(&out).unwrap();
        let expected =
            render_document(&segments, &theme, Canvas::default(), &RenderOptions::default())
                .unwrap();
        assert_eq!(written, expected);
        assert_eq!(written.matches("Dialogue:").count(), 2);
        assert!(!dir.path().join("nested").join("out.ass.tmp").exists());
    }

    #[test]
    fn test_render_to_srt_file() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out.srt");
        let segments = vec![Segment::new(0.0, 1.5, " hello ")];

        render_to_file(
            &segments,
            &ThemeConfig::default(),
            Canvas::default(),
            &RenderOptions::default(),
            None,
            &out,
        )
        .unwrap();

        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "1\n00:00:00,000 --> 00:00:01,500\nhello\n"
        );
    }

    #[test]
    fn test_failed_render_writes_nothing() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out.ass");
        let mut theme = ThemeConfig::default();
        theme.colors.primary = "white".to_string();

        let result = render_to_file(
            &[Segment::new(0.0, 1.0, "x")],
            &theme,
            Canvas::default(),
            &RenderOptions::default(),
            None,
            &out,
        );

        assert!(matches!(
            result,
            Err(SubtitleError::RenderError(RenderError::InvalidColorFormat(_)))
        ));
        assert!(!out.exists());
    }

    #[test]
    fn test_explicit_format_overrides_extension() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("captions.txt");

        let format = render_to_file(
            &[Segment::new(0.0, 1.0, "plain")],
            &ThemeConfig::default(),
            Canvas::default(),
            &RenderOptions::default(),
            Some(SubtitleFormat::Srt),
            &out,
        )
        .unwrap();

        assert_eq!(format, SubtitleFormat::Srt);
        assert!(fs::read_to_string(&out).unwrap().starts_with("1\n00:00:00,000"));
    }

    #[test]
    fn test_write_file_replaces_existing() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("doc.ass");
        fs::write(&out, "stale").unwrap();

        let mut data = SubtitleData::new();
        data.events.push(SubtitleEvent::new(0.0, 500.0, "fresh"));
        write_file(&data, &out, &WriteOptions::default()).unwrap();

        let content = fs::read_to_string(&out).unwrap();
        assert!(content.starts_with("[Script Info]"));
        assert!(content.contains("fresh"));
    }

    #[test]
    fn test_write_error_when_parent_is_a_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let out = blocker.join("out.ass");

        let result = render_to_file(
            &[Segment::new(0.0, 1.0, "x")],
            &ThemeConfig::default(),
            Canvas::default(),
            &RenderOptions::default(),
            None,
            &out,
        );

        assert!(matches!(
            result,
            Err(SubtitleError::WriteError { ref path, .. }) if path == &out
        ));
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("taken.ass");
        fs::create_dir(&out).unwrap();

        let result = write_file(&SubtitleData::new(), &out, &WriteOptions::default());

        assert!(matches!(result, Err(SubtitleError::WriteError { .. })));
        assert!(!dir.path().join("taken.ass.tmp").exists());
        assert!(out.is_dir());
    }
}
