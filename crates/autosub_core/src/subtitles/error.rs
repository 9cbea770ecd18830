//! Subtitle error types.

use std::path::PathBuf;

/// Errors that can occur during subtitle operations.
#[derive(Debug, thiserror::Error)]
pub enum SubtitleError {
    /// Failed to read an input file.
    #[error("Failed to read file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the output document.
    #[error("Failed to write file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Segment list is not valid JSON of the expected shape.
    #[error("Invalid segments in '{path}': {source}")]
    SegmentParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Render error.
    #[error("Render error: {0}")]
    RenderError(#[from] RenderError),
}

/// Errors that abort a render call.
///
/// No partial document is produced when one of these is raised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// Color is not `#RRGGBB` or `#RRGGBBAA`.
    #[error("Invalid color format: '{0}'")]
    InvalidColorFormat(String),

    /// Out-of-range render parameter.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl SubtitleError {
    /// Create a read error.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Create a write error.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.into(),
            source,
        }
    }
}
