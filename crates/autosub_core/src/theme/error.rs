//! Theme error types.

use std::path::PathBuf;

/// Errors that can occur while loading or editing a theme.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// Failed to read theme file.
    #[error("Failed to read theme '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Theme file has an extension we cannot decode.
    #[error("Unsupported theme format for file '{0}'")]
    UnsupportedFormat(PathBuf),

    /// YAML syntax error.
    #[error("Invalid YAML theme: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML syntax error.
    #[error("Invalid TOML theme: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON syntax or serialization error.
    #[error("Invalid JSON theme: {0}")]
    Json(#[from] serde_json::Error),

    /// A field is out of range or not one of its allowed values.
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfiguration { field: String, message: String },
}

impl ThemeError {
    /// Create a read error.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field: field.into(),
            message: message.into(),
        }
    }
}
