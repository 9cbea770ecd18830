//! Structured-document conversion for themes.
//!
//! YAML, TOML and JSON theme files all decode into a `serde_json::Value`
//! first, so every format shares the same merge-over-defaults and
//! validation path.

use std::fs;
use std::path::Path;

use serde_json::Value;

use super::config::ThemeConfig;
use super::error::ThemeError;

/// Supported theme document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeFormat {
    Yaml,
    Toml,
    Json,
}

impl ThemeFormat {
    /// Extensions tried for built-in themes, in lookup order.
    pub const LOOKUP_EXTENSIONS: [&'static str; 4] = ["yaml", "yml", "toml", "json"];

    /// Detect format from file extension.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Parse text in this format into a structured document.
    pub fn parse(&self, content: &str) -> Result<Value, ThemeError> {
        if content.trim().is_empty() {
            return Ok(Value::Null);
        }

        let doc = match self {
            Self::Yaml => serde_yaml::from_str(content)?,
            Self::Toml => toml::from_str(content)?,
            Self::Json => serde_json::from_str(content)?,
        };
        Ok(doc)
    }
}

impl ThemeConfig {
    /// Build a theme from a structured document.
    ///
    /// Only keys present in `doc` override defaults. A null document (an
    /// empty YAML file) yields the default theme. Unknown enum values and
    /// out-of-range numbers are rejected.
    pub fn from_document(doc: Value) -> Result<Self, ThemeError> {
        if doc.is_null() {
            return Ok(Self::default());
        }

        let theme: ThemeConfig = serde_json::from_value(doc)
            .map_err(|e| ThemeError::invalid("theme", e.to_string()))?;
        theme.validate()?;
        Ok(theme)
    }

    /// Emit every field as a structured document.
    pub fn to_document(&self) -> Result<Value, ThemeError> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ThemeError> {
        Self::from_document(ThemeFormat::Yaml.parse(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ThemeError> {
        Self::from_document(ThemeFormat::Toml.parse(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ThemeError> {
        Self::from_document(ThemeFormat::Json.parse(content)?)
    }

    /// Serialize the full theme as YAML.
    pub fn to_yaml_string(&self) -> Result<String, ThemeError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load a theme file, detecting the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();

        let format = ThemeFormat::from_extension(path)
            .ok_or_else(|| ThemeError::UnsupportedFormat(path.to_path_buf()))?;

        let content = fs::read_to_string(path).map_err(|e| ThemeError::read(path, e))?;

        Self::from_document(format.parse(&content)?)
    }
}
