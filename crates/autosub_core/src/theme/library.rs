//! Theme lookup by name or path.
//!
//! Resolution order:
//! 1. An existing file path is loaded directly.
//! 2. Otherwise the reference is a built-in theme name, looked up as
//!    `<dir>/<name>.{yaml,yml,toml,json}`.
//! 3. Otherwise the default theme is used and a warning is logged.
//!
//! `resolve` never fails so the editor stays usable without any theme
//! files; `try_resolve` surfaces broken theme files to callers that care.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::config::ThemeConfig;
use super::document::ThemeFormat;
use super::error::ThemeError;

/// Where a resolved theme came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    /// Loaded from an explicit file path.
    File(PathBuf),
    /// Loaded from the built-in themes directory.
    Builtin { name: String, path: PathBuf },
    /// Nothing resolved; built-in defaults.
    Default,
}

/// A theme plus its provenance.
#[derive(Debug, Clone)]
pub struct ResolvedTheme {
    pub theme: ThemeConfig,
    pub source: ThemeSource,
}

impl ResolvedTheme {
    fn fallback() -> Self {
        Self {
            theme: ThemeConfig::default(),
            source: ThemeSource::Default,
        }
    }

    /// Whether resolution fell back to defaults.
    pub fn is_fallback(&self) -> bool {
        self.source == ThemeSource::Default
    }
}

/// Built-in theme directory.
#[derive(Debug, Clone)]
pub struct ThemeLibrary {
    dir: PathBuf,
}

impl ThemeLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Get the themes directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve a theme reference, falling back to defaults on any failure.
    pub fn resolve(&self, name_or_path: &str) -> ResolvedTheme {
        match self.try_resolve(name_or_path) {
            Ok(Some(resolved)) => resolved,
            Ok(None) => {
                warn!(
                    theme = name_or_path,
                    dir = %self.dir.display(),
                    "Theme not found, using default theme"
                );
                ResolvedTheme::fallback()
            }
            Err(e) => {
                warn!(theme = name_or_path, error = %e, "Theme failed to load, using default theme");
                ResolvedTheme::fallback()
            }
        }
    }

    /// Resolve a theme reference.
    ///
    /// # Returns
    /// * `Ok(Some(_))` - Theme found and loaded.
    /// * `Ok(None)` - No file and no built-in theme by that name.
    /// * `Err(ThemeError)` - A theme file exists but is unreadable or invalid.
    pub fn try_resolve(&self, name_or_path: &str) -> Result<Option<ResolvedTheme>, ThemeError> {
        let as_path = Path::new(name_or_path);
        if as_path.is_file() {
            let theme = ThemeConfig::from_file(as_path)?;
            debug!(path = %as_path.display(), "Loaded theme file");
            return Ok(Some(ResolvedTheme {
                theme,
                source: ThemeSource::File(as_path.to_path_buf()),
            }));
        }

        let Some(path) = self.builtin_path(name_or_path) else {
            return Ok(None);
        };

        let theme = ThemeConfig::from_file(&path)?;
        debug!(name = name_or_path, path = %path.display(), "Loaded built-in theme");
        Ok(Some(ResolvedTheme {
            theme,
            source: ThemeSource::Builtin {
                name: name_or_path.to_string(),
                path,
            },
        }))
    }

    /// Path of the built-in theme `name`, if one exists.
    pub fn builtin_path(&self, name: &str) -> Option<PathBuf> {
        if !is_plain_name(name) {
            return None;
        }

        ThemeFormat::LOOKUP_EXTENSIONS
            .iter()
            .map(|ext| self.dir.join(format!("{name}.{ext}")))
            .find(|path| path.is_file())
    }

    /// Names of all built-in themes, sorted and de-duplicated.
    pub fn list(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(dir = %self.dir.display(), error = %e, "Themes directory not readable");
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && ThemeFormat::from_extension(path).is_some())
            .filter_map(|path| path.file_stem()?.to_str().map(str::to_string))
            .collect();

        names.sort();
        names.dedup();
        names
    }
}

/// A built-in theme name must not escape the themes directory.
fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains(['/', '\\'])
        && name != "."
        && name != ".."
}
