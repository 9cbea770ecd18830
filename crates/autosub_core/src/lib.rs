//! Auto Subtitle Core - theme-driven subtitle rendering
//!
//! This crate turns timestamped transcript segments and a visual theme into
//! styled ASS subtitle documents, with zero UI dependencies. It can be used
//! by the command-line tool or embedded in an editor.

pub mod config;
pub mod logging;
pub mod models;
pub mod subtitles;
pub mod theme;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
