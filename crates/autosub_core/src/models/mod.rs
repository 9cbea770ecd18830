//! Data models shared across the renderer.

mod segment;

pub use segment::{parse_segments_json, Segment, WordTiming};
