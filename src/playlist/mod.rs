//! Playlist module.
//!
//! This module provides:
//! - The segment model
//! - Line-based M3U8 parsing under skip/limit/prefix/extension policies
//! - JSON caching of parsed segment lists

pub mod cache;
pub mod parser;
pub mod segment;

pub use cache::{load_cache, save_cache};
pub use parser::{parse_playlist, ParseOptions};
pub use segment::Segment;
