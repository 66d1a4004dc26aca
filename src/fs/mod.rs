//! Filesystem module.
//!
//! Provides:
//! - Segment filename generation and manipulation
//! - Directory management and listing

pub mod naming;
pub mod paths;

pub use naming::{embedded_ordinal, extension_of, segment_filename, strip_extension};
pub use paths::{ensure_dir, existing_stems, first_file_extension};
