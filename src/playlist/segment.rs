//! Segment data model.

use serde::{Deserialize, Serialize};

/// A single fetchable media segment of a playlist.
///
/// The serialized field names match the segment cache file format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Fully resolved fetch address.
    #[serde(rename = "URL")]
    pub url: String,

    /// Output basename, `segment_NNNN<ext>`.
    #[serde(rename = "Filename")]
    pub filename: String,
}

impl Segment {
    pub fn new(url: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            filename: filename.into(),
        }
    }
}
