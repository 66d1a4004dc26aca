//! Fix mode: completing a partial download.

use std::path::{Path, PathBuf};

use crate::error::SetupError;
use crate::fs::naming::strip_extension;
use crate::fs::paths::existing_stems;
use crate::playlist::Segment;

/// Split of a playlist against the files already in a directory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FixPlan {
    /// Segments with no file in the directory, in playlist order.
    pub missing: Vec<Segment>,

    /// Files already present for segments of the playlist.
    pub present: Vec<PathBuf>,
}

impl FixPlan {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Compare `segments` with the files in `dir`, ignoring extensions.
pub fn plan_fix(segments: Vec<Segment>, dir: &Path) -> Result<FixPlan, SetupError> {
    if !dir.is_dir() {
        return Err(SetupError::DirectoryMissing(dir.to_path_buf()));
    }

    let existing = existing_stems(dir)?;
    let mut plan = FixPlan::default();

    for segment in segments {
        match existing.get(strip_extension(&segment.filename)) {
            Some(path) => plan.present.push(path.clone()),
            None => plan.missing.push(segment),
        }
    }

    Ok(plan)
}
