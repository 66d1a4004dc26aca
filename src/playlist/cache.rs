//! JSON cache of parsed segment lists.

use std::path::Path;

use tokio::fs;

use crate::error::Result;
use crate::playlist::segment::Segment;

/// Load a previously cached segment list.
///
/// A missing, unreadable, malformed or empty cache yields `None` so the
/// caller falls back to a fresh parse.
pub async fn load_cache(path: &Path) -> Option<Vec<Segment>> {
    let data = match fs::read(path).await {
        Ok(data) => data,
        Err(e) => {
            tracing::debug!("Segment cache {} not usable: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_slice::<Vec<Segment>>(&data) {
        Ok(segments) if !segments.is_empty() => Some(segments),
        Ok(_) => {
            tracing::warn!("Segment cache {} is empty, ignoring", path.display());
            None
        }
        Err(e) => {
            tracing::warn!("Segment cache {} is malformed, ignoring: {}", path.display(), e);
            None
        }
    }
}

/// Persist a segment list to the cache file.
pub async fn save_cache(path: &Path, segments: &[Segment]) -> Result<()> {
    let data = serde_json::to_vec(segments)?;
    fs::write(path, data).await?;
    Ok(())
}
