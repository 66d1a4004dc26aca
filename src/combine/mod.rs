//! Combining downloaded segments into one media file.
//!
//! Provides:
//! - ffmpeg concat filelist writing
//! - ffmpeg invocation

pub mod ffmpeg;
pub mod filelist;

use std::path::{Path, PathBuf};

use crate::error::CombineError;

pub use ffmpeg::run_concat;
pub use filelist::{sort_by_ordinal, write_filelist};

/// Inputs of the combine step that do not change between runs.
#[derive(Debug, Clone)]
pub struct CombineOptions {
    pub filelist: PathBuf,
    pub ffmpeg: PathBuf,
    /// Remove the filelist once the output is written.
    pub remove_filelist: bool,
}

/// Concatenate `segments` into `output`, in ordinal order.
pub async fn combine_segments(
    mut segments: Vec<PathBuf>,
    output: &Path,
    options: &CombineOptions,
) -> Result<(), CombineError> {
    sort_by_ordinal(&mut segments);

    tracing::info!(
        "Combining {} segments into {}",
        segments.len(),
        output.display()
    );
    write_filelist(&options.filelist, &segments).await?;
    run_concat(&options.ffmpeg, &options.filelist, output).await?;

    if options.remove_filelist {
        tokio::fs::remove_file(&options.filelist)
            .await
            .map_err(|source| CombineError::CleanupFailed {
                path: options.filelist.clone(),
                source,
            })?;
    }

    Ok(())
}
