//! Single-playlist download coordination.

use std::path::PathBuf;

use tokio_util::sync::CancellationToken;

use crate::combine::{combine_segments, CombineOptions};
use crate::config::Config;
use crate::download::batch::Downloader;
use crate::download::fix::plan_fix;
use crate::download::result::BatchSummary;
use crate::error::{CombineError, Error, Result, SetupError};
use crate::fs::paths::{ensure_dir, first_file_extension};
use crate::net::HttpClient;
use crate::output::{create_segment_bar, print_batch_summary, print_info, print_success, print_warning};
use crate::playlist::{load_cache, parse_playlist, save_cache, ParseOptions, Segment};

/// What a run ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Fix mode found nothing to download.
    AlreadyComplete,

    /// A batch ran.
    Downloaded {
        summary: BatchSummary,
        /// Output file, when the combine step ran.
        combined: Option<PathBuf>,
    },
}

/// Drives one playlist from URL to segment files and, optionally, one output file.
pub struct Coordinator {
    config: Config,
    client: HttpClient,
}

impl Coordinator {
    pub fn new(config: Config, client: HttpClient) -> Self {
        Self { config, client }
    }

    pub async fn run(&self, token: &CancellationToken) -> Result<RunOutcome> {
        let segments_dir = self.config.segments_dir().to_path_buf();
        let mut options = self.config.parse_options();

        if self.config.download.fix.is_some() {
            if !segments_dir.is_dir() {
                return Err(SetupError::DirectoryMissing(segments_dir).into());
            }
            if options.force_ext.is_empty() {
                if let Some(ext) = first_file_extension(&segments_dir)? {
                    tracing::debug!("Using extension {} from existing segments", ext);
                    options.force_ext = ext;
                }
            }
        } else {
            ensure_dir(&segments_dir)?;
        }

        let segments = self.resolve_segments(&options, token).await?;

        let (segments, present) = match &self.config.download.fix {
            Some(dir) => {
                let plan = plan_fix(segments, dir)?;
                if plan.is_complete() {
                    print_success("All segments are already downloaded");
                    return Ok(RunOutcome::AlreadyComplete);
                }
                print_info(&format!("Found {} segments to fix", plan.missing.len()));
                (plan.missing, plan.present)
            }
            None => (segments, Vec::new()),
        };

        let mut downloader = Downloader::new(self.client.clone());
        let bar = self
            .config
            .download
            .show_progress
            .then(|| create_segment_bar(segments.len() as u64));
        if let Some(bar) = &bar {
            downloader = downloader.with_progress(bar.clone());
        }

        let results = downloader
            .download_batch(
                &segments,
                &segments_dir,
                self.config.download.concurrent,
                token,
            )
            .await;

        if let Some(bar) = bar {
            bar.finish_and_clear();
        }

        for result in &results {
            if let Some(err) = &result.error {
                tracing::warn!("Failed to download {}: {}", result.path.display(), err);
            }
        }

        let summary = BatchSummary::from_results(&results);
        print_batch_summary(&summary);

        if token.is_cancelled() {
            return Ok(RunOutcome::Downloaded {
                summary,
                combined: None,
            });
        }

        let Some(target) = self.config.combine_target() else {
            return Ok(RunOutcome::Downloaded {
                summary,
                combined: None,
            });
        };

        if target.require_complete && !summary.all_succeeded() {
            return Err(Error::Incomplete {
                failed: summary.failed,
                total: summary.total,
            });
        }

        let mut inputs = present;
        inputs.extend(
            results
                .into_iter()
                .filter(|r| r.is_success())
                .map(|r| r.path),
        );

        if inputs.is_empty() {
            print_warning("No segments were downloaded, nothing to combine");
            return Ok(RunOutcome::Downloaded {
                summary,
                combined: None,
            });
        }

        let combine = CombineOptions {
            filelist: self.config.combine.filelist.clone(),
            ffmpeg: self.config.combine.ffmpeg.clone(),
            remove_filelist: self.config.combine.cleanup,
        };
        combine_segments(inputs, &target.output, &combine).await?;
        print_success(&format!("Combined segments into {}", target.output.display()));

        if self.config.combine.cleanup {
            tracing::info!("Cleaning up segments directory {}...", segments_dir.display());
            tokio::fs::remove_dir_all(&segments_dir)
                .await
                .map_err(|source| CombineError::CleanupFailed {
                    path: segments_dir.clone(),
                    source,
                })?;
        }

        Ok(RunOutcome::Downloaded {
            summary,
            combined: Some(target.output),
        })
    }

    /// Segments from the cache when usable, otherwise from the playlist URL.
    async fn resolve_segments(
        &self,
        options: &ParseOptions,
        token: &CancellationToken,
    ) -> Result<Vec<Segment>> {
        let cache = self.config.playlist.cache.as_deref();

        if let Some(path) = cache {
            if let Some(segments) = load_cache(path).await {
                print_info("Using cached playlist");
                return Ok(segments);
            }
        }

        print_info("Downloading playlist");
        let text = self
            .client
            .fetch_text(&self.config.playlist.url, token)
            .await
            .map_err(Error::Playlist)?;
        let segments = parse_playlist(&text, options)?;
        tracing::info!("Playlist has {} segments to download", segments.len());

        if let Some(path) = cache {
            tracing::debug!("Caching playlist to {}", path.display());
            if let Err(e) = save_cache(path, &segments).await {
                print_warning(&format!("Failed to cache playlist: {}", e));
            }
        }

        Ok(segments)
    }
}
