//! Bounded-concurrency batch downloading of segments.

use std::path::{Path, PathBuf};

use futures::future::join_all;
use futures::StreamExt;
use indicatif::ProgressBar;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tokio_util::sync::CancellationToken;

use crate::download::gate::AdmissionGate;
use crate::download::result::BatchResult;
use crate::error::DownloadError;
use crate::net::{ByteStream, HttpClient};
use crate::playlist::Segment;

/// Downloads segments through a header-injecting client.
#[derive(Clone)]
pub struct Downloader {
    client: HttpClient,
    progress: Option<ProgressBar>,
}

impl Downloader {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            progress: None,
        }
    }

    /// Advance `bar` once per finished segment.
    pub fn with_progress(mut self, bar: ProgressBar) -> Self {
        self.progress = Some(bar);
        self
    }

    /// Download every segment into `destination`, at most `concurrency` at a time.
    ///
    /// Always returns one result per segment, aligned with `segments`. A failed
    /// or cancelled segment never stops the others.
    pub async fn download_batch(
        &self,
        segments: &[Segment],
        destination: &Path,
        concurrency: usize,
        token: &CancellationToken,
    ) -> Vec<BatchResult> {
        let gate = AdmissionGate::new(concurrency);

        let handles: Vec<_> = segments
            .iter()
            .enumerate()
            .map(|(index, segment)| {
                let client = self.client.clone();
                let progress = self.progress.clone();
                let gate = gate.clone();
                let token = token.clone();
                let url = segment.url.clone();
                let path = destination.join(&segment.filename);

                tokio::spawn(async move {
                    let outcome = match gate.acquire_or_cancel(&token).await {
                        Ok(permit) => {
                            let outcome = download_segment(&client, &url, &path, &token).await;
                            drop(permit);
                            outcome
                        }
                        Err(e) => Err(e),
                    };

                    if let Some(bar) = progress {
                        bar.inc(1);
                    }

                    match outcome {
                        Ok(()) => BatchResult::success(index, path),
                        Err(e) => BatchResult::failure(index, path, e),
                    }
                })
            })
            .collect();

        // Handles are awaited in input order, so results line up with segments.
        join_all(handles)
            .await
            .into_iter()
            .zip(segments)
            .enumerate()
            .map(|(index, (joined, segment))| match joined {
                Ok(result) => result,
                Err(e) => BatchResult::failure(
                    index,
                    destination.join(&segment.filename),
                    DownloadError::TaskFailed(e.to_string()),
                ),
            })
            .collect()
    }
}

/// Fetch one segment and stream it to `path`.
async fn download_segment(
    client: &HttpClient,
    url: &str,
    path: &Path,
    token: &CancellationToken,
) -> Result<(), DownloadError> {
    tracing::debug!("Downloading segment {}...", path.display());

    let response = tokio::select! {
        biased;
        _ = token.cancelled() => return Err(DownloadError::Cancelled),
        response = client.get(url) => response?,
    };

    if response.status != 200 {
        return Err(DownloadError::UnexpectedStatus(response.status));
    }

    let mut file = File::create(path)
        .await
        .map_err(|e| DownloadError::FileCreateFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let copied = copy_body(response.body, &mut file, path, token).await;
    if copied.is_err() {
        drop(file);
        // Leave no partial segment behind for a later fix run to mistake as complete.
        let _ = fs::remove_file(path).await;
    }

    copied
}

async fn copy_body(
    mut body: ByteStream,
    file: &mut File,
    path: &Path,
    token: &CancellationToken,
) -> Result<(), DownloadError> {
    let write_failed = |reason: String| DownloadError::WriteFailed {
        path: PathBuf::from(path),
        reason,
    };

    loop {
        let chunk = tokio::select! {
            biased;
            _ = token.cancelled() => return Err(DownloadError::Cancelled),
            chunk = body.next() => chunk,
        };

        match chunk {
            Some(Ok(bytes)) => file
                .write_all(&bytes)
                .await
                .map_err(|e| write_failed(e.to_string()))?,
            Some(Err(e)) => return Err(write_failed(e.to_string())),
            None => break,
        }
    }

    file.flush().await.map_err(|e| write_failed(e.to_string()))?;
    Ok(())
}
