//! Per-segment download outcomes.

use std::path::PathBuf;

use crate::error::DownloadError;

/// Outcome of downloading one segment of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    /// Position of the segment in the batch input.
    pub index: usize,

    /// Destination file, set even when the download failed.
    pub path: PathBuf,

    /// `None` on success.
    pub error: Option<DownloadError>,
}

impl BatchResult {
    pub fn success(index: usize, path: PathBuf) -> Self {
        Self {
            index,
            path,
            error: None,
        }
    }

    pub fn failure(index: usize, path: PathBuf, error: DownloadError) -> Self {
        Self {
            index,
            path,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Aggregate counts over a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub cancelled: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[BatchResult]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Default::default()
        };

        for result in results {
            match &result.error {
                None => summary.succeeded += 1,
                Some(DownloadError::Cancelled) => {
                    summary.failed += 1;
                    summary.cancelled += 1;
                }
                Some(_) => summary.failed += 1,
            }
        }

        summary
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let results = vec![
            BatchResult::success(0, PathBuf::from("s/segment_0000.ts")),
            BatchResult::failure(
                1,
                PathBuf::from("s/segment_0001.ts"),
                DownloadError::UnexpectedStatus(404),
            ),
            BatchResult::failure(2, PathBuf::from("s/segment_0002.ts"), DownloadError::Cancelled),
            BatchResult::success(3, PathBuf::from("s/segment_0003.ts")),
        ];

        let summary = BatchSummary::from_results(&results);
        assert_eq!(
            summary,
            BatchSummary {
                total: 4,
                succeeded: 2,
                failed: 2,
                cancelled: 1,
            }
        );
        assert!(!summary.all_succeeded());
        assert!(results[0].is_success());
    }

    #[test]
    fn test_empty_batch_succeeds() {
        assert!(BatchSummary::from_results(&[]).all_succeeded());
    }
}
