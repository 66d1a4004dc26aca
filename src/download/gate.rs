//! Admission gate bounding simultaneous downloads.

use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio_util::sync::CancellationToken;

use crate::error::DownloadError;

/// Counting gate: at most `capacity` holders at a time.
///
/// Dropping the returned permit frees the slot.
#[derive(Debug, Clone)]
pub struct AdmissionGate {
    semaphore: Arc<Semaphore>,
    capacity: usize,
}

impl AdmissionGate {
    /// Create a gate with `capacity` slots. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, Semaphore::MAX_PERMITS);
        Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots currently free.
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }

    /// Wait for a free slot.
    pub async fn acquire(&self) -> Result<OwnedSemaphorePermit, DownloadError> {
        self.semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| DownloadError::Cancelled)
    }

    /// Wait for a free slot unless `token` is cancelled first.
    ///
    /// Cancellation wins when both are ready.
    pub async fn acquire_or_cancel(
        &self,
        token: &CancellationToken,
    ) -> Result<OwnedSemaphorePermit, DownloadError> {
        tokio::select! {
            biased;
            _ = token.cancelled() => Err(DownloadError::Cancelled),
            permit = self.acquire() => permit,
        }
    }
}
