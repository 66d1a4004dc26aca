//! Transport abstraction for segment and playlist requests.

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;
use reqwest::header::HeaderMap;

use crate::error::DownloadError;

/// Response body delivered chunk by chunk.
pub type ByteStream = BoxStream<'static, std::io::Result<Bytes>>;

/// Status and streaming body of a GET request.
pub struct TransportResponse {
    pub status: u16,
    pub body: ByteStream,
}

impl std::fmt::Debug for TransportResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Performs raw HTTP GET requests.
///
/// Implementations only fail with `DownloadError::RequestFailed`; status
/// handling is left to the caller.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn get(&self, url: &str, headers: &HeaderMap) -> Result<TransportResponse, DownloadError>;
}
