//! reqwest-backed transport.

use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use reqwest::header::HeaderMap;
use reqwest::Client;

use crate::error::DownloadError;
use crate::net::transport::{Transport, TransportResponse};

/// Default user agent sent with every request unless the headers file sets one.
const USER_AGENT: &str = concat!("m3u8-downloader/", env!("CARGO_PKG_VERSION"));

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport around a fresh reqwest client.
    pub fn new() -> Result<Self, DownloadError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                DownloadError::RequestFailed(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, headers: &HeaderMap) -> Result<TransportResponse, DownloadError> {
        let response = self
            .client
            .get(url)
            .headers(headers.clone())
            .send()
            .await
            .map_err(|e| DownloadError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes_stream()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
            .boxed();

        Ok(TransportResponse { status, body })
    }
}
