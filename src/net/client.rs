//! Header-injecting HTTP client.

use std::collections::BTreeMap;
use std::sync::Arc;

use futures::StreamExt;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tokio_util::sync::CancellationToken;

use crate::error::{DownloadError, SetupError};
use crate::net::transport::{Transport, TransportResponse};

/// HTTP client that attaches a fixed set of headers to every request.
#[derive(Clone)]
pub struct HttpClient {
    transport: Arc<dyn Transport>,
    headers: HeaderMap,
}

impl HttpClient {
    pub fn new(transport: Arc<dyn Transport>, headers: HeaderMap) -> Self {
        Self { transport, headers }
    }

    /// Send a GET request carrying the configured headers.
    pub async fn get(&self, url: &str) -> Result<TransportResponse, DownloadError> {
        self.transport.get(url, &self.headers).await
    }

    /// Fetch a text document, typically the playlist.
    ///
    /// Anything other than HTTP 200 is an error.
    pub async fn fetch_text(
        &self,
        url: &str,
        token: &CancellationToken,
    ) -> Result<String, DownloadError> {
        let response = tokio::select! {
            biased;
            _ = token.cancelled() => return Err(DownloadError::Cancelled),
            response = self.get(url) => response?,
        };

        if response.status != 200 {
            return Err(DownloadError::UnexpectedStatus(response.status));
        }

        let mut body = response.body;
        let mut data = Vec::new();
        loop {
            let chunk = tokio::select! {
                biased;
                _ = token.cancelled() => return Err(DownloadError::Cancelled),
                chunk = body.next() => chunk,
            };
            match chunk {
                Some(Ok(bytes)) => data.extend_from_slice(&bytes),
                Some(Err(e)) => {
                    return Err(DownloadError::RequestFailed(format!(
                        "Failed to read response body: {}",
                        e
                    )))
                }
                None => break,
            }
        }

        Ok(String::from_utf8_lossy(&data).into_owned())
    }
}

/// Convert a name -> value map into request headers.
pub fn header_map(headers: &BTreeMap<String, String>) -> Result<HeaderMap, SetupError> {
    let mut map = HeaderMap::with_capacity(headers.len());

    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            SetupError::HeadersMalformed(format!("invalid header name '{}': {}", name, e))
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| {
            SetupError::HeadersMalformed(format!("invalid value for header '{}': {}", name, e))
        })?;
        map.insert(header_name, header_value);
    }

    Ok(map)
}
