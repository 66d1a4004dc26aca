//! In-memory transport for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use reqwest::header::HeaderMap;
use tokio::sync::Notify;

use crate::error::DownloadError;
use crate::net::transport::{Transport, TransportResponse};

/// What the fake answers for a URL.
#[derive(Debug, Clone)]
pub enum Reply {
    /// HTTP 200 with this body.
    Body(Vec<u8>),
    /// Empty response with this status.
    Status(u16),
    /// Connection-level failure.
    Fail(String),
    /// HTTP 200 whose body breaks after the first chunk.
    BrokenBody,
    /// Signal the notify once the request is in flight, then never answer.
    Hold(Arc<Notify>),
}

/// Fake transport that counts concurrent calls.
///
/// Unrouted URLs answer 200 with the URL itself as body.
#[derive(Default)]
pub struct FakeTransport {
    routes: HashMap<String, (Duration, Reply)>,
    default_delay: Duration,
    active: AtomicUsize,
    peak: AtomicUsize,
    calls: AtomicUsize,
    requests: Mutex<Vec<(String, HeaderMap)>>,
}

struct ActiveGuard<'a>(&'a AtomicUsize);

impl Drop for ActiveGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.default_delay = delay;
        self
    }

    pub fn route(mut self, url: &str, delay: Duration, reply: Reply) -> Self {
        self.routes.insert(url.to_string(), (delay, reply));
        self
    }

    /// Highest number of simultaneous calls observed.
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<(String, HeaderMap)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(&self, url: &str, headers: &HeaderMap) -> Result<TransportResponse, DownloadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), headers.clone()));

        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        let _guard = ActiveGuard(&self.active);
        self.peak.fetch_max(now, Ordering::SeqCst);

        let (delay, reply) = self
            .routes
            .get(url)
            .cloned()
            .unwrap_or_else(|| (self.default_delay, Reply::Body(url.as_bytes().to_vec())));

        tokio::time::sleep(delay).await;

        let ok = |chunks: Vec<std::io::Result<Bytes>>| TransportResponse {
            status: 200,
            body: futures::stream::iter(chunks).boxed(),
        };

        match reply {
            Reply::Body(body) => Ok(ok(vec![Ok(Bytes::from(body))])),
            Reply::Status(status) => Ok(TransportResponse {
                status,
                body: futures::stream::empty().boxed(),
            }),
            Reply::Fail(reason) => Err(DownloadError::RequestFailed(reason)),
            Reply::Hold(started) => {
                started.notify_one();
                std::future::pending().await
            }
            Reply::BrokenBody => Ok(ok(vec![
                Ok(Bytes::from_static(b"partial")),
                Err(std::io::Error::new(
                    std::io::ErrorKind::ConnectionReset,
                    "connection reset",
                )),
            ])),
        }
    }
}
