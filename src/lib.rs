//! M3U8 Downloader - fetch every segment of an HLS playlist.
//!
//! This library downloads the media segments referenced by an M3U8 playlist
//! and can hand them to ffmpeg to produce a single file.
//!
//! # Features
//!
//! - Line-based playlist parsing with skip/limit windows
//! - Optional URL prefix and extension overrides
//! - Playlist caching as JSON
//! - Bounded-concurrency downloads with cooperative cancellation
//! - Fix mode for completing a partial download
//! - Concatenation through ffmpeg
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use m3u8_downloader::{Config, Coordinator, HttpClient, ReqwestTransport};
//! use reqwest::header::HeaderMap;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.playlist.url = "https://example.com/video/index.m3u8".into();
//!
//!     let client = HttpClient::new(Arc::new(ReqwestTransport::new()?), HeaderMap::new());
//!     let outcome = Coordinator::new(config, client)
//!         .run(&CancellationToken::new())
//!         .await?;
//!     println!("{:?}", outcome);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod combine;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod net;
pub mod output;
pub mod playlist;

// Re-exports for convenience
pub use config::Config;
pub use download::{BatchSummary, Coordinator, Downloader, RunOutcome};
pub use error::{Error, Result};
pub use net::{HttpClient, ReqwestTransport, Transport};
pub use playlist::{parse_playlist, ParseOptions, Segment};
