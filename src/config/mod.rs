//! Configuration module for the m3u8-downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Loading request headers from JSON files
//! - Configuration validation

pub mod headers;
pub mod loader;
pub mod validation;

pub use headers::load_headers;
pub use loader::{CombineConfig, CombineTarget, Config, DownloadConfig, PlaylistConfig};
pub use validation::validate_config;
