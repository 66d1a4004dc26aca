//! Configuration validation logic.

use url::Url;

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Upper bound on simultaneous downloads.
const MAX_CONCURRENT: usize = 1024;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_playlist_url(&config.playlist.url)?;
    validate_concurrent(config.download.concurrent)?;

    if config.combine.ffmpeg.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            field: "ffmpeg".to_string(),
            message: "Path to ffmpeg cannot be empty".to_string(),
        });
    }

    Ok(())
}

/// Validate the playlist URL.
pub fn validate_playlist_url(url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(Error::Config("Playlist URL is required".to_string()));
    }

    let parsed = Url::parse(url).map_err(|e| Error::ConfigValidation {
        field: "url".to_string(),
        message: format!("'{}' is not a valid URL: {}", url, e),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(Error::ConfigValidation {
            field: "url".to_string(),
            message: format!("Unsupported URL scheme '{}', expected http or https", scheme),
        }),
    }
}

/// Validate the concurrency limit.
pub fn validate_concurrent(concurrent: usize) -> Result<()> {
    if concurrent == 0 || concurrent > MAX_CONCURRENT {
        return Err(Error::ConfigValidation {
            field: "concurrent".to_string(),
            message: format!(
                "Must be between 1 and {} (got {})",
                MAX_CONCURRENT, concurrent
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_url() {
        assert!(validate_playlist_url("https://example.com/video/index.m3u8").is_ok());
        assert!(validate_playlist_url("http://127.0.0.1:8080/a.m3u8?token=1").is_ok());
    }

    #[test]
    fn test_invalid_url() {
        assert!(matches!(validate_playlist_url(""), Err(Error::Config(_))));
        assert!(validate_playlist_url("index.m3u8").is_err());
        assert!(validate_playlist_url("ftp://example.com/a.m3u8").is_err());
    }

    #[test]
    fn test_concurrent_bounds() {
        assert!(validate_concurrent(1).is_ok());
        assert!(validate_concurrent(10).is_ok());
        assert!(validate_concurrent(0).is_err());
        assert!(validate_concurrent(MAX_CONCURRENT + 1).is_err());
    }

    #[test]
    fn test_validate_config() {
        let mut config = Config::default();
        config.playlist.url = "https://example.com/a.m3u8".to_string();
        assert!(validate_config(&config).is_ok());

        config.download.concurrent = 0;
        assert!(validate_config(&config).is_err());
    }
}
