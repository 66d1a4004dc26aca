//! Error types for the m3u8-downloader application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Run-aborting errors
    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Failed to fetch playlist: {0}")]
    Playlist(#[source] DownloadError),

    #[error("Failed to download {failed} out of {total} segments, not combining")]
    Incomplete { failed: usize, total: usize },

    #[error(transparent)]
    Combine(#[from] CombineError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Errors raised while turning playlist text into segments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Playlist is empty")]
    EmptyInput,

    #[error("No segments found in playlist")]
    NoSegmentsFound,

    #[error("Invalid URL prefix '{prefix}': {reason}")]
    InvalidUrlPrefix { prefix: String, reason: String },
}

/// Per-segment download failures.
///
/// These never abort a batch; they are recorded in the segment's result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DownloadError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Unexpected status code: {0}")]
    UnexpectedStatus(u16),

    #[error("Failed to create {}: {reason}", .path.display())]
    FileCreateFailed { path: PathBuf, reason: String },

    #[error("Failed to write {}: {reason}", .path.display())]
    WriteFailed { path: PathBuf, reason: String },

    #[error("Download cancelled")]
    Cancelled,

    #[error("Download task failed: {0}")]
    TaskFailed(String),
}

/// Errors caused by unusable input state on disk.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Directory {} does not exist", .0.display())]
    DirectoryMissing(PathBuf),

    #[error("Failed to read directory {}: {source}", .path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory {}: {source}", .path.display())]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read headers file {}: {source}", .path.display())]
    HeadersUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse headers: {0}")]
    HeadersMalformed(String),
}

/// Errors from the combine step. Downloaded segments stay on disk.
#[derive(Error, Debug)]
pub enum CombineError {
    #[error("Failed to write filelist {}: {source}", .path.display())]
    FilelistWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("FFmpeg not found at '{}'. Install ffmpeg or pass --ffmpeg.", .0.display())]
    BinaryNotFound(PathBuf),

    #[error("FFmpeg failed: {0}")]
    ProcessFailed(String),

    #[error("Failed to clean up {}: {source}", .path.display())]
    CleanupFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ABORT: i32 = 1;
    pub const SETUP_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const PARSE_ERROR: i32 = 4;
    pub const DOWNLOAD_ERROR: i32 = 5;
    pub const COMBINE_ERROR: i32 = 6;
}

impl Error {
    /// Exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                exit_codes::CONFIG_ERROR
            }
            Error::Setup(_) | Error::Io(_) | Error::Json(_) => exit_codes::SETUP_ERROR,
            Error::Parse(_) => exit_codes::PARSE_ERROR,
            Error::Playlist(DownloadError::Cancelled) => exit_codes::ABORT,
            Error::Playlist(_) | Error::Incomplete { .. } => exit_codes::DOWNLOAD_ERROR,
            Error::Combine(_) => exit_codes::COMBINE_ERROR,
        }
    }
}
