//! Configuration structures and loading logic.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::playlist::ParseOptions;

/// Main configuration structure.
///
/// Every field has a default, so a config file only needs the values it
/// wants to change. CLI arguments are merged on top.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub playlist: PlaylistConfig,

    #[serde(default)]
    pub download: DownloadConfig,

    #[serde(default)]
    pub combine: CombineConfig,

    /// Enable debug-level logging.
    #[serde(default)]
    pub verbose: bool,
}

/// Playlist source and parsing policies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistConfig {
    /// Playlist URL.
    #[serde(default)]
    pub url: String,

    /// Base URL joined with every segment reference.
    #[serde(default)]
    pub force_url_prefix: String,

    /// Extension used for every segment file instead of the detected one.
    #[serde(default)]
    pub force_ext: String,

    /// Number of leading segments to skip.
    #[serde(default)]
    pub skip: usize,

    /// Maximum number of segments, 0 for all.
    #[serde(default)]
    pub limit: usize,

    /// JSON file used to persist and reuse the parsed segment list.
    #[serde(default)]
    pub cache: Option<PathBuf>,
}

/// Segment download options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadConfig {
    /// Directory segments are written to.
    #[serde(default = "default_segments_dir")]
    pub segments_dir: PathBuf,

    /// Maximum simultaneous downloads.
    #[serde(default = "default_concurrent")]
    pub concurrent: usize,

    /// JSON file of headers attached to every request.
    #[serde(default)]
    pub headers: Option<PathBuf>,

    /// Directory holding a partial download to complete.
    #[serde(default)]
    pub fix: Option<PathBuf>,

    /// Whether to show the segment progress bar.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

/// Combine step options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombineConfig {
    /// Output file, written only when every segment succeeded.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Output file, written even when some segments failed.
    #[serde(default)]
    pub force_output: Option<PathBuf>,

    /// Scratch file listing segments for ffmpeg.
    #[serde(default = "default_filelist")]
    pub filelist: PathBuf,

    /// Remove the filelist and segments directory after combining.
    #[serde(default)]
    pub cleanup: bool,

    /// Path to the ffmpeg executable.
    #[serde(default = "default_ffmpeg")]
    pub ffmpeg: PathBuf,
}

/// Where to combine and whether partial downloads may be combined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineTarget {
    pub output: PathBuf,
    pub require_complete: bool,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            segments_dir: default_segments_dir(),
            concurrent: default_concurrent(),
            headers: None,
            fix: None,
            show_progress: true,
        }
    }
}

impl Default for CombineConfig {
    fn default() -> Self {
        Self {
            output: None,
            force_output: None,
            filelist: default_filelist(),
            cleanup: false,
            ffmpeg: default_ffmpeg(),
        }
    }
}

fn default_segments_dir() -> PathBuf {
    PathBuf::from("segments")
}

fn default_concurrent() -> usize {
    10
}

fn default_filelist() -> PathBuf {
    PathBuf::from("filelist.txt")
}

fn default_ffmpeg() -> PathBuf {
    PathBuf::from("ffmpeg")
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Parser policies derived from the playlist options.
    ///
    /// A forced extension without a leading dot gets one.
    pub fn parse_options(&self) -> ParseOptions {
        let force_ext = match self.playlist.force_ext.as_str() {
            "" => String::new(),
            ext if ext.starts_with('.') => ext.to_string(),
            ext => format!(".{}", ext),
        };

        ParseOptions {
            force_url_prefix: self.playlist.force_url_prefix.clone(),
            force_ext,
            skip: self.playlist.skip,
            limit: self.playlist.limit,
        }
    }

    /// The requested combine step, if any. A forced output wins.
    pub fn combine_target(&self) -> Option<CombineTarget> {
        if let Some(output) = &self.combine.force_output {
            return Some(CombineTarget {
                output: output.clone(),
                require_complete: false,
            });
        }

        self.combine.output.as_ref().map(|output| CombineTarget {
            output: output.clone(),
            require_complete: true,
        })
    }

    /// Directory segments are written to, honoring fix mode.
    pub fn segments_dir(&self) -> &Path {
        self.download
            .fix
            .as_deref()
            .unwrap_or(&self.download.segments_dir)
    }
}
