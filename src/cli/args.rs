//! Command-line argument definitions using clap.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::Config;

/// HLS playlist downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "m3u8-downloader",
    version,
    about = "Download and combine M3U8 segments",
    long_about = "Download every segment referenced by an HLS (M3U8) playlist.\n\n\
                  Segments are fetched concurrently and can be combined into a single\n\
                  file with ffmpeg. A partial download can be completed with --fix."
)]
pub struct Args {
    /// Playlist URL.
    pub url: String,

    /// Directory to store segments.
    #[arg(long)]
    pub segments_dir: Option<OsString>,

    /// Force specific extension for segments (e.g., .ts).
    #[arg(long)]
    pub force_ext: Option<String>,

    /// Force URL prefix for segments.
    #[arg(long)]
    pub force_url_prefix: Option<String>,

    /// Path to cache the parsed playlist.
    #[arg(long)]
    pub cache: Option<OsString>,

    /// Path for the ffmpeg filelist.
    #[arg(long)]
    pub filelist: Option<OsString>,

    /// Combine segments into OUTPUT after download, only if all succeeded.
    #[arg(long, value_name = "OUTPUT")]
    pub combine: Option<OsString>,

    /// Combine segments into OUTPUT even if some failed to download.
    #[arg(long, value_name = "OUTPUT")]
    pub force_combine: Option<OsString>,

    /// Remove the filelist and segments directory after combining.
    #[arg(long)]
    pub cleanup: bool,

    /// Fix missing segments in the specified directory.
    #[arg(long, value_name = "DIR")]
    pub fix: Option<OsString>,

    /// Path to JSON file containing request headers.
    #[arg(long)]
    pub headers: Option<OsString>,

    /// Skip the first N segments.
    #[arg(long)]
    pub skip: Option<usize>,

    /// Limit the number of segments to download (0 for all).
    #[arg(long)]
    pub limit: Option<usize>,

    /// Number of concurrent downloads.
    #[arg(long)]
    pub concurrent: Option<usize>,

    /// Path to ffmpeg executable.
    #[arg(long, env = "FFMPEG")]
    pub ffmpeg: Option<OsString>,

    /// Path to an optional TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Hide the progress bar.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable verbose output.
    #[arg(long, short)]
    pub verbose: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        config.playlist.url = self.url;

        // Playlist options
        if let Some(prefix) = self.force_url_prefix {
            config.playlist.force_url_prefix = prefix;
        }

        if let Some(ext) = self.force_ext {
            config.playlist.force_ext = ext;
        }

        if let Some(skip) = self.skip {
            config.playlist.skip = skip;
        }

        if let Some(limit) = self.limit {
            config.playlist.limit = limit;
        }

        if let Some(cache) = non_empty(self.cache) {
            config.playlist.cache = Some(cache);
        }

        // Download options
        if let Some(dir) = non_empty(self.segments_dir) {
            config.download.segments_dir = dir;
        }

        if let Some(concurrent) = self.concurrent {
            config.download.concurrent = concurrent;
        }

        if let Some(headers) = non_empty(self.headers) {
            config.download.headers = Some(headers);
        }

        if let Some(fix) = non_empty(self.fix) {
            config.download.fix = Some(fix);
        }

        // Combine options
        if let Some(output) = non_empty(self.combine) {
            config.combine.output = Some(output);
        }

        if let Some(output) = non_empty(self.force_combine) {
            config.combine.force_output = Some(output);
        }

        if let Some(filelist) = non_empty(self.filelist) {
            config.combine.filelist = filelist;
        }

        if let Some(ffmpeg) = non_empty(self.ffmpeg) {
            config.combine.ffmpeg = ffmpeg;
        }

        // Boolean flags (only override if set to non-default)
        if self.cleanup {
            config.combine.cleanup = true;
        }

        if self.quiet {
            config.download.show_progress = false;
        }

        if self.verbose {
            config.verbose = true;
        }
    }
}

/// An explicitly empty path argument means "not set".
fn non_empty(path: Option<OsString>) -> Option<PathBuf> {
    path.filter(|p| !p.is_empty()).map(PathBuf::from)
}
