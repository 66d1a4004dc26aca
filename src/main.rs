//! M3U8 Downloader - CLI entry point.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use reqwest::header::HeaderMap;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{fmt, EnvFilter};

use m3u8_downloader::{
    cli::Args,
    config::{load_headers, validate_config, Config},
    download::Coordinator,
    error::{exit_codes, Error, Result},
    net::{header_map, HttpClient, ReqwestTransport},
    output::{print_config_summary, print_error, print_warning},
};

#[tokio::main]
async fn main() -> ExitCode {
    let token = CancellationToken::new();

    match run(token.clone()).await {
        Ok(()) if token.is_cancelled() => ExitCode::from(exit_codes::ABORT as u8),
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            if token.is_cancelled() {
                ExitCode::from(exit_codes::ABORT as u8)
            } else {
                ExitCode::from(e.exit_code() as u8)
            }
        }
    }
}

async fn run(token: CancellationToken) -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Set up logging
    let log_level = if config.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Validate configuration
    validate_config(&config)?;

    print_config_summary(
        &config.playlist.url,
        &config.segments_dir().display().to_string(),
        config.download.concurrent,
        config.download.fix.is_some(),
    );

    // Build the HTTP client
    let headers = match &config.download.headers {
        Some(path) => header_map(&load_headers(path)?)?,
        None => HeaderMap::new(),
    };
    let transport = ReqwestTransport::new().map_err(Error::Playlist)?;
    let client = HttpClient::new(Arc::new(transport), headers);

    // Cancel on Ctrl-C
    let signal_token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            print_warning("Interrupted, stopping downloads...");
            signal_token.cancel();
        }
    });

    Coordinator::new(config, client).run(&token).await?;

    Ok(())
}
