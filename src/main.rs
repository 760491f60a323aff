//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `insta_media` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::process;

use insta_media::initialization::init_logger_with;
use insta_media::{render_error, render_result, Config, MediaDownloader, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), e.g. INSTA_MEDIA_PROXY
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let Some(url) = config.url.as_deref() else {
        // No URL: show usage and fail
        Config::command()
            .print_help()
            .context("Failed to print usage")?;
        process::exit(1);
    };

    let downloader = match MediaDownloader::from_proxy_str(config.proxy.as_deref()) {
        Ok(downloader) => downloader,
        Err(e) => {
            eprintln!("{}", render_error(&e.to_string()));
            process::exit(1);
        }
    };

    if config.format == OutputFormat::Plain {
        println!("Fetching media from: {}", url);
    }
    match downloader.download(url).await {
        Ok(media) => {
            let rendered = render_result(&media, &config.format);
            println!("{}", rendered.trim_end());
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", render_error(&e.to_string()));
            process::exit(1);
        }
    }
}
