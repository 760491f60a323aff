//! insta_media library: media URL extraction for public Instagram posts
//!
//! This library fetches a post page (`/p/`, `/reel/` or `/tv/`) and extracts a
//! direct image or video URL (plus thumbnail for videos) from the data embedded in
//! the page. It returns URLs, not media bytes.
//!
//! # Example
//!
//! ```no_run
//! use insta_media::{MediaDownloader, ProxyConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = MediaDownloader::new(ProxyConfig::None)?;
//! let media = downloader.download("https://www.instagram.com/p/ABC123/").await?;
//! println!("{} {} (via {})", media.kind, media.url, media.source);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod config;
mod downloader;
mod error_handling;
mod fetch;
pub mod initialization;
mod models;
mod parse;

// Re-export public API
pub use app::{extract_shortcode, is_valid_post_url, render_error, render_result};
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use downloader::MediaDownloader;
pub use error_handling::{DownloadError, ErrorType, InitializationError};
pub use fetch::{Fetcher, ProxyConfig};
pub use models::{ExtractionSource, MediaKind, MediaResult};
pub use parse::extract_media;
