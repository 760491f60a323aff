//! Download facade.
//!
//! Validate → fetch → extract, one request per call.

use log::{debug, info, warn};

use crate::app::{extract_shortcode, is_valid_post_url};
use crate::error_handling::DownloadError;
use crate::fetch::{Fetcher, ProxyConfig};
use crate::models::MediaResult;
use crate::parse::extract_media;

/// Extracts media from public post URLs.
///
/// Owns a single `Fetcher`; each call performs one request and keeps no state
/// between calls.
#[derive(Debug, Clone)]
pub struct MediaDownloader {
    fetcher: Fetcher,
}

impl MediaDownloader {
    /// Creates a downloader using the given proxy.
    ///
    /// # Errors
    ///
    /// Returns `DownloadError::CapabilityMissing` for a SOCKS proxy when this
    /// build has no SOCKS support.
    pub fn new(proxy: ProxyConfig) -> Result<Self, DownloadError> {
        Ok(Self::with_fetcher(Fetcher::new(proxy)?))
    }

    /// Creates a downloader from an optional proxy string (`--proxy`).
    pub fn from_proxy_str(proxy: Option<&str>) -> Result<Self, DownloadError> {
        Self::new(ProxyConfig::from_option(proxy)?)
    }

    /// Creates a downloader around an existing fetcher.
    pub fn with_fetcher(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// The underlying fetcher.
    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    /// Extracts the media of the post at `url`.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `url` is not a post URL (checked before any request)
    /// - `HttpStatus`, `Timeout`, or `Network` if the page cannot be fetched
    /// - `ExtractionFailed` if the page was fetched but holds no media
    pub async fn download(&self, url: &str) -> Result<MediaResult, DownloadError> {
        if !is_valid_post_url(url) {
            warn!("Rejected URL that is not a post URL: {}", url);
            return Err(DownloadError::invalid_post_url());
        }
        let shortcode = extract_shortcode(url).unwrap_or_default();
        info!("Fetching post {}", shortcode);

        let html = self.fetcher.fetch(url).await?;
        debug!("Post {} page is {} bytes", shortcode, html.len());

        match extract_media(&html) {
            Some(media) => {
                info!("Post {}: {} via {}", shortcode, media.kind, media.source);
                Ok(media)
            }
            None => {
                warn!("Post {}: no media found in page", shortcode);
                Err(DownloadError::ExtractionFailed)
            }
        }
    }

    /// Same as `download`; kept for callers that only want a preview.
    pub async fn get_media_info(&self, url: &str) -> Result<MediaResult, DownloadError> {
        self.download(url).await
    }
}
