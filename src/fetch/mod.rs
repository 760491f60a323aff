//! Page fetching.
//!
//! A `Fetcher` performs exactly one GET per call with a fixed browser header set,
//! optionally through a proxy, and classifies every failure into a
//! `DownloadError`. Retry policy is left to the caller.

mod proxy;

use std::time::Duration;

use log::{debug, warn};

use crate::config::REQUEST_TIMEOUT;
use crate::error_handling::{categorize_reqwest_error, DownloadError};
use crate::initialization::init_client;

pub use proxy::ProxyConfig;

/// HTTP page fetcher.
///
/// The proxy and timeout are fixed at construction. `reqwest::Client` is
/// `Send + Sync`, so one `Fetcher` can be shared across tasks.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    proxy: ProxyConfig,
    timeout: Duration,
}

impl Fetcher {
    /// Creates a fetcher with the default 15 second timeout.
    ///
    /// # Errors
    ///
    /// Returns `DownloadError::CapabilityMissing` if `proxy` is a SOCKS proxy and
    /// this build lacks SOCKS support. Nothing touches the network before this check.
    pub fn new(proxy: ProxyConfig) -> Result<Self, DownloadError> {
        Self::with_timeout(proxy, REQUEST_TIMEOUT)
    }

    /// Creates a fetcher with a custom timeout.
    pub fn with_timeout(proxy: ProxyConfig, timeout: Duration) -> Result<Self, DownloadError> {
        let client = init_client(&proxy, timeout)?;
        debug!(
            "Fetcher ready (proxy: {}, timeout: {}s)",
            proxy,
            timeout.as_secs_f64()
        );
        Ok(Self {
            client,
            proxy,
            timeout,
        })
    }

    /// Proxy this fetcher connects through.
    pub fn proxy(&self) -> &ProxyConfig {
        &self.proxy
    }

    /// Total per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetches `url` and returns the response body as text.
    ///
    /// The body is decoded as UTF-8; invalid sequences are replaced rather than
    /// rejected, since the extractor only looks for ASCII markers.
    ///
    /// # Errors
    ///
    /// - `HttpStatus` for any non-2xx final status (after redirects)
    /// - `Timeout` if the request or body read exceeds the timeout
    /// - `Network` for connection, DNS, and proxy failures
    pub async fn fetch(&self, url: &str) -> Result<String, DownloadError> {
        debug!("GET {} (proxy: {})", url, self.proxy);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("GET {} returned HTTP {}", url, status.as_u16());
            return Err(DownloadError::from_status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.classify(url, &e))?;
        debug!("GET {} returned HTTP {} ({} bytes)", url, status.as_u16(), body.len());

        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    fn classify(&self, url: &str, error: &reqwest::Error) -> DownloadError {
        let classified = categorize_reqwest_error(error, self.timeout);
        warn!(
            "GET {} failed [{}]: {}",
            url,
            classified.error_type(),
            classified
        );
        classified
    }
}
