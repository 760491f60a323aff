//! HTTP client initialization.
//!
//! This module builds the `reqwest::Client` a `Fetcher` uses for its lifetime.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::browser_headers;
use crate::error_handling::DownloadError;
use crate::fetch::ProxyConfig;

/// Initializes the HTTP client for page requests.
///
/// Creates a `reqwest::Client` configured with:
/// - The browser header set (User-Agent, Accept, Accept-Language, ...)
/// - The given timeout, covering the whole request including the body
/// - The proxy, applied to both `http` and `https` targets
/// - Redirect following (reqwest default, up to 10 hops)
///
/// # Arguments
///
/// * `proxy` - Proxy configuration resolved at `Fetcher` construction
/// * `timeout` - Total request timeout
///
/// # Errors
///
/// Returns `DownloadError::CapabilityMissing` for a SOCKS proxy when the `socks`
/// feature is disabled, `DownloadError::InvalidInput` if reqwest rejects the proxy
/// endpoint, or `DownloadError::ClientSetup` if the client cannot be built.
pub fn init_client(proxy: &ProxyConfig, timeout: Duration) -> Result<reqwest::Client, DownloadError> {
    build_client(proxy, timeout, ProxyConfig::socks_supported())
}

/// Builds the client, given whether this build can connect through SOCKS.
fn build_client(
    proxy: &ProxyConfig,
    timeout: Duration,
    socks_supported: bool,
) -> Result<reqwest::Client, DownloadError> {
    let mut builder = ClientBuilder::new()
        .default_headers(browser_headers())
        .timeout(timeout);

    if let Some(endpoint) = proxy.endpoint() {
        if proxy.is_socks() && !socks_supported {
            return Err(DownloadError::socks_unavailable());
        }
        let reqwest_proxy = reqwest::Proxy::all(endpoint).map_err(|e| {
            DownloadError::InvalidInput(format!("Invalid proxy URL '{}': {}", proxy, e))
        })?;
        builder = builder.proxy(reqwest_proxy);
    } else {
        // Ignore HTTP(S)_PROXY from the environment: only an explicit proxy is honored
        builder = builder.no_proxy();
    }

    builder.build().map_err(DownloadError::ClientSetup)
}
