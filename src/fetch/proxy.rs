//! Proxy configuration.
//!
//! A proxy string is classified once, when the `Fetcher` is built, into a tagged
//! variant. The client never re-inspects the scheme per request.

use std::fmt;

use url::Url;

use crate::error_handling::DownloadError;

/// Proxy schemes routed through the HTTP CONNECT/forwarding path.
const HTTP_PROXY_SCHEMES: &[&str] = &["http", "https"];

/// Proxy schemes that need reqwest's SOCKS connector.
const SOCKS_PROXY_SCHEMES: &[&str] = &["socks5", "socks5h", "socks4", "socks4a"];

/// Proxy endpoint held by a `Fetcher` for its lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProxyConfig {
    /// Direct connection.
    #[default]
    None,
    /// HTTP or HTTPS proxy, used for both `http` and `https` targets.
    Http(String),
    /// SOCKS proxy. Requires the `socks` feature.
    Socks(String),
}

impl ProxyConfig {
    /// Classifies a proxy endpoint string.
    ///
    /// Accepts `http://`, `https://`, `socks5://`, `socks5h://`, `socks4://` and
    /// `socks4a://` endpoints, with optional `user:pass@` credentials.
    ///
    /// # Errors
    ///
    /// Returns `DownloadError::InvalidInput` if the string is not a URL, has no
    /// host, or uses another scheme.
    pub fn parse(raw: &str) -> Result<Self, DownloadError> {
        let raw = raw.trim();
        let url = Url::parse(raw).map_err(|e| {
            DownloadError::InvalidInput(format!("Invalid proxy URL '{}': {}", redact(raw), e))
        })?;

        if url.host_str().map_or(true, str::is_empty) {
            return Err(DownloadError::InvalidInput(format!(
                "Invalid proxy URL '{}': missing host",
                redact(raw)
            )));
        }

        let scheme = url.scheme();
        if HTTP_PROXY_SCHEMES.contains(&scheme) {
            Ok(ProxyConfig::Http(raw.to_string()))
        } else if SOCKS_PROXY_SCHEMES.contains(&scheme) {
            Ok(ProxyConfig::Socks(raw.to_string()))
        } else {
            Err(DownloadError::InvalidInput(format!(
                "Unsupported proxy scheme '{}' (expected http, https, or socks5)",
                scheme
            )))
        }
    }

    /// Like `parse`, but `None` or a blank string means a direct connection.
    pub fn from_option(raw: Option<&str>) -> Result<Self, DownloadError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(ProxyConfig::None),
            Some(raw) => Self::parse(raw),
        }
    }

    /// The endpoint URL, if a proxy is configured.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            ProxyConfig::None => None,
            ProxyConfig::Http(endpoint) | ProxyConfig::Socks(endpoint) => Some(endpoint),
        }
    }

    /// Returns true for SOCKS proxies.
    pub fn is_socks(&self) -> bool {
        matches!(self, ProxyConfig::Socks(_))
    }

    /// Whether this build can connect through SOCKS proxies.
    pub const fn socks_supported() -> bool {
        cfg!(feature = "socks")
    }
}

/// Displays the endpoint with any password masked, for logs and error messages.
impl fmt::Display for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.endpoint() {
            None => f.write_str("none"),
            Some(endpoint) => f.write_str(&redact(endpoint)),
        }
    }
}

fn redact(endpoint: &str) -> String {
    match Url::parse(endpoint) {
        Ok(mut url) if url.password().is_some() => {
            // set_password only fails for cannot-be-a-base URLs, which have no password
            let _ = url.set_password(Some("****"));
            url.to_string()
        }
        Ok(_) => endpoint.to_string(),
        // Unparseable input may still carry credentials before the last '@'
        Err(_) => match endpoint.split_once("://") {
            Some((scheme, rest)) => match rest.rsplit_once('@') {
                Some((_, host)) => format!("{}://****@{}", scheme, host),
                None => endpoint.to_string(),
            },
            None => endpoint.to_string(),
        },
    }
}
