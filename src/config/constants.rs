//! Configuration constants.
//!
//! This module defines the constants used throughout the application: the fixed
//! request timeout, the desktop browser identity, and the accepted post URL shape.

use std::time::Duration;

/// Per-request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Per-request timeout applied by every `Fetcher` unless overridden.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(REQUEST_TIMEOUT_SECS);

/// User-Agent sent with every request.
///
/// Mimics a desktop Chrome on Windows. Instagram serves the full page (with the
/// embedded JSON blobs and Open Graph tags) to browser-looking clients only.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Accepted post URL prefix.
///
/// Only the prefix is anchored: trailing query strings and fragments are tolerated.
/// No normalization is performed before matching.
pub const POST_URL_PATTERN: &str = r"^https?://(www\.)?instagram\.com/(p|reel|tv)/([a-zA-Z0-9_-]+)/?";

/// Example URL shown in validation error messages.
pub const EXAMPLE_POST_URL: &str = "https://www.instagram.com/p/ABC123/";

/// Environment variable consulted for the proxy when `--proxy` is not given.
pub const PROXY_ENV_VAR: &str = "INSTA_MEDIA_PROXY";

// HTTP status codes with dedicated error messages
/// Forbidden: blocked or geofenced
pub const HTTP_STATUS_FORBIDDEN: u16 = 403;
/// Not Found: post missing or deleted
pub const HTTP_STATUS_NOT_FOUND: u16 = 404;
/// Too Many Requests: rate limited
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;
