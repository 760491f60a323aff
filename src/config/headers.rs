//! HTTP request header constants.
//!
//! This module defines the fixed header set sent with every page request. Together
//! with `DEFAULT_USER_AGENT` they make the request look like a desktop browser
//! navigation.

use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CONNECTION,
    UPGRADE_INSECURE_REQUESTS, USER_AGENT,
};

use super::constants::DEFAULT_USER_AGENT;

/// Accept header value
pub const ACCEPT_VALUE: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
/// Accept-Language header value
pub const ACCEPT_LANGUAGE_VALUE: &str = "en-US,en;q=0.9";
/// Accept-Encoding header value (all three are decoded by reqwest)
pub const ACCEPT_ENCODING_VALUE: &str = "gzip, deflate, br";
/// Connection header value
pub const CONNECTION_VALUE: &str = "keep-alive";
/// Upgrade-Insecure-Requests header value
pub const UPGRADE_INSECURE_REQUESTS_VALUE: &str = "1";

/// Builds the browser header set sent with every request.
///
/// All values are static ASCII, so conversion cannot fail.
pub fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE));
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static(ACCEPT_ENCODING_VALUE));
    headers.insert(CONNECTION, HeaderValue::from_static(CONNECTION_VALUE));
    headers.insert(
        UPGRADE_INSECURE_REQUESTS,
        HeaderValue::from_static(UPGRADE_INSECURE_REQUESTS_VALUE),
    );
    headers
}
