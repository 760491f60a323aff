//! Error categorization.
//!
//! This module maps transport-level `reqwest` failures onto `DownloadError`.

use std::time::Duration;

use super::types::DownloadError;

/// Categorizes a `reqwest::Error` into a `DownloadError`.
///
/// Status errors are mapped by code, timeouts are kept distinct from other
/// network failures, and everything else (connect, DNS, proxy, body read) is a
/// network error carrying the full source chain.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
/// * `timeout` - The timeout the request ran under, for the error message
pub fn categorize_reqwest_error(error: &reqwest::Error, timeout: Duration) -> DownloadError {
    if let Some(status) = error.status() {
        return DownloadError::from_status(status.as_u16());
    }

    if error.is_timeout() {
        DownloadError::Timeout {
            seconds: timeout.as_secs_f64(),
        }
    } else {
        DownloadError::Network(error_chain(error))
    }
}

/// Renders an error and its sources as `outer: inner: root`.
fn error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

// Categorizing real reqwest::Error instances requires live requests; see the
// httptest-backed tests in src/fetch/tests.rs.
