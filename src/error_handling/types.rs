//! Error type definitions.
//!
//! This module defines the error types returned by the library and the
//! categorization enum used when logging failures.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::{
    EXAMPLE_POST_URL, HTTP_STATUS_FORBIDDEN, HTTP_STATUS_NOT_FOUND, HTTP_STATUS_TOO_MANY_REQUESTS,
};

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors returned by `MediaDownloader` and `Fetcher`.
///
/// Strategy-level parse failures inside the extractor never surface here; they only
/// make the extractor move on to the next strategy.
#[derive(Error, Debug)]
pub enum DownloadError {
    /// The post URL (or proxy string) failed validation. No request was made.
    #[error("{0}")]
    InvalidInput(String),

    /// A SOCKS proxy was requested but this build has no SOCKS support.
    #[error("{0}")]
    CapabilityMissing(String),

    /// The HTTP client could not be built.
    #[error("HTTP client initialization error: {0}")]
    ClientSetup(#[source] ReqwestError),

    /// Connection, DNS, or proxy failure.
    #[error("Network error: {0}")]
    Network(String),

    /// The request exceeded the timeout.
    #[error("Request timed out after {seconds} seconds. Instagram may be slow or the proxy unreachable.")]
    Timeout {
        /// Timeout that was exceeded, in seconds (fractional for sub-second timeouts)
        seconds: f64,
    },

    /// The server answered with a non-2xx status.
    #[error("{}", http_status_message(.code))]
    HttpStatus {
        /// HTTP status code
        code: u16,
    },

    /// The page was fetched but no strategy found any media.
    #[error("Could not extract media from this post. It may be private, deleted, or Instagram has updated their HTML structure.")]
    ExtractionFailed,
}

impl DownloadError {
    /// Error for a post URL that does not match the accepted pattern.
    pub fn invalid_post_url() -> Self {
        DownloadError::InvalidInput(format!(
            "Invalid Instagram URL. Please provide a valid post URL (e.g., {})",
            EXAMPLE_POST_URL
        ))
    }

    /// Error for a SOCKS proxy in a build without the `socks` feature.
    pub fn socks_unavailable() -> Self {
        DownloadError::CapabilityMissing(
            "SOCKS proxy support is not available in this build. Rebuild with the `socks` feature or use an HTTP proxy.".to_string(),
        )
    }

    /// Error for a non-2xx response status.
    pub fn from_status(code: u16) -> Self {
        DownloadError::HttpStatus { code }
    }

    /// Returns the HTTP status code for `HttpStatus` errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            DownloadError::HttpStatus { code } => Some(*code),
            _ => None,
        }
    }

    /// Returns the category of this error.
    pub fn error_type(&self) -> ErrorType {
        match self {
            DownloadError::InvalidInput(_) => ErrorType::InvalidInput,
            DownloadError::CapabilityMissing(_) => ErrorType::CapabilityMissing,
            DownloadError::ClientSetup(_) => ErrorType::ClientSetup,
            DownloadError::Network(_) => ErrorType::Network,
            DownloadError::Timeout { .. } => ErrorType::Timeout,
            DownloadError::HttpStatus { code } => match *code {
                HTTP_STATUS_NOT_FOUND => ErrorType::HttpNotFound,
                HTTP_STATUS_FORBIDDEN => ErrorType::HttpForbidden,
                HTTP_STATUS_TOO_MANY_REQUESTS => ErrorType::HttpTooManyRequests,
                _ => ErrorType::HttpOther,
            },
            DownloadError::ExtractionFailed => ErrorType::ExtractionFailed,
        }
    }
}

fn http_status_message(code: &u16) -> String {
    match *code {
        HTTP_STATUS_NOT_FOUND => {
            "Post not found. The URL may be incorrect or the post has been deleted.".to_string()
        }
        HTTP_STATUS_FORBIDDEN => {
            "Access denied by Instagram (HTTP 403). The post may be blocked in your region or your IP may be flagged.".to_string()
        }
        HTTP_STATUS_TOO_MANY_REQUESTS => {
            "Rate limited by Instagram (HTTP 429). Please try again later or rotate your proxy.".to_string()
        }
        other => format!("HTTP error: {}", other),
    }
}

/// Categories of failure, used for log context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(missing_docs)] // Labels are given by as_str()
pub enum ErrorType {
    InvalidInput,
    CapabilityMissing,
    ClientSetup,
    Network,
    Timeout,
    HttpNotFound,        // 404 Not Found
    HttpForbidden,       // 403 Forbidden - blocked or geofenced
    HttpTooManyRequests, // 429 Too Many Requests
    HttpOther,
    ExtractionFailed,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable label for the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::InvalidInput => "Invalid input",
            ErrorType::CapabilityMissing => "Missing capability",
            ErrorType::ClientSetup => "HTTP client setup error",
            ErrorType::Network => "Network error",
            ErrorType::Timeout => "Timeout",
            ErrorType::HttpNotFound => "Not Found (404)",
            ErrorType::HttpForbidden => "Forbidden (403)",
            ErrorType::HttpTooManyRequests => "Too many requests (429)",
            ErrorType::HttpOther => "HTTP error",
            ErrorType::ExtractionFailed => "Extraction failed",
        }
    }

    /// Returns true for failures that happened on the network path.
    pub fn is_network_related(&self) -> bool {
        matches!(
            self,
            ErrorType::Network
                | ErrorType::Timeout
                | ErrorType::HttpNotFound
                | ErrorType::HttpForbidden
                | ErrorType::HttpTooManyRequests
                | ErrorType::HttpOther
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_as_str_unique() {
        let mut seen = std::collections::HashSet::new();
        for error_type in ErrorType::iter() {
            assert!(
                seen.insert(error_type.as_str()),
                "Duplicate label for {:?}",
                error_type
            );
        }
    }

    #[test]
    fn test_status_messages_are_distinct() {
        let not_found = DownloadError::from_status(404).to_string();
        let forbidden = DownloadError::from_status(403).to_string();
        let rate_limited = DownloadError::from_status(429).to_string();
        assert_ne!(not_found, forbidden);
        assert_ne!(not_found, rate_limited);
        assert_ne!(forbidden, rate_limited);
        assert!(not_found.contains("not found"));
        assert!(forbidden.contains("Access denied"));
        assert!(rate_limited.contains("Rate limited"));
    }

    #[test]
    fn test_generic_status_message() {
        let err = DownloadError::from_status(502);
        assert_eq!(err.to_string(), "HTTP error: 502");
        assert_eq!(err.status_code(), Some(502));
        assert_eq!(err.error_type(), ErrorType::HttpOther);
    }

    #[test]
    fn test_extraction_failed_is_not_network_related() {
        assert!(!DownloadError::ExtractionFailed
            .error_type()
            .is_network_related());
        assert!(DownloadError::Timeout { seconds: 15.0 }
            .error_type()
            .is_network_related());
        assert!(DownloadError::from_status(429)
            .error_type()
            .is_network_related());
    }

    #[test]
    fn test_sub_second_timeout_message() {
        let err = DownloadError::Timeout { seconds: 0.25 };
        assert!(err.to_string().starts_with("Request timed out after 0.25 seconds"));
    }

    #[test]
    fn test_socks_unavailable_error() {
        let err = DownloadError::socks_unavailable();
        assert_eq!(err.error_type(), ErrorType::CapabilityMissing);
        assert!(!err.error_type().is_network_related());
        assert!(err.to_string().contains("`socks` feature"));
    }

    #[test]
    fn test_invalid_post_url_message() {
        let err = DownloadError::invalid_post_url();
        assert!(err.to_string().starts_with("Invalid Instagram URL"));
        assert_eq!(err.error_type(), ErrorType::InvalidInput);
        assert_eq!(err.status_code(), None);
    }
}
