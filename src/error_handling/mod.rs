//! Error handling.
//!
//! This module provides:
//! - Error type definitions (`DownloadError`, `InitializationError`)
//! - Categorization of transport errors into `DownloadError`
//! - `ErrorType` labels for log context

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{DownloadError, ErrorType, InitializationError};
