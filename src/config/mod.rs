//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeout, user agent, URL pattern)
//! - The browser-like request header table
//! - CLI option types and parsing

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, LogFormat, LogLevel, OutputFormat};
