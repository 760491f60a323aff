//! Main application modules.
//!
//! This module provides post URL validation and the result printing used by the
//! command-line binary.

pub mod output;
pub mod url;

// Re-export public API
pub use output::{render_error, render_result};
pub use url::{extract_shortcode, is_valid_post_url};
