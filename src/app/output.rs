//! Result and error rendering for the command-line binary.

use std::fmt::Write;

use crate::config::OutputFormat;
use crate::models::MediaResult;

/// Renders a successful result for stdout.
///
/// Plain output lists type, URL, extraction source and (for videos) the thumbnail,
/// one per line. JSON output is the serialized `MediaResult`.
pub fn render_result(media: &MediaResult, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(media).unwrap_or_else(|_| "{}".into()),
        OutputFormat::Plain => {
            let mut out = String::from("\n✓ Success!\n");
            // Writing into a String cannot fail
            let _ = writeln!(out, "Type: {}", media.kind);
            let _ = writeln!(out, "URL: {}", media.url);
            let _ = writeln!(out, "Source: {}", media.source);
            if let Some(thumbnail) = &media.thumbnail {
                let _ = writeln!(out, "Thumbnail: {}", thumbnail);
            }
            out
        }
    }
}

/// Renders an error message for stderr.
pub fn render_error(message: &str) -> String {
    format!("\n✗ Error: {}", message)
}
