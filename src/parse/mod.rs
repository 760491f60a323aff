//! Media extraction from post page HTML.
//!
//! Extraction is an ordered chain of independent strategies. Each strategy either
//! returns a result or `None`; parse failures inside a strategy never escape it.
//! The first result wins:
//! 1. `window._sharedData` global state blob
//! 2. `window.__additionalDataLoaded(...)` secondary load blob
//! 3. JSON-LD (`application/ld+json`)
//! 4. Open Graph meta tags
//!
//! Embedded JSON carries the most reliable fields (such as `is_video`), so it is
//! tried first; meta tags are the last resort.

mod embedded;
mod node;
mod open_graph;
mod structured;

use log::{debug, trace};

use crate::models::MediaResult;

pub use embedded::{extract_additional_data_media, extract_shared_data_media};
pub use node::media_from_node;
pub use open_graph::extract_open_graph_media;
pub use structured::extract_json_ld_media;

/// A single extraction strategy.
type Strategy = fn(&str) -> Option<MediaResult>;

/// Strategies in priority order, with the name used in logs.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("shared_data", extract_shared_data_media),
    ("additional_data", extract_additional_data_media),
    ("json_ld", extract_json_ld_media),
    ("open_graph", extract_open_graph_media),
];

/// Extracts the post's media from page HTML.
///
/// Returns `None` when no strategy finds a non-empty media URL.
///
/// # Examples
///
/// ```
/// use insta_media::{extract_media, ExtractionSource, MediaKind};
///
/// let html = r#"<meta property="og:image" content="https://cdn/y.jpg">"#;
/// let media = extract_media(html).unwrap();
/// assert_eq!(media.kind, MediaKind::Image);
/// assert_eq!(media.source, ExtractionSource::OgMeta);
/// ```
pub fn extract_media(html: &str) -> Option<MediaResult> {
    for (name, strategy) in STRATEGIES {
        match strategy(html) {
            Some(media) => {
                debug!(
                    "Strategy {} matched: {} {} (source: {})",
                    name, media.kind, media.url, media.source
                );
                return Some(media);
            }
            None => trace!("Strategy {} found nothing", name),
        }
    }
    debug!("No strategy matched ({} bytes of HTML)", html.len());
    None
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
