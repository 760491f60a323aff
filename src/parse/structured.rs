//! JSON-LD (`application/ld+json`) media extraction.
//!
//! Post pages may describe their media with schema.org vocabulary: a `video` list
//! of `VideoObject`s, or an `image` that is a URL string or a list of them.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use super::node::non_empty_str;
use crate::models::{ExtractionSource, MediaResult};

// Matches: <script type="application/ld+json">...</script>
// Handles both single and double quotes, and case-insensitive type attribute
const JSON_LD_SCRIPT_PATTERN: &str =
    r#"(?is)<script[^>]*type\s*=\s*["']application/ld\+json["'][^>]*>(.*?)</script>"#;

static JSON_LD_SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(JSON_LD_SCRIPT_PATTERN).expect("Failed to compile JSON-LD pattern - this is a bug")
});

/// Extracts media from the page's JSON-LD blocks.
///
/// Blocks are tried in document order; unparsable blocks are skipped.
pub fn extract_json_ld_media(html: &str) -> Option<MediaResult> {
    JSON_LD_SCRIPT_RE
        .captures_iter(html)
        .filter_map(|cap| cap.get(1))
        .filter_map(|content| serde_json::from_str::<Value>(content.as_str().trim()).ok())
        .find_map(|doc| media_from_json_ld(&doc))
}

/// Converts one JSON-LD document into a result.
///
/// A list document contributes only its first element. A non-empty `video` makes
/// the result a video (`contentUrl`, with `thumbnailUrl` as thumbnail); a video
/// entry without `contentUrl` yields `None` rather than falling back to `image`.
fn media_from_json_ld(doc: &Value) -> Option<MediaResult> {
    let doc = match doc {
        Value::Array(items) => items.first()?,
        other => other,
    };

    let video = match doc.get("video") {
        Some(Value::Array(videos)) => videos.first(),
        Some(video @ Value::Object(_)) => Some(video),
        _ => None,
    };
    if let Some(video) = video {
        let url = non_empty_str(video, "contentUrl")?;
        let thumbnail = first_url(video.get("thumbnailUrl"));
        return MediaResult::video(url, thumbnail, ExtractionSource::Json);
    }

    let url = first_url(doc.get("image"))?;
    MediaResult::image(url, ExtractionSource::Json)
}

/// Reads a URL from a string, the first element of a list, or an `ImageObject`.
fn first_url(value: Option<&Value>) -> Option<String> {
    let url = match value? {
        Value::String(url) => Some(url.clone()),
        Value::Array(items) => first_url(items.first()),
        object @ Value::Object(_) => non_empty_str(object, "url")
            .or_else(|| non_empty_str(object, "contentUrl"))
            .map(str::to_owned),
        _ => None,
    };
    url.filter(|url| !url.is_empty())
}
