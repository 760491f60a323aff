//! Page-load JSON blob extraction.
//!
//! Instagram post pages have historically embedded the post record in one of two
//! script assignments:
//! - `window._sharedData = {...};` (global page state)
//! - `window.__additionalDataLoaded('<path>', {...});` (secondary load callback)
//!
//! The regexes only locate where the object literal starts; the object itself is
//! read with serde_json's streaming deserializer, which stops at the end of the first
//! complete JSON value. Braces inside string values therefore cannot cut it short.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use super::node::media_from_node;
use crate::models::MediaResult;

const SHARED_DATA_PATTERN: &str = r"window\._sharedData\s*=\s*";
const ADDITIONAL_DATA_PATTERN: &str =
    r#"window\.__additionalDataLoaded\(\s*(?:'[^']*'|"[^"]*")\s*,\s*"#;

// JSON pointers to the shortcode media node inside each blob
const SHARED_DATA_NODE_POINTER: &str = "/entry_data/PostPage/0/graphql/shortcode_media";
const ADDITIONAL_DATA_NODE_POINTERS: &[&str] = &[
    "/graphql/shortcode_media",
    "/graphql/xdt_shortcode_media",
];

static SHARED_DATA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(SHARED_DATA_PATTERN).expect("Failed to compile _sharedData pattern - this is a bug")
});

static ADDITIONAL_DATA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(ADDITIONAL_DATA_PATTERN)
        .expect("Failed to compile __additionalDataLoaded pattern - this is a bug")
});

/// Extracts media from the `window._sharedData` global state blob.
///
/// Navigates `entry_data.PostPage[0].graphql.shortcode_media`. Malformed JSON or a
/// missing step anywhere on the path yields `None`.
pub fn extract_shared_data_media(html: &str) -> Option<MediaResult> {
    let blob_start = SHARED_DATA_RE.find(html)?.end();
    let blob = leading_json_object(&html[blob_start..])?;
    media_from_node(blob.pointer(SHARED_DATA_NODE_POINTER)?)
}

/// Extracts media from a `window.__additionalDataLoaded(...)` call.
///
/// Every call on the page is tried in order; the first whose second argument holds a
/// usable `graphql.shortcode_media` (or `graphql.xdt_shortcode_media`) node wins.
pub fn extract_additional_data_media(html: &str) -> Option<MediaResult> {
    ADDITIONAL_DATA_RE.find_iter(html).find_map(|m| {
        let blob = leading_json_object(&html[m.end()..])?;
        ADDITIONAL_DATA_NODE_POINTERS
            .iter()
            .filter_map(|pointer| blob.pointer(pointer))
            .find_map(media_from_node)
    })
}

/// Parses the JSON object at the start of `text`, ignoring whatever follows it.
fn leading_json_object(text: &str) -> Option<Value> {
    let text = text.trim_start();
    if !text.starts_with('{') {
        return None;
    }
    match serde_json::Deserializer::from_str(text)
        .into_iter::<Value>()
        .next()?
    {
        Ok(value) => Some(value),
        Err(e) => {
            log::trace!("Embedded JSON blob did not parse: {}", e);
            None
        }
    }
}
