//! Media descriptor node conversion.
//!
//! Both page-load JSON blobs lead to the same kind of node (the post's
//! "shortcode media" record). This module turns such a node into a `MediaResult`.

use serde_json::Value;

use crate::models::{ExtractionSource, MediaResult};

/// `__typename` values that mark a video node.
const VIDEO_TYPENAMES: &[&str] = &["GraphVideo", "XDTGraphVideo"];

/// Converts a shortcode media node into a result.
///
/// A node is a video if its `__typename` is a video type or `is_video` is true.
/// Videos need a non-empty `video_url`; their thumbnail is `display_url`, then
/// `thumbnail_src`. Everything else is an image and needs a non-empty `display_url`
/// or `thumbnail_src`. A missing url yields `None`, never an empty result.
pub fn media_from_node(node: &Value) -> Option<MediaResult> {
    if is_video_node(node) {
        let url = non_empty_str(node, "video_url")?;
        let thumbnail = non_empty_str(node, "display_url")
            .or_else(|| non_empty_str(node, "thumbnail_src"))
            .map(str::to_owned);
        MediaResult::video(url, thumbnail, ExtractionSource::Json)
    } else {
        let url =
            non_empty_str(node, "display_url").or_else(|| non_empty_str(node, "thumbnail_src"))?;
        MediaResult::image(url, ExtractionSource::Json)
    }
}

fn is_video_node(node: &Value) -> bool {
    let video_typename = node
        .get("__typename")
        .and_then(Value::as_str)
        .is_some_and(|t| VIDEO_TYPENAMES.contains(&t));
    let video_flag = node
        .get("is_video")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    video_typename || video_flag
}

/// Returns `value[key]` if it is a non-empty string.
pub(super) fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
