//! Open Graph meta tag fallback.
//!
//! Searches `<meta property="og:*">` tags. Attribute values come out of the HTML
//! parser already entity-decoded (`&amp;` becomes `&`).

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::models::{ExtractionSource, MediaResult};

const META_PROPERTY_SELECTOR_STR: &str = "meta[property]";

const OG_VIDEO: &str = "og:video";
const OG_IMAGE: &str = "og:image";

static META_PROPERTY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(META_PROPERTY_SELECTOR_STR)
        .expect("Failed to parse meta property selector - this is a bug")
});

/// Extracts media from Open Graph tags.
///
/// A present `og:video` tag makes the result a video, with `og:image` as its
/// thumbnail. An `og:video` tag with empty content is still a video tag, so it
/// yields no result instead of an image. Without one, `og:image` alone makes the
/// result an image.
pub fn extract_open_graph_media(html: &str) -> Option<MediaResult> {
    let document = Html::parse_document(html);

    if let Some(video_tag) = og_tags(&document, OG_VIDEO).next() {
        let video_url = video_tag.value().attr("content").unwrap_or_default().trim();
        let thumbnail = og_content(&document, OG_IMAGE);
        return MediaResult::video(video_url, thumbnail, ExtractionSource::OgMeta);
    }

    let image_url = og_content(&document, OG_IMAGE)?;
    MediaResult::image(image_url, ExtractionSource::OgMeta)
}

/// Meta tags whose `property` equals `property` (ASCII case-insensitive).
/// Sub-properties such as `og:video:secure_url` do not match `og:video`.
fn og_tags<'a>(
    document: &'a Html,
    property: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    document.select(&META_PROPERTY_SELECTOR).filter(move |element| {
        element
            .value()
            .attr("property")
            .is_some_and(|p| p.trim().eq_ignore_ascii_case(property))
    })
}

/// Returns the first non-empty `content` among the `property` tags.
fn og_content(document: &Html, property: &str) -> Option<String> {
    og_tags(document, property)
        .filter_map(|element| element.value().attr("content"))
        .map(str::trim)
        .find(|content| !content.is_empty())
        .map(str::to_owned)
}
