use serde::Serialize;
use strum_macros::{Display, EnumIter as EnumIterMacro};

/// Kind of media a post carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIterMacro)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MediaKind {
    /// Still image
    Image,
    /// Video (reel, IGTV, or video post)
    Video,
}

/// Which extraction strategy family produced a result.
///
/// Every embedded-JSON strategy (`_sharedData`, `__additionalDataLoaded`, JSON-LD)
/// reports `Json`; the meta tag fallback reports `OgMeta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIterMacro)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ExtractionSource {
    /// Embedded page JSON
    Json,
    /// Open Graph meta tags
    OgMeta,
}

/// Media extracted from a post page.
///
/// `url` is never empty. `thumbnail` is only ever set for videos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaResult {
    /// Image or video
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Direct media URL
    pub url: String,
    /// Video thumbnail, when one was found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Strategy family that produced this result
    pub source: ExtractionSource,
}

impl MediaResult {
    /// Builds an image result. Returns `None` for an empty url.
    pub fn image(url: impl Into<String>, source: ExtractionSource) -> Option<Self> {
        let url = url.into();
        if url.is_empty() {
            return None;
        }
        Some(Self {
            kind: MediaKind::Image,
            url,
            thumbnail: None,
            source,
        })
    }

    /// Builds a video result. Returns `None` for an empty url; an empty thumbnail is dropped.
    pub fn video(
        url: impl Into<String>,
        thumbnail: Option<String>,
        source: ExtractionSource,
    ) -> Option<Self> {
        let url = url.into();
        if url.is_empty() {
            return None;
        }
        Some(Self {
            kind: MediaKind::Video,
            url,
            thumbnail: thumbnail.filter(|t| !t.is_empty()),
            source,
        })
    }

    /// Returns true if this result is a video.
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}
