//! Post URL validation.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::POST_URL_PATTERN;

static POST_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(POST_URL_PATTERN).expect("Failed to compile post URL pattern - this is a bug")
});

/// Returns true if `url` starts like a public post, reel, or IGTV URL.
///
/// The check is purely structural: scheme `http(s)`, optional `www.`, host
/// `instagram.com`, path `/p/`, `/reel/` or `/tv/` followed by an identifier of
/// letters, digits, `_` and `-`. Only the prefix is anchored, so query strings and
/// fragments are tolerated. Nothing is normalized (no case folding).
///
/// # Examples
///
/// ```
/// use insta_media::is_valid_post_url;
///
/// assert!(is_valid_post_url("https://www.instagram.com/p/ABC123/"));
/// assert!(is_valid_post_url("http://instagram.com/reel/XYZ_789?igsh=abc"));
/// assert!(!is_valid_post_url("https://www.instagram.com/stories/someone/"));
/// ```
pub fn is_valid_post_url(url: &str) -> bool {
    POST_URL_RE.is_match(url)
}

/// Returns the post identifier (shortcode) of a valid post URL.
pub fn extract_shortcode(url: &str) -> Option<&str> {
    POST_URL_RE
        .captures(url)
        .and_then(|caps| caps.get(3))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_post_urls() {
        for url in [
            "https://www.instagram.com/p/ABC123/",
            "https://instagram.com/p/ABC123",
            "http://www.instagram.com/reel/Cx-9_zQ/",
            "https://www.instagram.com/tv/B1a2c3/",
        ] {
            assert!(is_valid_post_url(url), "{} should be valid", url);
        }
    }

    #[test]
    fn test_trailing_query_and_fragment_tolerated() {
        assert!(is_valid_post_url(
            "https://www.instagram.com/p/ABC123/?utm_source=ig_web_copy_link"
        ));
        assert!(is_valid_post_url("https://www.instagram.com/p/ABC123#comments"));
    }

    #[test]
    fn test_invalid_post_urls() {
        for url in [
            "",
            "instagram.com/p/ABC123/",
            "ftp://www.instagram.com/p/ABC123/",
            "https://www.instagram.com/",
            "https://www.instagram.com/someuser/",
            "https://www.instagram.com/stories/someuser/123/",
            "https://www.instagram.com/p/",
            "https://www.instagram.com/p/!!!/",
            "https://m.instagram.com/p/ABC123/",
            "https://www.instagram.com.evil.com/p/ABC123/",
            "https://www.facebook.com/p/ABC123/",
            " https://www.instagram.com/p/ABC123/",
        ] {
            assert!(!is_valid_post_url(url), "{:?} should be invalid", url);
        }
    }

    #[test]
    fn test_no_case_folding() {
        assert!(!is_valid_post_url("HTTPS://WWW.INSTAGRAM.COM/p/ABC123/"));
        assert!(!is_valid_post_url("https://www.instagram.com/P/ABC123/"));
    }

    #[test]
    fn test_extract_shortcode() {
        assert_eq!(
            extract_shortcode("https://www.instagram.com/reel/XYZ789/?igsh=1"),
            Some("XYZ789")
        );
        assert_eq!(
            extract_shortcode("https://instagram.com/p/a_b-c"),
            Some("a_b-c")
        );
        assert_eq!(extract_shortcode("https://example.com/p/ABC123/"), None);
    }
}
