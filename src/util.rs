use once_cell::sync::Lazy;
use regex::Regex;

// YouTube video IDs are 11 characters of base64url alphabet, preceded by
// either a `v=` query parameter or a path separator (watch URLs, youtu.be
// short links, /shorts/, /embed/).
static VIDEO_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").expect("Failed to compile video ID regex"));

/// First 11-character video ID found in a free-form URL string, if any.
pub fn extract_video_id(url: &str) -> Option<&str> {
    VIDEO_ID_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_watch_url() {
        assert_eq!(
            extract_video_id("https://youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn extracts_from_short_link() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ?t=42"),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(
            extract_video_id("https://youtu.be/aaaaaaaaaaa?v=bbbbbbbbbbb"),
            Some("aaaaaaaaaaa")
        );
    }

    #[test]
    fn bare_v_param_is_enough() {
        assert_eq!(extract_video_id("v=dQw4w9WgXcQ"), Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn rejects_urls_without_an_id() {
        assert_eq!(extract_video_id("https://example.com"), None);
        assert_eq!(extract_video_id("not a url at all"), None);
        assert_eq!(extract_video_id(""), None);
        // Ten characters only.
        assert_eq!(extract_video_id("v=dQw4w9WgXc"), None);
    }
}
