use std::sync::OnceLock;

use regex::Regex;

/// `@youtube[<url>]` directive.
pub struct Video;

static VIDEO_ID: OnceLock<Regex> = OnceLock::new();

fn video_id_regex() -> &'static Regex {
    VIDEO_ID.get_or_init(|| {
        Regex::new(
            r"^(?:https?://)?(?:www\.|m\.)?(?:youtube\.com/(?:watch\?(?:[^#]*&)?v=|embed/)|youtu\.be/)([A-Za-z0-9_-]+)",
        )
        .expect("Invalid video url regex")
    })
}

impl Video {
    pub const OPEN: &'static str = "@youtube[";
    pub const CLOSE: char = ']';
    pub const EMBED_BASE: &'static str = "https://www.youtube.com/embed/";

    /// Extracts the URL from a directive line.
    pub fn parse(trimmed: &str) -> Option<&str> {
        let rest = trimmed.strip_prefix(Self::OPEN)?;
        let end = rest.rfind(Self::CLOSE)?;
        Some(rest[..end].trim())
    }

    /// Canonical embeddable form of a recognized URL, or `None`.
    pub fn canonicalize(url: &str) -> Option<String> {
        let caps = video_id_regex().captures(url.trim())?;
        Some(format!("{}{}", Self::EMBED_BASE, &caps[1]))
    }

    pub fn directive(url: &str) -> String {
        format!("{}{}{}", Self::OPEN, url, Self::CLOSE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://www.youtube.com/watch?v=dQw4w9WgXcQ")]
    #[case("http://youtube.com/watch?v=dQw4w9WgXcQ")]
    #[case("youtube.com/watch?v=dQw4w9WgXcQ&t=42")]
    #[case("https://m.youtube.com/watch?feature=share&v=dQw4w9WgXcQ")]
    #[case("https://youtu.be/dQw4w9WgXcQ")]
    #[case("https://youtu.be/dQw4w9WgXcQ?si=abc")]
    #[case("https://www.youtube.com/embed/dQw4w9WgXcQ")]
    fn recognized_urls_canonicalize(#[case] url: &str) {
        assert_eq!(
            Video::canonicalize(url).as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
    }

    #[rstest]
    #[case("https://vimeo.com/12345")]
    #[case("not a url")]
    #[case("")]
    fn unrecognized_urls(#[case] url: &str) {
        assert_eq!(Video::canonicalize(url), None);
    }

    #[test]
    fn parse_directive() {
        assert_eq!(Video::parse("@youtube[https://youtu.be/x]"), Some("https://youtu.be/x"));
        assert_eq!(Video::parse("@youtube[unterminated"), None);
        assert_eq!(Video::parse("@quiz[x]"), None);
    }
}
