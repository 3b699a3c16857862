/// ATX heading: `#`, `##` or `###` followed by a space and text.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    /// Deeper markers (`####`...) are clamped to this level.
    pub const MAX_LEVEL: u8 = 3;

    /// Returns `(level, text)` for a heading line.
    pub fn parse(trimmed: &str) -> Option<(u8, &str)> {
        let hashes = trimmed.chars().take_while(|c| *c == Self::MARKER).count();
        if hashes == 0 {
            return None;
        }
        let rest = &trimmed[hashes..];
        if !rest.is_empty() && !rest.starts_with(' ') {
            // `#hashtag` is text, not a heading.
            return None;
        }
        let level = hashes.min(Self::MAX_LEVEL as usize) as u8;
        Some((level, rest.trim()))
    }

    pub fn prefix(level: u8) -> String {
        let level = level.clamp(1, Self::MAX_LEVEL) as usize;
        format!("{} ", Self::MARKER.to_string().repeat(level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", 1, "Title")]
    #[case("## Sub", 2, "Sub")]
    #[case("### Deep", 3, "Deep")]
    #[case("###### Clamped", 3, "Clamped")]
    #[case("#", 1, "")]
    fn parses_levels(#[case] line: &str, #[case] level: u8, #[case] text: &str) {
        assert_eq!(Heading::parse(line), Some((level, text)));
    }

    #[test]
    fn hashtag_is_not_a_heading() {
        assert_eq!(Heading::parse("#tag"), None);
        assert_eq!(Heading::parse("plain"), None);
    }

    #[test]
    fn prefix_matches_level() {
        assert_eq!(Heading::prefix(2), "## ");
        assert_eq!(Heading::prefix(9), "### ");
    }
}
