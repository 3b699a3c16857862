/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips one `>` prefix and a single following space.
    ///
    /// The document model is flat, so `>> nested` is a quote whose text is
    /// `> nested`.
    pub fn strip_prefix(s: &str) -> Option<&str> {
        let rest = s.strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }

    pub fn prefix() -> String {
        format!("{} ", Self::PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefix("hello"), None);
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), Some("hello"));
    }

    #[test]
    fn strip_without_space() {
        assert_eq!(BlockQuote::strip_prefix(">hello"), Some("hello"));
    }

    #[test]
    fn nested_marker_is_kept_as_text() {
        assert_eq!(BlockQuote::strip_prefix(">> hello"), Some("> hello"));
    }
}
