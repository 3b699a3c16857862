use crate::models::InlineSegment;
use crate::parsing::inline::tokenize;

/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the fallback when no other block
/// opener matches, and also what a blank line becomes.
pub struct Paragraph;

impl Paragraph {
    /// A blank line is an empty paragraph, not a skipped line.
    pub fn is_blank(line: &str) -> bool {
        line.trim().is_empty()
    }

    /// The whole trimmed line goes through the inline tokenizer.
    pub fn content(trimmed: &str) -> Vec<InlineSegment> {
        tokenize(trimmed)
    }
}
