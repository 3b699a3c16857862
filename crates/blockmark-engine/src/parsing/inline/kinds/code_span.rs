/// Inline code type with owned delimiter constant.
///
/// Code spans are raw zones: no other inline parsing occurs inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const TICK: u8 = b'`';
    pub const DELIM: &'static [u8; 1] = b"`";
}
