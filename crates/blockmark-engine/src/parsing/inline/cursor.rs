/// A cursor for byte-by-byte inline scanning of a single line.
///
/// All delimiters are ASCII, so every position a delimiter is found at is a
/// char boundary and slicing between two such positions is valid UTF-8.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The line being scanned.
    s: &'a str,
    /// Current byte index into `s`.
    i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// Peeks `n` bytes ahead of the current position.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i.min(self.s.len())..].starts_with(pat)
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Absolute index of the next occurrence of `pat` at or after the current position.
    pub fn find(&self, pat: &[u8]) -> Option<usize> {
        if pat.is_empty() || self.eof() {
            return None;
        }
        self.s.as_bytes()[self.i..]
            .windows(pat.len())
            .position(|w| w == pat)
            .map(|off| self.i + off)
    }

    /// Slice of the underlying line between two absolute positions.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }

    pub fn seek(&mut self, pos: usize) {
        self.i = pos;
    }
}
