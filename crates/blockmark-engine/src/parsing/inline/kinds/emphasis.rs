/// Bold and italic delimiters, in both the star and underscore families.
///
/// `**bold**`/`__bold__`, `*italic*`/`_italic_`, and the combined
/// `***both***`/`___both___` form.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';

    /// Returns true for either emphasis delimiter byte.
    pub fn is_delim(b: u8) -> bool {
        b == Self::STAR || b == Self::UNDERSCORE
    }

    /// Single delimiter (italic) for the family of `b`.
    pub fn single(b: u8) -> &'static [u8] {
        if b == Self::UNDERSCORE { b"_" } else { b"*" }
    }

    /// Double delimiter (bold) for the family of `b`.
    pub fn double(b: u8) -> &'static [u8] {
        if b == Self::UNDERSCORE { b"__" } else { b"**" }
    }

    /// Triple delimiter (bold + italic) for the family of `b`.
    pub fn triple(b: u8) -> &'static [u8] {
        if b == Self::UNDERSCORE { b"___" } else { b"***" }
    }

    /// If `inner` is wholly wrapped in one single delimiter of either family
    /// (`_x_` or `*x*`), returns the wrapped text.
    pub fn strip_single_wrap(inner: &str) -> Option<&str> {
        let b = inner.as_bytes();
        if b.len() < 3 {
            return None;
        }
        let first = b[0];
        let last = b[b.len() - 1];
        if !Self::is_delim(first) || first != last {
            return None;
        }
        // `**x**` inside bold is not an italic wrap.
        if b[1] == first || b[b.len() - 2] == first {
            return None;
        }
        Some(&inner[1..inner.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_wrap_is_detected_for_both_families() {
        assert_eq!(Emphasis::strip_single_wrap("_x_"), Some("x"));
        assert_eq!(Emphasis::strip_single_wrap("*x y*"), Some("x y"));
    }

    #[test]
    fn mixed_or_partial_wraps_are_rejected() {
        assert_eq!(Emphasis::strip_single_wrap("_x*"), None);
        assert_eq!(Emphasis::strip_single_wrap("_x"), None);
        assert_eq!(Emphasis::strip_single_wrap("**"), None);
        assert_eq!(Emphasis::strip_single_wrap("**x**"), None);
    }
}
