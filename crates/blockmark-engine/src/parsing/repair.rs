//! Backslash repair for quiz payloads.
//!
//! Generated payloads often carry raw LaTeX (`\sqrt`, `\alpha`) inside JSON
//! strings, where a lone backslash is an invalid escape. [`repair`] doubles
//! every backslash that does not begin a valid JSON escape and leaves valid
//! escapes alone.

/// Single left-to-right pass; never applied more than once per payload.
pub fn repair(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = String::with_capacity(raw.len() + raw.len() / 8);
    let mut i = 0;
    let mut copied = 0;

    while i < bytes.len() {
        if bytes[i] != b'\\' {
            i += 1;
            continue;
        }
        match valid_escape_len(&bytes[i + 1..]) {
            Some(len) => i += 1 + len,
            None => {
                out.push_str(&raw[copied..=i]);
                out.push('\\');
                i += 1;
                copied = i;
            }
        }
    }
    out.push_str(&raw[copied..]);
    out
}

/// Length of the escape body following a backslash, if it is a valid JSON escape.
fn valid_escape_len(rest: &[u8]) -> Option<usize> {
    match rest.first()? {
        b'\\' | b'"' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' => Some(1),
        b'u' if rest.len() >= 5 && rest[1..5].iter().all(u8::is_ascii_hexdigit) => Some(5),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#"{"q":"\sqrt{2}"}"#, r#"{"q":"\\sqrt{2}"}"#)]
    #[case(r"\alpha + \beta", r"\\alpha + \\beta")]
    #[case(r"trailing \", r"trailing \\")]
    #[case(r"\u12", r"\\u12")]
    #[case(r"\uZZZZ", r"\\uZZZZ")]
    fn doubles_invalid_escapes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(repair(input), expected);
    }

    #[rstest]
    #[case(r#"already \\ valid \" \/ \b \f \n \r \t"#)]
    #[case(r"é")]
    #[case("no backslashes at all")]
    #[case("")]
    fn keeps_valid_escapes(#[case] input: &str) {
        assert_eq!(repair(input), input);
    }

    #[test]
    fn escaped_backslash_pair_is_skipped_as_a_unit() {
        // `\\s` is an escaped backslash then `s`; nothing to repair.
        assert_eq!(repair(r"\\sqrt"), r"\\sqrt");
    }

    #[test]
    fn repaired_payload_parses() {
        let raw = r#"[{"question":"What is \sqrt{4}?"}]"#;
        assert!(serde_json::from_str::<serde_json::Value>(raw).is_err());
        let value: serde_json::Value = serde_json::from_str(&repair(raw)).unwrap();
        assert_eq!(value[0]["question"], r"What is \sqrt{4}?");
    }

    #[test]
    fn multibyte_text_survives() {
        assert_eq!(repair(r"é \x ü"), r"é \\x ü");
    }
}
