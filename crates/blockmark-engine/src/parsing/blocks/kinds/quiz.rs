use serde_json::Value;
use thiserror::Error;

use crate::parsing::repair::repair;

/// `@quiz[<topic>]{<json array>}` directive; the payload may span lines.
pub struct Quiz;

/// The directive line up to and including the opening brace.
#[derive(Debug, PartialEq, Eq)]
pub struct Opening<'a> {
    pub topic: &'a str,
    /// Text following the opening brace on the directive line.
    pub after_brace: &'a str,
}

/// Payload text between the outer braces.
#[derive(Debug, PartialEq, Eq)]
pub struct Capture {
    pub payload: String,
    /// Lines consumed beyond the directive line.
    pub extra_lines: usize,
    /// False when input ended before the matching brace.
    pub closed: bool,
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("payload is not valid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error("payload is not a JSON array")]
    NotArray,
}

/// Result of validating a payload, with at most one repair attempt.
#[derive(Debug)]
pub enum Resolution {
    /// Compact re-serialized payload.
    Valid(String),
    /// Compact payload that only parsed after repair.
    Repaired(String),
    Invalid(PayloadError),
}

/// Tracks brace depth, optionally skipping braces inside JSON string literals.
#[derive(Debug)]
struct BraceScanner {
    depth: usize,
    string_aware: bool,
    in_string: bool,
    escaped: bool,
}

impl BraceScanner {
    /// Starts just after an opening brace.
    fn new(string_aware: bool) -> Self {
        Self {
            depth: 1,
            string_aware,
            in_string: false,
            escaped: false,
        }
    }

    /// Feeds one char. Returns true when it closes the outermost brace.
    fn feed(&mut self, c: char) -> bool {
        if !self.string_aware {
            return self.count(c);
        }
        if self.in_string {
            match c {
                _ if self.escaped => self.escaped = false,
                '\\' => self.escaped = true,
                '"' => self.in_string = false,
                _ => {}
            }
            return false;
        }
        if c == '"' {
            self.in_string = true;
            return false;
        }
        self.count(c)
    }

    fn count(&mut self, c: char) -> bool {
        match c {
            Quiz::OPEN_BRACE => self.depth += 1,
            Quiz::CLOSE_BRACE => {
                self.depth -= 1;
                return self.depth == 0;
            }
            _ => {}
        }
        false
    }
}

impl Quiz {
    pub const OPEN: &'static str = "@quiz[";
    pub const TOPIC_CLOSE: char = ']';
    pub const OPEN_BRACE: char = '{';
    pub const CLOSE_BRACE: char = '}';

    pub fn opening(trimmed: &str) -> Option<Opening<'_>> {
        let rest = trimmed.strip_prefix(Self::OPEN)?;
        let close = rest.find(Self::TOPIC_CLOSE)?;
        let after_brace = rest[close + 1..].trim_start().strip_prefix(Self::OPEN_BRACE)?;
        Some(Opening {
            topic: rest[..close].trim(),
            after_brace,
        })
    }

    /// Scans from the opening brace across `rest` (the lines after the
    /// directive line) for the matching close. Braces inside string literals
    /// are skipped; if that never closes (a stray quote), plain brace counting
    /// gets a second try. Without any close the payload is everything to end
    /// of input.
    pub fn capture(after_brace: &str, rest: &[&str]) -> Capture {
        let capture = Self::scan(after_brace, rest, BraceScanner::new(true));
        if capture.closed {
            return capture;
        }
        let plain = Self::scan(after_brace, rest, BraceScanner::new(false));
        if plain.closed {
            log::debug!("quiz payload closed only by plain brace counting");
            return plain;
        }
        capture
    }

    fn scan(after_brace: &str, rest: &[&str], mut scanner: BraceScanner) -> Capture {
        let mut payload = String::new();

        let pieces = std::iter::once(after_brace).chain(rest.iter().copied());
        for (n, piece) in pieces.enumerate() {
            if n > 0 {
                payload.push('\n');
            }
            for (at, c) in piece.char_indices() {
                if scanner.feed(c) {
                    payload.push_str(&piece[..at]);
                    return Capture {
                        payload,
                        extra_lines: n,
                        closed: true,
                    };
                }
            }
            payload.push_str(piece);
        }

        Capture {
            payload,
            extra_lines: rest.len(),
            closed: false,
        }
    }

    /// A payload is usable when it parses as a JSON array.
    pub fn validate(payload: &str) -> Result<String, PayloadError> {
        match serde_json::from_str::<Value>(payload.trim())? {
            array @ Value::Array(_) => Ok(array.to_string()),
            _ => Err(PayloadError::NotArray),
        }
    }

    /// Parse, then at most one repair and retry.
    pub fn resolve(payload: &str, allow_repair: bool) -> Resolution {
        let first = match Self::validate(payload) {
            Ok(data) => return Resolution::Valid(data),
            Err(e) => e,
        };
        if !allow_repair || matches!(first, PayloadError::NotArray) {
            return Resolution::Invalid(first);
        }
        match Self::validate(&repair(payload)) {
            Ok(data) => Resolution::Repaired(data),
            Err(e) => Resolution::Invalid(e),
        }
    }

    pub fn directive(topic: &str, quizzes_data: &str) -> String {
        format!(
            "{}{}{}{}{}{}",
            Self::OPEN,
            topic,
            Self::TOPIC_CLOSE,
            Self::OPEN_BRACE,
            quizzes_data,
            Self::CLOSE_BRACE
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn opening_extracts_topic() {
        assert_eq!(
            Quiz::opening("@quiz[ Algebra ]{[]}"),
            Some(Opening {
                topic: "Algebra",
                after_brace: "[]}",
            })
        );
        assert_eq!(Quiz::opening("@quiz[Algebra]"), None);
        assert_eq!(Quiz::opening("@quiz Algebra {"), None);
    }

    #[test]
    fn capture_single_line() {
        let cap = Quiz::capture(r#"[{"q":1}]}"#, &[]);
        assert_eq!(cap.payload, r#"[{"q":1}]"#);
        assert_eq!(cap.extra_lines, 0);
        assert!(cap.closed);
    }

    #[test]
    fn capture_spans_lines_with_nested_braces() {
        let rest = [r#"  {"q": "a", "meta": {"k": 1}}"#, "]}", "after"];
        let cap = Quiz::capture("[", &rest);
        assert_eq!(cap.payload, "[\n  {\"q\": \"a\", \"meta\": {\"k\": 1}}\n]");
        assert_eq!(cap.extra_lines, 2);
        assert!(cap.closed);
    }

    #[test]
    fn braces_inside_strings_are_not_counted() {
        let cap = Quiz::capture(r#"[{"q":"set \"{\" or }"}]} tail"#, &[]);
        assert_eq!(cap.payload, r#"[{"q":"set \"{\" or }"}]"#);
        assert!(cap.closed);
    }

    #[test]
    fn unclosed_capture_runs_to_end() {
        let cap = Quiz::capture("[1,", &["2"]);
        assert_eq!(cap.payload, "[1,\n2");
        assert_eq!(cap.extra_lines, 1);
        assert!(!cap.closed);
    }

    #[test]
    fn stray_quote_falls_back_to_plain_counting() {
        let cap = Quiz::capture(r#"[{"q": "6" tall"}]} tail"#, &["next", "# After"]);
        assert_eq!(cap.payload, r#"[{"q": "6" tall"}]"#);
        assert_eq!(cap.extra_lines, 0);
        assert!(cap.closed);
    }

    #[test]
    fn validate_compacts_arrays() {
        assert_eq!(Quiz::validate("[ 1, 2 ]").unwrap(), "[1,2]");
        assert!(matches!(Quiz::validate(r#"{"a":1}"#), Err(PayloadError::NotArray)));
        assert!(matches!(Quiz::validate("not json"), Err(PayloadError::Syntax(_))));
    }

    #[test]
    fn resolve_repairs_once() {
        let raw = r#"[{"question":"\sqrt{9}"}]"#;
        assert!(matches!(Quiz::resolve(raw, true), Resolution::Repaired(_)));
        assert!(matches!(Quiz::resolve(raw, false), Resolution::Invalid(_)));
        assert!(matches!(Quiz::resolve("[]", true), Resolution::Valid(_)));
        assert!(matches!(Quiz::resolve("nope", true), Resolution::Invalid(_)));
    }

    #[test]
    fn directive_form() {
        assert_eq!(Quiz::directive("T", "[]"), "@quiz[T]{[]}");
    }
}
