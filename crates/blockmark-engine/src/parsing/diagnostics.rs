use std::fmt;

/// A recoverable event noticed while assembling a document.
///
/// Conversion never fails; these record where input was normalized, repaired
/// or replaced. Line numbers are 1-based and point at the line where the
/// construct starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A quiz payload only parsed after backslash repair.
    QuizRepaired { line: usize, topic: String },
    /// A quiz payload could not be used; a placeholder paragraph was emitted.
    InvalidQuiz {
        line: usize,
        topic: String,
        reason: String,
    },
    /// The quiz payload's opening brace was never matched.
    UnclosedQuizPayload { line: usize, topic: String },
    /// A fenced code block ran to end of input.
    UnclosedCodeFence { line: usize },
    /// A video URL that could not be normalized was stored verbatim.
    UnrecognizedVideoUrl { line: usize, url: String },
}

impl Diagnostic {
    pub fn line(&self) -> usize {
        match self {
            Self::QuizRepaired { line, .. }
            | Self::InvalidQuiz { line, .. }
            | Self::UnclosedQuizPayload { line, .. }
            | Self::UnclosedCodeFence { line }
            | Self::UnrecognizedVideoUrl { line, .. } => *line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QuizRepaired { line, topic } => {
                write!(f, "line {line}: quiz '{topic}' payload needed backslash repair")
            }
            Self::InvalidQuiz {
                line,
                topic,
                reason,
            } => write!(f, "line {line}: quiz '{topic}' replaced by placeholder: {reason}"),
            Self::UnclosedQuizPayload { line, topic } => {
                write!(f, "line {line}: quiz '{topic}' payload is never closed")
            }
            Self::UnclosedCodeFence { line } => {
                write!(f, "line {line}: code fence runs to end of input")
            }
            Self::UnrecognizedVideoUrl { line, url } => {
                write!(f, "line {line}: video url '{url}' kept as written")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_line() {
        let d = Diagnostic::UnclosedCodeFence { line: 7 };
        assert_eq!(d.line(), 7);
        assert_eq!(d.to_string(), "line 7: code fence runs to end of input");
    }
}
