use serde::{Deserialize, Serialize};

/// Emphasis flags carried by a [`InlineSegment::Text`] run.
///
/// Only the flags that are set appear in the wire form, so a plain run
/// serializes as `"styles": {}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Styles {
    #[serde(skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub strikethrough: bool,
    /// Inline code. Takes precedence over every other flag when re-composed.
    #[serde(skip_serializing_if = "is_false")]
    pub code: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl Styles {
    pub const PLAIN: Styles = Styles {
        bold: false,
        italic: false,
        strikethrough: false,
        code: false,
    };

    pub const BOLD: Styles = Styles {
        bold: true,
        ..Styles::PLAIN
    };

    pub const ITALIC: Styles = Styles {
        italic: true,
        ..Styles::PLAIN
    };

    pub const BOLD_ITALIC: Styles = Styles {
        bold: true,
        italic: true,
        ..Styles::PLAIN
    };

    pub const STRIKETHROUGH: Styles = Styles {
        strikethrough: true,
        ..Styles::PLAIN
    };

    pub const CODE: Styles = Styles {
        code: true,
        ..Styles::PLAIN
    };

    /// Returns true if no flag is set.
    #[must_use]
    pub fn is_plain(self) -> bool {
        self == Self::PLAIN
    }
}

/// One styled run of text or an inline formula within a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InlineSegment {
    /// A run of literal text with emphasis flags.
    Text {
        text: String,
        #[serde(default)]
        styles: Styles,
    },
    /// An inline math formula, stored as LaTeX source without the `$` delimiters.
    Math { latex: String },
}

impl InlineSegment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            styles: Styles::PLAIN,
        }
    }

    pub fn styled(text: impl Into<String>, styles: Styles) -> Self {
        Self::Text {
            text: text.into(),
            styles,
        }
    }

    pub fn math(latex: impl Into<String>) -> Self {
        Self::Math {
            latex: latex.into(),
        }
    }

    /// Text of a `Text` run; `None` for formulas.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            Self::Math { .. } => None,
        }
    }

    /// Literal characters of the segment with no delimiters: the run text or the formula source.
    pub fn literal(&self) -> &str {
        match self {
            Self::Text { text, .. } => text,
            Self::Math { latex } => latex,
        }
    }

    pub fn styles(&self) -> Styles {
        match self {
            Self::Text { styles, .. } => *styles,
            Self::Math { .. } => Styles::PLAIN,
        }
    }
}

/// Concatenates the text of every `Text` segment, skipping formulas.
pub fn plain_text_of(segments: &[InlineSegment]) -> String {
    segments.iter().filter_map(InlineSegment::text).collect()
}
