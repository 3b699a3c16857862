use crate::models::{InlineSegment, Styles};
use crate::parsing::inline::kinds::{CodeSpan, Emphasis, Math, Strikethrough};

/// Re-composes inline segments into delimited markup text.
///
/// The inverse of the tokenizer: a formula gets dollar delimiters and a run
/// gets the minimal delimiter set its styles imply.
pub fn compose(segments: &[InlineSegment]) -> String {
    segments.iter().map(compose_segment).collect()
}

fn compose_segment(segment: &InlineSegment) -> String {
    match segment {
        InlineSegment::Math { latex } => wrap(Math::DELIM, latex),
        InlineSegment::Text { text, styles } => compose_text(text, *styles),
    }
}

/// Code wins over every other style. Strikethrough wraps outermost.
fn compose_text(text: &str, styles: Styles) -> String {
    if text.is_empty() {
        return String::new();
    }
    if styles.code {
        return wrap(CodeSpan::DELIM, text);
    }

    let emphasized = match (styles.bold, styles.italic) {
        (true, true) => wrap(Emphasis::triple(Emphasis::STAR), text),
        (true, false) => wrap(Emphasis::double(Emphasis::STAR), text),
        (false, true) => wrap(Emphasis::single(Emphasis::STAR), text),
        (false, false) => text.to_string(),
    };

    if styles.strikethrough {
        wrap(Strikethrough::DELIM, &emphasized)
    } else {
        emphasized
    }
}

fn wrap(delim: &[u8], text: &str) -> String {
    let d: String = delim.iter().map(|&b| b as char).collect();
    format!("{d}{text}{d}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::tokenize;
    use rstest::rstest;

    #[rstest]
    #[case(InlineSegment::plain("x"), "x")]
    #[case(InlineSegment::styled("x", Styles::BOLD), "**x**")]
    #[case(InlineSegment::styled("x", Styles::ITALIC), "*x*")]
    #[case(InlineSegment::styled("x", Styles::BOLD_ITALIC), "***x***")]
    #[case(InlineSegment::styled("x", Styles::STRIKETHROUGH), "~~x~~")]
    #[case(InlineSegment::styled("x", Styles::CODE), "`x`")]
    #[case(InlineSegment::math("e^x"), "$e^x$")]
    #[case(InlineSegment::styled("", Styles::BOLD), "")]
    fn composes_single_segment(#[case] segment: InlineSegment, #[case] expected: &str) {
        assert_eq!(compose(&[segment]), expected);
    }

    #[test]
    fn strikethrough_wraps_emphasis() {
        let styles = Styles {
            bold: true,
            strikethrough: true,
            ..Styles::PLAIN
        };
        assert_eq!(compose(&[InlineSegment::styled("x", styles)]), "~~**x**~~");
    }

    #[test]
    fn code_skips_other_wrapping() {
        let styles = Styles {
            bold: true,
            code: true,
            ..Styles::PLAIN
        };
        assert_eq!(compose(&[InlineSegment::styled("x", styles)]), "`x`");
    }

    #[rstest]
    #[case("plain **bold** and *it* with `code`, ~~gone~~ and $x^2$")]
    #[case("***both*** end")]
    fn tokenized_star_forms_recompose_exactly(#[case] line: &str) {
        assert_eq!(compose(&tokenize(line)), line);
    }

    #[test]
    fn underscore_forms_normalize_to_stars() {
        assert_eq!(compose(&tokenize("__b__ _i_ **_bi_**")), "**b** *i* ***bi***");
    }
}
