use crate::models::{InlineSegment, Styles};

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Math, Strikethrough},
};

/// Tokenizes one line of text into styled runs and formulas.
///
/// A single left-to-right scan. At each position the constructs are tried in
/// precedence order: math, bold+italic, bold, italic, strikethrough, inline
/// code. An opening delimiter without a matching close is ordinary text.
///
/// Never returns an empty vector: empty input yields one empty plain run.
pub fn tokenize(s: &str) -> Vec<InlineSegment> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut run_start = cur.pos();

    fn flush_run(out: &mut Vec<InlineSegment>, s: &str, start: usize, end: usize) {
        if end > start {
            out.push(InlineSegment::plain(&s[start..end]));
        }
    }

    while !cur.eof() {
        if cur.starts_with(Math::DOUBLED) {
            cur.bump_n(Math::DOUBLED.len());
            continue;
        }

        let start = cur.pos();
        if let Some(segment) = try_parse_segment(&mut cur) {
            flush_run(&mut out, s, run_start, start);
            out.push(segment);
            run_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_run(&mut out, s, run_start, cur.pos());
    if out.is_empty() {
        out.push(InlineSegment::plain(""));
    }
    out
}

/// Dispatches on the current byte. On failure the cursor is left where it was.
fn try_parse_segment(cur: &mut Cursor<'_>) -> Option<InlineSegment> {
    match cur.peek()? {
        Math::DOLLAR => try_parse_math(cur),
        b if Emphasis::is_delim(b) => try_parse_strong_emphasis(cur, b)
            .or_else(|| try_parse_strong(cur, b))
            .or_else(|| try_parse_emphasis(cur, b)),
        Strikethrough::TILDE => try_parse_strikethrough(cur),
        CodeSpan::TICK => try_parse_code_span(cur),
        _ => None,
    }
}

/// Scans `delim inner delim` with non-empty `inner`, leaving the cursor after
/// the closing delimiter. Restores the cursor and returns `None` otherwise.
fn delimited<'a>(cur: &mut Cursor<'a>, delim: &[u8]) -> Option<&'a str> {
    if !cur.starts_with(delim) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(delim.len());
    let inner_start = cur.pos();

    match cur.find(delim) {
        Some(close) if close > inner_start => {
            let inner = cur.slice(inner_start, close);
            cur.seek(close + delim.len());
            Some(inner)
        }
        _ => {
            *cur = saved;
            None
        }
    }
}

fn try_parse_math(cur: &mut Cursor<'_>) -> Option<InlineSegment> {
    delimited(cur, Math::DELIM).map(InlineSegment::math)
}

fn try_parse_strong_emphasis(cur: &mut Cursor<'_>, b: u8) -> Option<InlineSegment> {
    delimited(cur, Emphasis::triple(b)).map(|t| InlineSegment::styled(t, Styles::BOLD_ITALIC))
}

/// Bold. Content wrapped whole in a single italic delimiter (`**_x_**`)
/// becomes one bold+italic run.
fn try_parse_strong(cur: &mut Cursor<'_>, b: u8) -> Option<InlineSegment> {
    let inner = delimited(cur, Emphasis::double(b))?;
    Some(match Emphasis::strip_single_wrap(inner) {
        Some(text) => InlineSegment::styled(text, Styles::BOLD_ITALIC),
        None => InlineSegment::styled(inner, Styles::BOLD),
    })
}

/// Italic. A doubled delimiter is rejected so it never collides with bold.
fn try_parse_emphasis(cur: &mut Cursor<'_>, b: u8) -> Option<InlineSegment> {
    if cur.peek_at(1) == Some(b) {
        return None;
    }
    delimited(cur, Emphasis::single(b)).map(|t| InlineSegment::styled(t, Styles::ITALIC))
}

fn try_parse_strikethrough(cur: &mut Cursor<'_>) -> Option<InlineSegment> {
    delimited(cur, Strikethrough::DELIM).map(|t| InlineSegment::styled(t, Styles::STRIKETHROUGH))
}

/// Inline code is a raw zone: its content is never parsed further.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineSegment> {
    delimited(cur, CodeSpan::DELIM).map(|t| InlineSegment::styled(t, Styles::CODE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn literal_concat(segments: &[InlineSegment]) -> String {
        segments.iter().map(InlineSegment::literal).collect()
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(tokenize("hello world"), vec![InlineSegment::plain("hello world")]);
    }

    #[test]
    fn empty_input_yields_one_empty_run() {
        assert_eq!(tokenize(""), vec![InlineSegment::plain("")]);
    }

    #[rstest]
    #[case("**bold**", Styles::BOLD, "bold")]
    #[case("__bold__", Styles::BOLD, "bold")]
    #[case("*italic*", Styles::ITALIC, "italic")]
    #[case("_italic_", Styles::ITALIC, "italic")]
    #[case("~~gone~~", Styles::STRIKETHROUGH, "gone")]
    #[case("`code`", Styles::CODE, "code")]
    #[case("***both***", Styles::BOLD_ITALIC, "both")]
    #[case("**_both_**", Styles::BOLD_ITALIC, "both")]
    #[case("__*both*__", Styles::BOLD_ITALIC, "both")]
    fn single_styled_run(#[case] input: &str, #[case] styles: Styles, #[case] text: &str) {
        assert_eq!(tokenize(input), vec![InlineSegment::styled(text, styles)]);
    }

    #[test]
    fn mixed_line_keeps_order() {
        assert_eq!(
            tokenize("a **b** c $x^2$ d"),
            vec![
                InlineSegment::plain("a "),
                InlineSegment::styled("b", Styles::BOLD),
                InlineSegment::plain(" c "),
                InlineSegment::math("x^2"),
                InlineSegment::plain(" d"),
            ]
        );
    }

    #[test]
    fn code_span_is_a_raw_zone() {
        assert_eq!(
            tokenize("`**not bold**`"),
            vec![InlineSegment::styled("**not bold**", Styles::CODE)]
        );
    }

    #[test]
    fn double_dollar_is_literal() {
        assert_eq!(tokenize("costs $$5"), vec![InlineSegment::plain("costs $$5")]);
        assert_eq!(tokenize("$$x$$"), vec![InlineSegment::plain("$$x$$")]);
    }

    #[rstest]
    #[case("**unclosed")]
    #[case("`unclosed code")]
    #[case("price: $5")]
    #[case("~~half")]
    #[case("a * b")]
    #[case("****")]
    fn unclosed_delimiters_are_text(#[case] input: &str) {
        assert_eq!(tokenize(input), vec![InlineSegment::plain(input)]);
    }

    #[rstest]
    #[case("plain")]
    #[case("a **b** _c_ ~~d~~ `e` $f$")]
    #[case("**_x_** and ***y***")]
    #[case("unicode ünïcødé **fé** $π$")]
    fn literals_reproduce_text_without_delimiters(#[case] input: &str) {
        let stripped: String = input
            .chars()
            .filter(|c| !matches!(c, '*' | '_' | '~' | '`' | '$'))
            .collect();
        assert_eq!(literal_concat(&tokenize(input)), stripped);
    }

    #[test]
    fn multibyte_text_around_delimiters() {
        assert_eq!(
            tokenize("día *sí* fin"),
            vec![
                InlineSegment::plain("día "),
                InlineSegment::styled("sí", Styles::ITALIC),
                InlineSegment::plain(" fin"),
            ]
        );
    }
}
