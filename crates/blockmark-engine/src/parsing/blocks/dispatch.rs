use crate::models::Block;
use crate::options::ConvertOptions;
use crate::parsing::diagnostics::Diagnostic;
use crate::parsing::inline::tokenize;

use super::kinds::{
    BlockQuote, BulletItem, CheckItem, CodeFence, Divider, Heading, NumberedItem, Paragraph, Quiz,
    Resolution, Table, Video,
};

/// A block and the number of lines it consumed beyond the current one.
#[derive(Debug)]
pub struct Parsed {
    pub block: Block,
    pub extra: usize,
}

impl Parsed {
    fn single(block: Block) -> Self {
        Self { block, extra: 0 }
    }
}

/// Chooses a handler for the line at the cursor, first match wins.
///
/// Order: blank, divider, video, quiz, table, heading, fenced code, quote,
/// check item, bullet item, numbered item, paragraph. Handlers never fail;
/// anything they had to normalize or replace is recorded as a [`Diagnostic`].
pub struct BlockDispatcher<'o> {
    options: &'o ConvertOptions,
    diagnostics: Vec<Diagnostic>,
}

impl<'o> BlockDispatcher<'o> {
    pub fn new(options: &'o ConvertOptions) -> Self {
        Self {
            options,
            diagnostics: Vec::new(),
        }
    }

    /// Parses the line at `cursor`. Returns `None` only past the end of `lines`.
    pub fn parse_line(&mut self, lines: &[&str], cursor: usize) -> Option<Parsed> {
        let line = *lines.get(cursor)?;
        if Paragraph::is_blank(line) {
            return Some(Parsed::single(Block::empty_paragraph()));
        }
        let trimmed = line.trim();
        let line_no = cursor + 1;

        if Divider::matches(trimmed) {
            return Some(Parsed::single(Block::divider()));
        }
        if let Some(url) = Video::parse(trimmed) {
            return Some(Parsed::single(self.video(url, line_no)));
        }
        if let Some(opening) = Quiz::opening(trimmed) {
            return Some(self.quiz(opening.topic, opening.after_brace, &lines[cursor + 1..], line_no));
        }
        if Table::starts(trimmed) {
            let collected = Table::collect(lines, cursor);
            return Some(Parsed {
                block: Block::table(collected.content),
                extra: collected.lines.saturating_sub(1),
            });
        }
        if let Some((level, text)) = Heading::parse(trimmed) {
            return Some(Parsed::single(Block::heading(level, tokenize(text))));
        }
        if let Some(language) = CodeFence::opens(trimmed) {
            return Some(self.code_block(language, &lines[cursor + 1..], line_no));
        }
        if let Some(text) = BlockQuote::strip_prefix(trimmed) {
            return Some(Parsed::single(Block::quote(tokenize(text))));
        }
        if let Some((checked, text)) = CheckItem::parse(trimmed) {
            return Some(Parsed::single(Block::check_item(checked, tokenize(text))));
        }
        if let Some(text) = BulletItem::strip_marker(trimmed) {
            return Some(Parsed::single(Block::bullet_item(tokenize(text))));
        }
        if let Some(text) = NumberedItem::strip_marker(trimmed) {
            return Some(Parsed::single(Block::numbered_item(tokenize(text))));
        }
        Some(Parsed::single(Block::paragraph(Paragraph::content(trimmed))))
    }

    /// Diagnostics collected so far, in input order.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    fn video(&mut self, url: &str, line: usize) -> Block {
        match Video::canonicalize(url) {
            Some(canonical) => Block::video_reference(&canonical),
            None => {
                log::debug!("line {line}: unrecognized video url {url:?}, stored verbatim");
                self.diagnostics.push(Diagnostic::UnrecognizedVideoUrl {
                    line,
                    url: url.to_string(),
                });
                Block::video_reference(url)
            }
        }
    }

    fn quiz(&mut self, topic: &str, after_brace: &str, rest: &[&str], line: usize) -> Parsed {
        let capture = Quiz::capture(after_brace, rest);
        if !capture.closed {
            log::warn!("line {line}: quiz {topic:?} payload has no closing brace");
            self.diagnostics.push(Diagnostic::UnclosedQuizPayload {
                line,
                topic: topic.to_string(),
            });
        }

        let block = match Quiz::resolve(&capture.payload, self.options.repair_quiz_payloads) {
            Resolution::Valid(data) => Block::quiz(topic, data),
            Resolution::Repaired(data) => {
                log::warn!("line {line}: quiz {topic:?} payload repaired");
                self.diagnostics.push(Diagnostic::QuizRepaired {
                    line,
                    topic: topic.to_string(),
                });
                Block::quiz(topic, data)
            }
            Resolution::Invalid(err) => {
                log::warn!("line {line}: quiz {topic:?} dropped: {err}");
                self.diagnostics.push(Diagnostic::InvalidQuiz {
                    line,
                    topic: topic.to_string(),
                    reason: err.to_string(),
                });
                Block::paragraph(tokenize(&self.options.invalid_quiz_text(topic)))
            }
        };

        Parsed {
            block,
            extra: capture.extra_lines,
        }
    }

    /// Body lines are kept raw. Without a closing fence the block runs to end of input.
    fn code_block(&mut self, language: &str, rest: &[&str], line: usize) -> Parsed {
        let close = rest.iter().position(|l| CodeFence::closes(l));
        let body = &rest[..close.unwrap_or(rest.len())];
        let extra = match close {
            Some(at) => at + 1,
            None => {
                log::debug!("line {line}: code fence never closed");
                self.diagnostics.push(Diagnostic::UnclosedCodeFence { line });
                rest.len()
            }
        };
        Parsed {
            block: Block::code_block(language, &body.join("\n")),
            extra,
        }
    }
}
