//! # Serializer
//!
//! Blocks back to markup, one block per line group, joined with `\n`.
//! Standard text blocks are not guaranteed to round trip byte for byte
//! (`*` bullets come back as `-`, numbered items all come back as `1.`);
//! the extension directives are re-emitted from their stored properties.

mod inline;

pub use inline::compose;

use crate::models::{Block, BlockType, TableContent};
use crate::parsing::blocks::kinds::{
    BlockQuote, BulletItem, CheckItem, CodeFence, Divider, Heading, NumberedItem, Quiz, Table,
    Video,
};

/// Serializes a block sequence to markup text.
pub fn serialize(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(serialize_block)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Markup for a single block. Multi-line blocks contain embedded newlines.
pub fn serialize_block(block: &Block) -> String {
    let text = || block.inline_content().map(compose).unwrap_or_default();
    let props = &block.properties;

    match &block.block_type {
        BlockType::Heading => format!("{}{}", Heading::prefix(props.level()), text()),
        BlockType::Paragraph => text(),
        BlockType::Quote => format!("{}{}", BlockQuote::prefix(), text()),
        BlockType::BulletItem => format!("{}{}", BulletItem::CANONICAL, text()),
        BlockType::NumberedItem => format!("{}{}", NumberedItem::CANONICAL, text()),
        BlockType::CheckItem => format!("{}{}", CheckItem::prefix(props.checked()), text()),
        BlockType::CodeBlock => format!(
            "{}\n{}\n{}",
            CodeFence::open_line(props.language()),
            block.plain_text(),
            CodeFence::BACKTICKS
        ),
        BlockType::Divider => Divider::CANONICAL.to_string(),
        BlockType::VideoReference => Video::directive(props.url()),
        BlockType::Quiz => Quiz::directive(props.topic(), props.quizzes_data().unwrap_or("[]")),
        BlockType::Table => block.content.table().map(serialize_table).unwrap_or_default(),
        // Unknown types keep their text, unstyled.
        BlockType::Other(name) => {
            log::debug!("serializing unknown block type {name:?} as plain text");
            block.plain_text()
        }
    }
}

/// Header row, a separator sized to the first row, then the remaining rows.
fn serialize_table(table: &TableContent) -> String {
    let Some((header, body)) = table.rows.split_first() else {
        return String::new();
    };
    let mut lines = Vec::with_capacity(table.rows.len() + 1);
    lines.push(Table::format_row(header));
    lines.push(Table::separator(header.cells.len()));
    lines.extend(body.iter().map(Table::format_row));
    lines.join("\n")
}
