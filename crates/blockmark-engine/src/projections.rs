//! Read-only views over an assembled block sequence.
//!
//! Each function is independent of the others and of how the blocks were
//! produced.

use serde::Serialize;

use crate::models::{Block, BlockType};

pub const DEFAULT_SEPARATOR: &str = "\n";

/// One heading in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingEntry {
    pub level: u8,
    pub text: String,
}

/// Text of every text-bearing block, trimmed, joined by `separator`.
///
/// Formulas are left out. Blocks that yield no text are skipped rather than
/// contributing an empty entry.
pub fn plain_text(blocks: &[Block], separator: &str) -> String {
    blocks
        .iter()
        .map(|b| b.plain_text())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

pub fn word_count(blocks: &[Block]) -> usize {
    plain_text(blocks, DEFAULT_SEPARATOR).split_whitespace().count()
}

pub fn heading_outline(blocks: &[Block]) -> Vec<HeadingEntry> {
    blocks
        .iter()
        .filter(|b| b.block_type == BlockType::Heading)
        .map(|b| HeadingEntry {
            level: b.properties.level(),
            text: b.plain_text().trim().to_string(),
        })
        .collect()
}
