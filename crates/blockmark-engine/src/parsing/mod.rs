pub mod blocks;
pub mod diagnostics;
pub mod inline;
pub mod repair;

use crate::models::Block;
use crate::options::ConvertOptions;

use blocks::BlockDispatcher;

pub use diagnostics::Diagnostic;
pub use inline::tokenize;
pub use repair::repair;

/// Blocks produced from one markup text, plus what had to be recovered.
#[derive(Debug)]
pub struct Assembly {
    pub blocks: Vec<Block>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Drives the dispatcher over every line of a markup text.
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    options: ConvertOptions,
}

impl Assembler {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Never fails and never returns an empty block list.
    pub fn run(&self, text: &str) -> Assembly {
        let lines: Vec<&str> = text.lines().collect();
        let mut dispatcher = BlockDispatcher::new(&self.options);
        let mut blocks = Vec::with_capacity(lines.len());

        let mut cursor = 0;
        while let Some(parsed) = dispatcher.parse_line(&lines, cursor) {
            blocks.push(parsed.block);
            cursor += 1 + parsed.extra;
        }

        if blocks.is_empty() {
            blocks.push(Block::empty_paragraph());
        }

        let diagnostics = dispatcher.finish();
        log::debug!(
            "assembled {} blocks from {} lines ({} diagnostics)",
            blocks.len(),
            lines.len(),
            diagnostics.len()
        );
        Assembly {
            blocks,
            diagnostics,
        }
    }
}

/// Converts markup into blocks with default options.
pub fn assemble(text: &str) -> Vec<Block> {
    Assembler::default().run(text).blocks
}
