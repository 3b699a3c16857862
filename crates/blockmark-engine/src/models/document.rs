use serde::{Deserialize, Serialize};

use crate::{
    options::ConvertOptions,
    parsing::{Assembler, Diagnostic},
    projections::{self, HeadingEntry},
    serialize,
};

use super::block::Block;

/// An ordered sequence of blocks.
///
/// The wire form is a bare JSON array of block records. Documents built from
/// markup always hold at least one block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Converts markup with default options.
    pub fn from_markup(markup: &str) -> Self {
        Self::new(crate::parsing::assemble(markup))
    }

    /// Converts markup, returning the recoverable events met on the way.
    pub fn from_markup_with(markup: &str, options: &ConvertOptions) -> (Self, Vec<Diagnostic>) {
        let assembly = Assembler::new(options.clone()).run(markup);
        (Self::new(assembly.blocks), assembly.diagnostics)
    }

    pub fn to_markup(&self) -> String {
        serialize::serialize(&self.blocks)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn plain_text(&self, separator: &str) -> String {
        projections::plain_text(&self.blocks, separator)
    }

    pub fn word_count(&self) -> usize {
        projections::word_count(&self.blocks)
    }

    pub fn headings(&self) -> Vec<HeadingEntry> {
        projections::heading_outline(&self.blocks)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }
}

impl From<Vec<Block>> for Document {
    fn from(blocks: Vec<Block>) -> Self {
        Self::new(blocks)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BlockType;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_markup_gives_one_block() {
        let doc = Document::from_markup("");
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.blocks[0].block_type, BlockType::Paragraph);
    }

    #[test]
    fn json_wire_form_is_a_bare_array() {
        let doc = Document::from_markup("---");
        let json = doc.to_json().unwrap();
        assert!(json.starts_with('['));

        let back = Document::from_json(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn diagnostics_are_returned_alongside() {
        let (doc, diagnostics) =
            Document::from_markup_with("@quiz[T]{not json}", &ConvertOptions::default());
        assert_eq!(doc.blocks[0].block_type, BlockType::Paragraph);
        assert_eq!(diagnostics.len(), 1);
    }
}
