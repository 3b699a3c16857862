use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::{
    inline::{InlineSegment, plain_text_of},
    quiz::{QuizQuestion, parse_questions},
    table::TableContent,
};

/// Identifier of a block, unique within its document.
///
/// Fresh ids are v4 UUIDs. Ids read from the wire form are kept verbatim
/// whatever their shape, so documents produced by other tools round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// The type tag of a block.
///
/// `Other` keeps the name of a type this converter does not know, so a
/// document read from the wire keeps it and the serializer can fall back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockType {
    Heading,
    Paragraph,
    Quote,
    BulletItem,
    NumberedItem,
    CheckItem,
    CodeBlock,
    Divider,
    Table,
    VideoReference,
    Quiz,
    Other(String),
}

impl BlockType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Heading => "heading",
            Self::Paragraph => "paragraph",
            Self::Quote => "quote",
            Self::BulletItem => "bulletItem",
            Self::NumberedItem => "numberedItem",
            Self::CheckItem => "checkItem",
            Self::CodeBlock => "codeBlock",
            Self::Divider => "divider",
            Self::Table => "table",
            Self::VideoReference => "videoReference",
            Self::Quiz => "quiz",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for BlockType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "heading" => Self::Heading,
            "paragraph" => Self::Paragraph,
            "quote" => Self::Quote,
            "bulletItem" => Self::BulletItem,
            "numberedItem" => Self::NumberedItem,
            "checkItem" => Self::CheckItem,
            "codeBlock" => Self::CodeBlock,
            "divider" => Self::Divider,
            "table" => Self::Table,
            "videoReference" => Self::VideoReference,
            "quiz" => Self::Quiz,
            _ => Self::Other(name),
        }
    }
}

impl From<BlockType> for String {
    fn from(block_type: BlockType) -> Self {
        match block_type {
            BlockType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Property keys used by the converter.
pub mod keys {
    pub const LEVEL: &str = "level";
    pub const CHECKED: &str = "checked";
    pub const LANGUAGE: &str = "language";
    pub const URL: &str = "url";
    pub const TOPIC: &str = "topic";
    pub const QUIZZES_DATA: &str = "quizzesData";
    pub const IS_GENERATING_INITIAL: &str = "isGeneratingInitial";
}

/// Type-dependent attribute map of a block.
///
/// Keys the converter does not use pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(Map<String, Value>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Heading level clamped to `1..=3`; defaults to 1.
    pub fn level(&self) -> u8 {
        let level = self.get(keys::LEVEL).and_then(Value::as_u64).unwrap_or(1);
        level.clamp(1, 3) as u8
    }

    pub fn checked(&self) -> bool {
        self.get(keys::CHECKED)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Code block language tag, empty when none was given.
    pub fn language(&self) -> &str {
        self.get_str(keys::LANGUAGE).unwrap_or("")
    }

    pub fn url(&self) -> &str {
        self.get_str(keys::URL).unwrap_or("")
    }

    pub fn topic(&self) -> &str {
        self.get_str(keys::TOPIC).unwrap_or("")
    }

    pub fn quizzes_data(&self) -> Option<&str> {
        self.get_str(keys::QUIZZES_DATA)
    }
}

/// Content of a block: inline runs, a table matrix, or nothing.
///
/// On the wire these are an array, a `tableContent` object and `null`, so the
/// shapes cannot be confused.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockContent {
    Inline(Vec<InlineSegment>),
    Table(TableContent),
    #[default]
    None,
}

impl BlockContent {
    pub fn inline(&self) -> Option<&[InlineSegment]> {
        match self {
            Self::Inline(segments) => Some(segments),
            _ => None,
        }
    }

    pub fn table(&self) -> Option<&TableContent> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }
}

/// One structural unit of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub id: BlockId,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    #[serde(default)]
    pub properties: Properties,
    #[serde(default)]
    pub content: BlockContent,
    /// Always empty for converter output: the document model is flat.
    #[serde(default)]
    pub children: Vec<Block>,
}

impl Block {
    pub fn new(block_type: BlockType, properties: Properties, content: BlockContent) -> Self {
        Self {
            id: BlockId::new(),
            block_type,
            properties,
            content,
            children: Vec::new(),
        }
    }

    pub fn paragraph(segments: Vec<InlineSegment>) -> Self {
        Self::new(
            BlockType::Paragraph,
            Properties::new(),
            BlockContent::Inline(segments),
        )
    }

    /// A paragraph with no content, used for blank lines and empty documents.
    pub fn empty_paragraph() -> Self {
        Self::paragraph(Vec::new())
    }

    /// Heading with `level` clamped to `1..=3`.
    pub fn heading(level: u8, segments: Vec<InlineSegment>) -> Self {
        Self::new(
            BlockType::Heading,
            Properties::new().with(keys::LEVEL, level.clamp(1, 3)),
            BlockContent::Inline(segments),
        )
    }

    pub fn quote(segments: Vec<InlineSegment>) -> Self {
        Self::new(
            BlockType::Quote,
            Properties::new(),
            BlockContent::Inline(segments),
        )
    }

    pub fn bullet_item(segments: Vec<InlineSegment>) -> Self {
        Self::new(
            BlockType::BulletItem,
            Properties::new(),
            BlockContent::Inline(segments),
        )
    }

    pub fn numbered_item(segments: Vec<InlineSegment>) -> Self {
        Self::new(
            BlockType::NumberedItem,
            Properties::new(),
            BlockContent::Inline(segments),
        )
    }

    pub fn check_item(checked: bool, segments: Vec<InlineSegment>) -> Self {
        Self::new(
            BlockType::CheckItem,
            Properties::new().with(keys::CHECKED, checked),
            BlockContent::Inline(segments),
        )
    }

    /// Code block holding `code` as a single unstyled run.
    pub fn code_block(language: &str, code: impl Into<String>) -> Self {
        Self::new(
            BlockType::CodeBlock,
            Properties::new().with(keys::LANGUAGE, language),
            BlockContent::Inline(vec![InlineSegment::plain(code)]),
        )
    }

    pub fn divider() -> Self {
        Self::new(BlockType::Divider, Properties::new(), BlockContent::None)
    }

    pub fn table(table: TableContent) -> Self {
        Self::new(BlockType::Table, Properties::new(), BlockContent::Table(table))
    }

    pub fn video_reference(url: impl Into<String>) -> Self {
        Self::new(
            BlockType::VideoReference,
            Properties::new().with(keys::URL, Value::String(url.into())),
            BlockContent::None,
        )
    }

    /// Quiz block. `quizzes_data` must already be a valid JSON array.
    pub fn quiz(topic: &str, quizzes_data: impl Into<String>) -> Self {
        Self::new(
            BlockType::Quiz,
            Properties::new()
                .with(keys::TOPIC, topic)
                .with(keys::QUIZZES_DATA, Value::String(quizzes_data.into()))
                .with(keys::IS_GENERATING_INITIAL, false),
            BlockContent::None,
        )
    }

    pub fn inline_content(&self) -> Option<&[InlineSegment]> {
        self.content.inline()
    }

    /// Text runs without delimiters or formulas. Table cells are joined by a
    /// single space; blocks without content yield an empty string.
    pub fn plain_text(&self) -> String {
        match &self.content {
            BlockContent::Inline(segments) => plain_text_of(segments),
            BlockContent::Table(table) => table
                .rows
                .iter()
                .flat_map(|row| &row.cells)
                .map(|cell| plain_text_of(&cell.content))
                .filter(|text| !text.trim().is_empty())
                .collect::<Vec<_>>()
                .join(" "),
            BlockContent::None => String::new(),
        }
    }

    /// Typed view of a quiz block's payload. `None` for other blocks.
    pub fn quiz_questions(&self) -> Option<Result<Vec<QuizQuestion>, serde_json::Error>> {
        if self.block_type != BlockType::Quiz {
            return None;
        }
        self.properties.quizzes_data().map(parse_questions)
    }
}
