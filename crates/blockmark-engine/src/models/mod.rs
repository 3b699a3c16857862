pub mod block;
pub mod document;
pub mod inline;
pub mod quiz;
pub mod table;

pub use block::{Block, BlockContent, BlockId, BlockType, Properties, keys};
pub use document::Document;
pub use inline::{InlineSegment, Styles, plain_text_of};
pub use quiz::QuizQuestion;
pub use table::{TableCell, TableContent, TableRow};
