pub mod block_quote;
pub mod code_fence;
pub mod divider;
pub mod heading;
pub mod list_item;
pub mod paragraph;
pub mod quiz;
pub mod table;
pub mod video;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use divider::Divider;
pub use heading::Heading;
pub use list_item::{BulletItem, CheckItem, NumberedItem};
pub use paragraph::Paragraph;
pub use quiz::{PayloadError, Quiz, Resolution};
pub use table::Table;
pub use video::Video;
