//! # Inline Tokenizer
//!
//! Turns a single line into an ordered sequence of [`InlineSegment`]s.
//!
//! ## Modules
//!
//! - **`kinds`**: Inline types with owned delimiters (Math, Emphasis, Strikethrough, CodeSpan)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `tokenize()` entry point with `try_parse_*` helpers
//!
//! ## Degradation
//!
//! Nothing here fails. An opening delimiter with no matching close stays in
//! the surrounding plain run as literal text.
//!
//! [`InlineSegment`]: crate::models::InlineSegment

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::tokenize;
