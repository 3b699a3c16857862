//! # Block Parsing
//!
//! Line-oriented, priority-based dispatch: each source line is offered to the
//! block handlers in a fixed order and the first one that recognizes it wins.
//! Most handlers consume one line; tables, fenced code and quiz payloads may
//! consume several.
//!
//! ## Modules
//!
//! - **`kinds`**: Block types with owned delimiters (Heading, CodeFence, Table, Quiz, ...)
//! - **`dispatch`**: `BlockDispatcher::parse_line` picking a handler per line
//!
//! ## Key Invariants
//!
//! - The document is flat: no block nests inside another
//! - Fenced code blocks are raw zones: no inline parsing inside
//! - A blank line always becomes an empty paragraph
//! - No handler fails; degraded input is recorded as a `Diagnostic`

pub mod dispatch;
pub mod kinds;

pub use dispatch::{BlockDispatcher, Parsed};
