pub mod io;
pub mod models;
pub mod options;
pub mod parsing;
pub mod projections;
pub mod serialize;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::*;
pub use options::ConvertOptions;
pub use parsing::{Assembler, Assembly, Diagnostic, assemble, tokenize};
pub use projections::{HeadingEntry, heading_outline, plain_text, word_count};
pub use serialize::{compose, serialize, serialize_block};
