//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters. The tokenizer
//! refers to these constants; it never hardcodes a delimiter itself.
//!
//! - **`Math`**: `$formula$`, with `$$` kept literal
//! - **`Emphasis`**: `*`/`_`, `**`/`__`, `***`/`___`
//! - **`Strikethrough`**: `~~`
//! - **`CodeSpan`**: `` ` `` - raw zone

pub mod code_span;
pub mod emphasis;
pub mod math;
pub mod strikethrough;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use math::Math;
pub use strikethrough::Strikethrough;
