//! Tokenizer module.
//!
//! Splits a bookmark file into a flat, gap-free sequence of whitespace, tag
//! and content tokens.

/// Lazy scanner over the document text.
pub mod scanner;
/// Token types produced by the tokenizer.
pub mod token;

pub use scanner::Tokenizer;
pub use token::{Attribute, AttributesMap, TagKind, Token, TokenKind};
