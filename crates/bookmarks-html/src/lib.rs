//! Tokenizer and parser for Netscape bookmark files.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer**: a lazy scanner over a restricted HTML subset producing
//!   whitespace, tag and content tokens, failing fast on a stray `<` or `>`
//! - **Token queries**: tag kind, label name and attribute map, derived from
//!   the raw tag text on demand
//! - **Parser**: recursive descent with a two-token lookahead buffer that
//!   builds a [`BookMark`] tree
//!
//! Serialization lives on the tree types themselves (see
//! [`bookmarks_tree::serialize`]).
//!
//! # Not a general HTML parser
//!
//! - Attribute values must be `"`-quoted and contain no spaces
//! - No character references, script or style handling
//! - No error recovery: the first grammar violation aborts the parse

use bookmarks_tree::BookMark;

/// Lexing and parsing errors.
pub mod error;
/// Recursive-descent parser producing the entity tree.
pub mod parser;
/// Tokenizer and token types.
pub mod tokenizer;

pub use error::{LexError, ParseError};
pub use parser::{Expected, ParseIssue, Parser};
pub use tokenizer::{Attribute, AttributesMap, TagKind, Token, TokenKind, Tokenizer};

/// Parse a whole bookmark file into its root folder.
///
/// # Errors
///
/// Returns the first [`ParseError`] hit while tokenizing or parsing.
pub fn parse_bookmarks(input: &str) -> Result<BookMark, ParseError> {
    Parser::new(Tokenizer::new(input)).run()
}
