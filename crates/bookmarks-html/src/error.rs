//! Error types for tokenizing and parsing.
//!
//! Neither kind is recoverable: a failed parse yields no tree. Both carry
//! enough of the offending input to point at it precisely.

use thiserror::Error;

use crate::parser::Expected;
use crate::tokenizer::Token;

/// How much of the remaining input a [`LexError`] quotes.
const SNIPPET_CHARS: usize = 16;

/// No token pattern matches at `offset`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no token matches at offset {offset}, found {found:?}")]
pub struct LexError {
    /// Byte offset of the unmatched input, counted in UTF-8 bytes rather
    /// than characters.
    pub offset: usize,
    /// The start of the unmatched input.
    pub found: String,
}

impl LexError {
    /// Create an error quoting the beginning of `rest`.
    #[must_use]
    pub fn new(offset: usize, rest: &str) -> Self {
        Self {
            offset,
            found: rest.chars().take(SNIPPET_CHARS).collect(),
        }
    }
}

/// A token that does not fit the grammar, or a tag missing an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The tokenizer failed while the parser was pulling tokens.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The next significant token is not in the acceptable set.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        /// What the grammar accepts here.
        expected: Expected,
        /// What the input had instead.
        found: Token,
    },

    /// Input ended in the middle of a rule.
    #[error("expected {expected}, found end of input")]
    UnexpectedEnd {
        /// What the grammar accepts here.
        expected: Expected,
    },

    /// A required attribute is absent from a header or link tag.
    #[error("{tag} is missing required attribute {attribute:?}")]
    MissingAttribute {
        /// Lower-cased attribute name.
        attribute: &'static str,
        /// The tag that should have carried it.
        tag: Token,
    },

    /// An attribute value is not wrapped in `"` (strict mode only).
    #[error("attribute {attribute:?} of {tag} is not double-quoted")]
    UnquotedAttribute {
        /// Lower-cased attribute name.
        attribute: String,
        /// The tag carrying it.
        tag: Token,
    },
}

impl ParseError {
    /// Byte offset of the input the error points at, if any.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::Lex(error) => Some(error.offset),
            Self::UnexpectedToken { found: token, .. }
            | Self::MissingAttribute { tag: token, .. }
            | Self::UnquotedAttribute { tag: token, .. } => Some(token.offset),
            Self::UnexpectedEnd { .. } => None,
        }
    }
}
