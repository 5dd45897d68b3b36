use core::iter::FusedIterator;

use super::token::{Token, TokenKind};
use crate::error::LexError;

/// Lazy tokenizer over a whole bookmark document.
///
/// At each position three patterns are tried in priority order, anchored at
/// the cursor:
///
/// 1. a single whitespace character (including U+001C..=U+001F) → [`TokenKind::Whitespace`]
/// 2. `<` through the nearest following `>`, newlines included → [`TokenKind::Tag`]
/// 3. the longest run without `<` or `>` → [`TokenKind::Content`]
///
/// The first match wins and the cursor advances past it, so the tokens cover
/// the input with no gaps or overlaps. When nothing matches (an unclosed `<`
/// or a stray `>`) a single [`LexError`] is yielded and the iterator is
/// exhausted. A tokenizer cannot be rewound; build a new one to start over.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    /// The full document text.
    input: &'a str,
    /// Byte offset (not character column) of the next token.
    position: usize,
    /// Set once a [`LexError`] has been yielded.
    failed: bool,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            failed: false,
        }
    }

    /// Tokenize the remaining input eagerly.
    ///
    /// # Errors
    ///
    /// Returns the [`LexError`] for the first position where no pattern matches.
    pub fn run(self) -> Result<Vec<Token>, LexError> {
        self.collect()
    }

    fn match_whitespace(rest: &str) -> Option<usize> {
        rest.chars()
            .next()
            .filter(|&c| is_space(c))
            .map(char::len_utf8)
    }

    fn match_tag(rest: &str) -> Option<usize> {
        if !rest.starts_with('<') {
            return None;
        }
        rest.find('>').map(|end| end + 1)
    }

    fn match_content(rest: &str) -> Option<usize> {
        let end = rest.find(['<', '>']).unwrap_or(rest.len());
        (end > 0).then_some(end)
    }
}

/// Unicode whitespace plus the information separators U+001C..=U+001F.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.position >= self.input.len() {
            return None;
        }
        let rest = &self.input[self.position..];

        let matched = Self::match_whitespace(rest)
            .map(|len| (TokenKind::Whitespace, len))
            .or_else(|| Self::match_tag(rest).map(|len| (TokenKind::Tag, len)))
            .or_else(|| Self::match_content(rest).map(|len| (TokenKind::Content, len)));

        if let Some((kind, len)) = matched {
            let token = Token::new(kind, &rest[..len], self.position);
            self.position += len;
            Some(Ok(token))
        } else {
            self.failed = true;
            Some(Err(LexError::new(self.position, rest)))
        }
    }
}

impl FusedIterator for Tokenizer<'_> {}
