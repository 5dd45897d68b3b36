use std::collections::VecDeque;

use bookmarks_common::warning::warn_once;
use bookmarks_tree::{BookMark, Directory, Entry, File};

use super::expected::Expected;
use crate::error::{LexError, ParseError};
use crate::tokenizer::{AttributesMap, Token};

const DT: Expected = Expected::label(&["<DT>"]);
const H3: Expected = Expected::label(&["<H3>"]);
const H3_END: Expected = Expected::label(&["</H3>"]);
const DL: Expected = Expected::label(&["<DL>"]);
const DL_END: Expected = Expected::label(&["</DL>"]);
const P: Expected = Expected::label(&["<p>"]);
const A: Expected = Expected::label(&["<A>"]);
const A_END: Expected = Expected::label(&["</A>"]);
const ENTRY_OR_END: Expected = Expected::label(&["<DT>", "</DL>"]);
const ENTRY_KIND: Expected = Expected::label(&["<H3>", "<A>"]);

/// A recoverable input quirk noticed during a lenient parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// Human-readable description.
    pub message: String,
    /// Byte offset of the tag the issue was found in.
    pub offset: usize,
}

/// Recursive-descent parser over a lazy token stream.
///
/// Whitespace and comment tags are dropped as tokens are pulled; everything
/// else lands in a lookahead buffer that never holds more than two tokens.
/// Every rule checks each token against an [`Expected`] set and aborts with a
/// [`ParseError`] on the first mismatch.
///
/// ```text
/// Document  := (any)* BookMark              skip until the first <DT>
/// BookMark  := Header Entry* </DL> <p>      H3 needs add_date, last_modified,
///                                           personal_toolbar_folder
/// Directory := Header Entry* </DL> <p>      H3 needs add_date, last_modified
/// Header    := <DT> <H3 …> Content </H3> <DL> <p>
/// Entry     := Directory | File             decided by the token after <DT>
/// File      := <DT> <A …> Content </A>      A needs href, add_date; icon optional
/// ```
pub struct Parser<I> {
    /// Raw token stream.
    tokens: I,
    /// Significant tokens pulled but not yet consumed.
    buffer: VecDeque<Token>,
    /// Issues recorded in lenient mode.
    issues: Vec<ParseIssue>,
    /// Reject unquoted attribute values instead of recording an issue.
    strict_attributes: bool,
}

impl<I> Parser<I>
where
    I: Iterator<Item = Result<Token, LexError>>,
{
    /// Create a new parser from a token stream.
    pub fn new(tokens: I) -> Self {
        Self {
            tokens,
            buffer: VecDeque::with_capacity(2),
            issues: Vec::new(),
            strict_attributes: false,
        }
    }

    /// Enable strict mode: an attribute value that is not `"`-quoted fails
    /// the parse with [`ParseError::UnquotedAttribute`].
    #[must_use]
    pub const fn with_strict_attributes(mut self) -> Self {
        self.strict_attributes = true;
        self
    }

    /// Issues recorded so far.
    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Parse a whole document and return its root.
    ///
    /// # Errors
    ///
    /// Returns the first lexing or grammar error.
    pub fn run(mut self) -> Result<BookMark, ParseError> {
        self.parse_document()
    }

    /// Parse a whole document and return its root along with any issues.
    ///
    /// # Errors
    ///
    /// Returns the first lexing or grammar error.
    pub fn run_with_issues(mut self) -> Result<(BookMark, Vec<ParseIssue>), ParseError> {
        let bookmark = self.parse_document()?;
        Ok((bookmark, self.issues))
    }

    /// Skip everything up to the first `<DT>` (doctype, meta, title, h1 and
    /// the outer `<DL><p>`), then parse the root folder.
    ///
    /// Tokens after the root's closing `</DL><p>` are never pulled.
    ///
    /// # Errors
    ///
    /// Returns the first lexing or grammar error.
    pub fn parse_document(&mut self) -> Result<BookMark, ParseError> {
        loop {
            let token = self.peek(0, DT)?;
            if DT.matches(token) {
                break;
            }
            let _ = self.buffer.pop_front();
        }
        self.parse_bookmark()
    }

    /// Parse the root folder, starting at its `<DT>`.
    ///
    /// # Errors
    ///
    /// Returns the first lexing or grammar error.
    pub fn parse_bookmark(&mut self) -> Result<BookMark, ParseError> {
        let (tag, content) = self.parse_folder_header()?;
        let mut attributes = self.tag_attributes(&tag)?;
        let add_date = required(&mut attributes, "add_date", &tag)?;
        let last_modified = required(&mut attributes, "last_modified", &tag)?;
        let personal_toolbar_folder = required(&mut attributes, "personal_toolbar_folder", &tag)?;
        let children = self.parse_entries()?;
        Ok(BookMark {
            content,
            add_date,
            last_modified,
            personal_toolbar_folder,
            children,
        })
    }

    fn parse_directory(&mut self) -> Result<Directory, ParseError> {
        let (tag, content) = self.parse_folder_header()?;
        let mut attributes = self.tag_attributes(&tag)?;
        let add_date = required(&mut attributes, "add_date", &tag)?;
        let last_modified = required(&mut attributes, "last_modified", &tag)?;
        let children = self.parse_entries()?;
        Ok(Directory {
            content,
            add_date,
            last_modified,
            children,
        })
    }

    fn parse_file(&mut self) -> Result<File, ParseError> {
        self.eat(DT)?;
        let tag = self.expect(A)?;
        let content = self.expect(Expected::CONTENT)?.text;
        self.eat(A_END)?;

        let mut attributes = self.tag_attributes(&tag)?;
        let href = required(&mut attributes, "href", &tag)?;
        let add_date = required(&mut attributes, "add_date", &tag)?;
        Ok(File {
            content,
            href,
            add_date,
            icon: attributes.remove("icon"),
        })
    }

    /// `<DT> <H3 …> Content </H3> <DL> <p>`; returns the H3 tag and the title.
    fn parse_folder_header(&mut self) -> Result<(Token, String), ParseError> {
        self.eat(DT)?;
        let tag = self.expect(H3)?;
        let content = self.expect(Expected::CONTENT)?.text;
        self.eat(H3_END)?;
        self.eat(DL)?;
        self.eat(P)?;
        Ok((tag, content))
    }

    /// `Entry* </DL> <p>`
    fn parse_entries(&mut self) -> Result<Vec<Entry>, ParseError> {
        let mut entries = Vec::new();
        loop {
            self.check(0, ENTRY_OR_END)?;
            if self.buffer[0].is_label("</DL>") {
                break;
            }
            // <DT> alone does not tell a folder from a link.
            self.check(1, ENTRY_KIND)?;
            let entry = if self.buffer[1].is_label("<H3>") {
                Entry::Directory(self.parse_directory()?)
            } else {
                Entry::File(self.parse_file()?)
            };
            entries.push(entry);
        }
        self.eat(DL_END)?;
        self.eat(P)?;
        Ok(entries)
    }

    /// Attributes of `tag`, flagging values that are not `"`-quoted.
    fn tag_attributes(&mut self, tag: &Token) -> Result<AttributesMap, ParseError> {
        for attribute in tag.attribute_list() {
            if attribute.quoted {
                continue;
            }
            if self.strict_attributes {
                return Err(ParseError::UnquotedAttribute {
                    attribute: attribute.name,
                    tag: tag.clone(),
                });
            }
            let message = format!(
                "attribute {} has an unquoted value, read as {:?}",
                attribute.name, attribute.value
            );
            warn_once(
                "Parser",
                &format!("attribute {} has an unquoted value", attribute.name),
            );
            self.issues.push(ParseIssue {
                message,
                offset: tag.offset,
            });
        }
        Ok(tag.attributes())
    }

    /// Pull raw tokens until a significant one is found and buffer it.
    /// Returns `false` at end of input.
    fn fetch_next_significant(&mut self) -> Result<bool, ParseError> {
        for token in self.tokens.by_ref() {
            let token = token?;
            if token.is_significant() {
                self.buffer.push_back(token);
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// The significant token `index` places ahead, fetching as needed.
    fn peek(&mut self, index: usize, expected: Expected) -> Result<&Token, ParseError> {
        while self.buffer.len() <= index {
            if !self.fetch_next_significant()? {
                return Err(ParseError::UnexpectedEnd { expected });
            }
        }
        Ok(&self.buffer[index])
    }

    /// Fail unless the token `index` places ahead is in `expected`.
    fn check(&mut self, index: usize, expected: Expected) -> Result<(), ParseError> {
        let token = self.peek(index, expected)?;
        if expected.matches(token) {
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken {
                expected,
                found: token.clone(),
            })
        }
    }

    /// Check the next token against `expected` and consume it.
    fn expect(&mut self, expected: Expected) -> Result<Token, ParseError> {
        self.check(0, expected)?;
        self.buffer
            .pop_front()
            .ok_or(ParseError::UnexpectedEnd { expected })
    }

    /// [`Self::expect`], discarding the token.
    fn eat(&mut self, expected: Expected) -> Result<(), ParseError> {
        self.expect(expected).map(drop)
    }
}

/// Remove a required attribute from `attributes`.
fn required(
    attributes: &mut AttributesMap,
    attribute: &'static str,
    tag: &Token,
) -> Result<String, ParseError> {
    attributes
        .remove(attribute)
        .ok_or_else(|| ParseError::MissingAttribute {
            attribute,
            tag: tag.clone(),
        })
}
