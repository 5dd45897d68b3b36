use core::fmt;
use std::collections::HashMap;

use strum_macros::Display;

/// Map of lower-cased attribute names to values.
pub type AttributesMap = HashMap<String, String>;

/// Lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenKind {
    /// A single whitespace character.
    Whitespace,
    /// Everything from a `<` up to the next `>`.
    Tag,
    /// A run of text containing neither `<` nor `>`.
    Content,
}

/// Sub-class of a [`TokenKind::Tag`] token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TagKind {
    /// `<!DOCTYPE …>` or `<!-- … -->`.
    Comment,
    /// Any other tag, e.g. `<H3 …>`, `</DL>`, `<p>`.
    Label,
}

/// An attribute on a label tag, as split out of the raw tag text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name, lower-cased.
    pub name: String,
    /// Value with one character removed from each end.
    pub value: String,
    /// Whether the removed characters really were a pair of `"`.
    pub quoted: bool,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub const fn new(name: String, value: String, quoted: bool) -> Self {
        Self {
            name,
            value,
            quoted,
        }
    }
}

/// A classified slice of the input.
///
/// Only the kind, raw text and byte offset are stored. Tag kind, label name
/// and attributes are derived from `text` on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lexical class.
    pub kind: TokenKind,
    /// The exact source text covered by the token.
    pub text: String,
    /// Byte offset of the first character in the input. This is not a
    /// character column: multi-byte characters before the token count once
    /// per UTF-8 byte.
    pub offset: usize,
}

/// Drop exactly one character from each end; shorter input becomes empty.
fn strip_one_each_end(value: &str) -> &str {
    let mut chars = value.chars();
    let _ = chars.next();
    let _ = chars.next_back();
    chars.as_str()
}

impl Token {
    /// Create a token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            offset,
        }
    }

    /// `Comment` if the tag text begins with `<!`, otherwise `Label`.
    /// `None` for whitespace and content tokens.
    #[must_use]
    pub fn tag_kind(&self) -> Option<TagKind> {
        if self.kind != TokenKind::Tag {
            return None;
        }
        if self.text.starts_with("<!") {
            Some(TagKind::Comment)
        } else {
            Some(TagKind::Label)
        }
    }

    /// Whether the parser should look at this token at all: content, or a
    /// tag that is not a comment.
    #[must_use]
    pub fn is_significant(&self) -> bool {
        match self.kind {
            TokenKind::Whitespace => false,
            TokenKind::Tag => self.tag_kind() == Some(TagKind::Label),
            TokenKind::Content => true,
        }
    }

    /// Whether this is a closing tag such as `</DL>`.
    #[must_use]
    pub fn is_closing_tag(&self) -> bool {
        self.kind == TokenKind::Tag && self.text.starts_with("</")
    }

    /// The tag keyword wrapped in angle brackets, e.g. `<H3>`, `</DL>`, `<p>`.
    ///
    /// The keyword runs from after the `<` up to the first space, or up to the
    /// final character when there is no space. Case is kept as written.
    #[must_use]
    pub fn label_name(&self) -> Option<String> {
        if self.kind != TokenKind::Tag {
            return None;
        }
        let inner = self.text.strip_prefix('<')?;
        let end = inner.find(' ').unwrap_or_else(|| {
            inner
                .char_indices()
                .next_back()
                .map_or(0, |(index, _)| index)
        });
        Some(format!("<{}>", &inner[..end]))
    }

    /// Whether this is a label tag named exactly `name` (e.g. `"<DT>"`).
    #[must_use]
    pub fn is_label(&self, name: &str) -> bool {
        self.tag_kind() == Some(TagKind::Label) && self.label_name().is_some_and(|n| n == name)
    }

    /// Attributes in source order.
    ///
    /// The tag text minus its first and last character is split on single
    /// spaces. Fragments without `=` are dropped; the rest are split at their
    /// first `=`. Exactly one character is removed from each end of the value,
    /// which is only correct for `"`-quoted values, so [`Attribute::quoted`]
    /// records whether that assumption held.
    ///
    /// Empty for anything but an opening label tag.
    #[must_use]
    pub fn attribute_list(&self) -> Vec<Attribute> {
        if self.tag_kind() != Some(TagKind::Label) || self.is_closing_tag() {
            return Vec::new();
        }
        let inner = strip_one_each_end(&self.text);
        inner
            .split(' ')
            .filter_map(|fragment| fragment.split_once('='))
            .map(|(name, raw)| {
                let quoted = raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"');
                Attribute::new(
                    name.to_lowercase(),
                    strip_one_each_end(raw).to_string(),
                    quoted,
                )
            })
            .collect()
    }

    /// Attributes keyed by lower-cased name. A repeated name keeps its last
    /// value.
    #[must_use]
    pub fn attributes(&self) -> AttributesMap {
        self.attribute_list()
            .into_iter()
            .map(|attribute| (attribute.name, attribute.value))
            .collect()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} at offset {}", self.kind, self.text, self.offset)
    }
}
