use core::fmt;

use crate::tokenizer::{TagKind, Token, TokenKind};

/// The set of tokens a grammar rule accepts at one step.
///
/// A token matches when its kind equals `kind`, its tag kind equals
/// `tag_kind` (if set), and its label name is one of `labels` (if any are
/// listed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expected {
    /// Required token kind.
    pub kind: TokenKind,
    /// Required tag kind, for tag tokens.
    pub tag_kind: Option<TagKind>,
    /// Acceptable label names such as `<DT>`; empty accepts any.
    pub labels: &'static [&'static str],
}

impl Expected {
    /// Any content token, e.g. a folder or link title.
    pub const CONTENT: Self = Self {
        kind: TokenKind::Content,
        tag_kind: None,
        labels: &[],
    };

    /// A label tag with one of the given names.
    #[must_use]
    pub const fn label(labels: &'static [&'static str]) -> Self {
        Self {
            kind: TokenKind::Tag,
            tag_kind: Some(TagKind::Label),
            labels,
        }
    }

    /// Whether `token` belongs to this set.
    #[must_use]
    pub fn matches(&self, token: &Token) -> bool {
        token.kind == self.kind
            && self.tag_kind.is_none_or(|kind| token.tag_kind() == Some(kind))
            && (self.labels.is_empty()
                || token
                    .label_name()
                    .is_some_and(|name| self.labels.contains(&name.as_str())))
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.tag_kind) {
            (TokenKind::Tag, Some(TagKind::Label)) => f.write_str("label tag")?,
            (TokenKind::Tag, Some(TagKind::Comment)) => f.write_str("comment")?,
            (kind, _) => write!(f, "{}", kind.to_string().to_lowercase())?,
        }
        if !self.labels.is_empty() {
            write!(f, " {}", self.labels.join(" or "))?;
        }
        Ok(())
    }
}
