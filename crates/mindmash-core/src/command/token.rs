//! Typed intermediate representation of annotated chat text.

use serde::{Deserialize, Serialize};

/// Kind of a token in annotated chat text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Plain text, rendered verbatim
    Text,
    /// A `#topic` tag; the value excludes the `#`
    Hashtag,
    /// An `@name` mention; the value excludes the `@`
    Mention,
}

/// A run of chat text with its annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Text,
            value: value.into(),
        }
    }

    pub fn hashtag(value: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Hashtag,
            value: value.into(),
        }
    }

    pub fn mention(value: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Mention,
            value: value.into(),
        }
    }

    /// The token as it appeared in the source text, sigil included.
    pub fn source_text(&self) -> String {
        match self.kind {
            TokenKind::Text => self.value.clone(),
            TokenKind::Hashtag => format!("#{}", self.value),
            TokenKind::Mention => format!("@{}", self.value),
        }
    }
}
