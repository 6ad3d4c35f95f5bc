//! Token types consumed by the dialog parser.
//!
//! Tokens are produced by an external lexer. The parser only reads them, so
//! the representation stays close to what the lexer hands over: a kind, the
//! literal text, and where it came from.

use super::Location;
use std::fmt;

/// Token kinds for dialog and string-table files.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// `,`
    Comma,
    /// `|`
    LogicalOr,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// Integer literal: `42`, `0x50000000`, `-1`
    Number,
    /// Preprocessor directive including the `#`: `#include`, `#ifdef`
    Directive,
    /// Line or block comment, text without the comment markers
    Comment,
    /// String literal, text without the surrounding quotes
    String,
    /// Identifier: `IDC_OK`, `WS_CHILD`
    Identifier,
    /// Reserved grammar word: `begin_control_ex`, `BEGIN_LAYERS`
    Keyword,
}

impl TokenKind {
    /// Human-readable name for error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Comma => "`,`",
            TokenKind::LogicalOr => "`|`",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::Number => "number",
            TokenKind::Directive => "directive",
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
        }
    }

    /// True for kinds whose text is fixed by the kind itself.
    pub fn is_punctuation(self) -> bool {
        matches!(
            self,
            TokenKind::Comma | TokenKind::LogicalOr | TokenKind::OpenParen | TokenKind::CloseParen
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token with its literal text and source location.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub location: Location,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, value: impl Into<String>, location: Location) -> Self {
        Token {
            kind,
            value: value.into(),
            location,
        }
    }

    /// Create a token without a source position, for tests and generated input.
    pub fn dummy(kind: TokenKind, value: impl Into<String>) -> Self {
        Token::new(kind, value, Location::DUMMY)
    }

    /// Check the token kind.
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Check both the token kind and its literal text.
    #[inline]
    pub fn is_value(&self, kind: TokenKind, value: &str) -> bool {
        self.kind == kind && self.value == value
    }

    /// Short description used in "expected X, found Y" messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Comment => "comment".to_owned(),
            TokenKind::String => format!("string \"{}\"", self.value),
            kind if kind.is_punctuation() => kind.display_name().to_owned(),
            kind => format!("{} `{}`", kind.display_name(), self.value),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.value, self.location)
    }
}
