use std::borrow::Cow;
use std::fmt;

use super::LexContext;
use crate::types::{HeaderName, Method};

/// Token categories produced by the [`Lexer`](super::Lexer).
///
/// Keyword kinds (`HeaderName`, `Method`) are only reported when the lexer
/// runs under the matching [`LexContext`]; the same lexeme scanned under
/// `LexContext::Value` is an `Identifier`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A known header name (long or compact form)
    HeaderName(HeaderName),
    /// A known request method
    Method(Method),
    /// Any other token-shaped lexeme
    Identifier,
    /// A token made of decimal digits only
    Digits,
    /// A quoted string; the token value holds the unescaped content
    QuotedString,
    /// A run of SP / HTAB
    Whitespace,
    /// CRLF or LF
    Newline,
    /// Any other single character
    Separator(char),
}

impl TokenKind {
    /// True for the kinds scanned from a token-character run.
    pub fn is_word(&self) -> bool {
        matches!(
            self,
            TokenKind::HeaderName(_) | TokenKind::Method(_) | TokenKind::Identifier | TokenKind::Digits
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::HeaderName(name) => write!(f, "header name `{}`", name),
            TokenKind::Method(method) => write!(f, "method `{}`", method),
            TokenKind::Identifier => f.write_str("identifier"),
            TokenKind::Digits => f.write_str("digits"),
            TokenKind::QuotedString => f.write_str("quoted string"),
            TokenKind::Whitespace => f.write_str("whitespace"),
            TokenKind::Newline => f.write_str("newline"),
            TokenKind::Separator(c) => write!(f, "'{}'", c),
        }
    }
}

/// A classified lexeme with its literal text and source offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub value: Cow<'a, str>,
    pub offset: usize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, value: impl Into<Cow<'a, str>>, offset: usize) -> Self {
        Token {
            kind,
            value: value.into(),
            offset,
        }
    }

    pub fn is_word(&self) -> bool {
        self.kind.is_word()
    }

    /// Short human-readable rendering used in error messages.
    pub fn describe(&self) -> String {
        match &self.kind {
            TokenKind::Newline => "newline".to_string(),
            TokenKind::Whitespace => "whitespace".to_string(),
            TokenKind::QuotedString => format!("\"{}\"", self.value),
            TokenKind::Separator(c) => format!("'{}'", c),
            _ => format!("`{}`", self.value),
        }
    }

    pub fn into_value(self) -> String {
        self.value.into_owned()
    }
}

/// Keyword table lookup for a token-shaped lexeme under `context`.
pub fn keyword(context: LexContext, lexeme: &str) -> Option<TokenKind> {
    match context {
        LexContext::HeaderName => HeaderName::from_keyword(lexeme).map(TokenKind::HeaderName),
        LexContext::Method => Method::from_keyword(lexeme).map(TokenKind::Method),
        LexContext::Value => None,
    }
}
