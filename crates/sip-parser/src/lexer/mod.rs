//! # Header lexer
//!
//! A character-stream scanner over one header line or a block of header
//! lines. Tokens are produced on demand, one at a time, and are never pushed
//! back: the grammars built on top of it decide with at most a few characters
//! of lookahead ([`Lexer::look_ahead`]).
//!
//! The lexer carries a selectable keyword table, the [`LexContext`]. The same
//! lexeme is reported differently depending on where the grammar is:
//!
//! ```rust
//! use rvoip_sip_parser::lexer::{Lexer, LexContext, TokenKind};
//! use rvoip_sip_parser::types::Method;
//!
//! let mut lexer = Lexer::new("INVITE INVITE");
//! lexer.select_context(LexContext::Method);
//! assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Method(Method::Invite));
//! lexer.sp_or_ht();
//! lexer.select_context(LexContext::Value);
//! assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
//! ```
//!
//! Line folding is not handled here; inputs are expected to be unfolded by
//! the message reader.

mod scan;
pub mod token;

pub use token::{keyword, Token, TokenKind};

use tracing::trace;

use crate::error::{Error, Result};

/// Keyword table consulted when a token-shaped lexeme is scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LexContext {
    /// Header names are keywords (start of a header line)
    #[default]
    HeaderName,
    /// Request methods are keywords (Allow, CSeq)
    Method,
    /// No keywords; every token is an identifier or digit run
    Value,
}

/// RFC 3261 `token` character class.
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '-' | '.' | '!' | '%' | '*' | '_' | '+' | '`' | '\'' | '~')
}

pub fn is_sp_or_ht(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Scanner state: the input, a cursor and the active keyword table.
///
/// Cloning a lexer is cheap and yields an independent cursor over the same
/// input.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    context: LexContext,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer at the start of `input`, under `LexContext::HeaderName`.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            context: LexContext::default(),
        }
    }

    /// Switches the keyword table. The cursor does not move and tokens that
    /// were already returned keep their kind.
    pub fn select_context(&mut self, context: LexContext) {
        self.context = context;
    }

    pub fn context(&self) -> LexContext {
        self.context
    }

    /// Byte offset of the cursor in the input.
    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Character `n` positions past the cursor, without consuming anything.
    pub fn look_ahead(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// True at a line terminator or at the end of input.
    pub fn at_line_end(&self) -> bool {
        matches!(self.look_ahead(0), None | Some('\r') | Some('\n'))
    }

    /// Length in bytes of the rest of the current line, terminator excluded.
    pub fn line_length(&self) -> usize {
        let rest = self.remaining();
        let end = rest.find('\n').unwrap_or(rest.len());
        rest[..end].trim_end_matches('\r').len()
    }

    /// Number of consecutive characters satisfying `pred`, starting `skip`
    /// characters past the cursor.
    pub fn run_length(&self, skip: usize, pred: impl Fn(char) -> bool) -> usize {
        self.remaining().chars().skip(skip).take_while(|c| pred(*c)).count()
    }

    /// Skips zero or more SP / HTAB characters and returns how many.
    pub fn sp_or_ht(&mut self) -> usize {
        match scan::sp_or_ht(self.remaining()) {
            Ok((_, ws)) => {
                self.pos += ws.len();
                ws.len()
            }
            Err(_) => 0,
        }
    }

    /// Consumes characters while `pred` holds and returns them.
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.remaining();
        let end = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        self.pos += end;
        &rest[..end]
    }

    /// Consumes `expected` if it is the next character.
    pub fn match_char(&mut self, expected: char) -> Result<()> {
        match self.look_ahead(0) {
            Some(c) if c == expected => {
                self.pos += c.len_utf8();
                Ok(())
            }
            Some(found) => Err(Error::UnexpectedCharacter {
                header: None,
                expected,
                found,
                offset: self.pos,
            }),
            None => Err(self.premature(format!("'{}'", expected))),
        }
    }

    /// Scans the next token and checks its kind.
    pub fn match_token(&mut self, expected: &TokenKind) -> Result<Token<'a>> {
        let token = self.next_token()?;
        if &token.kind == expected {
            Ok(token)
        } else {
            Err(Error::UnexpectedToken {
                header: None,
                expected: expected.to_string(),
                found: token.describe(),
                offset: token.offset,
            })
        }
    }

    /// Scans a token-shaped lexeme (identifier, digits or keyword).
    pub fn expect_word(&mut self, expected: &str) -> Result<Token<'a>> {
        if self.is_at_end() {
            return Err(self.premature(expected));
        }
        let token = self.next_token()?;
        if token.is_word() {
            Ok(token)
        } else {
            Err(Error::UnexpectedToken {
                header: None,
                expected: expected.to_string(),
                found: token.describe(),
                offset: token.offset,
            })
        }
    }

    /// Consumes a CRLF or LF line terminator.
    pub fn match_newline(&mut self) -> Result<()> {
        match scan::newline(self.remaining()) {
            Ok((_, nl)) => {
                self.pos += nl.len();
                Ok(())
            }
            Err(_) if self.is_at_end() => Err(self.premature("newline")),
            Err(_) => {
                let token = self.peek_token()?;
                Err(Error::UnexpectedToken {
                    header: None,
                    expected: "newline".to_string(),
                    found: token.describe(),
                    offset: token.offset,
                })
            }
        }
    }

    /// Scans one lexeme under the active context and advances past it.
    pub fn next_token(&mut self) -> Result<Token<'a>> {
        let start = self.pos;
        let rest = self.remaining();
        let first = match rest.chars().next() {
            Some(c) => c,
            None => return Err(self.premature("token")),
        };

        let (kind, len, value) = if let Ok((_, nl)) = scan::newline(rest) {
            (TokenKind::Newline, nl.len(), nl.into())
        } else if let Ok((_, ws)) = scan::sp_or_ht(rest) {
            (TokenKind::Whitespace, ws.len(), ws.into())
        } else if first == '"' {
            match scan::quoted_string(rest) {
                Ok((tail, raw)) => (
                    TokenKind::QuotedString,
                    rest.len() - tail.len(),
                    scan::unescape(raw),
                ),
                Err(_) => {
                    let stop = rest[1..]
                        .find(|c| c == '\r' || c == '\n')
                        .map(|i| start + 1 + i)
                        .unwrap_or(self.input.len());
                    return Err(Error::PrematureEndOfInput {
                        header: None,
                        expected: "closing '\"'".to_string(),
                        offset: stop,
                    });
                }
            }
        } else if let Ok((_, word)) = scan::token(rest) {
            (self.classify(word), word.len(), word.into())
        } else {
            (
                TokenKind::Separator(first),
                first.len_utf8(),
                rest[..first.len_utf8()].into(),
            )
        };

        self.pos += len;
        trace!(kind = %kind, offset = start, context = ?self.context, "scanned token");
        Ok(Token { kind, value, offset: start })
    }

    /// Scans the next token without advancing.
    pub fn peek_token(&self) -> Result<Token<'a>> {
        self.clone().next_token()
    }

    fn classify(&self, word: &str) -> TokenKind {
        if scan::is_digits(word) {
            return TokenKind::Digits;
        }
        keyword(self.context, word).unwrap_or(TokenKind::Identifier)
    }

    fn premature(&self, expected: impl Into<String>) -> Error {
        Error::PrematureEndOfInput {
            header: None,
            expected: expected.into(),
            offset: self.pos,
        }
    }
}
