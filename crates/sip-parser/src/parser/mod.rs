//! # Header parsers
//!
//! Recursive-descent grammars over a [`Lexer`]. Every header follows the same
//! linear sequence: header name, `:`, the value grammar (possibly with
//! parameter or comma-list repetitions), then the line terminator. Nothing is
//! ever backtracked; each decision is made on at most one token (or a short
//! run of characters) of lookahead.
//!
//! The shared sub-grammars are plain functions over `&mut Lexer`:
//!
//! - [`parse_generic_params`] / [`parse_generic_param`]
//! - [`parse_address`] / [`parse_name_addr`]
//! - [`parse_challenge`]
//! - [`parse_comma_list`]
//!
//! Each header type implements [`HeaderParse`] by composing them, and
//! [`HeaderParser`] drives the common name / value / newline contract.
//!
//! ## Examples
//!
//! A standalone header line:
//!
//! ```rust
//! use rvoip_sip_parser::parser::HeaderParser;
//! use rvoip_sip_parser::types::Supported;
//!
//! let supported: Supported = HeaderParser::new("Supported: 100rel, timer\r\n").parse().unwrap();
//! assert_eq!(supported.tags(), ["100rel", "timer"]);
//! ```
//!
//! Several headers over one shared lexer, in order:
//!
//! ```rust
//! use rvoip_sip_parser::lexer::Lexer;
//! use rvoip_sip_parser::parser::HeaderParser;
//! use rvoip_sip_parser::types::{CallId, MaxForwards};
//!
//! let mut lexer = Lexer::new("Max-Forwards: 70\r\nCall-ID: a84b4c76e66710\r\n");
//! let hops: MaxForwards = HeaderParser::with_lexer(&mut lexer).parse().unwrap();
//! let call_id: CallId = HeaderParser::with_lexer(&mut lexer).parse().unwrap();
//! assert_eq!(hops.value(), 70);
//! assert_eq!(call_id.value(), "a84b4c76e66710");
//! assert!(lexer.is_at_end());
//! ```

pub mod address;
pub mod challenge;
pub mod dispatch;
pub mod headers;
pub mod list;
pub mod params;
pub mod uri;

pub use address::{parse_address, parse_name_addr};
pub use challenge::parse_challenge;
pub use dispatch::{parse_header, parse_header_as, parse_header_block, parse_header_with, parse_next};
pub use list::parse_comma_list;
pub use params::{parse_generic_param, parse_generic_params};
pub use uri::{parse_uri, UriForm};

use tracing::{debug, debug_span};

use crate::config::ParserConfig;
use crate::error::{Error, Result};
use crate::lexer::{LexContext, Lexer, Token, TokenKind};
use crate::types::{HeaderName, ParsedHeader};

/// Value grammar of one header type.
///
/// Implementors only consume the value: the header name has already been
/// matched and the lexer is positioned on the first non-whitespace character
/// after `:`, under [`LexContext::Value`]. Trailing whitespace and the line
/// terminator are handled by [`HeaderParser::parse`].
pub trait HeaderParse: Sized {
    /// The header this grammar accepts.
    const NAME: HeaderName;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self>;
}

enum LexerSlot<'l, 'a> {
    Owned(Lexer<'a>),
    Borrowed(&'l mut Lexer<'a>),
}

impl<'a> LexerSlot<'_, 'a> {
    fn get(&mut self) -> &mut Lexer<'a> {
        match self {
            LexerSlot::Owned(lexer) => lexer,
            LexerSlot::Borrowed(lexer) => lexer,
        }
    }

    fn is_owned(&self) -> bool {
        matches!(self, LexerSlot::Owned(_))
    }
}

/// Single-use driver for one header parse.
///
/// Either owns a fresh lexer over a standalone header line
/// ([`HeaderParser::new`]) or advances a caller's lexer in place
/// ([`HeaderParser::with_lexer`]). On success the cursor sits just past the
/// header's line terminator. On failure the cursor position is unspecified.
pub struct HeaderParser<'l, 'a> {
    lexer: LexerSlot<'l, 'a>,
    config: ParserConfig,
}

impl<'a> HeaderParser<'a, 'a> {
    /// Parser over a standalone, newline-terminated header line.
    ///
    /// Nothing may follow the line terminator.
    pub fn new(input: &'a str) -> Self {
        HeaderParser {
            lexer: LexerSlot::Owned(Lexer::new(input)),
            config: ParserConfig::default(),
        }
    }
}

impl<'l, 'a> HeaderParser<'l, 'a> {
    /// Parser continuing over a shared lexer positioned at a header start.
    pub fn with_lexer(lexer: &'l mut Lexer<'a>) -> Self {
        HeaderParser {
            lexer: LexerSlot::Borrowed(lexer),
            config: ParserConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn lexer(&mut self) -> &mut Lexer<'a> {
        self.lexer.get()
    }

    /// Matches the header-name token against `expected`, then consumes the
    /// colon and surrounding whitespace.
    ///
    /// Leaves the lexer under [`LexContext::Value`].
    pub fn header_name(&mut self, expected: &HeaderName) -> Result<()> {
        let compact_forms = self.config.compact_forms;
        let lexer = self.lexer.get();
        lexer.select_context(LexContext::HeaderName);
        if lexer.is_at_end() {
            return Err(Error::PrematureEndOfInput {
                header: Some(expected.clone()),
                expected: "header name".to_string(),
                offset: lexer.offset(),
            });
        }

        let token = lexer.next_token()?;
        let matches = match &token.kind {
            TokenKind::HeaderName(name) => name == expected,
            TokenKind::Identifier | TokenKind::Digits => {
                expected.is_extension() && token.value.eq_ignore_ascii_case(expected.as_str())
            }
            _ => false,
        };
        if !matches || (!compact_forms && expected.is_compact_spelling(&token.value)) {
            return Err(Error::HeaderNameMismatch {
                expected: expected.clone(),
                offset: token.offset,
                found: token.into_value(),
            });
        }

        lexer.sp_or_ht();
        lexer.match_char(':')?;
        lexer.sp_or_ht();
        lexer.select_context(LexContext::Value);
        Ok(())
    }

    /// Runs the full header contract for `H`: name, value, line terminator.
    pub fn parse<H: HeaderParse>(mut self) -> Result<H> {
        let span = debug_span!("parse_header", header = %H::NAME);
        let _enter = span.enter();

        self.run(|parser| {
            parser.header_name(&H::NAME)?;
            H::parse_value(parser)
        })
        .map_err(|e| {
            let e = e.with_header(H::NAME);
            debug!(error = %e, "header rejected");
            e
        })
    }

    /// Parses any header as an uninterpreted extension value.
    ///
    /// The value is the rest of the line with surrounding whitespace trimmed.
    pub fn parse_extension(mut self) -> Result<ParsedHeader> {
        let span = debug_span!("parse_header", header = "extension");
        let _enter = span.enter();

        let result = self.run(|parser| {
            let lexer = parser.lexer();
            lexer.select_context(LexContext::HeaderName);
            let token = lexer.next_token()?;
            let name = match &token.kind {
                TokenKind::HeaderName(name) => name.clone(),
                TokenKind::Identifier | TokenKind::Digits => HeaderName::Other(token.value.to_string()),
                _ => {
                    return Err(Error::UnexpectedToken {
                        header: None,
                        expected: "header name".to_string(),
                        found: token.describe(),
                        offset: token.offset,
                    })
                }
            };
            lexer.sp_or_ht();
            lexer.match_char(':')?;
            lexer.sp_or_ht();
            lexer.select_context(LexContext::Value);
            let value = rest_of_line(lexer).to_string();
            Ok(ParsedHeader::Extension { name, value })
        });
        if let Err(e) = &result {
            debug!(error = %e, "extension header rejected");
        }
        result
    }

    fn run<T>(&mut self, body: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let limit = self.config.max_line_length;
        let lexer = self.lexer.get();
        let length = lexer.line_length();
        if length > limit {
            return Err(Error::LineTooLong {
                length,
                limit,
                offset: lexer.offset(),
            });
        }

        let value = body(self)?;

        let owned = self.lexer.is_owned();
        let lexer = self.lexer.get();
        lexer.sp_or_ht();
        lexer.match_newline()?;
        if owned && !lexer.is_at_end() {
            return Err(unexpected(lexer, "end of input"));
        }
        Ok(value)
    }
}

/// Parses just a header value (no name, optional terminator), as used by the
/// `FromStr` implementations of the header types.
pub fn parse_value<H: HeaderParse>(value: &str) -> Result<H> {
    let mut lexer = Lexer::new(value);
    lexer.select_context(LexContext::Value);
    lexer.sp_or_ht();
    let mut parser = HeaderParser::with_lexer(&mut lexer);
    let parsed = H::parse_value(&mut parser).map_err(|e| e.with_header(H::NAME))?;

    let lexer = parser.lexer();
    lexer.sp_or_ht();
    if lexer.at_line_end() && !lexer.is_at_end() {
        lexer.match_newline()?;
    }
    if !lexer.is_at_end() {
        return Err(unexpected(lexer, "end of input").with_header(H::NAME));
    }
    Ok(parsed)
}

/// Error describing whatever is at the cursor when `expected` was required.
pub(crate) fn unexpected(lexer: &Lexer<'_>, expected: &str) -> Error {
    if lexer.is_at_end() {
        return Error::PrematureEndOfInput {
            header: None,
            expected: expected.to_string(),
            offset: lexer.offset(),
        };
    }
    match lexer.peek_token() {
        Ok(token) => Error::UnexpectedToken {
            header: None,
            expected: expected.to_string(),
            found: token.describe(),
            offset: token.offset,
        },
        Err(e) => e,
    }
}

/// Consumes a token-shaped lexeme or a quoted string.
pub(crate) fn word_or_quoted<'a>(lexer: &mut Lexer<'a>, expected: &str) -> Result<Token<'a>> {
    if lexer.is_at_end() {
        return Err(unexpected(lexer, expected));
    }
    let mut probe = lexer.clone();
    let token = probe.next_token()?;
    if token.is_word() || token.kind == TokenKind::QuotedString {
        *lexer = probe;
        Ok(token)
    } else {
        Err(unexpected(lexer, expected))
    }
}

/// Consumes and returns the rest of the current line, trailing SP/HTAB
/// removed. The terminator is left in place.
pub(crate) fn rest_of_line<'a>(lexer: &mut Lexer<'a>) -> &'a str {
    lexer
        .take_while(|c| c != '\r' && c != '\n')
        .trim_end_matches([' ', '\t'])
}
