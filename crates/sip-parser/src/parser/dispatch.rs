//! Header-name dispatch.
//!
//! Looks at the header-name token without consuming it and hands the line to
//! the matching grammar. Headers without a dedicated grammar come back as
//! [`ParsedHeader::Extension`].

use std::str::FromStr;
use tracing::debug;

use crate::config::ParserConfig;
use crate::error::{Error, Result};
use crate::lexer::{LexContext, Lexer, TokenKind};
use crate::parser::{unexpected, HeaderParse, HeaderParser};
use crate::types::{HeaderName, ParsedHeader};

/// Parses one standalone header line with the default configuration.
///
/// ```rust
/// use rvoip_sip_parser::parser::parse_header;
/// use rvoip_sip_parser::types::{HeaderName, ParsedHeader};
///
/// let header = parse_header("Supported: 100rel, timer\n").unwrap();
/// assert_eq!(header.name(), HeaderName::Supported);
/// match header {
///     ParsedHeader::Supported(s) => assert_eq!(s.tags(), ["100rel", "timer"]),
///     other => panic!("unexpected header {:?}", other),
/// }
/// ```
pub fn parse_header(line: &str) -> Result<ParsedHeader> {
    parse_header_with(line, &ParserConfig::default())
}

/// Parses one standalone header line. Nothing may follow its terminator.
pub fn parse_header_with(line: &str, config: &ParserConfig) -> Result<ParsedHeader> {
    let mut lexer = Lexer::new(line);
    let header = parse_next(&mut lexer, config)?;
    if !lexer.is_at_end() {
        return Err(unexpected(&lexer, "end of input").with_header(header.name()));
    }
    Ok(header)
}

/// Parses a standalone header line as a specific header type.
pub fn parse_header_as<H: HeaderParse>(line: &str) -> Result<H> {
    HeaderParser::new(line).parse()
}

/// Parses the header at the cursor of a shared lexer and advances past its
/// line terminator.
pub fn parse_next(lexer: &mut Lexer<'_>, config: &ParserConfig) -> Result<ParsedHeader> {
    let name = peek_header_name(lexer)?;
    debug!(header = %name, offset = lexer.offset(), "dispatching header");

    let parser = HeaderParser::with_lexer(lexer).with_config(*config);
    match name {
        HeaderName::To => parser.parse().map(ParsedHeader::To),
        HeaderName::From => parser.parse().map(ParsedHeader::From),
        HeaderName::ReplyTo => parser.parse().map(ParsedHeader::ReplyTo),
        HeaderName::ReferTo => parser.parse().map(ParsedHeader::ReferTo),
        HeaderName::ReferredBy => parser.parse().map(ParsedHeader::ReferredBy),
        HeaderName::Contact => parser.parse().map(ParsedHeader::Contact),
        HeaderName::Route => parser.parse().map(ParsedHeader::Route),
        HeaderName::RecordRoute => parser.parse().map(ParsedHeader::RecordRoute),
        HeaderName::Authorization => parser.parse().map(ParsedHeader::Authorization),
        HeaderName::ProxyAuthorization => parser.parse().map(ParsedHeader::ProxyAuthorization),
        HeaderName::WwwAuthenticate => parser.parse().map(ParsedHeader::WwwAuthenticate),
        HeaderName::ProxyAuthenticate => parser.parse().map(ParsedHeader::ProxyAuthenticate),
        HeaderName::Supported => parser.parse().map(ParsedHeader::Supported),
        HeaderName::Require => parser.parse().map(ParsedHeader::Require),
        HeaderName::ProxyRequire => parser.parse().map(ParsedHeader::ProxyRequire),
        HeaderName::Unsupported => parser.parse().map(ParsedHeader::Unsupported),
        HeaderName::Allow => parser.parse().map(ParsedHeader::Allow),
        HeaderName::ContentEncoding => parser.parse().map(ParsedHeader::ContentEncoding),
        HeaderName::AllowEvents => parser.parse().map(ParsedHeader::AllowEvents),
        HeaderName::CallId => parser.parse().map(ParsedHeader::CallId),
        HeaderName::CSeq => parser.parse().map(ParsedHeader::CSeq),
        HeaderName::MaxForwards => parser.parse().map(ParsedHeader::MaxForwards),
        HeaderName::ContentLength => parser.parse().map(ParsedHeader::ContentLength),
        HeaderName::Expires => parser.parse().map(ParsedHeader::Expires),
        HeaderName::MinExpires => parser.parse().map(ParsedHeader::MinExpires),
        HeaderName::ContentType => parser.parse().map(ParsedHeader::ContentType),
        HeaderName::Subject => parser.parse().map(ParsedHeader::Subject),
        HeaderName::Event => parser.parse().map(ParsedHeader::Event),
        HeaderName::Via => parser.parse().map(ParsedHeader::Via),
        HeaderName::Other(_) => parser.parse_extension(),
    }
}

/// Parses consecutive header lines over one shared lexer, in order.
///
/// Stops at the end of input or after an empty line (the end of a message
/// header section). The first failing header aborts the whole block.
pub fn parse_header_block(text: &str, config: &ParserConfig) -> Result<Vec<ParsedHeader>> {
    let mut lexer = Lexer::new(text);
    let mut headers = Vec::new();
    while !lexer.is_at_end() {
        if lexer.at_line_end() {
            lexer.match_newline()?;
            break;
        }
        headers.push(parse_next(&mut lexer, config)?);
    }
    debug!(count = headers.len(), "parsed header block");
    Ok(headers)
}

fn peek_header_name(lexer: &Lexer<'_>) -> Result<HeaderName> {
    let mut probe = lexer.clone();
    probe.select_context(LexContext::HeaderName);
    if probe.is_at_end() {
        return Err(unexpected(&probe, "header name"));
    }
    let token = probe.next_token()?;
    match &token.kind {
        TokenKind::HeaderName(name) => Ok(name.clone()),
        TokenKind::Identifier | TokenKind::Digits => Ok(HeaderName::Other(token.value.to_string())),
        _ => Err(Error::UnexpectedToken {
            header: None,
            expected: "header name".to_string(),
            found: token.describe(),
            offset: token.offset,
        }),
    }
}

/// Parses a header line; a missing line terminator is tolerated.
impl FromStr for ParsedHeader {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.ends_with('\n') {
            parse_header(s)
        } else {
            parse_header(&format!("{}\r\n", s))
        }
    }
}
