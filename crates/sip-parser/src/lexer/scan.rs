// Lexeme recognizers (RFC 3261 Section 25.1), applied to the input remaining
// at the lexer cursor. Each returns the unconsumed tail and the lexeme.
//
// token         = 1*(alphanum / "-" / "." / "!" / "%" / "*" / "_" / "+" / "`" / "'" / "~")
// quoted-string = DQUOTE *(qdtext / quoted-pair ) DQUOTE
// quoted-pair   = "\" (%x00-09 / %x0B-0C / %x0E-7F)

use nom::{
    branch::alt,
    bytes::complete::{escaped, is_not, tag, take_while1},
    character::complete::{char, digit1, none_of},
    combinator::{all_consuming, opt, recognize},
    sequence::delimited,
    IResult,
};
use std::borrow::Cow;

use super::{is_sp_or_ht, is_token_char};

pub(crate) type ScanResult<'a, O> = IResult<&'a str, O>;

pub(crate) fn token(input: &str) -> ScanResult<'_, &str> {
    take_while1(is_token_char)(input)
}

pub(crate) fn sp_or_ht(input: &str) -> ScanResult<'_, &str> {
    take_while1(is_sp_or_ht)(input)
}

/// CRLF, or a bare LF for inputs that were normalized upstream.
pub(crate) fn newline(input: &str) -> ScanResult<'_, &str> {
    alt((tag("\r\n"), tag("\n")))(input)
}

/// Returns the raw content between the quotes, escapes still in place.
pub(crate) fn quoted_string(input: &str) -> ScanResult<'_, &str> {
    delimited(
        char('"'),
        recognize(opt(escaped(is_not("\"\\\r\n"), '\\', none_of("\r\n")))),
        char('"'),
    )(input)
}

pub(crate) fn is_digits(lexeme: &str) -> bool {
    all_consuming(digit1::<&str, nom::error::Error<&str>>)(lexeme).is_ok()
}

/// Resolves quoted-pairs; borrows when there is nothing to resolve.
pub(crate) fn unescape(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}
