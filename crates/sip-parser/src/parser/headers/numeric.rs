use std::str::FromStr;

use crate::error::{Error, Result};
use crate::lexer::{Lexer, TokenKind};
use crate::parser::{unexpected, HeaderParse, HeaderParser};
use crate::types::{ContentLength, Expires, HeaderName, MaxForwards, MinExpires};

/// Reads a run of decimal digits and converts it to `T`.
///
/// Values that overflow `T` fail with `UnexpectedToken` at the digit run.
pub(crate) fn parse_number<T: FromStr>(lexer: &mut Lexer<'_>, expected: &str) -> Result<T> {
    if lexer.is_at_end() {
        return Err(unexpected(lexer, expected));
    }
    let mut probe = lexer.clone();
    let token = probe.next_token()?;
    if token.kind != TokenKind::Digits {
        return Err(unexpected(lexer, expected));
    }
    let value = token.value.parse::<T>().map_err(|_| Error::UnexpectedToken {
        header: None,
        expected: expected.to_string(),
        found: format!("{} (out of range)", token.describe()),
        offset: token.offset,
    })?;
    *lexer = probe;
    Ok(value)
}

impl HeaderParse for MaxForwards {
    const NAME: HeaderName = HeaderName::MaxForwards;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        parse_number(parser.lexer(), "hop count (0-255)").map(MaxForwards)
    }
}

impl HeaderParse for ContentLength {
    const NAME: HeaderName = HeaderName::ContentLength;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        parse_number(parser.lexer(), "body length").map(ContentLength)
    }
}

impl HeaderParse for Expires {
    const NAME: HeaderName = HeaderName::Expires;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        parse_number(parser.lexer(), "delta-seconds").map(Expires)
    }
}

impl HeaderParse for MinExpires {
    const NAME: HeaderName = HeaderName::MinExpires;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        parse_number(parser.lexer(), "delta-seconds").map(MinExpires)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_headers() {
        let mf: MaxForwards = HeaderParser::new("Max-Forwards: 70\r\n").parse().unwrap();
        assert_eq!(mf.value(), 70);

        let cl: ContentLength = HeaderParser::new("l: 0\n").parse().unwrap();
        assert_eq!(cl.value(), 0);

        let ex: Expires = HeaderParser::new("Expires: 7200\n").parse().unwrap();
        assert_eq!(ex.value(), 7200);

        let me: MinExpires = HeaderParser::new("Min-Expires: 60\n").parse().unwrap();
        assert_eq!(me.value(), 60);
    }

    #[test]
    fn test_out_of_range() {
        let err = HeaderParser::new("Max-Forwards: 256\n").parse::<MaxForwards>().unwrap_err();
        assert!(matches!(err, Error::UnexpectedToken { offset: 14, .. }));
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_not_a_number() {
        assert!(matches!(
            HeaderParser::new("Expires: soon\n").parse::<Expires>(),
            Err(Error::UnexpectedToken { offset: 9, .. })
        ));
        assert!(matches!(
            HeaderParser::new("Content-Length: \n").parse::<ContentLength>(),
            Err(Error::UnexpectedToken { offset: 16, .. })
        ));
        assert!(matches!(
            HeaderParser::new("Content-Length: 12 34\n").parse::<ContentLength>(),
            Err(Error::UnexpectedToken { offset: 19, .. })
        ));
    }
}
