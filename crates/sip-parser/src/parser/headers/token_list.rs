use crate::error::Result;
use crate::lexer::Token;
use crate::parser::{parse_comma_list, HeaderParse, HeaderParser};
use crate::types::{
    AllowEvents, ContentEncoding, HeaderName, ProxyRequire, Require, Supported, Unsupported,
};

fn parse_tokens(
    parser: &mut HeaderParser<'_, '_>,
    allow_empty: bool,
    expected: &str,
) -> Result<Vec<String>> {
    parse_comma_list(parser.lexer(), allow_empty, expected, |lexer| {
        lexer.expect_word(expected).map(Token::into_value)
    })
}

fn parse_option_tags(parser: &mut HeaderParser<'_, '_>) -> Result<Vec<String>> {
    let allow_empty = parser.config().allow_empty_option_tags;
    parse_tokens(parser, allow_empty, "option-tag")
}

impl HeaderParse for Supported {
    const NAME: HeaderName = HeaderName::Supported;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        parse_option_tags(parser).map(Supported)
    }
}

impl HeaderParse for Require {
    const NAME: HeaderName = HeaderName::Require;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        parse_option_tags(parser).map(Require)
    }
}

impl HeaderParse for ProxyRequire {
    const NAME: HeaderName = HeaderName::ProxyRequire;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        parse_option_tags(parser).map(ProxyRequire)
    }
}

impl HeaderParse for Unsupported {
    const NAME: HeaderName = HeaderName::Unsupported;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        parse_option_tags(parser).map(Unsupported)
    }
}

impl HeaderParse for ContentEncoding {
    const NAME: HeaderName = HeaderName::ContentEncoding;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        parse_tokens(parser, false, "content-coding").map(ContentEncoding)
    }
}

impl HeaderParse for AllowEvents {
    const NAME: HeaderName = HeaderName::AllowEvents;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        parse_tokens(parser, false, "event-type").map(AllowEvents)
    }
}
