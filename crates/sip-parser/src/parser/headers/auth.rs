use crate::error::Result;
use crate::parser::{parse_challenge, HeaderParse, HeaderParser};
use crate::types::{Authorization, HeaderName, ProxyAuthenticate, ProxyAuthorization, WwwAuthenticate};

impl HeaderParse for Authorization {
    const NAME: HeaderName = HeaderName::Authorization;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        parse_challenge(parser.lexer()).map(Authorization)
    }
}

impl HeaderParse for ProxyAuthorization {
    const NAME: HeaderName = HeaderName::ProxyAuthorization;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        parse_challenge(parser.lexer()).map(ProxyAuthorization)
    }
}

impl HeaderParse for WwwAuthenticate {
    const NAME: HeaderName = HeaderName::WwwAuthenticate;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        parse_challenge(parser.lexer()).map(WwwAuthenticate)
    }
}

impl HeaderParse for ProxyAuthenticate {
    const NAME: HeaderName = HeaderName::ProxyAuthenticate;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        parse_challenge(parser.lexer()).map(ProxyAuthenticate)
    }
}
