use crate::error::Result;
use crate::parser::{parse_address, parse_comma_list, parse_name_addr, HeaderParse, HeaderParser};
use crate::types::{Contact, HeaderName, RecordRoute, ReferTo, ReferredBy, ReplyTo, Route, To};

impl HeaderParse for To {
    const NAME: HeaderName = HeaderName::To;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        parse_address(parser.lexer()).map(To)
    }
}

impl HeaderParse for crate::types::From {
    const NAME: HeaderName = HeaderName::From;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        parse_address(parser.lexer()).map(crate::types::From)
    }
}

impl HeaderParse for ReplyTo {
    const NAME: HeaderName = HeaderName::ReplyTo;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        parse_address(parser.lexer()).map(ReplyTo)
    }
}

impl HeaderParse for ReferTo {
    const NAME: HeaderName = HeaderName::ReferTo;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        parse_address(parser.lexer()).map(ReferTo)
    }
}

impl HeaderParse for ReferredBy {
    const NAME: HeaderName = HeaderName::ReferredBy;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        parse_address(parser.lexer()).map(ReferredBy)
    }
}

/// `STAR / contact-param *(COMMA contact-param)`
impl HeaderParse for Contact {
    const NAME: HeaderName = HeaderName::Contact;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        let lexer = parser.lexer();
        lexer.sp_or_ht();
        if lexer.look_ahead(0) == Some('*') {
            lexer.match_char('*')?;
            return Ok(Contact::Wildcard);
        }
        parse_comma_list(lexer, false, "contact address", parse_address).map(Contact::Addresses)
    }
}

impl HeaderParse for Route {
    const NAME: HeaderName = HeaderName::Route;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        parse_comma_list(parser.lexer(), false, "route address", parse_name_addr).map(Route)
    }
}

impl HeaderParse for RecordRoute {
    const NAME: HeaderName = HeaderName::RecordRoute;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        parse_comma_list(parser.lexer(), false, "route address", parse_name_addr).map(RecordRoute)
    }
}
