use crate::error::Result;
use crate::parser::{rest_of_line, HeaderParse, HeaderParser};
use crate::types::{HeaderName, Subject};

/// `[TEXT-UTF8-TRIM]`
impl HeaderParse for Subject {
    const NAME: HeaderName = HeaderName::Subject;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        Ok(Subject(rest_of_line(parser.lexer()).to_string()))
    }
}
