use crate::error::Result;
use crate::parser::{parse_generic_params, HeaderParse, HeaderParser};
use crate::types::{Event, HeaderName};

/// `event-type *( SEMI event-param )`
impl HeaderParse for Event {
    const NAME: HeaderName = HeaderName::Event;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        let lexer = parser.lexer();
        let event_type = lexer.expect_word("event type")?.into_value();
        let params = parse_generic_params(lexer)?;
        Ok(Event { event_type, params })
    }
}
