use crate::error::Result;
use crate::parser::{parse_generic_params, HeaderParse, HeaderParser};
use crate::types::{ContentType, HeaderName};

/// `m-type SLASH m-subtype *(SEMI m-parameter)`
impl HeaderParse for ContentType {
    const NAME: HeaderName = HeaderName::ContentType;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        let lexer = parser.lexer();
        let m_type = lexer.expect_word("media type")?.into_value();
        lexer.sp_or_ht();
        lexer.match_char('/')?;
        lexer.sp_or_ht();
        let m_subtype = lexer.expect_word("media subtype")?.into_value();
        let params = parse_generic_params(lexer)?;
        Ok(ContentType {
            m_type,
            m_subtype,
            params,
        })
    }
}
