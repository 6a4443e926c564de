use crate::error::Result;
use crate::lexer::is_token_char;
use crate::parser::{unexpected, HeaderParse, HeaderParser};
use crate::types::{CallId, HeaderName};

/// `word` character class (RFC 3261 Section 25.1).
fn is_word_char(c: char) -> bool {
    is_token_char(c)
        || matches!(
            c,
            '(' | ')' | '<' | '>' | ':' | '\\' | '"' | '/' | '[' | ']' | '?' | '{' | '}'
        )
}

/// `word [ "@" word ]`
impl HeaderParse for CallId {
    const NAME: HeaderName = HeaderName::CallId;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        let lexer = parser.lexer();
        let start = lexer.offset();
        if lexer.take_while(is_word_char).is_empty() {
            return Err(unexpected(lexer, "call-id"));
        }
        if lexer.look_ahead(0) == Some('@') {
            lexer.match_char('@')?;
            if lexer.take_while(is_word_char).is_empty() {
                return Err(unexpected(lexer, "call-id host"));
            }
        }
        Ok(CallId(lexer.input()[start..lexer.offset()].to_string()))
    }
}
