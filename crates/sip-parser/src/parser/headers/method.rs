// Allow and CSeq scan their method tokens under LexContext::Method so that
// standard methods come back as keywords; everything else in the value is
// scanned under LexContext::Value.

use crate::error::Result;
use crate::lexer::{LexContext, Lexer, TokenKind};
use crate::parser::headers::numeric::parse_number;
use crate::parser::{parse_comma_list, unexpected, HeaderParse, HeaderParser};
use crate::types::{Allow, CSeq, HeaderName, Method};

/// Reads one method token; the lexer must be under `LexContext::Method`.
pub(crate) fn parse_method(lexer: &mut Lexer<'_>) -> Result<Method> {
    if lexer.is_at_end() {
        return Err(unexpected(lexer, "method"));
    }
    let mut probe = lexer.clone();
    let token = probe.next_token()?;
    let method = match &token.kind {
        TokenKind::Method(method) => method.clone(),
        TokenKind::Identifier => Method::Extension(token.value.to_string()),
        _ => return Err(unexpected(lexer, "method")),
    };
    *lexer = probe;
    Ok(method)
}

/// `[Method *(COMMA Method)]`
impl HeaderParse for Allow {
    const NAME: HeaderName = HeaderName::Allow;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        let lexer = parser.lexer();
        lexer.select_context(LexContext::Method);
        let methods = parse_comma_list(lexer, true, "method", parse_method)?;
        lexer.select_context(LexContext::Value);
        Ok(Allow(methods))
    }
}

/// `1*DIGIT LWS Method`
impl HeaderParse for CSeq {
    const NAME: HeaderName = HeaderName::CSeq;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        let lexer = parser.lexer();
        let seq = parse_number(lexer, "sequence number")?;
        if lexer.sp_or_ht() == 0 {
            return Err(unexpected(lexer, "whitespace before method"));
        }
        lexer.select_context(LexContext::Method);
        let method = parse_method(lexer)?;
        lexer.select_context(LexContext::Value);
        Ok(CSeq { seq, method })
    }
}
