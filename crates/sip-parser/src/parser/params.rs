// generic-param = token [ EQUAL gen-value ]
// gen-value     = token / host / quoted-string
//
// `host` only adds IPv6 references over `token`; hostnames and IPv4
// addresses are already token-shaped.

use crate::error::Result;
use crate::lexer::{Lexer, TokenKind};
use crate::parser::{unexpected, word_or_quoted};
use crate::types::param::{GenericParam, GenericValue};

/// `*( SEMI generic-param )`
///
/// Stops at the first character that is not `;` (after optional
/// whitespace). Order and duplicates are preserved.
pub fn parse_generic_params(lexer: &mut Lexer<'_>) -> Result<Vec<GenericParam>> {
    let mut params = Vec::new();
    loop {
        lexer.sp_or_ht();
        if lexer.look_ahead(0) != Some(';') {
            break;
        }
        lexer.match_char(';')?;
        lexer.sp_or_ht();
        params.push(parse_generic_param(lexer)?);
    }
    Ok(params)
}

pub fn parse_generic_param(lexer: &mut Lexer<'_>) -> Result<GenericParam> {
    let name = lexer.expect_word("parameter name")?.into_value();
    lexer.sp_or_ht();
    if lexer.look_ahead(0) != Some('=') {
        return Ok(GenericParam::flag(name));
    }
    lexer.match_char('=')?;
    lexer.sp_or_ht();
    let value = parse_gen_value(lexer)?;
    Ok(GenericParam::new(name, Some(value)))
}

fn parse_gen_value(lexer: &mut Lexer<'_>) -> Result<GenericValue> {
    if lexer.look_ahead(0) == Some('[') {
        lexer.match_char('[')?;
        let address = lexer.take_while(|c| c.is_ascii_hexdigit() || c == ':' || c == '.');
        if address.is_empty() {
            return Err(unexpected(lexer, "IPv6 address"));
        }
        lexer.match_char(']')?;
        return Ok(GenericValue::Token(format!("[{}]", address)));
    }

    let token = word_or_quoted(lexer, "parameter value")?;
    Ok(match token.kind {
        TokenKind::QuotedString => GenericValue::Quoted(token.into_value()),
        _ => GenericValue::Token(token.into_value()),
    })
}
