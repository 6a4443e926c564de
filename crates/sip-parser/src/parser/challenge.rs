// challenge  = auth-scheme 1*SP auth-param *( COMMA auth-param )
//            / auth-scheme 1*SP token68
// auth-param = token BWS EQUAL BWS ( token / quoted-string )
// token68    = 1*( ALPHA / DIGIT / "-" / "." / "_" / "~" / "+" / "/" ) *"="
//
// token68 (RFC 7235) is only considered for schemes other than Digest. The
// choice is made on a short character lookahead: a token run followed by a
// single '=' and then something other than a separator is an auth-param.

use crate::error::{Error, Result};
use crate::lexer::{is_sp_or_ht, is_token_char, Lexer, TokenKind};
use crate::parser::unexpected;
use crate::types::auth::{AuthParam, Challenge};

/// Scheme and auth-params of a challenge or credentials value.
///
/// Parameters are returned in input order with duplicates kept; no known
/// parameter name is interpreted.
pub fn parse_challenge(lexer: &mut Lexer<'_>) -> Result<Challenge> {
    lexer.sp_or_ht();
    let scheme = lexer.expect_word("auth-scheme")?.into_value();

    if lexer.sp_or_ht() == 0 && !lexer.at_line_end() {
        return Err(unexpected(lexer, "whitespace after auth-scheme"));
    }
    if lexer.at_line_end() {
        return Err(malformed(lexer, format!("missing auth-param after {}", scheme)));
    }

    if !scheme.eq_ignore_ascii_case("Digest") && at_token68(lexer) {
        let start = lexer.offset();
        let blob = lexer.take_while(is_token68_char);
        let padding = lexer.take_while(|c| c == '=');
        if blob.is_empty() {
            return Err(Error::MalformedAuthParam {
                header: None,
                reason: "expected auth-param or token68".to_string(),
                offset: start,
            });
        }
        return Ok(Challenge::with_token68(scheme, format!("{}{}", blob, padding)));
    }

    let mut params = vec![parse_auth_param(lexer)?];
    loop {
        lexer.sp_or_ht();
        if lexer.look_ahead(0) != Some(',') {
            break;
        }
        lexer.match_char(',')?;
        lexer.sp_or_ht();
        params.push(parse_auth_param(lexer)?);
    }
    Ok(Challenge::new(scheme, params))
}

fn parse_auth_param(lexer: &mut Lexer<'_>) -> Result<AuthParam> {
    if lexer.at_line_end() {
        return Err(malformed(lexer, "expected auth-param".to_string()));
    }
    let name = lexer.next_token()?;
    if !name.is_word() {
        return Err(Error::MalformedAuthParam {
            header: None,
            reason: format!("expected auth-param name, found {}", name.describe()),
            offset: name.offset,
        });
    }
    let name = name.into_value();

    lexer.sp_or_ht();
    if lexer.look_ahead(0) != Some('=') {
        return Err(malformed(lexer, format!("missing '=' after {}", name)));
    }
    lexer.match_char('=')?;
    lexer.sp_or_ht();
    if lexer.at_line_end() {
        return Err(malformed(lexer, format!("missing value for {}", name)));
    }

    let value = lexer.next_token()?;
    match value.kind {
        TokenKind::QuotedString => Ok(AuthParam::new(name, value.into_value(), true)),
        _ if value.is_word() => Ok(AuthParam::new(name, value.into_value(), false)),
        _ => Err(Error::MalformedAuthParam {
            header: None,
            reason: format!("bad value for {}: {}", name, value.describe()),
            offset: value.offset,
        }),
    }
}

fn at_token68(lexer: &Lexer<'_>) -> bool {
    let name = lexer.run_length(0, is_token_char);
    let after_name = name + lexer.run_length(name, is_sp_or_ht);
    let equals = lexer.run_length(after_name, |c| c == '=');
    if name == 0 || equals != 1 {
        return true;
    }
    let after_equals = after_name + 1;
    let value_at = after_equals + lexer.run_length(after_equals, is_sp_or_ht);
    matches!(lexer.look_ahead(value_at), None | Some(',') | Some('\r') | Some('\n'))
}

fn is_token68_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~' | '+' | '/')
}

fn malformed(lexer: &Lexer<'_>, reason: String) -> Error {
    Error::MalformedAuthParam {
        header: None,
        reason,
        offset: lexer.offset(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::LexContext;

    fn challenge(input: &str) -> Result<Challenge> {
        let mut lexer = Lexer::new(input);
        lexer.select_context(LexContext::Value);
        parse_challenge(&mut lexer)
    }

    #[test]
    fn test_digest_params_in_order() {
        let c = challenge("Digest realm=\"example.com\", nonce=\"abc123\"\n").unwrap();
        assert_eq!(c.scheme, "Digest");
        assert_eq!(
            c.params,
            vec![
                AuthParam::new("realm", "example.com", true),
                AuthParam::new("nonce", "abc123", true),
            ]
        );
        assert_eq!(c.token68, None);
    }

    #[test]
    fn test_mixed_token_and_quoted_values() {
        let c = challenge(
            "Digest username=\"bob\" , realm = \"biloxi.com\",nc=00000001,qop=auth,algorithm=MD5\n",
        )
        .unwrap();
        let names: Vec<_> = c.params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["username", "realm", "nc", "qop", "algorithm"]);
        assert_eq!(c.param("nc"), Some("00000001"));
        assert!(!c.params[4].quoted);
    }

    #[test]
    fn test_duplicates_retained() {
        let c = challenge("Digest realm=\"a\", realm=\"b\"\n").unwrap();
        assert_eq!(c.params.len(), 2);
        assert_eq!(c.realm(), Some("a"));
    }

    #[test]
    fn test_token68() {
        let c = challenge("Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==\n").unwrap();
        assert_eq!(c.token68.as_deref(), Some("QWxhZGRpbjpvcGVuIHNlc2FtZQ=="));
        assert!(c.params.is_empty());

        let c = challenge("Basic realm=\"x\"\n").unwrap();
        assert_eq!(c.realm(), Some("x"));

        let c = challenge("Bearer abc/def+g=\n").unwrap();
        assert_eq!(c.token68.as_deref(), Some("abc/def+g="));
    }

    #[test]
    fn test_malformed_auth_params() {
        assert!(matches!(
            challenge("Digest\n"),
            Err(Error::MalformedAuthParam { offset: 6, .. })
        ));
        assert!(matches!(
            challenge("Digest realm\n"),
            Err(Error::MalformedAuthParam { offset: 12, .. })
        ));
        assert!(matches!(
            challenge("Digest realm=\"a\",\n"),
            Err(Error::MalformedAuthParam { offset: 17, .. })
        ));
        assert!(matches!(
            challenge("Digest realm=,\n"),
            Err(Error::MalformedAuthParam { offset: 13, .. })
        ));
        assert!(matches!(
            challenge("Digest =x\n"),
            Err(Error::MalformedAuthParam { offset: 7, .. })
        ));
        assert!(matches!(
            challenge("Digest,realm=x\n"),
            Err(Error::UnexpectedToken { offset: 6, .. })
        ));
    }
}
