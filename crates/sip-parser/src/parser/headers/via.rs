use crate::error::Result;
use crate::lexer::Lexer;
use crate::parser::headers::numeric::parse_number;
use crate::parser::{parse_comma_list, parse_generic_params, unexpected, HeaderParse, HeaderParser};
use crate::types::{HeaderName, Via, ViaEntry};

/// `via-parm *(COMMA via-parm)`
impl HeaderParse for Via {
    const NAME: HeaderName = HeaderName::Via;

    fn parse_value(parser: &mut HeaderParser<'_, '_>) -> Result<Self> {
        parse_comma_list(parser.lexer(), false, "via-parm", parse_via_entry).map(Via)
    }
}

/// `sent-protocol LWS sent-by *( SEMI via-params )`
fn parse_via_entry(lexer: &mut Lexer<'_>) -> Result<ViaEntry> {
    let protocol_name = lexer.expect_word("protocol name")?.into_value();
    slash(lexer)?;
    let protocol_version = lexer.expect_word("protocol version")?.into_value();
    slash(lexer)?;
    let transport = lexer.expect_word("transport")?.into_value();
    if lexer.sp_or_ht() == 0 {
        return Err(unexpected(lexer, "whitespace before sent-by"));
    }
    let (host, port) = parse_sent_by(lexer)?;
    let params = parse_generic_params(lexer)?;
    Ok(ViaEntry {
        protocol_name,
        protocol_version,
        transport,
        host,
        port,
        params,
    })
}

fn slash(lexer: &mut Lexer<'_>) -> Result<()> {
    lexer.sp_or_ht();
    lexer.match_char('/')?;
    lexer.sp_or_ht();
    Ok(())
}

/// `host [ COLON port ]`, host being a name, IPv4 address or IPv6 reference.
fn parse_sent_by(lexer: &mut Lexer<'_>) -> Result<(String, Option<u16>)> {
    let host = if lexer.look_ahead(0) == Some('[') {
        lexer.match_char('[')?;
        let address = lexer.take_while(|c| c.is_ascii_hexdigit() || c == ':' || c == '.');
        if address.is_empty() {
            return Err(unexpected(lexer, "IPv6 address"));
        }
        lexer.match_char(']')?;
        format!("[{}]", address)
    } else {
        let name = lexer.take_while(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');
        if name.is_empty() {
            return Err(unexpected(lexer, "sent-by host"));
        }
        name.to_string()
    };

    lexer.sp_or_ht();
    let port = if lexer.look_ahead(0) == Some(':') {
        lexer.match_char(':')?;
        lexer.sp_or_ht();
        Some(parse_number::<u16>(lexer, "port")?)
    } else {
        None
    };
    Ok((host, port))
}
