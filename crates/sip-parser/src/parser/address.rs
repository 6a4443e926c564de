// name-addr    = [ display-name ] LAQUOT addr-spec RAQUOT
// addr-spec    = SIP-URI / SIPS-URI / absoluteURI
// display-name = *(token LWS) / quoted-string
//
// An unquoted display name and a bare addr-spec both start with a token;
// they are told apart by whether the first token run is followed by ':'
// (the URI scheme separator).

use crate::error::{Error, Result};
use crate::lexer::{is_token_char, Lexer};
use crate::parser::params::parse_generic_params;
use crate::parser::uri::{parse_uri, UriForm};
use crate::types::address::Address;
use crate::types::uri::Uri;

/// `( name-addr / addr-spec ) *( SEMI generic-param )`
///
/// Used by To, From, Contact, Reply-To, Refer-To and Referred-By.
pub fn parse_address(lexer: &mut Lexer<'_>) -> Result<Address> {
    let (display_name, uri) = address_portion(lexer, UriForm::AddrSpec)?;
    let params = parse_generic_params(lexer)?;
    Ok(Address::new(display_name, uri).with_params(params))
}

/// `name-addr *( SEMI generic-param )`, brackets required.
///
/// Used by Route and Record-Route.
pub fn parse_name_addr(lexer: &mut Lexer<'_>) -> Result<Address> {
    let (display_name, uri) = address_portion(lexer, UriForm::NameAddr)?;
    let params = parse_generic_params(lexer)?;
    Ok(Address::new(display_name, uri).with_params(params))
}

fn address_portion(lexer: &mut Lexer<'_>, allowed: UriForm) -> Result<(Option<String>, Uri)> {
    lexer.sp_or_ht();
    match lexer.look_ahead(0) {
        None | Some('\r') | Some('\n') => Err(malformed(lexer, "missing address")),
        Some('"') => {
            let display_name = lexer.next_token()?.into_value();
            lexer.sp_or_ht();
            let uri = bracketed_uri(lexer)?;
            Ok((Some(display_name), uri))
        }
        Some('<') => Ok((None, bracketed_uri(lexer)?)),
        Some(_) => {
            let run = lexer.run_length(0, is_token_char);
            if run > 0 && lexer.look_ahead(run) == Some(':') && allowed == UriForm::AddrSpec {
                return Ok((None, parse_uri(lexer, UriForm::AddrSpec)?));
            }

            let mut words = Vec::new();
            loop {
                lexer.sp_or_ht();
                match lexer.look_ahead(0) {
                    Some('<') if !words.is_empty() => break,
                    Some(c) if is_token_char(c) => words.push(lexer.take_while(is_token_char)),
                    _ => return Err(malformed(lexer, "expected display name or '<'")),
                }
            }
            let uri = bracketed_uri(lexer)?;
            Ok((Some(words.join(" ")), uri))
        }
    }
}

fn bracketed_uri(lexer: &mut Lexer<'_>) -> Result<Uri> {
    if lexer.look_ahead(0) != Some('<') {
        return Err(malformed(lexer, "expected '<'"));
    }
    lexer.match_char('<')?;
    let uri = parse_uri(lexer, UriForm::NameAddr)?;
    if lexer.look_ahead(0) != Some('>') {
        return Err(malformed(lexer, "missing closing '>'"));
    }
    lexer.match_char('>')?;
    Ok(uri)
}

fn malformed(lexer: &Lexer<'_>, reason: &str) -> Error {
    Error::MalformedAddress {
        header: None,
        reason: reason.to_string(),
        offset: lexer.offset(),
    }
}
