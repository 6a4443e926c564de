// Boundary of the URI sub-grammar. The URI itself is validated only as far
// as its scheme; this module decides where it ends in the header.

use crate::error::{Error, Result};
use crate::lexer::{is_sp_or_ht, Lexer};
use crate::types::uri::Uri;

/// Where the URI appears, which decides what terminates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriForm {
    /// Inside `<...>`: runs up to `>`
    NameAddr,
    /// Bare addr-spec: `;`, `,` and `?` belong to the header, not the URI
    AddrSpec,
}

/// Reads a URI at the cursor.
pub fn parse_uri(lexer: &mut Lexer<'_>, form: UriForm) -> Result<Uri> {
    let start = lexer.offset();
    let raw = match form {
        UriForm::NameAddr => lexer.take_while(|c| c != '>' && !is_sp_or_ht(c) && !is_eol(c)),
        UriForm::AddrSpec => lexer.take_while(|c| {
            !matches!(c, ';' | ',' | '?' | '<' | '>' | '"') && !is_sp_or_ht(c) && !is_eol(c)
        }),
    };
    if raw.is_empty() {
        return Err(Error::MalformedAddress {
            header: None,
            reason: "empty URI".to_string(),
            offset: start,
        });
    }
    Uri::parse(raw).map_err(|e| match e {
        Error::MalformedAddress { reason, offset, .. } => Error::MalformedAddress {
            header: None,
            reason,
            offset: start + offset,
        },
        other => other,
    })
}

fn is_eol(c: char) -> bool {
    c == '\r' || c == '\n'
}
