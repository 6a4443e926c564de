use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// An absolute URI as it appeared in a header.
///
/// The header grammars only need to find where a URI starts and ends; the
/// URI grammar itself belongs to a separate component. The text is kept
/// verbatim and split once at the scheme separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Uri {
    raw: String,
    scheme_len: usize,
}

impl Uri {
    /// Validates the scheme prefix and wraps `raw`.
    pub fn parse(raw: &str) -> Result<Uri> {
        let scheme_len = scheme_length(raw).ok_or_else(|| Error::MalformedAddress {
            header: None,
            reason: format!("missing URI scheme in {:?}", raw),
            offset: 0,
        })?;
        if raw.len() == scheme_len + 1 {
            return Err(Error::MalformedAddress {
                header: None,
                reason: "empty URI after scheme".to_string(),
                offset: raw.len(),
            });
        }
        Ok(Uri {
            raw: raw.to_string(),
            scheme_len,
        })
    }

    /// The scheme, e.g. `sip`, `sips` or `tel`.
    pub fn scheme(&self) -> &str {
        &self.raw[..self.scheme_len]
    }

    /// Everything after `scheme:`.
    pub fn specific(&self) -> &str {
        &self.raw[self.scheme_len + 1..]
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The userinfo user part of a SIP URI, if any.
    pub fn user(&self) -> Option<&str> {
        let specific = self.specific();
        let at = specific.find('@')?;
        let userinfo = &specific[..at];
        Some(userinfo.split(':').next().unwrap_or(userinfo))
    }

    /// The host part of a SIP URI (brackets kept for IPv6 references).
    pub fn host(&self) -> &str {
        let specific = self.specific();
        let hostport = match specific.find('@') {
            Some(at) => &specific[at + 1..],
            None => specific,
        };
        let hostport = hostport
            .split(|c| c == ';' || c == '?')
            .next()
            .unwrap_or(hostport);
        if hostport.starts_with('[') {
            match hostport.find(']') {
                Some(end) => &hostport[..=end],
                None => hostport,
            }
        } else {
            hostport.split(':').next().unwrap_or(hostport)
        }
    }

    pub fn is_sip(&self) -> bool {
        self.scheme().eq_ignore_ascii_case("sip") || self.scheme().eq_ignore_ascii_case("sips")
    }
}

/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )` followed by `:`.
pub(crate) fn scheme_length(raw: &str) -> Option<usize> {
    let mut chars = raw.char_indices();
    match chars.next() {
        Some((_, c)) if c.is_ascii_alphabetic() => {}
        _ => return None,
    }
    for (i, c) in chars {
        if c == ':' {
            return Some(i);
        }
        if !(c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
            return None;
        }
    }
    None
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Uri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Uri::parse(s)
    }
}
