use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// SIP header names understood by the parser family.
///
/// Header names are case-insensitive in SIP. Known names keep their canonical
/// capitalization and may also be written in their RFC 3261 §7.3.3 compact
/// form (`t` for `To`, `k` for `Supported`, ...). Any other name is carried in
/// [`HeaderName::Other`] and compared case-insensitively.
///
/// # Examples
///
/// ```rust
/// use rvoip_sip_parser::types::HeaderName;
/// use std::str::FromStr;
///
/// assert_eq!(HeaderName::from_str("k").unwrap(), HeaderName::Supported);
/// assert_eq!(HeaderName::from_str("www-authenticate").unwrap(), HeaderName::WwwAuthenticate);
/// assert_eq!(HeaderName::from_str("X-Custom").unwrap(), HeaderName::Other("x-custom".into()));
/// ```
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub enum HeaderName {
    /// To: Logical recipient of the request
    To,
    /// From: Initiator of the request
    From,
    /// Contact: Where subsequent requests should be sent
    Contact,
    /// Reply-To: Address for replies
    ReplyTo,
    /// Refer-To: Target URI in REFER
    ReferTo,
    /// Referred-By: Identity of the referrer
    ReferredBy,
    /// Route: Forced route for a request
    Route,
    /// Record-Route: Proxies that want to stay in the path
    RecordRoute,
    /// Authorization: Credentials provided by a UA
    Authorization,
    /// Proxy-Authorization: Credentials for proxy authentication
    ProxyAuthorization,
    /// WWW-Authenticate: Challenge for authentication
    WwwAuthenticate,
    /// Proxy-Authenticate: Challenge for proxy authentication
    ProxyAuthenticate,
    /// Supported: Extensions supported by the UA
    Supported,
    /// Require: Extensions the UAS must support
    Require,
    /// Proxy-Require: Extensions proxies must support
    ProxyRequire,
    /// Unsupported: Extensions not supported by the UAS
    Unsupported,
    /// Allow: Methods supported by the UA
    Allow,
    /// Allow-Events: Event packages supported (RFC 6665)
    AllowEvents,
    /// Content-Encoding: Content codings applied to the body
    ContentEncoding,
    /// Call-ID: Unique identifier for this call
    CallId,
    /// CSeq: Command sequence number
    CSeq,
    /// Max-Forwards: Limit on the number of hops
    MaxForwards,
    /// Content-Length: Size of the message body
    ContentLength,
    /// Expires: Expiration interval
    Expires,
    /// Min-Expires: Minimum refresh interval
    MinExpires,
    /// Content-Type: Media type of the message body
    ContentType,
    /// Subject: Summary of the call
    Subject,
    /// Event: Event package for SUBSCRIBE/NOTIFY (RFC 6665)
    Event,
    /// Via: Path taken by the request so far
    Via,
    /// Any header name without a dedicated parser
    Other(String),
}

const KNOWN: &[HeaderName] = &[
    HeaderName::To,
    HeaderName::From,
    HeaderName::Contact,
    HeaderName::ReplyTo,
    HeaderName::ReferTo,
    HeaderName::ReferredBy,
    HeaderName::Route,
    HeaderName::RecordRoute,
    HeaderName::Authorization,
    HeaderName::ProxyAuthorization,
    HeaderName::WwwAuthenticate,
    HeaderName::ProxyAuthenticate,
    HeaderName::Supported,
    HeaderName::Require,
    HeaderName::ProxyRequire,
    HeaderName::Unsupported,
    HeaderName::Allow,
    HeaderName::AllowEvents,
    HeaderName::ContentEncoding,
    HeaderName::CallId,
    HeaderName::CSeq,
    HeaderName::MaxForwards,
    HeaderName::ContentLength,
    HeaderName::Expires,
    HeaderName::MinExpires,
    HeaderName::ContentType,
    HeaderName::Subject,
    HeaderName::Event,
    HeaderName::Via,
];

impl HeaderName {
    /// Canonical (long form) spelling.
    pub fn as_str(&self) -> &str {
        match self {
            HeaderName::To => "To",
            HeaderName::From => "From",
            HeaderName::Contact => "Contact",
            HeaderName::ReplyTo => "Reply-To",
            HeaderName::ReferTo => "Refer-To",
            HeaderName::ReferredBy => "Referred-By",
            HeaderName::Route => "Route",
            HeaderName::RecordRoute => "Record-Route",
            HeaderName::Authorization => "Authorization",
            HeaderName::ProxyAuthorization => "Proxy-Authorization",
            HeaderName::WwwAuthenticate => "WWW-Authenticate",
            HeaderName::ProxyAuthenticate => "Proxy-Authenticate",
            HeaderName::Supported => "Supported",
            HeaderName::Require => "Require",
            HeaderName::ProxyRequire => "Proxy-Require",
            HeaderName::Unsupported => "Unsupported",
            HeaderName::Allow => "Allow",
            HeaderName::AllowEvents => "Allow-Events",
            HeaderName::ContentEncoding => "Content-Encoding",
            HeaderName::CallId => "Call-ID",
            HeaderName::CSeq => "CSeq",
            HeaderName::MaxForwards => "Max-Forwards",
            HeaderName::ContentLength => "Content-Length",
            HeaderName::Expires => "Expires",
            HeaderName::MinExpires => "Min-Expires",
            HeaderName::ContentType => "Content-Type",
            HeaderName::Subject => "Subject",
            HeaderName::Event => "Event",
            HeaderName::Via => "Via",
            HeaderName::Other(name) => name,
        }
    }

    /// Compact form (RFC 3261 §7.3.3, RFC 3515, RFC 3892, RFC 6665), if any.
    pub fn compact_form(&self) -> Option<&'static str> {
        match self {
            HeaderName::To => Some("t"),
            HeaderName::From => Some("f"),
            HeaderName::Contact => Some("m"),
            HeaderName::CallId => Some("i"),
            HeaderName::ContentLength => Some("l"),
            HeaderName::ContentType => Some("c"),
            HeaderName::ContentEncoding => Some("e"),
            HeaderName::Subject => Some("s"),
            HeaderName::Supported => Some("k"),
            HeaderName::Via => Some("v"),
            HeaderName::ReferTo => Some("r"),
            HeaderName::ReferredBy => Some("b"),
            HeaderName::Event => Some("o"),
            HeaderName::AllowEvents => Some("u"),
            _ => None,
        }
    }

    /// Looks up a known header by its long or compact spelling.
    ///
    /// Returns `None` for names without a dedicated variant; this is the
    /// keyword table the lexer consults under
    /// [`LexContext::HeaderName`](crate::lexer::LexContext::HeaderName).
    pub fn from_keyword(lexeme: &str) -> Option<HeaderName> {
        KNOWN
            .iter()
            .find(|name| {
                name.as_str().eq_ignore_ascii_case(lexeme)
                    || name
                        .compact_form()
                        .is_some_and(|c| c.eq_ignore_ascii_case(lexeme))
            })
            .cloned()
    }

    /// True when `lexeme` spells this header's compact form.
    pub fn is_compact_spelling(&self, lexeme: &str) -> bool {
        self.compact_form()
            .is_some_and(|c| c.eq_ignore_ascii_case(lexeme))
    }

    /// True for names without a dedicated parser.
    pub fn is_extension(&self) -> bool {
        matches!(self, HeaderName::Other(_))
    }
}

impl PartialEq for HeaderName {
    fn eq(&self, other: &Self) -> bool {
        self.as_str().eq_ignore_ascii_case(other.as_str())
    }
}

impl Hash for HeaderName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.as_str().bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeaderName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.chars().all(crate::lexer::is_token_char) {
            return Err(Error::UnexpectedToken {
                header: None,
                expected: "header name".to_string(),
                found: format!("{:?}", s),
                offset: 0,
            });
        }
        Ok(HeaderName::from_keyword(trimmed)
            .unwrap_or_else(|| HeaderName::Other(trimmed.to_string())))
    }
}
