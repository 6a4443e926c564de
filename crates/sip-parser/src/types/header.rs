use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::types::{
    Allow, AllowEvents, Authorization, CSeq, CallId, Contact, ContentEncoding, ContentLength,
    ContentType, Event, Expires, From, HeaderName, MaxForwards, MinExpires, ProxyAuthenticate,
    ProxyAuthorization, ProxyRequire, RecordRoute, ReferTo, ReferredBy, ReplyTo, Require, Route,
    Subject, Supported, To, Unsupported, Via, WwwAuthenticate,
};

/// A typed header value, as produced by
/// [`parse_header`](crate::parser::parse_header) and friends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "header", content = "value")]
pub enum ParsedHeader {
    To(To),
    From(From),
    ReplyTo(ReplyTo),
    ReferTo(ReferTo),
    ReferredBy(ReferredBy),
    Contact(Contact),
    Route(Route),
    RecordRoute(RecordRoute),
    Authorization(Authorization),
    ProxyAuthorization(ProxyAuthorization),
    WwwAuthenticate(WwwAuthenticate),
    ProxyAuthenticate(ProxyAuthenticate),
    Supported(Supported),
    Require(Require),
    ProxyRequire(ProxyRequire),
    Unsupported(Unsupported),
    Allow(Allow),
    ContentEncoding(ContentEncoding),
    AllowEvents(AllowEvents),
    CallId(CallId),
    CSeq(CSeq),
    MaxForwards(MaxForwards),
    ContentLength(ContentLength),
    Expires(Expires),
    MinExpires(MinExpires),
    ContentType(ContentType),
    Subject(Subject),
    Event(Event),
    Via(Via),
    /// A header without a dedicated grammar; the value is kept verbatim
    /// with surrounding whitespace trimmed.
    Extension { name: HeaderName, value: String },
}

impl ParsedHeader {
    /// The header name this value belongs to.
    pub fn name(&self) -> HeaderName {
        match self {
            ParsedHeader::To(_) => HeaderName::To,
            ParsedHeader::From(_) => HeaderName::From,
            ParsedHeader::ReplyTo(_) => HeaderName::ReplyTo,
            ParsedHeader::ReferTo(_) => HeaderName::ReferTo,
            ParsedHeader::ReferredBy(_) => HeaderName::ReferredBy,
            ParsedHeader::Contact(_) => HeaderName::Contact,
            ParsedHeader::Route(_) => HeaderName::Route,
            ParsedHeader::RecordRoute(_) => HeaderName::RecordRoute,
            ParsedHeader::Authorization(_) => HeaderName::Authorization,
            ParsedHeader::ProxyAuthorization(_) => HeaderName::ProxyAuthorization,
            ParsedHeader::WwwAuthenticate(_) => HeaderName::WwwAuthenticate,
            ParsedHeader::ProxyAuthenticate(_) => HeaderName::ProxyAuthenticate,
            ParsedHeader::Supported(_) => HeaderName::Supported,
            ParsedHeader::Require(_) => HeaderName::Require,
            ParsedHeader::ProxyRequire(_) => HeaderName::ProxyRequire,
            ParsedHeader::Unsupported(_) => HeaderName::Unsupported,
            ParsedHeader::Allow(_) => HeaderName::Allow,
            ParsedHeader::ContentEncoding(_) => HeaderName::ContentEncoding,
            ParsedHeader::AllowEvents(_) => HeaderName::AllowEvents,
            ParsedHeader::CallId(_) => HeaderName::CallId,
            ParsedHeader::CSeq(_) => HeaderName::CSeq,
            ParsedHeader::MaxForwards(_) => HeaderName::MaxForwards,
            ParsedHeader::ContentLength(_) => HeaderName::ContentLength,
            ParsedHeader::Expires(_) => HeaderName::Expires,
            ParsedHeader::MinExpires(_) => HeaderName::MinExpires,
            ParsedHeader::ContentType(_) => HeaderName::ContentType,
            ParsedHeader::Subject(_) => HeaderName::Subject,
            ParsedHeader::Event(_) => HeaderName::Event,
            ParsedHeader::Via(_) => HeaderName::Via,
            ParsedHeader::Extension { name, .. } => name.clone(),
        }
    }

    pub fn is_extension(&self) -> bool {
        matches!(self, ParsedHeader::Extension { .. })
    }

    fn value_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedHeader::To(v) => v.fmt(f),
            ParsedHeader::From(v) => v.fmt(f),
            ParsedHeader::ReplyTo(v) => v.fmt(f),
            ParsedHeader::ReferTo(v) => v.fmt(f),
            ParsedHeader::ReferredBy(v) => v.fmt(f),
            ParsedHeader::Contact(v) => v.fmt(f),
            ParsedHeader::Route(v) => v.fmt(f),
            ParsedHeader::RecordRoute(v) => v.fmt(f),
            ParsedHeader::Authorization(v) => v.fmt(f),
            ParsedHeader::ProxyAuthorization(v) => v.fmt(f),
            ParsedHeader::WwwAuthenticate(v) => v.fmt(f),
            ParsedHeader::ProxyAuthenticate(v) => v.fmt(f),
            ParsedHeader::Supported(v) => v.fmt(f),
            ParsedHeader::Require(v) => v.fmt(f),
            ParsedHeader::ProxyRequire(v) => v.fmt(f),
            ParsedHeader::Unsupported(v) => v.fmt(f),
            ParsedHeader::Allow(v) => v.fmt(f),
            ParsedHeader::ContentEncoding(v) => v.fmt(f),
            ParsedHeader::AllowEvents(v) => v.fmt(f),
            ParsedHeader::CallId(v) => v.fmt(f),
            ParsedHeader::CSeq(v) => v.fmt(f),
            ParsedHeader::MaxForwards(v) => v.fmt(f),
            ParsedHeader::ContentLength(v) => v.fmt(f),
            ParsedHeader::Expires(v) => v.fmt(f),
            ParsedHeader::MinExpires(v) => v.fmt(f),
            ParsedHeader::ContentType(v) => v.fmt(f),
            ParsedHeader::Subject(v) => v.fmt(f),
            ParsedHeader::Event(v) => v.fmt(f),
            ParsedHeader::Via(v) => v.fmt(f),
            ParsedHeader::Extension { value, .. } => f.write_str(value),
        }
    }
}

/// Renders `Name: value` using the long header name, without a line
/// terminator.
impl fmt::Display for ParsedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name())?;
        self.value_fmt(f)
    }
}
