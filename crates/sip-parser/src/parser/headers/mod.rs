//! Concrete header grammars.
//!
//! Each header type gets a [`HeaderParse`](crate::parser::HeaderParse)
//! implementation composed from the shared sub-grammars, and a `FromStr`
//! implementation that parses the bare value (no header name):
//!
//! ```rust
//! use rvoip_sip_parser::types::{CSeq, Method, To};
//! use std::str::FromStr;
//!
//! let to = To::from_str("Bob <sip:bob@biloxi.com>;tag=a6c85cf").unwrap();
//! assert_eq!(to.tag(), Some("a6c85cf"));
//!
//! let cseq: CSeq = "314159 INVITE".parse().unwrap();
//! assert_eq!(cseq.method, Method::Invite);
//! ```

pub mod address;
pub mod auth;
pub mod call_id;
pub mod content_type;
pub mod event;
pub mod method;
pub mod numeric;
pub mod subject;
pub mod token_list;
pub mod via;

use crate::error::{Error, Result};
use crate::types::{
    Allow, AllowEvents, Authorization, CSeq, CallId, Contact, ContentEncoding, ContentLength,
    ContentType, Event, Expires, MaxForwards, MinExpires, ProxyAuthenticate, ProxyAuthorization,
    ProxyRequire, RecordRoute, ReferTo, ReferredBy, ReplyTo, Require, Route, Subject, Supported,
    To, Unsupported, Via, WwwAuthenticate,
};

macro_rules! impl_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl std::str::FromStr for $ty {
                type Err = Error;

                fn from_str(s: &str) -> Result<Self> {
                    crate::parser::parse_value(s)
                }
            }
        )*
    };
}

impl_from_str!(
    To,
    crate::types::From,
    ReplyTo,
    ReferTo,
    ReferredBy,
    Contact,
    Route,
    RecordRoute,
    Authorization,
    ProxyAuthorization,
    WwwAuthenticate,
    ProxyAuthenticate,
    Supported,
    Require,
    ProxyRequire,
    Unsupported,
    Allow,
    ContentEncoding,
    AllowEvents,
    CallId,
    CSeq,
    MaxForwards,
    ContentLength,
    Expires,
    MinExpires,
    ContentType,
    Subject,
    Event,
    Via,
);
