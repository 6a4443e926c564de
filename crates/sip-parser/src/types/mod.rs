//! Header value model.
//!
//! Values are plain data built once by a parser and not mutated by it
//! afterwards. All of them implement `Display` (a canonical rendering of the
//! header value) and serde's `Serialize`/`Deserialize`.

pub mod address;
pub mod address_headers;
pub mod allow;
pub mod auth;
pub mod call_id;
pub mod contact;
pub mod content_type;
pub mod cseq;
pub mod event;
pub mod header;
pub mod header_name;
pub mod method;
pub mod numeric;
pub mod option_tags;
pub mod param;
pub mod route;
pub mod subject;
pub mod uri;
pub mod via;

pub use address::Address;
pub use address_headers::{From, ReferTo, ReferredBy, ReplyTo, To};
pub use allow::Allow;
pub use auth::{
    AuthParam, Authorization, Challenge, Credentials, ProxyAuthenticate, ProxyAuthorization,
    WwwAuthenticate,
};
pub use call_id::CallId;
pub use contact::Contact;
pub use content_type::ContentType;
pub use cseq::CSeq;
pub use event::Event;
pub use header::ParsedHeader;
pub use header_name::HeaderName;
pub use method::Method;
pub use numeric::{ContentLength, Expires, MaxForwards, MinExpires};
pub use option_tags::{AllowEvents, ContentEncoding, ProxyRequire, Require, Supported, Unsupported};
pub use param::{GenericParam, GenericValue};
pub use route::{RecordRoute, Route};
pub use subject::Subject;
pub use uri::Uri;
pub use via::{Via, ViaEntry};
