//! SIP header parsing for rvoip
//!
//! This crate turns SIP header lines into typed values. It is built from
//! three layers:
//!
//! - [`lexer`]: a character-stream scanner with a selectable keyword table
//!   ([`LexContext`]) producing [`Token`]s on demand
//! - [`parser`]: recursive-descent grammars, a shared set of sub-grammars
//!   (generic parameters, addresses, authentication challenges, comma lists)
//!   and one [`HeaderParse`] implementation per header type
//! - [`types`]: the header value model
//!
//! Input is expected to be line-unfolded by the message reader; splitting a
//! message into header lines and transport I/O are not handled here.
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_parser::prelude::*;
//!
//! let auth: Authorization =
//!     HeaderParser::new("Authorization: Digest realm=\"example.com\", nonce=\"abc123\"\n")
//!         .parse()
//!         .unwrap();
//! assert_eq!(auth.scheme, "Digest");
//! assert_eq!(auth.realm(), Some("example.com"));
//!
//! let header = parse_header("To: <sip:bob@example.com>\n").unwrap();
//! assert_eq!(header.name(), HeaderName::To);
//! ```

pub mod config;
pub mod error;
pub mod lexer;
pub mod logging;
pub mod parser;
pub mod types;

pub use config::ParserConfig;
pub use error::{Error, Result};
pub use lexer::{LexContext, Lexer, Token, TokenKind};
pub use parser::{
    parse_header, parse_header_as, parse_header_block, parse_header_with, parse_next, HeaderParse,
    HeaderParser,
};
pub use types::{HeaderName, Method, ParsedHeader};

/// Re-export of common types and functions
pub mod prelude {
    pub use crate::config::ParserConfig;
    pub use crate::error::{Error, Result};
    pub use crate::lexer::{LexContext, Lexer, Token, TokenKind};
    pub use crate::parser::{
        parse_header, parse_header_as, parse_header_block, parse_header_with, parse_next,
        HeaderParse, HeaderParser,
    };
    // `types::From` is left out so the prelude does not shadow `std::convert::From`
    pub use crate::types::{
        Address, Allow, AllowEvents, AuthParam, Authorization, CSeq, CallId, Challenge, Contact,
        ContentEncoding, ContentLength, ContentType, Credentials, Event, Expires, GenericParam,
        GenericValue, HeaderName, MaxForwards, Method, MinExpires, ParsedHeader, ProxyAuthenticate,
        ProxyAuthorization, ProxyRequire, RecordRoute, ReferTo, ReferredBy, ReplyTo, Require, Route,
        Subject, Supported, To, Unsupported, Uri, Via, ViaEntry, WwwAuthenticate,
    };
}
