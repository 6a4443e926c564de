//! # Token-list headers
//!
//! Headers whose value is a comma-separated list of tokens:
//!
//! ```text
//! Supported        = ( "Supported" / "k" ) HCOLON [option-tag *(COMMA option-tag)]
//! Require          = "Require" HCOLON option-tag *(COMMA option-tag)
//! Proxy-Require    = "Proxy-Require" HCOLON option-tag *(COMMA option-tag)
//! Unsupported      = "Unsupported" HCOLON option-tag *(COMMA option-tag)
//! Content-Encoding = ( "Content-Encoding" / "e" ) HCOLON content-coding *(COMMA content-coding)
//! Allow-Events     = ( "Allow-Events" / "u" ) HCOLON event-type *(COMMA event-type)
//! ```
//!
//! Only `Supported` allows an empty value in RFC 3261. The parser accepts an
//! empty list for all four option-tag headers unless
//! [`ParserConfig::allow_empty_option_tags`](crate::config::ParserConfig) is
//! turned off; Content-Encoding and Allow-Events always need one element.
//!
//! ```rust
//! use rvoip_sip_parser::types::Supported;
//!
//! let supported = Supported::new(vec!["100rel".to_string(), "timer".to_string()]);
//! assert!(supported.contains("TIMER"));
//! assert_eq!(supported.to_string(), "100rel, timer");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! token_list_header {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub struct $name(pub Vec<String>);

        impl $name {
            pub fn new(tags: Vec<String>) -> Self {
                $name(tags)
            }

            pub fn tags(&self) -> &[String] {
                &self.0
            }

            /// Case-insensitive membership test.
            pub fn contains(&self, tag: &str) -> bool {
                self.0.iter().any(|t| t.eq_ignore_ascii_case(tag))
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0.join(", "))
            }
        }
    };
}

token_list_header!(
    /// Supported header (RFC 3261 Section 20.37)
    Supported
);
token_list_header!(
    /// Require header (RFC 3261 Section 20.32)
    Require
);
token_list_header!(
    /// Proxy-Require header (RFC 3261 Section 20.29)
    ProxyRequire
);
token_list_header!(
    /// Unsupported header (RFC 3261 Section 20.40)
    Unsupported
);
token_list_header!(
    /// Content-Encoding header (RFC 3261 Section 20.12)
    ContentEncoding
);
token_list_header!(
    /// Allow-Events header (RFC 6665 Section 8.2.2)
    AllowEvents
);
