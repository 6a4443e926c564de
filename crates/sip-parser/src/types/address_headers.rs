//! Headers whose value is a single address with parameters.
//!
//! ```text
//! To          = ( "To" / "t" ) HCOLON ( name-addr / addr-spec ) *( SEMI to-param )
//! From        = ( "From" / "f" ) HCOLON from-spec
//! Reply-To    = "Reply-To" HCOLON rplyto-spec
//! Refer-To    = ( "Refer-To" / "r" ) HCOLON ( name-addr / addr-spec ) *( SEMI generic-param )
//! Referred-By = ( "Referred-By" / "b" ) HCOLON referrer-uri *( SEMI ( referredby-id-param / generic-param ) )
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::address::Address;

macro_rules! address_header {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub Address);

        impl $name {
            pub fn new(address: Address) -> Self {
                $name(address)
            }

            pub fn address(&self) -> &Address {
                &self.0
            }

            pub fn into_address(self) -> Address {
                self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = Address;

            fn deref(&self) -> &Address {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

address_header!(
    /// To header (RFC 3261 Section 20.39)
    To
);
address_header!(
    /// From header (RFC 3261 Section 20.20)
    From
);
address_header!(
    /// Reply-To header (RFC 3261 Section 20.31)
    ReplyTo
);
address_header!(
    /// Refer-To header (RFC 3515)
    ReferTo
);
address_header!(
    /// Referred-By header (RFC 3892)
    ReferredBy
);

impl ReferredBy {
    /// The `cid` parameter pointing at a signed body part, if any.
    pub fn cid(&self) -> Option<&str> {
        self.0
            .param("cid")
            .and_then(crate::types::param::GenericParam::value_str)
    }
}
