use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::address::Address;
use crate::types::contact::write_list;

macro_rules! route_header {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub Vec<Address>);

        impl $name {
            pub fn new(entries: Vec<Address>) -> Self {
                $name(entries)
            }

            pub fn entries(&self) -> &[Address] {
                &self.0
            }

            pub fn first(&self) -> Option<&Address> {
                self.0.first()
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
                write_list(f, &self.0)
            }
        }
    };
}

route_header!(
    /// Route header (RFC 3261 Section 20.34): `Route = "Route" HCOLON route-param *(COMMA route-param)`
    Route
);
route_header!(
    /// Record-Route header (RFC 3261 Section 20.30)
    RecordRoute
);

impl Route {
    /// True when the first hop's URI carries the `lr` parameter.
    pub fn first_is_loose(&self) -> bool {
        self.first().is_some_and(|a| {
            a.uri
                .specific()
                .split(';')
                .skip(1)
                .any(|p| p.split('=').next().is_some_and(|n| n.eq_ignore_ascii_case("lr")))
        })
    }
}
