//! Headers whose value is a single decimal number.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! numeric_header {
    ($(#[$doc:meta])* $name:ident, $int:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub $int);

        impl $name {
            pub fn new(value: $int) -> Self {
                $name(value)
            }

            pub fn value(&self) -> $int {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_header!(
    /// Max-Forwards header (RFC 3261 Section 20.22), 0 to 255
    MaxForwards,
    u8
);
numeric_header!(
    /// Content-Length header (RFC 3261 Section 20.14)
    ContentLength,
    u32
);
numeric_header!(
    /// Expires header (RFC 3261 Section 20.19), delta-seconds
    Expires,
    u32
);
numeric_header!(
    /// Min-Expires header (RFC 3261 Section 20.23), delta-seconds
    MinExpires,
    u32
);
