use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::address::Address;

/// Contact header (RFC 3261 Section 20.10)
///
/// ```text
/// Contact = ("Contact" / "m") HCOLON ( STAR / (contact-param *(COMMA contact-param)))
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Contact {
    /// `Contact: *`, used in REGISTER to remove all bindings
    Wildcard,
    Addresses(Vec<Address>),
}

impl Contact {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Contact::Wildcard)
    }

    /// The listed addresses; empty for the wildcard form.
    pub fn addresses(&self) -> &[Address] {
        match self {
            Contact::Wildcard => &[],
            Contact::Addresses(list) => list,
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Contact::Wildcard => f.write_str("*"),
            Contact::Addresses(list) => write_list(f, list),
        }
    }
}

pub(crate) fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
