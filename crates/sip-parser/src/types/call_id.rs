use serde::{Deserialize, Serialize};
use std::fmt;

/// Call-ID header (RFC 3261 Section 20.8)
///
/// ```text
/// Call-ID = ( "Call-ID" / "i" ) HCOLON callid
/// callid  = word [ "@" word ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallId(pub String);

impl CallId {
    pub fn new(id: impl Into<String>) -> Self {
        CallId(id.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// The part after `@`, if present.
    pub fn host(&self) -> Option<&str> {
        self.0.split_once('@').map(|(_, host)| host)
    }
}

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
