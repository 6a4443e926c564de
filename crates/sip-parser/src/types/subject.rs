use serde::{Deserialize, Serialize};
use std::fmt;

/// Subject header (RFC 3261 Section 20.36)
///
/// ```text
/// Subject = ( "Subject" / "s" ) HCOLON [TEXT-UTF8-TRIM]
/// ```
///
/// Free text; may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Subject(pub String);

impl Subject {
    pub fn new(text: impl Into<String>) -> Self {
        Subject(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
