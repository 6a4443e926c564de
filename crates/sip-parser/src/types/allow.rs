use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::method::Method;

/// Allow header (RFC 3261 Section 20.5)
///
/// ```text
/// Allow = "Allow" HCOLON [Method *(COMMA Method)]
/// ```
///
/// An empty value is legal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Allow(pub Vec<Method>);

impl Allow {
    pub fn new(methods: Vec<Method>) -> Self {
        Allow(methods)
    }

    pub fn methods(&self) -> &[Method] {
        &self.0
    }

    pub fn allows(&self, method: &Method) -> bool {
        self.0.contains(method)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Allow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, method) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", method)?;
        }
        Ok(())
    }
}
