use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::param::{find_param, GenericParam};

/// Content-Type header (RFC 3261 Section 20.15)
///
/// ```text
/// Content-Type = ( "Content-Type" / "c" ) HCOLON media-type
/// media-type   = m-type SLASH m-subtype *(SEMI m-parameter)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentType {
    pub m_type: String,
    pub m_subtype: String,
    pub params: Vec<GenericParam>,
}

impl ContentType {
    pub fn new(m_type: impl Into<String>, m_subtype: impl Into<String>) -> Self {
        ContentType {
            m_type: m_type.into(),
            m_subtype: m_subtype.into(),
            params: Vec::new(),
        }
    }

    /// `type/subtype` without parameters.
    pub fn essence(&self) -> String {
        format!("{}/{}", self.m_type, self.m_subtype)
    }

    /// Case-insensitive comparison of type and subtype.
    pub fn is(&self, m_type: &str, m_subtype: &str) -> bool {
        self.m_type.eq_ignore_ascii_case(m_type) && self.m_subtype.eq_ignore_ascii_case(m_subtype)
    }

    pub fn is_sdp(&self) -> bool {
        self.is("application", "sdp")
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        find_param(&self.params, name).and_then(GenericParam::value_str)
    }

    pub fn charset(&self) -> Option<&str> {
        self.param("charset")
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.m_type, self.m_subtype)?;
        for param in &self.params {
            write!(f, "{}", param)?;
        }
        Ok(())
    }
}
