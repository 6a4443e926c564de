use ordered_float::NotNan;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::param::{escape_quoted, find_param, GenericParam};
use crate::types::uri::Uri;

/// Represents a SIP address: `[display-name] <URI> *(;generic-param)`.
///
/// The value shared by every address-bearing header (To, From, Contact,
/// Route, ...). Parameters are the header parameters that follow the
/// address, in input order with duplicates kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    pub display_name: Option<String>,
    pub uri: Uri,
    pub params: Vec<GenericParam>,
}

impl Address {
    pub fn new(display_name: Option<String>, uri: Uri) -> Self {
        Address {
            display_name: display_name.filter(|s| !s.trim().is_empty()),
            uri,
            params: Vec::new(),
        }
    }

    pub fn with_params(mut self, params: Vec<GenericParam>) -> Self {
        self.params = params;
        self
    }

    /// First parameter called `name` (case-insensitive).
    pub fn param(&self, name: &str) -> Option<&GenericParam> {
        find_param(&self.params, name)
    }

    pub fn has_param(&self, name: &str) -> bool {
        self.param(name).is_some()
    }

    /// Gets the tag parameter value.
    pub fn tag(&self) -> Option<&str> {
        self.param("tag").and_then(GenericParam::value_str)
    }

    /// Gets the expires parameter value, if present and numeric.
    pub fn expires(&self) -> Option<u32> {
        self.param("expires")
            .and_then(GenericParam::value_str)
            .and_then(|v| v.parse().ok())
    }

    /// Gets the q parameter, if present and within 0.0 to 1.0.
    pub fn q(&self) -> Option<NotNan<f32>> {
        let q: f32 = self.param("q")?.value_str()?.parse().ok()?;
        if (0.0..=1.0).contains(&q) {
            NotNan::new(q).ok()
        } else {
            None
        }
    }
}

fn needs_quoting(display_name: &str) -> bool {
    display_name
        .split(' ')
        .any(|word| word.is_empty() || !word.chars().all(crate::lexer::is_token_char))
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.display_name {
            if needs_quoting(name) {
                write!(f, "\"{}\" ", escape_quoted(name))?;
            } else {
                write!(f, "{} ", name)?;
            }
        }
        write!(f, "<{}>", self.uri)?;
        for param in &self.params {
            write!(f, "{}", param)?;
        }
        Ok(())
    }
}
