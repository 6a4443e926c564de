use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of a generic parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenericValue {
    /// A token value (also used for bracketed IPv6 references)
    Token(String),
    /// A quoted-string value, stored unescaped
    Quoted(String),
}

impl GenericValue {
    pub fn as_str(&self) -> &str {
        match self {
            GenericValue::Token(s) | GenericValue::Quoted(s) => s,
        }
    }

    pub fn is_quoted(&self) -> bool {
        matches!(self, GenericValue::Quoted(_))
    }
}

impl fmt::Display for GenericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenericValue::Token(s) => f.write_str(s),
            GenericValue::Quoted(s) => write!(f, "\"{}\"", escape_quoted(s)),
        }
    }
}

/// `generic-param = token [ "=" gen-value ]`
///
/// Parameters are kept exactly as written: names are not normalized and
/// duplicates are preserved in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenericParam {
    pub name: String,
    pub value: Option<GenericValue>,
}

impl GenericParam {
    pub fn new(name: impl Into<String>, value: Option<GenericValue>) -> Self {
        GenericParam {
            name: name.into(),
            value,
        }
    }

    /// A parameter without a value, such as `;lr`.
    pub fn flag(name: impl Into<String>) -> Self {
        GenericParam::new(name, None)
    }

    pub fn token(name: impl Into<String>, value: impl Into<String>) -> Self {
        GenericParam::new(name, Some(GenericValue::Token(value.into())))
    }

    pub fn quoted(name: impl Into<String>, value: impl Into<String>) -> Self {
        GenericParam::new(name, Some(GenericValue::Quoted(value.into())))
    }

    pub fn value_str(&self) -> Option<&str> {
        self.value.as_ref().map(GenericValue::as_str)
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for GenericParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, ";{}={}", self.name, value),
            None => write!(f, ";{}", self.name),
        }
    }
}

/// First parameter called `name` (case-insensitive).
pub fn find_param<'p>(params: &'p [GenericParam], name: &str) -> Option<&'p GenericParam> {
    params.iter().find(|p| p.is_named(name))
}

pub(crate) fn escape_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
