//! # Authentication values
//!
//! Challenge and credentials values share one shape: an auth-scheme followed
//! by an ordered list of `name=value` auth-params (RFC 3261 Section 25.1):
//!
//! ```text
//! challenge     = ("Digest" LWS digest-cln *(COMMA digest-cln)) / other-challenge
//! other-challenge = auth-scheme LWS auth-param *(COMMA auth-param)
//! auth-param    = auth-param-name EQUAL ( token / quoted-string )
//! ```
//!
//! No meaning is given to known parameter names here. Duplicates are kept;
//! the consumer decides which instance is authoritative. The named accessors
//! ([`Challenge::realm`], [`Challenge::nonce`]) simply return the first match.
//!
//! Schemes such as `Basic` (RFC 7617) carry a single token68 blob instead of
//! auth-params; it is kept in [`Challenge::token68`].

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::param::escape_quoted;

/// One `name=value` pair inside a challenge or credentials value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthParam {
    pub name: String,
    /// Unescaped value
    pub value: String,
    /// Whether the value was written as a quoted-string
    pub quoted: bool,
}

impl AuthParam {
    pub fn new(name: impl Into<String>, value: impl Into<String>, quoted: bool) -> Self {
        AuthParam {
            name: name.into(),
            value: value.into(),
            quoted,
        }
    }
}

impl fmt::Display for AuthParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quoted {
            write!(f, "{}=\"{}\"", self.name, escape_quoted(&self.value))
        } else {
            write!(f, "{}={}", self.name, self.value)
        }
    }
}

/// An auth-scheme with its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Challenge {
    pub scheme: String,
    pub params: Vec<AuthParam>,
    pub token68: Option<String>,
}

/// Credentials have the same structure as challenges.
pub type Credentials = Challenge;

impl Challenge {
    pub fn new(scheme: impl Into<String>, params: Vec<AuthParam>) -> Self {
        Challenge {
            scheme: scheme.into(),
            params,
            token68: None,
        }
    }

    pub fn with_token68(scheme: impl Into<String>, token68: impl Into<String>) -> Self {
        Challenge {
            scheme: scheme.into(),
            params: Vec::new(),
            token68: Some(token68.into()),
        }
    }

    /// Case-insensitive scheme comparison.
    pub fn is_scheme(&self, scheme: &str) -> bool {
        self.scheme.eq_ignore_ascii_case(scheme)
    }

    /// First parameter called `name` (case-insensitive).
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .map(|p| p.value.as_str())
    }

    /// Every value of parameter `name`, in input order.
    pub fn params_named<'s>(&'s self, name: &'s str) -> impl Iterator<Item = &'s str> + 's {
        self.params
            .iter()
            .filter(move |p| p.name.eq_ignore_ascii_case(name))
            .map(|p| p.value.as_str())
    }

    pub fn realm(&self) -> Option<&str> {
        self.param("realm")
    }

    pub fn nonce(&self) -> Option<&str> {
        self.param("nonce")
    }

    /// Decodes `Basic` credentials into `(user-id, password)`.
    ///
    /// Returns `None` for other schemes or when the blob is not valid base64
    /// of `user:password`.
    pub fn basic_credentials(&self) -> Option<(String, String)> {
        if !self.is_scheme("Basic") {
            return None;
        }
        let decoded = STANDARD.decode(self.token68.as_deref()?).ok()?;
        let text = String::from_utf8(decoded).ok()?;
        let (user, password) = text.split_once(':')?;
        Some((user.to_string(), password.to_string()))
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.scheme)?;
        if let Some(token68) = &self.token68 {
            return write!(f, " {}", token68);
        }
        for (i, param) in self.params.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{}{}", sep, param)?;
        }
        Ok(())
    }
}

macro_rules! auth_header {
    ($(#[$doc:meta])* $name:ident, $inner:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub $inner);

        impl std::ops::Deref for $name {
            type Target = $inner;

            fn deref(&self) -> &Self::Target {
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

auth_header!(
    /// Authorization header (RFC 3261 Section 20.7)
    Authorization,
    Credentials
);
auth_header!(
    /// Proxy-Authorization header (RFC 3261 Section 20.28)
    ProxyAuthorization,
    Credentials
);
auth_header!(
    /// WWW-Authenticate header (RFC 3261 Section 20.44)
    WwwAuthenticate,
    Challenge
);
auth_header!(
    /// Proxy-Authenticate header (RFC 3261 Section 20.27)
    ProxyAuthenticate,
    Challenge
);
