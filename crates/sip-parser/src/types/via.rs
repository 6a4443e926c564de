//! # SIP Via Header
//!
//! ```text
//! Via           = ( "Via" / "v" ) HCOLON via-parm *(COMMA via-parm)
//! via-parm      = sent-protocol LWS sent-by *( SEMI via-params )
//! sent-protocol = protocol-name SLASH protocol-version SLASH transport
//! sent-by       = host [ COLON port ]
//! ```
//!
//! ```rust
//! use rvoip_sip_parser::types::ViaEntry;
//!
//! let entry = ViaEntry::new("UDP", "pc33.atlanta.com", Some(5060)).with_branch("z9hG4bK776asdhds");
//! assert_eq!(entry.to_string(), "SIP/2.0/UDP pc33.atlanta.com:5060;branch=z9hG4bK776asdhds");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::contact::write_list;
use crate::types::param::{find_param, GenericParam};

/// One via-parm.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViaEntry {
    pub protocol_name: String,
    pub protocol_version: String,
    pub transport: String,
    /// Host name, IPv4 address or bracketed IPv6 reference
    pub host: String,
    pub port: Option<u16>,
    pub params: Vec<GenericParam>,
}

impl ViaEntry {
    /// A `SIP/2.0` entry over `transport`.
    pub fn new(transport: impl Into<String>, host: impl Into<String>, port: Option<u16>) -> Self {
        ViaEntry {
            protocol_name: "SIP".to_string(),
            protocol_version: "2.0".to_string(),
            transport: transport.into(),
            host: host.into(),
            port,
            params: Vec::new(),
        }
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.params.push(GenericParam::token("branch", branch));
        self
    }

    pub fn param(&self, name: &str) -> Option<&GenericParam> {
        find_param(&self.params, name)
    }

    pub fn branch(&self) -> Option<&str> {
        self.param("branch").and_then(GenericParam::value_str)
    }

    pub fn received(&self) -> Option<&str> {
        self.param("received").and_then(GenericParam::value_str)
    }

    /// `Some(None)` for a bare `;rport` request, `Some(Some(n))` once filled in.
    pub fn rport(&self) -> Option<Option<u16>> {
        self.param("rport")
            .map(|p| p.value_str().and_then(|v| v.parse().ok()))
    }

    /// Branch carries the RFC 3261 magic cookie.
    pub fn is_rfc3261_branch(&self) -> bool {
        self.branch().is_some_and(|b| b.starts_with("z9hG4bK"))
    }
}

impl fmt::Display for ViaEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{} {}",
            self.protocol_name, self.protocol_version, self.transport, self.host
        )?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        for param in &self.params {
            write!(f, "{}", param)?;
        }
        Ok(())
    }
}

/// Via header: one or more via-parms in order, topmost first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Via(pub Vec<ViaEntry>);

impl Via {
    pub fn entries(&self) -> &[ViaEntry] {
        &self.0
    }

    pub fn top(&self) -> Option<&ViaEntry> {
        self.0.first()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Via {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.0)
    }
}
