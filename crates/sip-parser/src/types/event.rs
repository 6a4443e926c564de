use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::param::{find_param, GenericParam};

/// Event header (RFC 6665 Section 8.2.1)
///
/// ```text
/// Event      = ( "Event" / "o" ) HCOLON event-type *( SEMI event-param )
/// event-type = event-package *( "." event-template )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    /// Full event-type including templates, e.g. `presence.winfo`
    pub event_type: String,
    pub params: Vec<GenericParam>,
}

impl Event {
    pub fn new(event_type: impl Into<String>) -> Self {
        Event {
            event_type: event_type.into(),
            params: Vec::new(),
        }
    }

    /// The event package (the event-type before any template).
    pub fn package(&self) -> &str {
        self.event_type
            .split('.')
            .next()
            .unwrap_or(&self.event_type)
    }

    /// Event templates following the package, in order.
    pub fn templates(&self) -> impl Iterator<Item = &str> {
        self.event_type.split('.').skip(1)
    }

    /// The `id` parameter, used to match subscriptions.
    pub fn id(&self) -> Option<&str> {
        find_param(&self.params, "id").and_then(GenericParam::value_str)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.event_type)?;
        for param in &self.params {
            write!(f, "{}", param)?;
        }
        Ok(())
    }
}
