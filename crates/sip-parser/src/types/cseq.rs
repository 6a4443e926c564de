use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::method::Method;

/// CSeq header (RFC 3261 Section 20.16): `CSeq = "CSeq" HCOLON 1*DIGIT LWS Method`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CSeq {
    pub seq: u32,
    pub method: Method,
}

impl CSeq {
    pub fn new(seq: u32, method: Method) -> Self {
        CSeq { seq, method }
    }
}

impl fmt::Display for CSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.seq, self.method)
    }
}
