//! Parser configuration.
//!
//! ```toml
//! compact_forms = true
//! allow_empty_option_tags = false
//! max_line_length = 4096
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Default upper bound for a single header line, in bytes.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 8192;

/// Knobs that change what the header grammars accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Accept compact header names (`t`, `f`, `k`, ...)
    pub compact_forms: bool,
    /// Accept Supported/Require/Proxy-Require/Unsupported with no option-tags
    pub allow_empty_option_tags: bool,
    /// Header lines longer than this fail before any token is read
    pub max_line_length: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            compact_forms: true,
            allow_empty_option_tags: true,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

impl ParserConfig {
    /// Long header names only, at least one option-tag per list.
    pub fn strict() -> Self {
        ParserConfig {
            compact_forms: false,
            allow_empty_option_tags: false,
            ..Default::default()
        }
    }

    pub fn with_compact_forms(mut self, enabled: bool) -> Self {
        self.compact_forms = enabled;
        self
    }

    pub fn with_empty_option_tags(mut self, allowed: bool) -> Self {
        self.allow_empty_option_tags = allowed;
        self
    }

    pub fn with_max_line_length(mut self, limit: usize) -> Self {
        self.max_line_length = limit;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_line_length == 0 {
            return Err(Error::Config("max_line_length must be positive".to_string()));
        }
        Ok(())
    }

    /// Parses and validates a TOML document; missing keys take defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: ParserConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
