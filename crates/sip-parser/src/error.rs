use std::io;
use thiserror::Error;

use crate::types::HeaderName;

/// A type alias for handling `Result`s with `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while scanning or parsing SIP header lines.
///
/// Every parse failure records the input offset it was detected at. Variants
/// raised from inside a header grammar also carry the header being parsed;
/// the lexer itself does not know which header it is scanning, so the
/// [`HeaderParser`](crate::parser::HeaderParser) fills that in on the way out
/// (see [`Error::with_header`]).
///
/// None of these errors are recoverable for the header that produced them:
/// no partial value is ever returned.
#[derive(Error, Debug)]
pub enum Error {
    /// The header-name token does not name the header the parser expects
    #[error("Expected header {expected}, found `{found}` at offset {offset}")]
    HeaderNameMismatch {
        expected: HeaderName,
        found: String,
        offset: usize,
    },

    /// A token of the wrong category or spelling was scanned
    #[error("{}Expected {expected}, found {found} at offset {offset}", in_header(.header))]
    UnexpectedToken {
        header: Option<HeaderName>,
        expected: String,
        found: String,
        offset: usize,
    },

    /// A specific character was required at the cursor
    #[error("{}Expected '{expected}', found {found:?} at offset {offset}", in_header(.header))]
    UnexpectedCharacter {
        header: Option<HeaderName>,
        expected: char,
        found: char,
        offset: usize,
    },

    /// The display-name / URI portion of an address is not well formed
    #[error("{}Malformed address at offset {offset}: {reason}", in_header(.header))]
    MalformedAddress {
        header: Option<HeaderName>,
        reason: String,
        offset: usize,
    },

    /// An auth-param in a challenge or credentials value is not well formed
    #[error("{}Malformed auth-param at offset {offset}: {reason}", in_header(.header))]
    MalformedAuthParam {
        header: Option<HeaderName>,
        reason: String,
        offset: usize,
    },

    /// Input ended (or the line ended) while more was required
    #[error("{}Premature end of input at offset {offset}: expected {expected}", in_header(.header))]
    PrematureEndOfInput {
        header: Option<HeaderName>,
        expected: String,
        offset: usize,
    },

    /// The header line exceeds the configured maximum length
    #[error("Header line at offset {offset} is {length} bytes long, limit is {limit}")]
    LineTooLong {
        length: usize,
        limit: usize,
        offset: usize,
    },

    /// Invalid parser or logging configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Input/output error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn in_header(header: &Option<HeaderName>) -> String {
    match header {
        Some(name) => format!("{}: ", name),
        None => String::new(),
    }
}

impl Error {
    /// Offset into the scanned input where the failure was detected.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::HeaderNameMismatch { offset, .. }
            | Error::UnexpectedToken { offset, .. }
            | Error::UnexpectedCharacter { offset, .. }
            | Error::MalformedAddress { offset, .. }
            | Error::MalformedAuthParam { offset, .. }
            | Error::PrematureEndOfInput { offset, .. }
            | Error::LineTooLong { offset, .. } => Some(*offset),
            Error::Config(_) | Error::Io(_) => None,
        }
    }

    /// The header whose grammar raised this error, when known.
    pub fn header(&self) -> Option<&HeaderName> {
        match self {
            Error::HeaderNameMismatch { expected, .. } => Some(expected),
            Error::UnexpectedToken { header, .. }
            | Error::UnexpectedCharacter { header, .. }
            | Error::MalformedAddress { header, .. }
            | Error::MalformedAuthParam { header, .. }
            | Error::PrematureEndOfInput { header, .. } => header.as_ref(),
            _ => None,
        }
    }

    /// Attaches the header identity if the error does not carry one yet.
    pub fn with_header(mut self, name: HeaderName) -> Self {
        match &mut self {
            Error::UnexpectedToken { header, .. }
            | Error::UnexpectedCharacter { header, .. }
            | Error::MalformedAddress { header, .. }
            | Error::MalformedAuthParam { header, .. }
            | Error::PrematureEndOfInput { header, .. } => {
                if header.is_none() {
                    *header = Some(name);
                }
            }
            _ => {}
        }
        self
    }

    /// True for the errors produced by scanning and grammar checks, as
    /// opposed to configuration or I/O failures.
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, Error::Config(_) | Error::Io(_))
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
