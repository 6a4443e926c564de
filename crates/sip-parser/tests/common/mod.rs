// Common test utilities for sip-parser
#![allow(dead_code)]

use std::str::FromStr;
use std::sync::Once;

use rvoip_sip_parser::types::{Address, GenericParam, Uri};
use rvoip_sip_parser::{Error, HeaderParse, HeaderParser};

static TRACING: Once = Once::new();

/// Installs a test-writer subscriber once per test binary.
///
/// Honors `RUST_LOG`, e.g. `RUST_LOG=rvoip_sip_parser=trace`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Parses a standalone header line, panicking with the error on failure.
pub fn parse_ok<H: HeaderParse>(line: &str) -> H {
    HeaderParser::new(line)
        .parse()
        .unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", line, e))
}

/// Parses a standalone header line that must fail.
pub fn parse_err<H: HeaderParse + std::fmt::Debug>(line: &str) -> Error {
    match HeaderParser::new(line).parse::<H>() {
        Ok(value) => panic!("Expected {:?} to fail, got {:?}", line, value),
        Err(e) => e,
    }
}

/// Parses a string into a Uri, panicking on failure.
pub fn uri(uri_str: &str) -> Uri {
    Uri::from_str(uri_str)
        .unwrap_or_else(|e| panic!("Failed to parse test URI '{}': {:?}", uri_str, e))
}

/// Creates an Address struct.
pub fn addr(display_name: Option<&str>, uri_str: &str, params: Vec<GenericParam>) -> Address {
    Address {
        display_name: display_name.map(String::from),
        uri: uri(uri_str),
        params,
    }
}

pub fn param_tag(val: &str) -> GenericParam {
    GenericParam::token("tag", val)
}

pub fn param_flag(name: &str) -> GenericParam {
    GenericParam::flag(name)
}

pub fn param_other(name: &str, value: Option<&str>) -> GenericParam {
    match value {
        Some(v) => GenericParam::token(name, v),
        None => GenericParam::flag(name),
    }
}
