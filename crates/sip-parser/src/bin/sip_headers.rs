//! Parses SIP header lines from a file or stdin and prints the typed values.
//!
//! ```text
//! printf 'Supported: 100rel, timer\r\nCSeq: 1 INVITE\r\n' | sip-headers --json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, warn};

use rvoip_sip_parser::logging::{parse_log_level, setup_logging, LoggingConfig};
use rvoip_sip_parser::{parse_header_with, ParserConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File containing header lines (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Parser configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print parsed headers as JSON, one object per line
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = parse_log_level(&args.log_level)?;
    setup_logging(LoggingConfig::new(level, "sip-headers"))?;

    let config = match &args.config {
        Some(path) => ParserConfig::from_file(path)
            .with_context(|| format!("loading parser config from {}", path.display()))?,
        None => ParserConfig::default(),
    };

    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let mut failures = 0usize;
    let mut parsed = 0usize;
    for (number, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line = format!("{}\r\n", line);
        match parse_header_with(&line, &config) {
            Ok(header) => {
                parsed += 1;
                if args.json {
                    println!("{}", serde_json::to_string(&header)?);
                } else {
                    println!("{}", header);
                }
            }
            Err(e) => {
                failures += 1;
                warn!(line = number + 1, error = %e, "header rejected");
                if args.json {
                    let report = serde_json::json!({
                        "line": number + 1,
                        "error": e.to_string(),
                        "offset": e.offset(),
                    });
                    println!("{}", report);
                } else {
                    eprintln!("line {}: {}", number + 1, e);
                }
            }
        }
    }

    info!(parsed, failures, "done");
    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}
