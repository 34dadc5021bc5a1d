//! Tracing subscriber setup.
//!
//! Library crates only emit events; the binary decides where they go.
//!
//! | Flag(s)   | Level |
//! |-----------|-------|
//! | (none)    | WARN  |
//! | `-v`      | INFO  |
//! | `-vv`     | DEBUG |
//! | `-vvv`    | TRACE |
//! | `--quiet` | ERROR |
//!
//! `RUST_LOG` overrides all of the above.

use std::io::IsTerminal as _;

use eyre::{Result, eyre};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const CRATES: &[&str] = &[
    "cmlgen",
    "cmlgen_codegen",
    "cmlgen_codegen_php",
    "cmlgen_config",
    "cmlgen_syntax",
];

/// Install the global subscriber, writing to stderr.
pub fn init(verbose: u8, quiet: bool) -> Result<()> {
    let level = level(verbose, quiet);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(level)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| eyre!("failed to initialise tracing: {e}"))
}

/// `-q` wins over any number of `-v`.
fn level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn directives(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
