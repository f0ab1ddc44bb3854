//! Command-line definition for `slt`.
//!
//! The filter deliberately has no options: input is stdin, output is stdout,
//! and behavior is fixed. The [`clap`] skeleton still provides `--help` and
//! `--version` and rejects stray arguments.

use clap::Parser;

/// Flatten structured JSON log lines from stdin with request timing.
///
/// Reads one JSON object per line (a bare `{...}` or a payload wrapped in
/// `<SL<` ... `>SL>` delimiters) and writes a flattened projection of each
/// event with computed `time_diff` and `since_req_origin` fields.
/// Unrecognized or malformed lines are dropped silently.
#[derive(Debug, Parser)]
#[command(name = "slt", version, about, long_about = None)]
pub struct Cli {}
