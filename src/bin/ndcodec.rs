// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # ndcodec CLI
//!
//! Reads one encoded array as a JSON line and prints it as a nested list.
//!
//! ## Usage
//!
//! ```sh
//! # Convert from stdin
//! echo '{"__ndarray__": "AQAAAAIAAAADAAAABAAAAA==", "dtype": "<i4", "shape": [2,2]}' | ndcodec
//! [[1, 2], [3, 4]]
//!
//! # Read from a file, emit JSON
//! ndcodec --input request.json --format json
//! ```

mod common;

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use common::Result;
use ndcodec::{ConversionError, Converter, OutputFormat};

/// ndcodec - decode base64 numeric arrays into nested lists
///
/// Reads `{"__ndarray__": <base64>, "dtype": <dtype>, "shape": [..]}` from the
/// first input line and writes the array as a single line on stdout.
#[derive(Parser, Clone)]
#[command(name = "ndcodec")]
#[command(about = "Decode base64-encoded numeric arrays into nested lists", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Read the request from a file instead of stdin
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Output format (python, json)
    #[arg(short, long, default_value = "python")]
    format: OutputFormat,

    /// Log pipeline stages to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: Cli) -> Result<()> {
    let reader = common::open_input(cli.input.as_deref())?;
    let stdout = io::stdout();
    Converter::new(cli.format).run(reader, stdout.lock())?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    common::init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        match e.downcast_ref::<ConversionError>() {
            Some(err) => {
                let fields = err.log_fields();
                tracing::debug!(kind = err.kind(), stage = err.stage(), ?fields, "conversion failed");
                eprintln!("Error: {}: {err} (stage: {})", err.kind(), err.stage());
            }
            None => eprintln!("Error: {e:#}"),
        }
        process::exit(1);
    }
}
