//! `oncall` CLI: replay on-call availability edits and check records.
//!
//! ## Usage
//!
//! ```sh
//! # Replay an editing session (stdin → stdout)
//! oncall run < session.json
//!
//! # Replay from file to file, with debug logging on stderr
//! oncall -v run -i session.json -o report.json
//!
//! # Batch-validate a record; exit status 1 when invalid
//! echo '{"dateFrom":"2024-05-01","dateTo":"2024-05-01","isAllDay":true}' | oncall check
//! ```
//!
//! A session script looks like:
//!
//! ```json
//! {
//!   "config": {
//!     "context": {"tenant": "acme", "timeZoneId": "Europe/Berlin", "onCallTagId": "on-call"}
//!   },
//!   "steps": [
//!     {"set": "dateFrom", "value": "2024-05-01"},
//!     {"set": "timeFrom", "value": "09:00"},
//!     {"reset": "timeFrom"},
//!     {"action": "confirm"}
//!   ]
//! }
//! ```

mod replay;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use oncall_core::{AvailabilityRecord, ErrorMessageLabels};
use std::io::{self, Read};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "oncall",
    version,
    about = "On-call duty availability validation CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay an editing session script and print a JSON report
    Run {
        /// Input script (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Batch-validate an availability record
    Check {
        /// Input record JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// JSON file with error message overrides
        #[arg(long)]
        labels: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run { input, output } => {
            let script = read_input(input.as_deref())?;
            let script: replay::Script =
                serde_json::from_str(&script).context("Failed to parse session script")?;
            let report = replay::run(script).context("Failed to replay session")?;
            let json = serde_json::to_string_pretty(&report)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Check { input, labels } => {
            let json = read_input(input.as_deref())?;
            let record: AvailabilityRecord =
                serde_json::from_str(&json).context("Failed to parse availability record")?;
            let labels = match labels {
                Some(path) => {
                    let raw = read_input(Some(&path))?;
                    serde_json::from_str::<ErrorMessageLabels>(&raw)
                        .with_context(|| format!("Failed to parse labels: {}", path))?
                }
                None => ErrorMessageLabels::default(),
            };

            let report = replay::check(&record, &labels);
            println!("{}", serde_json::to_string_pretty(&report)?);
            if !report.is_valid {
                process::exit(1);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
