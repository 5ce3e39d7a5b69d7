//! Reads a JSON job document on stdin and writes the ranked jobs to stdout.
//! On any failure prints `[]` and exits with status 1.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use jobfilter::batch::run_batch;

fn main() -> ExitCode {
    // stdout carries the result; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Batch filtering failed: {e:#}");
            let mut stdout = io::stdout().lock();
            let _ = stdout.write_all(b"[]").and_then(|_| stdout.flush());
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;

    let ranked = run_batch(&input)?;
    info!(returned = ranked.len(), "Batch ranking complete");

    let output = serde_json::to_string(&ranked).context("Failed to serialize results")?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
