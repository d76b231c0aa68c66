//! Main entry point for the elodiff calculator
//!
//! Reads win/loss/draw counts from the command line, computes the match
//! statistics and prints them. The only explicitly handled failure is a
//! wrongly shaped invocation, which prints the usage message to stdout
//! and exits with code 1; everything else is a straight-line pass.

use anyhow::Result;
use clap::Parser;
use elodiff::cli::{self, Args};
use elodiff::report;
use elodiff::stats::summarize;
use elodiff::types::MatchSummary;
use tracing::{debug, error};

/// Initialize structured logging on stderr
///
/// Diagnostics must never touch stdout; the four-line report is the
/// program's entire stdout contract.
fn init_logging() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Print the summary in the requested output mode
fn emit(summary: &MatchSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        print!("{}", report::render(summary));
    }
    Ok(())
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("{e:#}");
    }

    let args = Args::parse();
    let counts = match args.match_counts() {
        Ok(counts) => counts,
        Err(e) => {
            debug!("{e}");
            print!("{}", cli::usage(&cli::program_name()));
            std::process::exit(1);
        }
    };

    debug!(?counts, "parsed match counts");
    let summary = summarize(counts);

    if let Err(e) = emit(&summary, args.json_output()) {
        error!("failed to emit summary: {e:#}");
        std::process::exit(1);
    }
}
