//! `eidos-conformance`: exports a snapshot in every format and validates
//! the results.
//!
//! Checks that each document parses, that the formats agree on the graph,
//! and that restrictions have the expected shape.
//!
//! **Usage:**
//! ```
//! eidos-conformance [--snapshot <file.json>]
//! ```
//!
//! Without `--snapshot` the built-in sample ontology is used. Exits non-zero
//! if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use eidos_clients::{init_tracing, load_snapshot};
use eidos_conformance::{run_all, Severity};

/// Run the Eidos export conformance suite.
#[derive(Parser)]
#[command(
    name = "eidos-conformance",
    about = "Validate every export format of an ontology snapshot"
)]
struct Args {
    /// Snapshot JSON document (default: the built-in sample ontology).
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let snapshot = match &args.snapshot {
        Some(path) => load_snapshot(path)?,
        None => eidos_export::fixtures::animals(),
    };

    let report = run_all(&snapshot)?;

    println!("Eidos Export Conformance Report: {}", snapshot.name);
    println!("================================");
    println!();

    for result in &report.results {
        println!("[{}] {}: {}", result.severity, result.validator, result.message);
        for detail in &result.details {
            println!("       {detail}");
        }
    }

    let failed = report.count(Severity::Failure);
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.count(Severity::Pass),
        report.count(Severity::Warning),
        failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {failed} check(s) did not pass.");
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
