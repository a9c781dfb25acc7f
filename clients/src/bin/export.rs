//! `eidos-export`: exports an ontology snapshot to RDF.
//!
//! **Outputs:**
//! - `<out>/<name>.ttl`: Turtle 1.1
//! - `<out>/<name>.rdf`: RDF/XML
//! - `<out>/<name>.nt`: N-Triples
//! - `<out>/<name>.jsonld`: JSON-LD 1.1
//!
//! Without `--out`, a single format is written to stdout.
//!
//! **Usage:**
//! ```
//! eidos-export --snapshot <file.json> [--format turtle|rdfxml|ntriples|jsonld|all] [--out <dir>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use eidos_clients::{init_tracing, load_snapshot, write_outputs};
use eidos_export::ExportFormat;

/// Export an ontology snapshot as RDF.
#[derive(Parser)]
#[command(name = "eidos-export", about = "Export an ontology snapshot as RDF")]
struct Args {
    /// Snapshot JSON document to export.
    #[arg(long)]
    snapshot: PathBuf,

    /// Output format, or `all` for every format.
    #[arg(long, default_value = "turtle")]
    format: String,

    /// Output directory; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let snapshot = load_snapshot(&args.snapshot)?;

    let outputs = if args.format.trim().eq_ignore_ascii_case("all") {
        eidos_export::export_all(&snapshot).context("Export failed")?
    } else {
        let format: ExportFormat = args.format.parse()?;
        let text = eidos_export::export(&snapshot, format)
            .with_context(|| format!("{format} export failed"))?;
        vec![(format, text)]
    };

    match &args.out {
        Some(out) => {
            let paths = write_outputs(out, &snapshot.name, &outputs)?;
            for path in paths {
                println!("  Written: {}", path.display());
            }
        }
        None => {
            let [(_, text)] = outputs.as_slice() else {
                bail!("--format all needs --out <dir>");
            };
            std::io::stdout()
                .lock()
                .write_all(text.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
