//! Eidos export conformance suite.
//!
//! Exports a snapshot in every format, reads each document back with an
//! independent parser and checks that the documents are well-formed and
//! describe the same graph.
//!
//! # Conformance Scope
//!
//! | Format | Parser | Checks |
//! |--------|--------|--------|
//! | Turtle 1.1 | `sophia_turtle` | parses, unique `@prefix`, reserved prefixes |
//! | N-Triples | `sophia_turtle` | parses, no `@prefix`, one triple per line |
//! | RDF/XML | `rio_xml` | parses, UTF-8 declaration |
//! | JSON-LD 1.1 | `sophia_jsonld` | parses, `@context`, `@id` on every node |
//! | All | | equal triple counts and graphs, restriction shape |
//!
//! # Entry Point
//!
//! ```
//! let snapshot = eidos_export::fixtures::animals();
//! let report = eidos_conformance::run_all(&snapshot)?;
//! assert!(report.all_passed());
//! # Ok::<(), anyhow::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod graph;
pub mod parse;
pub mod report;
pub mod validators;

use anyhow::{Context, Result};
use eidos_export::{ExportFormat, OntologySnapshot};

pub use graph::{ParsedGraph, ParsedTerm, ParsedTriple};
pub use report::{ConformanceReport, Severity, TestResult};

/// Exports `snapshot` in every format and validates the results.
///
/// Validators are run in this order:
/// 1. Per-format well-formedness (Turtle, RDF/XML, N-Triples, JSON-LD)
/// 2. Cross-format equivalence
/// 3. Restriction shape, on the N-Triples graph
///
/// # Errors
///
/// Returns an error only if the export itself fails.
pub fn run_all(snapshot: &OntologySnapshot) -> Result<ConformanceReport> {
    let outputs = eidos_export::export_all(snapshot)
        .with_context(|| format!("Failed to export ontology {:?}", snapshot.name))?;
    let (mut report, graphs) = validate_outputs(&outputs);

    if let Some((_, graph)) = graphs
        .iter()
        .find(|(format, _)| *format == ExportFormat::NTriples)
    {
        report.extend(validators::restrictions::validate(snapshot, graph));
    }

    tracing::debug!(
        results = report.results.len(),
        failures = report.failure_count(),
        "conformance run finished"
    );
    Ok(report)
}

/// Validates already exported documents and returns the report along with
/// every graph that parsed.
pub fn validate_outputs(
    outputs: &[(ExportFormat, String)],
) -> (ConformanceReport, Vec<(ExportFormat, ParsedGraph)>) {
    let mut report = ConformanceReport::new();
    let mut graphs = Vec::with_capacity(outputs.len());

    for (format, text) in outputs {
        let (format_report, graph) = validate_format(*format, text);
        report.extend(format_report);
        if let Some(graph) = graph {
            graphs.push((*format, graph));
        }
    }

    report.extend(validators::equivalence::validate(&graphs));
    (report, graphs)
}

/// Runs the well-formedness validator for `format`.
pub fn validate_format(format: ExportFormat, text: &str) -> validators::Checked {
    match format {
        ExportFormat::Turtle => validators::turtle::validate(text),
        ExportFormat::RdfXml => validators::rdfxml::validate(text),
        ExportFormat::NTriples => validators::ntriples::validate(text),
        ExportFormat::JsonLd => validators::jsonld::validate(text),
    }
}
