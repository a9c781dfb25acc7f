//! Validators, one module per concern.
//!
//! Format validators check one document and hand back the graph they read
//! so the cross-format validators can compare them without parsing twice.

pub mod equivalence;
pub mod jsonld;
pub mod ntriples;
pub mod rdfxml;
pub mod restrictions;
pub mod turtle;

use crate::graph::ParsedGraph;
use crate::report::{ConformanceReport, TestResult};

/// Outcome of a format validator.
pub type Checked = (ConformanceReport, Option<ParsedGraph>);

/// Records the parse outcome under `validator` and returns the graph.
fn record_parse(
    report: &mut ConformanceReport,
    validator: &str,
    parsed: anyhow::Result<ParsedGraph>,
) -> Option<ParsedGraph> {
    match parsed {
        Ok(graph) => {
            report.push(TestResult::pass(
                validator,
                format!("Parses without errors ({} triples)", graph.len()),
            ));
            Some(graph)
        }
        Err(e) => {
            report.push(TestResult::fail_with_details(
                validator,
                "Document does not parse",
                e.chain().map(ToString::to_string).collect(),
            ));
            None
        }
    }
}
