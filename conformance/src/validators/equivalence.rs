//! Cross-format equivalence.
//!
//! All four exports are written from one triple list, so once parsed they
//! must agree on the triple count and, modulo blank-node labels, on the
//! triples themselves. N-Triples is the reference when present.

use eidos_export::ExportFormat;

use crate::graph::ParsedGraph;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "rdf/equivalence";

/// Compares every parsed graph against the reference graph.
pub fn validate(graphs: &[(ExportFormat, ParsedGraph)]) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let reference = graphs
        .iter()
        .find(|(format, _)| *format == ExportFormat::NTriples)
        .or_else(|| graphs.first());
    let Some((reference_format, reference)) = reference else {
        report.push(TestResult::warn(VALIDATOR, "No parsed graphs to compare"));
        return report;
    };
    let expected = reference.canonical();

    for (format, graph) in graphs {
        if format == reference_format {
            continue;
        }
        if graph.len() != reference.len() {
            report.push(TestResult::fail(
                VALIDATOR,
                format!(
                    "{format} has {} triples, {reference_format} has {}",
                    graph.len(),
                    reference.len()
                ),
            ));
            continue;
        }
        let actual = graph.canonical();
        if actual == expected {
            report.push(TestResult::pass(
                VALIDATOR,
                format!("{format} matches {reference_format} ({} triples)", graph.len()),
            ));
        } else {
            let details = actual
                .iter()
                .zip(&expected)
                .filter(|(a, e)| a != e)
                .take(5)
                .map(|(a, e)| format!("{format}: {a}\n{reference_format}: {e}"))
                .collect();
            report.push(TestResult::fail_with_details(
                VALIDATOR,
                format!("{format} and {reference_format} describe different graphs"),
                details,
            ));
        }
    }

    report
}
