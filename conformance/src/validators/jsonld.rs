//! JSON-LD 1.1 validator.
//!
//! Verifies that the JSON-LD export is a well-formed document:
//! - Is valid JSON with an `@context` object and a `@graph` array
//! - Every context entry maps a prefix to an absolute IRI
//! - Every `@graph` node has an `@id`
//! - The graph expands to triples

use serde_json::Value;

use eidos_export::triple::is_absolute_iri;

use crate::parse::parse_json_ld;
use crate::report::{ConformanceReport, TestResult};

use super::{record_parse, Checked};

const VALIDATOR: &str = "rdf/jsonld";

/// Validates a JSON-LD export.
pub fn validate(text: &str) -> Checked {
    let mut report = ConformanceReport::new();

    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            report.push(TestResult::fail_with_details(
                VALIDATOR,
                "Output is not valid JSON",
                vec![e.to_string()],
            ));
            return (report, None);
        }
    };

    check_context(&value, &mut report);
    check_graph(&value, &mut report);
    let graph = record_parse(&mut report, VALIDATOR, parse_json_ld(text));
    (report, graph)
}

fn check_context(value: &Value, report: &mut ConformanceReport) {
    let Some(context) = value.get("@context").and_then(Value::as_object) else {
        report.push(TestResult::fail(VALIDATOR, "Document missing @context object"));
        return;
    };

    let bad: Vec<String> = context
        .iter()
        .filter(|(_, iri)| !iri.as_str().is_some_and(is_absolute_iri))
        .map(|(prefix, iri)| format!("{prefix}: {iri}"))
        .collect();
    if bad.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("@context maps {} prefixes to absolute IRIs", context.len()),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "@context entries that are not absolute IRIs",
            bad,
        ));
    }
}

fn check_graph(value: &Value, report: &mut ConformanceReport) {
    let Some(graph) = value.get("@graph").and_then(Value::as_array) else {
        report.push(TestResult::fail(VALIDATOR, "Document missing @graph array"));
        return;
    };

    let missing_id = graph.iter().filter(|node| node.get("@id").is_none()).count();
    if missing_id == 0 {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("All {} @graph nodes have @id", graph.len()),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{missing_id} nodes in @graph are missing @id"),
        ));
    }
}
