//! N-Triples validator.
//!
//! - Document parses with `sophia_turtle`
//! - No `@prefix` appears anywhere
//! - Every non-blank line is one statement ending in ` .`

use crate::parse::parse_ntriples;
use crate::report::{ConformanceReport, TestResult};

use super::{record_parse, Checked};

const VALIDATOR: &str = "rdf/ntriples";

/// Validates an N-Triples export.
pub fn validate(text: &str) -> Checked {
    let mut report = ConformanceReport::new();
    let graph = record_parse(&mut report, VALIDATOR, parse_ntriples(text));

    if text.contains("@prefix") {
        report.push(TestResult::fail(VALIDATOR, "N-Triples output contains @prefix"));
    } else {
        report.push(TestResult::pass(VALIDATOR, "No @prefix declarations"));
    }

    let mut malformed: Vec<String> = Vec::new();
    let mut statements = 0usize;
    for (i, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        statements += 1;
        if !trimmed.ends_with(" .") {
            malformed.push(format!("line {}: does not end with \" .\"", i + 1));
        }
    }
    if malformed.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{statements} statement lines"),
        ));
    } else {
        malformed.truncate(10);
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "Malformed statement lines",
            malformed,
        ));
    }

    if let Some(graph) = &graph {
        if graph.len() == statements {
            report.push(TestResult::pass(VALIDATOR, "One triple per line"));
        } else {
            report.push(TestResult::fail(
                VALIDATOR,
                format!(
                    "{statements} statement lines but {} triples parsed",
                    graph.len()
                ),
            ));
        }
    }

    (report, graph)
}
