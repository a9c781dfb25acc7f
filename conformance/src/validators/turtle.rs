//! Turtle 1.1 validator.
//!
//! - Document parses with `sophia_turtle`
//! - Every `@prefix` name is declared once
//! - The `rdf`, `rdfs`, `owl` and `xsd` prefixes are declared

use std::collections::BTreeMap;

use eidos_export::namespace::RESERVED_PREFIXES;

use crate::parse::parse_turtle;
use crate::report::{ConformanceReport, TestResult};

use super::{record_parse, Checked};

const VALIDATOR: &str = "rdf/turtle";

/// Validates a Turtle export.
pub fn validate(text: &str) -> Checked {
    let mut report = ConformanceReport::new();
    let graph = record_parse(&mut report, VALIDATOR, parse_turtle(text));
    check_prefixes(text, &mut report);
    (report, graph)
}

/// `@prefix name: <iri> .` lines, keyed by name.
fn declared_prefixes(text: &str) -> BTreeMap<&str, Vec<&str>> {
    let mut declared: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for line in text.lines() {
        let Some(rest) = line.trim_start().strip_prefix("@prefix") else {
            continue;
        };
        if let Some((name, iri)) = rest.trim().split_once(':') {
            let iri = iri.trim().trim_end_matches('.').trim();
            let iri = iri.trim_start_matches('<').trim_end_matches('>');
            declared.entry(name.trim()).or_default().push(iri);
        }
    }
    declared
}

fn check_prefixes(text: &str, report: &mut ConformanceReport) {
    let declared = declared_prefixes(text);

    let duplicates: Vec<String> = declared
        .iter()
        .filter(|(_, iris)| iris.len() > 1)
        .map(|(name, iris)| format!("{name}: declared {} times", iris.len()))
        .collect();
    if duplicates.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{} @prefix declarations, no duplicates", declared.len()),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "Duplicate @prefix declarations",
            duplicates,
        ));
    }

    let missing: Vec<String> = RESERVED_PREFIXES
        .iter()
        .filter(|(name, iri)| declared.get(name).map_or(true, |iris| !iris.contains(iri)))
        .map(|(name, iri)| format!("@prefix {name}: <{iri}>"))
        .collect();
    if missing.is_empty() {
        report.push(TestResult::pass(VALIDATOR, "Reserved prefixes declared"));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "Reserved prefixes missing",
            missing,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .\n\
                          @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
                          @prefix owl: <http://www.w3.org/2002/07/owl#> .\n\
                          @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .\n";

    #[test]
    fn well_formed_document_passes() {
        let text = format!("{HEADER}\n<http://example.org/a#Dog> a owl:Class .\n");
        let (report, graph) = validate(&text);
        assert!(report.all_passed(), "{:?}", report.results);
        assert_eq!(graph.map(|g| g.len()), Some(1));
    }

    #[test]
    fn duplicate_prefix_fails() {
        let text = format!("{HEADER}@prefix owl: <http://www.w3.org/2002/07/owl#> .\n");
        let (report, _) = validate(&text);
        assert_eq!(report.failure_count(), 1);
    }

    #[test]
    fn missing_reserved_prefix_fails() {
        let text = "@prefix owl: <http://www.w3.org/2002/07/owl#> .\n";
        let (report, graph) = validate(text);
        assert!(graph.is_some());
        assert!(!report.all_passed());
    }
}
