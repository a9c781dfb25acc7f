//! RDF/XML validator.
//!
//! - Document opens with an XML declaration naming UTF-8
//! - Document parses with `rio_xml`

use crate::parse::parse_rdf_xml;
use crate::report::{ConformanceReport, TestResult};

use super::{record_parse, Checked};

const VALIDATOR: &str = "rdf/rdfxml";

/// Validates an RDF/XML export.
pub fn validate(text: &str) -> Checked {
    let mut report = ConformanceReport::new();

    let declaration = text.lines().next().unwrap_or_default();
    let utf8 = declaration.starts_with("<?xml")
        && declaration.to_ascii_lowercase().contains("encoding=\"utf-8\"");
    if utf8 {
        report.push(TestResult::pass(VALIDATOR, "XML declaration names UTF-8"));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "Missing or non-UTF-8 XML declaration",
            vec![declaration.to_owned()],
        ));
    }

    let graph = record_parse(&mut report, VALIDATOR, parse_rdf_xml(text));
    (report, graph)
}
