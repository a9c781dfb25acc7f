//! OWL restriction shape.
//!
//! - One `owl:Restriction` node per snapshot restriction
//! - Each has exactly one `owl:onProperty`
//! - Each hangs off a class through `rdfs:subClassOf`

use eidos_export::model::iris::{OWL_ON_PROPERTY, OWL_RESTRICTION, RDFS_SUBCLASS_OF};
use eidos_export::OntologySnapshot;

use crate::graph::ParsedGraph;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "owl/restrictions";

/// Checks the restriction nodes of `graph` against `snapshot`.
pub fn validate(snapshot: &OntologySnapshot, graph: &ParsedGraph) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let nodes: Vec<_> = graph.instances_of(OWL_RESTRICTION).collect();
    let expected = snapshot.restriction_count();
    if nodes.len() == expected {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{expected} owl:Restriction nodes"),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!(
                "{} owl:Restriction nodes for {expected} restrictions",
                nodes.len()
            ),
        ));
    }

    let mut malformed = Vec::new();
    for node in &nodes {
        let on_property = graph.objects(node, OWL_ON_PROPERTY).count();
        if on_property != 1 {
            malformed.push(format!("{node}: {on_property} owl:onProperty"));
        }
        let attached = graph
            .triples
            .iter()
            .any(|t| t.predicate == RDFS_SUBCLASS_OF && &&t.object == node);
        if !attached {
            malformed.push(format!("{node}: not the object of rdfs:subClassOf"));
        }
    }
    if malformed.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            "Every restriction has one owl:onProperty and a subclass link",
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "Malformed restriction nodes",
            malformed,
        ));
    }

    report
}
