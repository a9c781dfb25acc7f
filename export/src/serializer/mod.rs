//! Format writers.
//!
//! Four formats are supported, each a pure function of the triple list and
//! the namespace table:
//! - **Turtle** ([`turtle`]) for people and most RDF tooling
//! - **RDF/XML** ([`rdfxml`]) for ontology editors
//! - **N-Triples** ([`ntriples`]) for bulk loading and cross-format checks
//! - **JSON-LD** ([`jsonld`]) for web clients

pub mod jsonld;
pub mod ntriples;
pub mod rdfxml;
pub mod turtle;

use std::collections::HashMap;

use crate::triple::{Subject, Triple};

/// Groups triples by subject. Subjects keep their first-appearance order and
/// each group keeps the original triple order.
pub(crate) fn group_by_subject(triples: &[Triple]) -> Vec<(&Subject, Vec<&Triple>)> {
    let mut index: HashMap<&Subject, usize> = HashMap::new();
    let mut groups: Vec<(&Subject, Vec<&Triple>)> = Vec::new();
    for triple in triples {
        match index.get(&triple.subject) {
            Some(&i) => groups[i].1.push(triple),
            None => {
                index.insert(&triple.subject, groups.len());
                groups.push((&triple.subject, vec![triple]));
            }
        }
    }
    groups
}

/// Escapes `s` for a double-quoted Turtle or N-Triples string, quotes
/// included.
pub(crate) fn quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
