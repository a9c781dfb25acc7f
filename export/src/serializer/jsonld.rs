//! JSON-LD 1.1 writer.
//!
//! Produces a single document with an `@context` mapping every prefix in
//! the namespace table and a flat `@graph` with one node object per subject.
//! Node identifiers are always full IRIs; property keys and `@type` values
//! are compacted through the context when the namespace ends in `#` or `/`.

use serde_json::{json, Map, Value};

use crate::model::iris::RDF_TYPE;
use crate::namespace::NamespaceTable;
use crate::triple::{Literal, Object, Subject, Triple};

use super::group_by_subject;

/// Serializes `triples` to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json_ld(triples: &[Triple], namespaces: &NamespaceTable) -> Value {
    let mut context = Map::new();
    for (prefix, iri) in namespaces.iter() {
        context.insert(prefix.to_owned(), json!(iri));
    }

    let graph: Vec<Value> = group_by_subject(triples)
        .into_iter()
        .map(|(subject, group)| node_object(subject, &group, namespaces))
        .collect();

    json!({
        "@context": context,
        "@graph": graph
    })
}

/// Serializes `triples` to a pretty-printed JSON-LD document.
///
/// # Errors
///
/// Returns the `serde_json` error if the value cannot be written, which
/// does not happen for values built by [`to_json_ld`].
pub fn to_json_ld_string(
    triples: &[Triple],
    namespaces: &NamespaceTable,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&to_json_ld(triples, namespaces))
}

fn node_object(subject: &Subject, group: &[&Triple], namespaces: &NamespaceTable) -> Value {
    let mut node = Map::new();
    node.insert("@id".to_owned(), json!(subject_id(subject)));

    for triple in group {
        let (key, value) = match (&triple.object, triple.predicate.as_str()) {
            (Object::Iri(class), RDF_TYPE) => {
                ("@type".to_owned(), json!(compact(class.as_str(), namespaces)))
            }
            (object, predicate) => (compact(predicate, namespaces), object_value(object)),
        };
        // Repeated keys become arrays in first-seen order.
        match node.get_mut(&key) {
            Some(Value::Array(values)) => values.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                node.insert(key, value);
            }
        }
    }

    Value::Object(node)
}

fn subject_id(subject: &Subject) -> String {
    match subject {
        Subject::Iri(iri) => iri.as_str().to_owned(),
        Subject::Blank(node) => format!("_:{}", node.id()),
    }
}

fn object_value(object: &Object) -> Value {
    match object {
        Object::Iri(iri) => json!({ "@id": iri.as_str() }),
        Object::Blank(node) => json!({ "@id": format!("_:{}", node.id()) }),
        Object::Literal(literal) => literal_value(literal),
    }
}

/// Typed literals keep their lexical form as a string so the value
/// round-trips exactly; JSON numbers are never emitted.
fn literal_value(literal: &Literal) -> Value {
    match (&literal.language, &literal.datatype) {
        (Some(language), _) => json!({ "@value": literal.lexical, "@language": language }),
        (None, Some(datatype)) => json!({ "@value": literal.lexical, "@type": datatype.as_str() }),
        (None, None) => json!(literal.lexical),
    }
}

/// `prefix:local` for IRIs under a `#`/`/` namespace, the full IRI otherwise.
fn compact(iri: &str, namespaces: &NamespaceTable) -> String {
    match namespaces.compact(iri) {
        Some((prefix, local))
            if !local.is_empty()
                && !local.starts_with("//")
                && namespaces
                    .get(prefix)
                    .is_some_and(|ns| ns.ends_with('#') || ns.ends_with('/')) =>
        {
            format!("{prefix}:{local}")
        }
        _ => iri.to_owned(),
    }
}
