//! Namespace resolution: the prefix table every writer shares.
//!
//! The table always starts with the four reserved prefixes. Prefixes the
//! editor saved earlier arrive as an opaque JSON string; when that string
//! cannot be read the table silently falls back to the reserved prefixes,
//! so a broken prefix map never blocks an export.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{ExportError, Result};
use crate::model::iris::{OWL, RDF, RDFS, XSD};
use crate::model::LinkedOntology;
use crate::triple::is_absolute_iri;

/// The reserved prefixes, in declaration order.
pub const RESERVED_PREFIXES: [(&str, &str); 4] =
    [("rdf", RDF), ("rdfs", RDFS), ("owl", OWL), ("xsd", XSD)];

/// Prefix used for the ontology namespace when its name yields none.
const FALLBACK_PREFIX: &str = "onto";

/// Outcome of reading the stored prefix JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredPrefixes {
    /// The JSON was an object; its string-valued entries, in key order.
    Parsed(BTreeMap<String, String>),
    /// The JSON was absent or unreadable; no stored prefixes apply.
    Fallback(FallbackReason),
}

/// Why stored prefixes fell back to the empty set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// No JSON was stored.
    Absent,
    /// The JSON did not parse, or was not an object.
    Malformed(String),
}

/// Reads the stored prefix JSON without ever failing.
#[must_use]
pub fn parse_stored_prefixes(json: Option<&str>) -> StoredPrefixes {
    let Some(text) = json.map(str::trim).filter(|t| !t.is_empty()) else {
        return StoredPrefixes::Fallback(FallbackReason::Absent);
    };
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => StoredPrefixes::Parsed(
            map.into_iter()
                .filter_map(|(prefix, iri)| match iri {
                    Value::String(iri) => Some((prefix, iri)),
                    _ => None,
                })
                .collect(),
        ),
        Ok(other) => StoredPrefixes::Fallback(FallbackReason::Malformed(format!(
            "expected a JSON object, found {other}"
        ))),
        Err(e) => StoredPrefixes::Fallback(FallbackReason::Malformed(e.to_string())),
    }
}

/// Ordered prefix → namespace IRI table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceTable {
    entries: Vec<(String, String)>,
    base: String,
}

impl NamespaceTable {
    /// A table holding only the reserved prefixes, with `base` as the
    /// ontology namespace (not bound to any prefix).
    #[must_use]
    pub fn reserved(base: impl Into<String>) -> Self {
        NamespaceTable {
            entries: RESERVED_PREFIXES
                .iter()
                .map(|(p, iri)| ((*p).to_owned(), (*iri).to_owned()))
                .collect(),
            base: base.into(),
        }
    }

    /// The ontology namespace new IRIs are minted under.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Iterates over `(prefix, iri)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, i)| (p.as_str(), i.as_str()))
    }

    /// Number of declared prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the reserved prefixes are always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The IRI bound to `prefix`.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.iter().find(|(p, _)| *p == prefix).map(|(_, iri)| iri)
    }

    /// The prefix bound to `iri`.
    #[must_use]
    pub fn prefix_for(&self, iri: &str) -> Option<&str> {
        self.iter().find(|(_, i)| *i == iri).map(|(p, _)| p)
    }

    /// The prefix bound to the ontology namespace, if any.
    #[must_use]
    pub fn ontology_prefix(&self) -> Option<&str> {
        self.prefix_for(&self.base)
    }

    /// Splits `iri` into `(prefix, local)` using the longest matching
    /// namespace. The local part may be empty and is not checked against any
    /// grammar; writers apply their own rules.
    #[must_use]
    pub fn compact<'a>(&self, iri: &'a str) -> Option<(&str, &'a str)> {
        self.iter()
            .filter(|(_, ns)| iri.starts_with(ns))
            .max_by_key(|(_, ns)| ns.len())
            .map(|(prefix, ns)| (prefix, &iri[ns.len()..]))
    }

    fn bind(&mut self, prefix: &str, iri: &str) -> std::result::Result<(), &'static str> {
        if !is_valid_prefix(prefix) {
            return Err("invalid prefix name");
        }
        if !is_absolute_iri(iri) {
            return Err("not an absolute IRI");
        }
        if let Some(bound) = self.get(prefix) {
            return if bound == iri {
                Ok(())
            } else {
                Err("prefix already bound to another IRI")
            };
        }
        if self.prefix_for(iri).is_some() {
            return Err("IRI already bound to another prefix");
        }
        self.entries.push((prefix.to_owned(), iri.to_owned()));
        Ok(())
    }

    fn bind_reported(&mut self, prefix: &str, iri: &str, source: &str) {
        if let Some((_, reserved_iri)) = RESERVED_PREFIXES.iter().find(|(p, _)| *p == prefix) {
            if *reserved_iri != iri {
                tracing::warn!(prefix, iri, source, "ignoring attempt to rebind a reserved prefix");
            }
            return;
        }
        if let Err(reason) = self.bind(prefix, iri) {
            tracing::debug!(prefix, iri, source, reason, "skipping prefix");
        }
    }

    fn unused_prefix(&self, stem: &str) -> String {
        if self.get(stem).is_none() {
            return stem.to_owned();
        }
        (1..)
            .map(|n| format!("{stem}{n}"))
            .find(|candidate| self.get(candidate).is_none())
            .unwrap_or_else(|| stem.to_owned())
    }
}

/// Builds the namespace table for one export.
///
/// Order: reserved prefixes, stored prefixes (key order), linked ontologies
/// (snapshot order), then the ontology's own namespace under a prefix
/// derived from `ontology_name` unless the namespace is already bound.
#[must_use]
pub fn resolve(
    ontology_namespace: &str,
    ontology_name: &str,
    stored_prefixes: Option<&str>,
    linked: &[LinkedOntology],
) -> NamespaceTable {
    let mut table = NamespaceTable::reserved(ontology_namespace);

    match parse_stored_prefixes(stored_prefixes) {
        StoredPrefixes::Parsed(map) => {
            for (prefix, iri) in &map {
                table.bind_reported(prefix, iri, "stored");
            }
        }
        StoredPrefixes::Fallback(FallbackReason::Absent) => {
            tracing::debug!("no stored prefixes");
        }
        StoredPrefixes::Fallback(FallbackReason::Malformed(reason)) => {
            tracing::warn!(
                %reason,
                "stored prefix JSON is malformed, using reserved prefixes only"
            );
        }
    }

    for link in linked {
        let prefix = match link.prefix.as_deref().map(str::trim) {
            Some(p) if !p.is_empty() => p.to_owned(),
            _ => table.unused_prefix(&derive_prefix(link.name.as_deref().unwrap_or_default())),
        };
        table.bind_reported(&prefix, link.namespace.trim(), "linked");
    }

    if table.prefix_for(ontology_namespace).is_none() {
        let prefix = table.unused_prefix(&derive_prefix(ontology_name));
        if let Err(reason) = table.bind(&prefix, ontology_namespace) {
            tracing::debug!(prefix, reason, "ontology namespace left unprefixed");
        }
    }

    table
}

/// Validates the snapshot namespace and ensures it ends in `#` or `/`.
///
/// # Errors
///
/// Returns [`ExportError::InvalidOntologySnapshot`] when the namespace is
/// blank or not an absolute IRI.
pub fn normalize_namespace(namespace: &str) -> Result<String> {
    let trimmed = namespace.trim();
    if trimmed.is_empty() {
        return Err(ExportError::invalid("ontology namespace is empty"));
    }
    if !is_absolute_iri(trimmed) {
        return Err(ExportError::invalid(format!(
            "ontology namespace is not an absolute IRI: {trimmed:?}"
        )));
    }
    if trimmed.ends_with('#') || trimmed.ends_with('/') {
        Ok(trimmed.to_owned())
    } else {
        Ok(format!("{trimmed}#"))
    }
}

/// Derives a prefix from a display name: lower-cased ASCII alphanumerics,
/// no leading digits, `onto` when nothing is left.
#[must_use]
pub fn derive_prefix(name: &str) -> String {
    let prefix: String = name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .skip_while(char::is_ascii_digit)
        .collect();
    if prefix.is_empty() || RESERVED_PREFIXES.iter().any(|(p, _)| *p == prefix) {
        FALLBACK_PREFIX.to_owned()
    } else {
        prefix
    }
}

/// A prefix name every writer can declare: an ASCII letter followed by ASCII
/// alphanumerics, `_` or `-`. `xml`-prefixed names are reserved by XML.
#[must_use]
pub fn is_valid_prefix(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        && !prefix.to_ascii_lowercase().starts_with("xml")
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str = "http://example.org/animals#";

    #[test]
    fn reserved_prefixes_come_first() {
        let table = resolve(NS, "Animals", None, &[]);
        let prefixes: Vec<&str> = table.iter().map(|(p, _)| p).collect();
        assert_eq!(prefixes, vec!["rdf", "rdfs", "owl", "xsd", "animals"]);
        assert_eq!(table.get("owl"), Some(OWL));
        assert_eq!(table.ontology_prefix(), Some("animals"));
    }

    #[test]
    fn malformed_json_falls_back() {
        assert!(matches!(
            parse_stored_prefixes(Some("{ invalid json")),
            StoredPrefixes::Fallback(FallbackReason::Malformed(_))
        ));
        assert!(matches!(
            parse_stored_prefixes(Some("[1, 2]")),
            StoredPrefixes::Fallback(FallbackReason::Malformed(_))
        ));
        assert_eq!(
            parse_stored_prefixes(None),
            StoredPrefixes::Fallback(FallbackReason::Absent)
        );
        assert_eq!(
            parse_stored_prefixes(Some("   ")),
            StoredPrefixes::Fallback(FallbackReason::Absent)
        );

        let table = resolve(NS, "Animals", Some("{ invalid json"), &[]);
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn stored_prefixes_merge_and_dedup() {
        let stored = r#"{
            "foaf": "http://xmlns.com/foaf/0.1/",
            "owl": "http://www.w3.org/2002/07/owl#",
            "rdfs": "http://example.org/not-rdfs#",
            "myowl": "http://www.w3.org/2002/07/owl#",
            "1bad": "http://example.org/bad#",
            "rel": "relative/path",
            "num": 42
        }"#;
        let table = resolve(NS, "Animals", Some(stored), &[]);
        assert_eq!(table.get("foaf"), Some("http://xmlns.com/foaf/0.1/"));
        assert_eq!(table.get("rdfs"), Some(RDFS));
        assert!(table.get("myowl").is_none());
        assert!(table.get("1bad").is_none());
        assert!(table.get("rel").is_none());
        assert!(table.get("num").is_none());
        assert_eq!(table.iter().filter(|(p, _)| *p == "owl").count(), 1);
    }

    #[test]
    fn ontology_prefix_avoids_collisions() {
        let stored = r#"{"animals": "http://other.org/animals#"}"#;
        let table = resolve(NS, "Animals", Some(stored), &[]);
        assert_eq!(table.ontology_prefix(), Some("animals1"));
    }

    #[test]
    fn stored_binding_of_own_namespace_is_reused() {
        let stored = r#"{"zoo": "http://example.org/animals#"}"#;
        let table = resolve(NS, "Animals", Some(stored), &[]);
        assert_eq!(table.ontology_prefix(), Some("zoo"));
        assert!(table.get("animals").is_none());
    }

    #[test]
    fn linked_ontologies_contribute_prefixes() {
        let linked = vec![
            LinkedOntology {
                prefix: Some("foaf".to_owned()),
                namespace: "http://xmlns.com/foaf/0.1/".to_owned(),
                ..LinkedOntology::default()
            },
            LinkedOntology {
                name: Some("Dublin Core".to_owned()),
                namespace: "http://purl.org/dc/terms/".to_owned(),
                ..LinkedOntology::default()
            },
        ];
        let table = resolve(NS, "Animals", None, &linked);
        assert_eq!(table.get("foaf"), Some("http://xmlns.com/foaf/0.1/"));
        assert_eq!(table.get("dublincore"), Some("http://purl.org/dc/terms/"));
    }

    #[test]
    fn compact_prefers_longest_namespace() {
        let stored = r#"{"ex": "http://example.org/", "exa": "http://example.org/a/"}"#;
        let table = resolve(NS, "Animals", Some(stored), &[]);
        assert_eq!(table.compact("http://example.org/a/b"), Some(("exa", "b")));
        assert_eq!(table.compact("http://example.org/c"), Some(("ex", "c")));
        assert_eq!(table.compact("urn:x"), None);
    }

    #[test]
    fn derived_prefixes() {
        assert_eq!(derive_prefix("Animals"), "animals");
        assert_eq!(derive_prefix("My Pet Ontology 2"), "mypetontology2");
        assert_eq!(derive_prefix("42 things"), "things");
        assert_eq!(derive_prefix("***"), "onto");
        assert_eq!(derive_prefix("OWL"), "onto");
    }

    #[test]
    fn namespace_normalization() {
        assert_eq!(
            normalize_namespace(" http://example.org/animals ").as_deref(),
            Ok("http://example.org/animals#")
        );
        assert_eq!(
            normalize_namespace("http://example.org/animals/").as_deref(),
            Ok("http://example.org/animals/")
        );
        assert!(normalize_namespace("").is_err());
        assert!(normalize_namespace("animals").is_err());
    }

    #[test]
    fn prefix_names() {
        assert!(is_valid_prefix("foaf"));
        assert!(is_valid_prefix("dc-terms"));
        assert!(!is_valid_prefix(""));
        assert!(!is_valid_prefix("_x"));
        assert!(!is_valid_prefix("a.b"));
        assert!(!is_valid_prefix("xmlns"));
    }
}
