//! Turtle 1.1 writer.
//!
//! Prefixes are declared for every namespace in the table, sorted by name.
//! Subjects are grouped in first-appearance order; `rdf:type` is written as
//! `a`; numeric and boolean literals whose lexical form is already a Turtle
//! token are written bare.

use crate::model::iris::{RDF_TYPE, XSD_BOOLEAN, XSD_DECIMAL, XSD_DOUBLE, XSD_INTEGER};
use crate::namespace::NamespaceTable;
use crate::triple::{Iri, Literal, Object, Subject, Triple};

use super::{group_by_subject, quoted};

const INDENT: &str = "    ";

/// Serializes `triples` to a Turtle document.
#[must_use]
pub fn to_turtle(triples: &[Triple], namespaces: &NamespaceTable) -> String {
    let mut out = String::with_capacity(64 * (triples.len() + namespaces.len()));

    let mut prefixes: Vec<(&str, &str)> = namespaces.iter().collect();
    prefixes.sort_by(|a, b| a.0.cmp(b.0));
    for (prefix, iri) in prefixes {
        out.push_str(&format!("@prefix {prefix}: <{iri}> .\n"));
    }

    for (subject, group) in group_by_subject(triples) {
        out.push('\n');
        out.push_str(&subject_term(subject, namespaces));

        let mut previous: Option<&Iri> = None;
        for triple in group {
            if previous == Some(&triple.predicate) {
                out.push_str(" ,\n");
                out.push_str(INDENT);
                out.push_str(INDENT);
            } else {
                out.push_str(if previous.is_some() { " ;\n" } else { "\n" });
                out.push_str(INDENT);
                out.push_str(&predicate_term(&triple.predicate, namespaces));
                out.push(' ');
            }
            out.push_str(&object_term(&triple.object, namespaces));
            previous = Some(&triple.predicate);
        }
        out.push_str(" .\n");
    }

    out
}

fn subject_term(subject: &Subject, namespaces: &NamespaceTable) -> String {
    match subject {
        Subject::Iri(iri) => iri_term(iri.as_str(), namespaces),
        Subject::Blank(node) => format!("_:{}", node.id()),
    }
}

fn predicate_term(predicate: &Iri, namespaces: &NamespaceTable) -> String {
    if predicate.as_str() == RDF_TYPE {
        "a".to_owned()
    } else {
        iri_term(predicate.as_str(), namespaces)
    }
}

fn object_term(object: &Object, namespaces: &NamespaceTable) -> String {
    match object {
        Object::Iri(iri) => iri_term(iri.as_str(), namespaces),
        Object::Blank(node) => format!("_:{}", node.id()),
        Object::Literal(literal) => literal_term(literal, namespaces),
    }
}

fn literal_term(literal: &Literal, namespaces: &NamespaceTable) -> String {
    if let Some(language) = &literal.language {
        return format!("{}@{language}", quoted(&literal.lexical));
    }
    match &literal.datatype {
        None => quoted(&literal.lexical),
        Some(datatype) if is_bare(&literal.lexical, datatype.as_str()) => literal.lexical.clone(),
        Some(datatype) => format!(
            "{}^^{}",
            quoted(&literal.lexical),
            iri_term(datatype.as_str(), namespaces)
        ),
    }
}

/// A prefixed name when the local part is safe, else `<iri>`.
fn iri_term(iri: &str, namespaces: &NamespaceTable) -> String {
    match namespaces.compact(iri) {
        Some((prefix, local)) if is_safe_local(local) => format!("{prefix}:{local}"),
        _ => format!("<{iri}>"),
    }
}

/// A conservative subset of PN_LOCAL: ASCII letters, digits, `_` and `-`,
/// not starting with `-`. The empty local part is allowed.
fn is_safe_local(local: &str) -> bool {
    !local.starts_with('-')
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// True when `lexical` is a Turtle token that parses back to `datatype`.
fn is_bare(lexical: &str, datatype: &str) -> bool {
    match datatype {
        XSD_BOOLEAN => lexical == "true" || lexical == "false",
        XSD_INTEGER => is_integer_token(lexical),
        XSD_DECIMAL => is_decimal_token(lexical),
        XSD_DOUBLE => is_double_token(lexical),
        _ => false,
    }
}

fn unsigned(token: &str) -> &str {
    token
        .strip_prefix('+')
        .or_else(|| token.strip_prefix('-'))
        .unwrap_or(token)
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_integer_token(token: &str) -> bool {
    all_digits(unsigned(token))
}

fn is_decimal_token(token: &str) -> bool {
    match unsigned(token).split_once('.') {
        Some((whole, frac)) => {
            (whole.is_empty() || all_digits(whole)) && all_digits(frac)
        }
        None => false,
    }
}

fn is_double_token(token: &str) -> bool {
    let Some(pos) = token.find(['e', 'E']) else {
        return false;
    };
    let (mantissa, exponent) = (unsigned(&token[..pos]), &token[pos + 1..]);
    let mantissa_ok = match mantissa.split_once('.') {
        Some((whole, frac)) => {
            (all_digits(whole) && (frac.is_empty() || all_digits(frac)))
                || (whole.is_empty() && all_digits(frac))
        }
        None => all_digits(mantissa),
    };
    mantissa_ok && is_integer_token(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::model::iris::*;
    use crate::namespace::resolve;
    use crate::triple::BlankNodeAllocator;

    fn table() -> NamespaceTable {
        resolve(fixtures::ANIMALS_NS, "Animals", None, &[])
    }

    fn dog() -> Iri {
        Iri::new(format!("{}Dog", fixtures::ANIMALS_NS)).expect("valid")
    }

    #[test]
    fn prefixes_are_sorted_and_unique() {
        let ttl = to_turtle(&[], &table());
        let lines: Vec<&str> = ttl.lines().collect();
        assert_eq!(
            lines,
            vec![
                "@prefix animals: <http://example.org/animals#> .",
                "@prefix owl: <http://www.w3.org/2002/07/owl#> .",
                "@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .",
                "@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .",
                "@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .",
            ]
        );
    }

    #[test]
    fn subjects_are_grouped_with_a_for_type() {
        let triples = vec![
            Triple::new(dog(), Iri::vocab(RDF_TYPE), Iri::vocab(OWL_CLASS)),
            Triple::new(dog(), Iri::vocab(RDFS_LABEL), Literal::plain("Dog")),
            Triple::new(dog(), Iri::vocab(RDFS_LABEL), Literal::tagged("Hund", "de")),
        ];
        let ttl = to_turtle(&triples, &table());
        assert!(ttl.contains(
            "animals:Dog\n    a owl:Class ;\n    rdfs:label \"Dog\" ,\n        \"Hund\"@de .\n"
        ));
    }

    #[test]
    fn numeric_literals_may_be_bare() {
        let table = table();
        let int = Literal::typed("5", Iri::vocab(XSD_INTEGER));
        let dec = Literal::typed("12.5", Iri::vocab(XSD_DECIMAL));
        let dbl = Literal::typed("1.5E3", Iri::vocab(XSD_DOUBLE));
        let boolean = Literal::typed("true", Iri::vocab(XSD_BOOLEAN));
        let nonneg = Literal::typed("1", Iri::vocab(XSD_NON_NEGATIVE_INTEGER));
        let bad_int = Literal::typed("five", Iri::vocab(XSD_INTEGER));
        assert_eq!(literal_term(&int, &table), "5");
        assert_eq!(literal_term(&dec, &table), "12.5");
        assert_eq!(literal_term(&dbl, &table), "1.5E3");
        assert_eq!(literal_term(&boolean, &table), "true");
        assert_eq!(
            literal_term(&nonneg, &table),
            "\"1\"^^xsd:nonNegativeInteger"
        );
        assert_eq!(literal_term(&bad_int, &table), "\"five\"^^xsd:integer");
    }

    #[test]
    fn numeric_tokens() {
        assert!(is_integer_token("-42"));
        assert!(!is_integer_token("4.2"));
        assert!(is_decimal_token("+.5"));
        assert!(!is_decimal_token("5."));
        assert!(is_double_token("1e10"));
        assert!(is_double_token("1.e-3"));
        assert!(is_double_token(".5E2"));
        assert!(!is_double_token("e5"));
    }

    #[test]
    fn unsafe_locals_use_full_iris() {
        let table = table();
        let odd = format!("{}has%2Fowner", fixtures::ANIMALS_NS);
        assert_eq!(iri_term(&odd, &table), format!("<{odd}>"));
        assert_eq!(
            iri_term("http://unknown.org/x", &table),
            "<http://unknown.org/x>"
        );
    }

    #[test]
    fn blank_nodes_are_labelled() {
        let mut alloc = BlankNodeAllocator::new();
        let node = alloc.fresh();
        let triples = vec![
            Triple::new(dog(), Iri::vocab(RDFS_SUBCLASS_OF), node.clone()),
            Triple::new(node, Iri::vocab(RDF_TYPE), Iri::vocab(OWL_RESTRICTION)),
        ];
        let ttl = to_turtle(&triples, &table());
        assert!(ttl.contains("rdfs:subClassOf _:b0 ."));
        assert!(ttl.contains("_:b0\n    a owl:Restriction ."));
    }

    #[test]
    fn reserved_only_table_still_writes() {
        let table = NamespaceTable::reserved(fixtures::ANIMALS_NS);
        let triples = vec![Triple::new(dog(), Iri::vocab(RDF_TYPE), Iri::vocab(OWL_CLASS))];
        let ttl = to_turtle(&triples, &table);
        assert!(ttl.contains("@prefix rdf:"));
        assert!(ttl.contains("@prefix owl:"));
        assert!(ttl.contains("<http://example.org/animals#Dog>\n    a owl:Class ."));
    }
}
