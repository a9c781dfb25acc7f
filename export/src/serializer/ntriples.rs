//! N-Triples writer.
//!
//! One triple per line, every IRI in full. The format has no prefix
//! mechanism, which makes it the reference output for comparing formats.

use crate::triple::{Literal, Object, Subject, Triple};

use super::quoted;

/// Serializes `triples` to an N-Triples document.
#[must_use]
pub fn to_ntriples(triples: &[Triple]) -> String {
    let mut out = String::with_capacity(128 * triples.len());
    for t in triples {
        match &t.subject {
            Subject::Iri(iri) => push_iri(&mut out, iri.as_str()),
            Subject::Blank(node) => push_blank(&mut out, node.id()),
        }
        out.push(' ');
        push_iri(&mut out, t.predicate.as_str());
        out.push(' ');
        match &t.object {
            Object::Iri(iri) => push_iri(&mut out, iri.as_str()),
            Object::Blank(node) => push_blank(&mut out, node.id()),
            Object::Literal(literal) => push_literal(&mut out, literal),
        }
        out.push_str(" .\n");
    }
    out
}

fn push_iri(out: &mut String, iri: &str) {
    out.push('<');
    for ch in iri.chars() {
        match ch {
            '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' => {
                out.push_str(&format!("\\u{:04X}", u32::from(ch)));
            }
            c if c <= ' ' => out.push_str(&format!("\\u{:04X}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('>');
}

fn push_blank(out: &mut String, id: &str) {
    out.push_str("_:");
    out.push_str(id);
}

fn push_literal(out: &mut String, literal: &Literal) {
    out.push_str(&quoted(&literal.lexical));
    if let Some(language) = &literal.language {
        out.push('@');
        out.push_str(language);
    } else if let Some(datatype) = &literal.datatype {
        out.push_str("^^");
        push_iri(out, datatype.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::iris::*;
    use crate::triple::{BlankNodeAllocator, Iri};

    fn dog() -> Iri {
        Iri::new("http://example.org/animals#Dog").expect("valid")
    }

    #[test]
    fn one_line_per_triple() {
        let triples = vec![
            Triple::new(dog(), Iri::vocab(RDF_TYPE), Iri::vocab(OWL_CLASS)),
            Triple::new(dog(), Iri::vocab(RDFS_LABEL), Literal::plain("Dog")),
        ];
        let nt = to_ntriples(&triples);
        let lines: Vec<&str> = nt.lines().collect();
        assert_eq!(
            lines,
            vec![
                "<http://example.org/animals#Dog> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/2002/07/owl#Class> .",
                "<http://example.org/animals#Dog> <http://www.w3.org/2000/01/rdf-schema#label> \"Dog\" .",
            ]
        );
        assert!(!nt.contains("@prefix"));
    }

    #[test]
    fn typed_and_tagged_literals() {
        let triples = vec![
            Triple::new(
                dog(),
                Iri::vocab(RDFS_COMMENT),
                Literal::typed("5", Iri::vocab(XSD_INTEGER)),
            ),
            Triple::new(dog(), Iri::vocab(RDFS_LABEL), Literal::tagged("Hund", "de")),
        ];
        let nt = to_ntriples(&triples);
        assert!(nt.contains("\"5\"^^<http://www.w3.org/2001/XMLSchema#integer> ."));
        assert!(nt.contains("\"Hund\"@de ."));
    }

    #[test]
    fn multi_line_literals_stay_on_one_line() {
        let triples = vec![Triple::new(
            dog(),
            Iri::vocab(RDFS_COMMENT),
            Literal::plain("line one\nline \"two\""),
        )];
        let nt = to_ntriples(&triples);
        assert_eq!(nt.lines().count(), 1);
        assert!(nt.contains("\"line one\\nline \\\"two\\\"\""));
    }

    #[test]
    fn blank_nodes() {
        let node = BlankNodeAllocator::new().fresh();
        let triples = vec![
            Triple::new(dog(), Iri::vocab(RDFS_SUBCLASS_OF), node.clone()),
            Triple::new(node, Iri::vocab(RDF_TYPE), Iri::vocab(OWL_RESTRICTION)),
        ];
        let nt = to_ntriples(&triples);
        assert!(nt.contains("<http://www.w3.org/2000/01/rdf-schema#subClassOf> _:b0 ."));
        assert!(nt.starts_with("<http://example.org/animals#Dog>"));
        assert!(nt.contains("\n_:b0 <http://www.w3.org/1999/02/22-rdf-syntax-ns#type>"));
    }
}
