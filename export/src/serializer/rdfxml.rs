//! RDF/XML writer.
//!
//! Produces a UTF-8 document with one element per subject. The element is
//! named after the subject's first `rdf:type` when that IRI has a QName;
//! remaining statements become property elements. Predicates must be
//! expressible as QNames, so namespaces missing from the table are declared
//! under generated `nsN` prefixes.

use std::collections::BTreeMap;

use crate::builder::is_name_start;
use crate::error::{ExportError, Result};
use crate::model::iris::RDF_TYPE;
use crate::namespace::NamespaceTable;
use crate::triple::{Object, Subject, Triple};
use crate::ExportFormat;

use super::group_by_subject;

/// Serializes `triples` to an RDF/XML document.
///
/// # Errors
///
/// Returns [`ExportError::Unserializable`] when a predicate IRI cannot be
/// split into a namespace and an XML name, or a literal holds a character
/// XML 1.0 cannot carry.
pub fn to_rdf_xml(triples: &[Triple], namespaces: &NamespaceTable) -> Result<String> {
    let mut qnames = QNames::new(namespaces);
    let mut body = String::with_capacity(128 * triples.len());

    for (subject, group) in group_by_subject(triples) {
        let element = group
            .iter()
            .position(|t| t.predicate.as_str() == RDF_TYPE && matches!(t.object, Object::Iri(_)))
            .and_then(|i| match &group[i].object {
                Object::Iri(class) => qnames.qname(class.as_str()).map(|q| (i, q)),
                _ => None,
            });
        let (type_index, element_name) = match element {
            Some((i, name)) => (Some(i), name),
            None => (None, "rdf:Description".to_owned()),
        };

        body.push_str("  <");
        body.push_str(&element_name);
        match subject {
            Subject::Iri(iri) => {
                body.push_str(" rdf:about=\"");
                body.push_str(&escape_attr(iri.as_str()));
            }
            Subject::Blank(node) => {
                body.push_str(" rdf:nodeID=\"");
                body.push_str(node.id());
            }
        }
        body.push_str("\">\n");

        for (i, triple) in group.iter().enumerate() {
            if Some(i) == type_index {
                continue;
            }
            let property = qnames.qname(triple.predicate.as_str()).ok_or_else(|| {
                ExportError::Unserializable {
                    format: ExportFormat::RdfXml,
                    reason: format!(
                        "predicate <{}> has no XML qualified name",
                        triple.predicate
                    ),
                }
            })?;
            body.push_str("    <");
            body.push_str(&property);
            match &triple.object {
                Object::Iri(iri) => {
                    body.push_str(" rdf:resource=\"");
                    body.push_str(&escape_attr(iri.as_str()));
                    body.push_str("\"/>\n");
                }
                Object::Blank(node) => {
                    body.push_str(" rdf:nodeID=\"");
                    body.push_str(node.id());
                    body.push_str("\"/>\n");
                }
                Object::Literal(literal) => {
                    if let Some(c) = literal.lexical.chars().find(|c| !is_xml_char(*c)) {
                        return Err(ExportError::Unserializable {
                            format: ExportFormat::RdfXml,
                            reason: format!(
                                "literal on <{}> contains U+{:04X}, which XML 1.0 cannot carry",
                                triple.predicate,
                                u32::from(c)
                            ),
                        });
                    }
                    if let Some(language) = &literal.language {
                        body.push_str(" xml:lang=\"");
                        body.push_str(&escape_attr(language));
                        body.push('"');
                    } else if let Some(datatype) = &literal.datatype {
                        body.push_str(" rdf:datatype=\"");
                        body.push_str(&escape_attr(datatype.as_str()));
                        body.push('"');
                    }
                    body.push('>');
                    body.push_str(&escape_text(&literal.lexical));
                    body.push_str("</");
                    body.push_str(&property);
                    body.push_str(">\n");
                }
            }
        }

        body.push_str("  </");
        body.push_str(&element_name);
        body.push_str(">\n");
    }

    let mut out = String::with_capacity(body.len() + 1024);
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<rdf:RDF");
    for (prefix, iri) in qnames.declarations() {
        out.push_str(&format!("\n    xmlns:{prefix}=\"{}\"", escape_attr(iri)));
    }
    out.push_str(">\n");
    out.push_str(&body);
    out.push_str("</rdf:RDF>\n");
    Ok(out)
}

/// QName assignment: the namespace table first, then generated prefixes.
struct QNames<'a> {
    table: &'a NamespaceTable,
    generated: BTreeMap<String, String>,
}

impl<'a> QNames<'a> {
    fn new(table: &'a NamespaceTable) -> Self {
        QNames {
            table,
            generated: BTreeMap::new(),
        }
    }

    fn qname(&mut self, iri: &str) -> Option<String> {
        let declared = self
            .table
            .iter()
            .chain(self.generated.iter().map(|(ns, p)| (p.as_str(), ns.as_str())))
            .filter(|(_, ns)| iri.len() > ns.len() && iri.starts_with(ns))
            .filter(|(_, ns)| is_ncname(&iri[ns.len()..]))
            .max_by_key(|(_, ns)| ns.len())
            .map(|(prefix, ns)| format!("{prefix}:{}", &iri[ns.len()..]));
        if declared.is_some() {
            return declared;
        }

        let split = ncname_suffix_start(iri)?;
        let (namespace, local) = iri.split_at(split);
        if namespace.is_empty() {
            return None;
        }
        let prefix = match self.generated.get(namespace) {
            Some(prefix) => prefix.clone(),
            None => {
                let prefix = (self.generated.len() + 1..)
                    .map(|n| format!("ns{n}"))
                    .find(|p| {
                        self.table.get(p).is_none() && !self.generated.values().any(|g| g == p)
                    })?;
                self.generated.insert(namespace.to_owned(), prefix.clone());
                prefix
            }
        };
        Some(format!("{prefix}:{local}"))
    }

    /// Table prefixes in order, then generated ones by prefix number.
    fn declarations(&self) -> Vec<(&str, &str)> {
        let mut generated: Vec<(&str, &str)> = self
            .generated
            .iter()
            .map(|(ns, p)| (p.as_str(), ns.as_str()))
            .collect();
        generated.sort_by_key(|(p, _)| (p.len(), *p));
        self.table.iter().chain(generated).collect()
    }
}

fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit() || c == '-' || c == '.'
}

/// An XML name without colons.
fn is_ncname(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(is_name_start) && chars.all(is_name_char)
}

/// Byte offset of the longest suffix of `iri` that is an NCName.
fn ncname_suffix_start(iri: &str) -> Option<usize> {
    let mut start = None;
    for (i, c) in iri.char_indices().rev() {
        if !is_name_char(c) {
            break;
        }
        if is_name_start(c) {
            start = Some(i);
        }
    }
    start
}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..
    )
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\r' => out.push_str("&#13;"),
            c => out.push(c),
        }
    }
    out
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::model::iris::*;
    use crate::namespace::resolve;
    use crate::triple::{BlankNodeAllocator, Iri, Literal};

    fn table() -> NamespaceTable {
        resolve(fixtures::ANIMALS_NS, "Animals", None, &[])
    }

    fn iri(s: &str) -> Iri {
        Iri::new(s).expect("valid")
    }

    #[test]
    fn declares_utf8_and_namespaces() {
        let xml = to_rdf_xml(&[], &table()).expect("writes");
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n"));
        assert!(!xml.contains("utf-16"));
        for prefix in ["rdf", "rdfs", "owl", "xsd", "animals"] {
            assert!(xml.contains(&format!("xmlns:{prefix}=\"")), "missing {prefix}");
        }
        assert!(xml.trim_end().ends_with("</rdf:RDF>"));
    }

    #[test]
    fn subject_element_is_primary_type() {
        let dog = iri("http://example.org/animals#Dog");
        let animal = iri("http://example.org/animals#Animal");
        let triples = vec![
            Triple::new(dog.clone(), Iri::vocab(RDF_TYPE), Iri::vocab(OWL_CLASS)),
            Triple::new(dog.clone(), Iri::vocab(RDFS_LABEL), Literal::plain("Dog & co")),
            Triple::new(dog, Iri::vocab(RDFS_SUBCLASS_OF), animal),
        ];
        let xml = to_rdf_xml(&triples, &table()).expect("writes");
        assert!(xml.contains("  <owl:Class rdf:about=\"http://example.org/animals#Dog\">\n"));
        assert!(xml.contains("    <rdfs:label>Dog &amp; co</rdfs:label>\n"));
        assert!(xml.contains(
            "    <rdfs:subClassOf rdf:resource=\"http://example.org/animals#Animal\"/>\n"
        ));
        assert!(xml.contains("  </owl:Class>\n"));
        assert!(!xml.contains("rdf:type"));
    }

    #[test]
    fn secondary_types_stay_as_properties() {
        let fido = iri("http://example.org/animals#Fido");
        let triples = vec![
            Triple::new(
                fido.clone(),
                Iri::vocab(RDF_TYPE),
                Iri::vocab(OWL_NAMED_INDIVIDUAL),
            ),
            Triple::new(
                fido.clone(),
                Iri::vocab(RDF_TYPE),
                iri("http://example.org/animals#Dog"),
            ),
            Triple::new(
                fido,
                iri("http://example.org/animals#age"),
                Literal::typed("5", Iri::vocab(XSD_INTEGER)),
            ),
        ];
        let xml = to_rdf_xml(&triples, &table()).expect("writes");
        assert!(
            xml.contains("<owl:NamedIndividual rdf:about=\"http://example.org/animals#Fido\">")
        );
        assert!(xml.contains("<rdf:type rdf:resource=\"http://example.org/animals#Dog\"/>"));
        assert!(xml.contains(
            "<animals:age rdf:datatype=\"http://www.w3.org/2001/XMLSchema#integer\">5</animals:age>"
        ));
    }

    #[test]
    fn blank_nodes_use_node_ids() {
        let node = BlankNodeAllocator::new().fresh();
        let dog = iri("http://example.org/animals#Dog");
        let triples = vec![
            Triple::new(dog, Iri::vocab(RDFS_SUBCLASS_OF), node.clone()),
            Triple::new(node, Iri::vocab(RDF_TYPE), Iri::vocab(OWL_RESTRICTION)),
        ];
        let xml = to_rdf_xml(&triples, &table()).expect("writes");
        assert!(xml.contains("<rdfs:subClassOf rdf:nodeID=\"b0\"/>"));
        assert!(xml.contains("<owl:Restriction rdf:nodeID=\"b0\">"));
    }

    #[test]
    fn undeclared_namespaces_get_generated_prefixes() {
        let fido = iri("http://example.org/animals#Fido");
        let triples = vec![Triple::new(
            fido.clone(),
            iri("http://xmlns.com/foaf/0.1/knows"),
            iri("http://example.org/animals#Rex"),
        )];
        let xml = to_rdf_xml(&triples, &table()).expect("writes");
        assert!(xml.contains("xmlns:ns1=\"http://xmlns.com/foaf/0.1/\""));
        assert!(xml.contains("<rdf:Description rdf:about=\"http://example.org/animals#Fido\">"));
        assert!(xml.contains("<ns1:knows rdf:resource="));
    }

    #[test]
    fn percent_escapes_stay_in_the_namespace() {
        let predicate = "http://example.org/animals#has%2Fowner";
        let table = NamespaceTable::reserved(fixtures::ANIMALS_NS);
        let mut qnames = QNames::new(&table);
        assert_eq!(qnames.qname(predicate).as_deref(), Some("ns1:Fowner"));
        assert_eq!(
            qnames.declarations().last(),
            Some(&("ns1", "http://example.org/animals#has%2"))
        );
    }

    #[test]
    fn unsplittable_predicate_is_an_error() {
        let triples = vec![Triple::new(
            iri("http://example.org/animals#Fido"),
            iri("urn:x:42"),
            Literal::plain("x"),
        )];
        assert!(matches!(
            to_rdf_xml(&triples, &table()),
            Err(ExportError::Unserializable { .. })
        ));
    }

    #[test]
    fn control_characters_are_unserializable() {
        let triples = vec![Triple::new(
            iri("http://example.org/animals#Fido"),
            Iri::vocab(RDFS_COMMENT),
            Literal::plain("bell\u{7}"),
        )];
        assert!(matches!(
            to_rdf_xml(&triples, &table()),
            Err(ExportError::Unserializable { format: ExportFormat::RdfXml, .. })
        ));
    }

    #[test]
    fn text_and_attribute_escaping() {
        assert_eq!(escape_text("a<b>&c\r"), "a&lt;b&gt;&amp;c&#13;");
        assert_eq!(escape_attr("\"x\"\n"), "&quot;x&quot;&#10;");
    }
}
