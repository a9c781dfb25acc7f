//! Snapshot → triple list.
//!
//! Walks the snapshot collections in order and emits the ontology header,
//! classes with their restrictions, relationships, individuals and
//! individual relationships. No text is produced here.

use std::fmt::Write as _;

use crate::datatype::map_datatype;
use crate::error::{ExportError, Result};
use crate::model::iris::*;
use crate::model::{Concept, Individual, OntologySnapshot};
use crate::namespace::NamespaceTable;
use crate::restriction;
use crate::triple::{BlankNodeAllocator, Iri, Literal, Triple};

/// Relation tags that mean `rdfs:subClassOf`, compared case-insensitively.
const IS_A_TAGS: &[&str] = &["is-a", "is_a", "isa", "is a", "subclass-of", "subclassof"];

/// Returns true when `tag` denotes subclassing.
#[must_use]
pub fn is_subclass_tag(tag: &str) -> bool {
    let tag = tag.trim().to_ascii_lowercase();
    IS_A_TAGS.contains(&tag.as_str())
}

/// Builds the triple list for `snapshot`, minting IRIs under
/// `namespaces.base()`.
///
/// # Errors
///
/// Returns [`ExportError::InvalidOntologySnapshot`] when an entity has an
/// empty name, an IRI override is not absolute, or a relationship refers to
/// a concept or individual missing from the snapshot.
pub fn build(snapshot: &OntologySnapshot, namespaces: &NamespaceTable) -> Result<Vec<Triple>> {
    let mut builder = TripleBuilder {
        snapshot,
        namespaces,
        base: namespaces.base(),
        triples: Vec::new(),
        blank_nodes: BlankNodeAllocator::new(),
    };
    builder.header()?;
    builder.concepts()?;
    builder.relationships()?;
    builder.individuals()?;
    builder.individual_relationships()?;
    Ok(builder.triples)
}

struct TripleBuilder<'a> {
    snapshot: &'a OntologySnapshot,
    namespaces: &'a NamespaceTable,
    base: &'a str,
    triples: Vec<Triple>,
    blank_nodes: BlankNodeAllocator,
}

impl TripleBuilder<'_> {
    fn push(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    fn push_comment(&mut self, subject: &Iri, text: Option<&str>) {
        if let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) {
            self.push(Triple::new(
                subject.clone(),
                Iri::vocab(RDFS_COMMENT),
                Literal::plain(text),
            ));
        }
    }

    fn header(&mut self) -> Result<()> {
        let snapshot = self.snapshot;
        let ontology = ontology_iri(self.base)?;
        self.push(Triple::new(
            ontology.clone(),
            Iri::vocab(RDF_TYPE),
            Iri::vocab(OWL_ONTOLOGY),
        ));
        if !snapshot.name.trim().is_empty() {
            self.push(Triple::new(
                ontology.clone(),
                Iri::vocab(RDFS_LABEL),
                Literal::plain(snapshot.name.trim()),
            ));
        }
        self.push_comment(&ontology, snapshot.description.as_deref());
        if let Some(version) = snapshot
            .version
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            self.push(Triple::new(
                ontology.clone(),
                Iri::vocab(OWL_VERSION_INFO),
                Literal::plain(version),
            ));
        }
        for link in &snapshot.linked_ontologies {
            let imported = Iri::new(link.namespace.trim()).map_err(|_| {
                ExportError::invalid(format!(
                    "linked ontology {} has a malformed namespace {:?}",
                    link.id, link.namespace
                ))
            })?;
            self.push(Triple::new(
                ontology.clone(),
                Iri::vocab(OWL_IMPORTS),
                imported,
            ));
        }
        Ok(())
    }

    fn concepts(&mut self) -> Result<()> {
        let snapshot = self.snapshot;
        for concept in &snapshot.concepts {
            let class = concept_iri(self.namespaces, concept)?;
            self.push(Triple::new(
                class.clone(),
                Iri::vocab(RDF_TYPE),
                Iri::vocab(OWL_CLASS),
            ));
            self.push(Triple::new(
                class.clone(),
                Iri::vocab(RDFS_LABEL),
                Literal::plain(concept.name.trim()),
            ));
            self.push_comment(&class, Some(&concept.definition));

            for r in &concept.restrictions {
                let property = restriction::property_iri(self.base, r)?;
                let (node, triples) = restriction::encode(r, property, &mut self.blank_nodes);
                self.push(Triple::new(
                    class.clone(),
                    Iri::vocab(RDFS_SUBCLASS_OF),
                    node,
                ));
                self.triples.extend(triples);
            }
        }
        Ok(())
    }

    fn relationships(&mut self) -> Result<()> {
        let snapshot = self.snapshot;
        for rel in &snapshot.relationships {
            let source = self.concept_ref(rel.source_concept_id, rel.id)?;
            let target = self.concept_ref(rel.target_concept_id, rel.id)?;
            let predicate = if is_subclass_tag(&rel.relation_type) {
                Iri::vocab(RDFS_SUBCLASS_OF)
            } else {
                predicate_iri(self.namespaces, &rel.relation_type, rel.ontology_uri.as_deref())?
            };
            self.push(Triple::new(source, predicate, target));
        }
        Ok(())
    }

    fn individuals(&mut self) -> Result<()> {
        let snapshot = self.snapshot;
        for individual in &snapshot.individuals {
            let subject = individual_iri(self.namespaces, individual)?;
            let class = self.concept_ref(individual.concept_id, individual.id)?;
            self.push(Triple::new(
                subject.clone(),
                Iri::vocab(RDF_TYPE),
                Iri::vocab(OWL_NAMED_INDIVIDUAL),
            ));
            self.push(Triple::new(subject.clone(), Iri::vocab(RDF_TYPE), class));

            let label = individual
                .label
                .as_deref()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| individual.name.trim());
            self.push(Triple::new(
                subject.clone(),
                Iri::vocab(RDFS_LABEL),
                Literal::plain(label),
            ));
            self.push_comment(&subject, individual.description.as_deref());

            for property in &individual.properties {
                let predicate = minted(self.base, &property.name, "individual property")?;
                let datatype = Iri::vocab(map_datatype(&property.data_type));
                self.push(Triple::new(
                    subject.clone(),
                    predicate,
                    Literal::typed(property.value.as_str(), datatype),
                ));
            }
        }
        Ok(())
    }

    fn individual_relationships(&mut self) -> Result<()> {
        let snapshot = self.snapshot;
        for rel in &snapshot.individual_relationships {
            let source = self.individual_ref(rel.source_individual_id, rel.id)?;
            let target = self.individual_ref(rel.target_individual_id, rel.id)?;
            let predicate =
                predicate_iri(self.namespaces, &rel.relation_type, rel.ontology_uri.as_deref())?;
            self.push(Triple::new(source, predicate, target));
        }
        Ok(())
    }

    fn concept_ref(&self, id: u64, referrer: u64) -> Result<Iri> {
        let concept = self.snapshot.find_concept(id).ok_or_else(|| {
            ExportError::invalid(format!("entity {referrer} refers to unknown concept {id}"))
        })?;
        concept_iri(self.namespaces, concept)
    }

    fn individual_ref(&self, id: u64, referrer: u64) -> Result<Iri> {
        let individual = self.snapshot.find_individual(id).ok_or_else(|| {
            ExportError::invalid(format!(
                "relationship {referrer} refers to unknown individual {id}"
            ))
        })?;
        individual_iri(self.namespaces, individual)
    }
}

/// The ontology IRI: the namespace without a trailing `#`.
///
/// # Errors
///
/// Returns an error when the namespace is not an absolute IRI.
pub fn ontology_iri(namespace: &str) -> Result<Iri> {
    Iri::new(namespace.strip_suffix('#').unwrap_or(namespace))
}

/// IRI of a concept: its override, else minted from its name.
///
/// # Errors
///
/// Returns an error for a malformed override or an empty name.
pub fn concept_iri(namespaces: &NamespaceTable, concept: &Concept) -> Result<Iri> {
    match concept.uri.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
        Some(uri) => override_iri(namespaces, uri).ok_or_else(|| {
            ExportError::invalid(format!("concept {} has a malformed IRI {uri:?}", concept.id))
        }),
        None => minted(namespaces.base(), &concept.name, "concept"),
    }
}

/// IRI of an individual: its override, else minted from its name.
///
/// # Errors
///
/// Returns an error for a malformed override or an empty name.
pub fn individual_iri(namespaces: &NamespaceTable, individual: &Individual) -> Result<Iri> {
    match individual
        .uri
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
    {
        Some(uri) => override_iri(namespaces, uri).ok_or_else(|| {
            ExportError::invalid(format!(
                "individual {} has a malformed IRI {uri:?}",
                individual.id
            ))
        }),
        None => minted(namespaces.base(), &individual.name, "individual"),
    }
}

/// Predicate for a non-subclass relationship: the override when present,
/// else the relation tag minted under the namespace.
///
/// # Errors
///
/// Returns an error for a malformed override or an empty tag.
pub fn predicate_iri(
    namespaces: &NamespaceTable,
    tag: &str,
    override_iri: Option<&str>,
) -> Result<Iri> {
    match override_iri.map(str::trim).filter(|u| !u.is_empty()) {
        Some(uri) => self::override_iri(namespaces, uri).ok_or_else(|| {
            ExportError::invalid(format!("relationship predicate {uri:?} is not an absolute IRI"))
        }),
        None => minted(namespaces.base(), tag, "relation type"),
    }
}

/// Reads an override IRI. `prefix:local` with a bound prefix expands
/// against the table, the way a JSON-LD processor reads it through
/// `@context`; anything else must already be absolute.
fn override_iri(namespaces: &NamespaceTable, uri: &str) -> Option<Iri> {
    if let Some((prefix, local)) = uri.split_once(':') {
        if !local.starts_with("//") {
            if let Some(namespace) = namespaces.get(prefix) {
                return Iri::new(format!("{namespace}{local}")).ok();
            }
        }
    }
    Iri::new(uri).ok()
}

/// Mints `namespace` + the local part of `name`.
///
/// # Errors
///
/// Returns an error when `name` is blank or the namespace is not absolute.
pub(crate) fn minted(namespace: &str, name: &str, what: &str) -> Result<Iri> {
    if name.trim().is_empty() {
        return Err(ExportError::invalid(format!("{what} has an empty name")));
    }
    Iri::new(format!("{namespace}{}", local_name(name)))
}

/// Turns a display name into an IRI local part.
///
/// Whitespace runs become `_`. ASCII letters and digits, `_`, `-` and
/// non-ASCII letters are kept; every other character is percent-encoded as
/// UTF-8. A leading digit or `-` gets a `_` in front, and a `_` is appended
/// when nothing after the last escape can start an XML name, so the IRI
/// always ends in a usable RDF/XML local name.
#[must_use]
pub fn local_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut gap = false;
    for ch in name.trim().chars() {
        if ch.is_whitespace() {
            gap = true;
            continue;
        }
        if gap {
            out.push('_');
            gap = false;
        }
        if is_name_start(ch) || ch.is_ascii_digit() || ch == '-' {
            out.push(ch);
        } else {
            let mut buf = [0u8; 4];
            for byte in ch.encode_utf8(&mut buf).bytes() {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    if out.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
        out.insert(0, '_');
    }
    let tail = out.rsplit('%').next().unwrap_or_default();
    if out.contains('%') && !tail.chars().any(is_name_start) {
        out.push('_');
    }
    out
}

/// Characters that may start an XML name, restricted to those kept raw in
/// a local name.
pub(crate) fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || (c >= '\u{C0}' && c.is_alphabetic())
}
