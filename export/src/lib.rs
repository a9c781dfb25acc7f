//! Ontology snapshot to RDF export engine.
//!
//! The `eidos-export` crate turns an [`OntologySnapshot`] (classes,
//! properties, restrictions, relationships and individuals as the editor
//! stores them) into one of four RDF serializations. Every format is written
//! from the same intermediate triple list, so the outputs describe the same
//! graph.
//!
//! # Entry Point
//!
//! ```
//! use eidos_export::{export, ExportFormat};
//!
//! let snapshot = eidos_export::fixtures::dog_is_a_animal();
//! let turtle = export(&snapshot, ExportFormat::Turtle)?;
//! assert!(turtle.contains("rdfs:subClassOf"));
//! # Ok::<(), eidos_export::ExportError>(())
//! ```
//!
//! # Pipeline
//!
//! 1. [`namespace::resolve`] builds the prefix table.
//! 2. [`builder::build`] walks the snapshot into [`Triple`]s, encoding
//!    restrictions through [`restriction::encode`].
//! 3. A writer in [`serializer`] renders the triples.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod builder;
pub mod datatype;
pub mod error;
#[doc(hidden)]
pub mod fixtures;
pub mod model;
pub mod namespace;
pub mod restriction;
pub mod serializer;
pub mod triple;

use std::fmt;
use std::str::FromStr;

pub use error::{ExportError, Result};
pub use model::OntologySnapshot;
pub use namespace::NamespaceTable;
pub use triple::Triple;

/// The supported serializations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExportFormat {
    /// W3C Turtle 1.1.
    Turtle,
    /// RDF/XML, UTF-8 encoded.
    RdfXml,
    /// W3C N-Triples.
    NTriples,
    /// JSON-LD 1.1, one document with `@context` and `@graph`.
    JsonLd,
}

impl ExportFormat {
    /// Every format, in a stable order.
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Turtle,
        ExportFormat::RdfXml,
        ExportFormat::NTriples,
        ExportFormat::JsonLd,
    ];

    /// Canonical lower-case name, accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ExportFormat::Turtle => "turtle",
            ExportFormat::RdfXml => "rdfxml",
            ExportFormat::NTriples => "ntriples",
            ExportFormat::JsonLd => "jsonld",
        }
    }

    /// Conventional file extension, without the dot.
    #[must_use]
    pub const fn file_extension(self) -> &'static str {
        match self {
            ExportFormat::Turtle => "ttl",
            ExportFormat::RdfXml => "rdf",
            ExportFormat::NTriples => "nt",
            ExportFormat::JsonLd => "jsonld",
        }
    }

    /// IANA media type.
    #[must_use]
    pub const fn media_type(self) -> &'static str {
        match self {
            ExportFormat::Turtle => "text/turtle",
            ExportFormat::RdfXml => "application/rdf+xml",
            ExportFormat::NTriples => "application/n-triples",
            ExportFormat::JsonLd => "application/ld+json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "" => Err(ExportError::invalid("export format is empty")),
            "turtle" | "ttl" => Ok(ExportFormat::Turtle),
            "rdfxml" | "rdf-xml" | "xml" | "owl" | "rdf" => Ok(ExportFormat::RdfXml),
            "ntriples" | "nt" | "n-triples" => Ok(ExportFormat::NTriples),
            "jsonld" | "json-ld" | "json" => Ok(ExportFormat::JsonLd),
            _ => Err(ExportError::UnsupportedFormat(s.trim().to_owned())),
        }
    }
}

/// Namespace table and triple list for `snapshot`, shared by every writer.
fn prepare(snapshot: &OntologySnapshot) -> Result<(NamespaceTable, Vec<Triple>)> {
    let base = namespace::normalize_namespace(&snapshot.namespace)?;
    let namespaces = namespace::resolve(
        &base,
        &snapshot.name,
        snapshot.stored_prefixes.as_deref(),
        &snapshot.linked_ontologies,
    );
    let triples = builder::build(snapshot, &namespaces)?;
    tracing::debug!(
        ontology = %snapshot.name,
        triples = triples.len(),
        prefixes = namespaces.len(),
        "triple model built"
    );
    Ok((namespaces, triples))
}

fn write(format: ExportFormat, triples: &[Triple], namespaces: &NamespaceTable) -> Result<String> {
    let text = match format {
        ExportFormat::Turtle => serializer::turtle::to_turtle(triples, namespaces),
        ExportFormat::RdfXml => serializer::rdfxml::to_rdf_xml(triples, namespaces)?,
        ExportFormat::NTriples => serializer::ntriples::to_ntriples(triples),
        ExportFormat::JsonLd => serializer::jsonld::to_json_ld_string(triples, namespaces)
            .map_err(|e| ExportError::Unserializable {
                format,
                reason: e.to_string(),
            })?,
    };
    tracing::debug!(%format, bytes = text.len(), "serialized");
    Ok(text)
}

/// Exports `snapshot` in `format`.
///
/// # Errors
///
/// Returns [`ExportError::InvalidOntologySnapshot`] when the snapshot cannot
/// be turned into triples, and [`ExportError::Unserializable`] when the
/// writer cannot express an IRI.
pub fn export(snapshot: &OntologySnapshot, format: ExportFormat) -> Result<String> {
    let (namespaces, triples) = prepare(snapshot)?;
    write(format, &triples, &namespaces)
}

/// Exports `snapshot` in every format from a single triple list.
///
/// # Errors
///
/// Fails on the first error any format raises; see [`export`].
pub fn export_all(snapshot: &OntologySnapshot) -> Result<Vec<(ExportFormat, String)>> {
    let (namespaces, triples) = prepare(snapshot)?;
    ExportFormat::ALL
        .into_iter()
        .map(|format| Ok((format, write(format, &triples, &namespaces)?)))
        .collect()
}

/// Exports `snapshot` in the format named by `format`.
///
/// # Errors
///
/// Returns [`ExportError::InvalidOntologySnapshot`] for an empty name,
/// [`ExportError::UnsupportedFormat`] for an unknown one, and otherwise the
/// errors of [`export`].
pub fn export_named(snapshot: &OntologySnapshot, format: &str) -> Result<String> {
    export(snapshot, format.parse()?)
}
