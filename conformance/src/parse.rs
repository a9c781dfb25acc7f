//! Reads export output back into [`ParsedGraph`]s.
//!
//! Turtle and N-Triples go through `sophia_turtle`, JSON-LD through
//! `sophia_jsonld`, RDF/XML through `rio_xml`.

use anyhow::{anyhow, bail, Result};
use rio_api::model::{Literal as RioLiteral, Subject as RioSubject, Term as RioTerm};
use rio_api::parser::TriplesParser;
use rio_xml::{RdfXmlError, RdfXmlParser};
use sophia_api::parser::QuadParser;
use sophia_api::quad::Quad as _;
use sophia_api::source::{QuadSource, TripleSource};
use sophia_api::term::{Term, TermKind};
use sophia_api::triple::Triple as _;
use sophia_jsonld::JsonLdParser;

use eidos_export::ExportFormat;

use crate::graph::{ParsedGraph, ParsedTerm};

/// Parses `text` as `format`.
///
/// # Errors
///
/// Returns the parser's error when `text` is not valid `format` output.
pub fn parse(format: ExportFormat, text: &str) -> Result<ParsedGraph> {
    match format {
        ExportFormat::Turtle => parse_turtle(text),
        ExportFormat::RdfXml => parse_rdf_xml(text),
        ExportFormat::NTriples => parse_ntriples(text),
        ExportFormat::JsonLd => parse_json_ld(text),
    }
}

/// Parses a Turtle document.
///
/// # Errors
///
/// Returns an error if the document is not valid Turtle.
pub fn parse_turtle(text: &str) -> Result<ParsedGraph> {
    let mut graph = ParsedGraph::default();
    let mut unsupported = 0usize;
    sophia_turtle::parser::turtle::parse_str(text)
        .for_each_triple(|t| push_sophia(&mut graph, &mut unsupported, t.s(), t.p(), t.o()))
        .map_err(|e| anyhow!("Turtle parse error: {e}"))?;
    if unsupported > 0 {
        bail!("{unsupported} Turtle triples use terms outside RDF 1.1");
    }
    Ok(graph)
}

/// Parses an N-Triples document.
///
/// # Errors
///
/// Returns an error if the document is not valid N-Triples.
pub fn parse_ntriples(text: &str) -> Result<ParsedGraph> {
    let mut graph = ParsedGraph::default();
    let mut unsupported = 0usize;
    sophia_turtle::parser::nt::parse_str(text)
        .for_each_triple(|t| push_sophia(&mut graph, &mut unsupported, t.s(), t.p(), t.o()))
        .map_err(|e| anyhow!("N-Triples parse error: {e}"))?;
    if unsupported > 0 {
        bail!("{unsupported} N-Triples triples use terms outside RDF 1.1");
    }
    Ok(graph)
}

fn push_sophia<T: Term>(
    graph: &mut ParsedGraph,
    unsupported: &mut usize,
    s: T,
    p: T,
    o: T,
) {
    match (sophia_term(&s), p.iri(), sophia_term(&o)) {
        (Some(subject), Some(predicate), Some(object)) => {
            graph.push(subject, predicate.as_str(), object);
        }
        _ => *unsupported += 1,
    }
}

fn sophia_term<T: Term>(term: &T) -> Option<ParsedTerm> {
    match term.kind() {
        TermKind::Iri => term.iri().map(|iri| ParsedTerm::iri(iri.as_str())),
        TermKind::BlankNode => term
            .bnode_id()
            .map(|id| ParsedTerm::Blank(id.as_str().to_owned())),
        TermKind::Literal => {
            let lexical = term.lexical_form()?;
            let datatype = term.datatype();
            let language = term.language_tag();
            Some(ParsedTerm::literal(
                &*lexical,
                datatype.as_ref().map(|dt| dt.as_str()),
                language.as_ref().map(|tag| tag.as_str()),
            ))
        }
        _ => None,
    }
}

/// Parses an RDF/XML document.
///
/// # Errors
///
/// Returns an error if the document is not well-formed RDF/XML.
pub fn parse_rdf_xml(text: &str) -> Result<ParsedGraph> {
    let mut graph = ParsedGraph::default();
    let mut unsupported = 0usize;
    let mut parser = RdfXmlParser::new(text.as_bytes(), None);
    let res: Result<(), RdfXmlError> = parser.parse_all(&mut |t| {
        let subject = match t.subject {
            RioSubject::NamedNode(n) => Some(ParsedTerm::iri(n.iri)),
            RioSubject::BlankNode(b) => Some(ParsedTerm::Blank(b.id.to_owned())),
            _ => None,
        };
        let object = match t.object {
            RioTerm::NamedNode(n) => Some(ParsedTerm::iri(n.iri)),
            RioTerm::BlankNode(b) => Some(ParsedTerm::Blank(b.id.to_owned())),
            RioTerm::Literal(RioLiteral::Simple { value }) => {
                Some(ParsedTerm::literal(value, None, None))
            }
            RioTerm::Literal(RioLiteral::LanguageTaggedString { value, language }) => {
                Some(ParsedTerm::literal(value, None, Some(language)))
            }
            RioTerm::Literal(RioLiteral::Typed { value, datatype }) => {
                Some(ParsedTerm::literal(value, Some(datatype.iri), None))
            }
            _ => None,
        };
        match (subject, object) {
            (Some(subject), Some(object)) => graph.push(subject, t.predicate.iri, object),
            _ => unsupported += 1,
        }
        Ok(())
    });
    res.map_err(|e| anyhow!("RDF/XML parse error: {e}"))?;
    if unsupported > 0 {
        bail!("{unsupported} RDF/XML triples use terms outside RDF 1.1");
    }
    Ok(graph)
}

/// Parses a JSON-LD document with a JSON-LD 1.1 processor. Contexts must be
/// inline: no remote document loader is configured.
///
/// # Errors
///
/// Returns an error if the document is not valid JSON-LD, or puts triples
/// in a named graph.
pub fn parse_json_ld(text: &str) -> Result<ParsedGraph> {
    let mut graph = ParsedGraph::default();
    let mut unsupported = 0usize;
    let parser: JsonLdParser = JsonLdParser::new();
    parser
        .parse_str(text)
        .for_each_quad(|q| {
            if q.g().is_some() {
                unsupported += 1;
            } else {
                push_sophia(&mut graph, &mut unsupported, q.s(), q.p(), q.o());
            }
        })
        .map_err(|e| anyhow!("JSON-LD parse error: {e}"))?;
    if unsupported > 0 {
        bail!("{unsupported} JSON-LD statements fall outside the default graph");
    }
    Ok(graph)
}
