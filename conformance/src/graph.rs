//! Parser-independent view of an exported graph.
//!
//! Every parser lowers its output to [`ParsedGraph`], so graphs read from
//! different formats can be compared directly. Literals are normalized the
//! RDF 1.1 way: a plain literal has datatype `xsd:string`, a tagged one
//! `rdf:langString`.

use std::collections::BTreeMap;
use std::fmt;

use eidos_export::model::iris::{RDF_LANG_STRING, RDF_TYPE, XSD_STRING};

/// An RDF term as read back from an export.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParsedTerm {
    /// An IRI.
    Iri(String),
    /// A blank node, by its document-local label.
    Blank(String),
    /// A literal with its normalized datatype.
    Literal {
        /// Lexical form.
        lexical: String,
        /// Datatype IRI; never empty.
        datatype: String,
        /// Language tag, lower-cased.
        language: Option<String>,
    },
}

impl ParsedTerm {
    /// An IRI term.
    pub fn iri(iri: impl Into<String>) -> Self {
        ParsedTerm::Iri(iri.into())
    }

    /// A literal, normalizing the datatype from the optional parts a parser
    /// reports.
    pub fn literal(
        lexical: impl Into<String>,
        datatype: Option<&str>,
        language: Option<&str>,
    ) -> Self {
        let language = language.map(str::to_ascii_lowercase);
        let datatype = match (&language, datatype) {
            (Some(_), _) => RDF_LANG_STRING,
            (None, Some(dt)) => dt,
            (None, None) => XSD_STRING,
        };
        ParsedTerm::Literal {
            lexical: lexical.into(),
            datatype: datatype.to_owned(),
            language,
        }
    }

    /// The IRI, when this term is one.
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            ParsedTerm::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    fn write_canonical(&self, f: &mut String, blanks: &BTreeMap<&str, String>) {
        match self {
            ParsedTerm::Iri(iri) => f.push_str(&format!("<{iri}>")),
            ParsedTerm::Blank(id) => match blanks.get(id.as_str()) {
                Some(signature) => f.push_str(&format!("[{signature}]")),
                None => f.push_str("[]"),
            },
            ParsedTerm::Literal { .. } => f.push_str(&self.to_string()),
        }
    }
}

impl fmt::Display for ParsedTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedTerm::Iri(iri) => write!(f, "<{iri}>"),
            ParsedTerm::Blank(id) => write!(f, "_:{id}"),
            ParsedTerm::Literal {
                lexical,
                language: Some(language),
                ..
            } => write!(f, "{lexical:?}@{language}"),
            ParsedTerm::Literal {
                lexical, datatype, ..
            } => write!(f, "{lexical:?}^^<{datatype}>"),
        }
    }
}

/// One parsed triple.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParsedTriple {
    /// Subject: an IRI or blank node.
    pub subject: ParsedTerm,
    /// Predicate IRI.
    pub predicate: String,
    /// Object.
    pub object: ParsedTerm,
}

/// The triples read back from one document, in parser order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedGraph {
    /// Triples in the order the parser produced them.
    pub triples: Vec<ParsedTriple>,
}

impl ParsedGraph {
    /// Appends a triple.
    pub fn push(&mut self, subject: ParsedTerm, predicate: impl Into<String>, object: ParsedTerm) {
        self.triples.push(ParsedTriple {
            subject,
            predicate: predicate.into(),
            object,
        });
    }

    /// Number of triples.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// True when no triple was read.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// True when `(subject, predicate, object)` is present.
    pub fn contains(&self, subject: &ParsedTerm, predicate: &str, object: &ParsedTerm) -> bool {
        self.triples
            .iter()
            .any(|t| &t.subject == subject && t.predicate == predicate && &t.object == object)
    }

    /// Objects of `predicate` on `subject`.
    pub fn objects<'a>(
        &'a self,
        subject: &'a ParsedTerm,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a ParsedTerm> {
        self.triples
            .iter()
            .filter(move |t| &t.subject == subject && t.predicate == predicate)
            .map(|t| &t.object)
    }

    /// Subjects typed with `class`.
    pub fn instances_of<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a ParsedTerm> {
        self.triples
            .iter()
            .filter(move |t| t.predicate == RDF_TYPE && t.object.as_iri() == Some(class))
            .map(|t| &t.subject)
    }

    /// Sorted triple lines in which every blank node is replaced by a
    /// signature of its own outgoing statements, so two graphs that differ
    /// only in blank-node labels or triple order produce the same lines.
    ///
    /// Blank nodes are expected to be leaves of depth one, as restriction
    /// nodes are; nested blank nodes collapse to `[]` inside a signature.
    pub fn canonical(&self) -> Vec<String> {
        let mut outgoing: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for t in &self.triples {
            if let ParsedTerm::Blank(id) = &t.subject {
                let object = match &t.object {
                    ParsedTerm::Blank(_) => "[]".to_owned(),
                    other => other.to_string(),
                };
                outgoing
                    .entry(id.as_str())
                    .or_default()
                    .push(format!("<{}> {object}", t.predicate));
            }
        }
        let signatures: BTreeMap<&str, String> = outgoing
            .into_iter()
            .map(|(id, mut statements)| {
                statements.sort();
                (id, statements.join("; "))
            })
            .collect();

        let mut lines: Vec<String> = self
            .triples
            .iter()
            .map(|t| {
                let mut line = String::new();
                t.subject.write_canonical(&mut line, &signatures);
                line.push_str(&format!(" <{}> ", t.predicate));
                t.object.write_canonical(&mut line, &signatures);
                line
            })
            .collect();
        lines.sort();
        lines
    }
}
