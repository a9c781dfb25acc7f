//! Format-agnostic triple model.
//!
//! The builder produces a `Vec<Triple>`; every writer consumes the same list.
//! IRIs are checked to be absolute when constructed, so writers never see a
//! relative or malformed identifier.

use std::fmt;

use crate::error::{ExportError, Result};
use crate::model::iris::XSD_STRING;

/// An absolute IRI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri(String);

impl Iri {
    /// Wraps `iri` after checking that it is absolute and free of characters
    /// that no RDF syntax can carry.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidOntologySnapshot`] when the check fails.
    pub fn new(iri: impl Into<String>) -> Result<Self> {
        let iri = iri.into();
        if is_absolute_iri(&iri) {
            Ok(Iri(iri))
        } else {
            Err(ExportError::invalid(format!("not an absolute IRI: {iri:?}")))
        }
    }

    /// Wraps one of the vocabulary constants in [`crate::model::iris`].
    pub(crate) fn vocab(iri: &'static str) -> Self {
        Iri(iri.to_owned())
    }

    /// Returns the IRI text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An anonymous node, labelled `b0`, `b1`, ... within one export.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlankNode(String);

impl BlankNode {
    /// Returns the label without the `_:` marker.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.0
    }
}

/// Hands out fresh blank nodes for one export call.
#[derive(Debug, Default)]
pub struct BlankNodeAllocator {
    next: usize,
}

impl BlankNodeAllocator {
    /// Creates an allocator starting at `b0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a blank node that no earlier call returned.
    pub fn fresh(&mut self) -> BlankNode {
        let node = BlankNode(format!("b{}", self.next));
        self.next += 1;
        node
    }
}

/// A literal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    /// Lexical form.
    pub lexical: String,
    /// Datatype IRI; `None` means `xsd:string` (or `rdf:langString` when a
    /// language tag is present).
    pub datatype: Option<Iri>,
    /// Language tag.
    pub language: Option<String>,
}

impl Literal {
    /// A plain string literal.
    #[must_use]
    pub fn plain(lexical: impl Into<String>) -> Self {
        Literal {
            lexical: lexical.into(),
            datatype: None,
            language: None,
        }
    }

    /// A typed literal. `xsd:string` collapses to a plain literal, which is
    /// the same RDF term.
    #[must_use]
    pub fn typed(lexical: impl Into<String>, datatype: Iri) -> Self {
        if datatype.as_str() == XSD_STRING {
            return Literal::plain(lexical);
        }
        Literal {
            lexical: lexical.into(),
            datatype: Some(datatype),
            language: None,
        }
    }

    /// A language-tagged string.
    #[must_use]
    pub fn tagged(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Literal {
            lexical: lexical.into(),
            datatype: None,
            language: Some(language.into()),
        }
    }
}

/// Subject position: an IRI or a blank node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Subject {
    /// Named resource.
    Iri(Iri),
    /// Anonymous resource.
    Blank(BlankNode),
}

/// Object position: an IRI, a blank node, or a literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Object {
    /// Named resource.
    Iri(Iri),
    /// Anonymous resource.
    Blank(BlankNode),
    /// Data value.
    Literal(Literal),
}

/// One RDF statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject.
    pub subject: Subject,
    /// Predicate.
    pub predicate: Iri,
    /// Object.
    pub object: Object,
}

impl Triple {
    /// Builds a triple from its three parts.
    pub fn new(subject: impl Into<Subject>, predicate: Iri, object: impl Into<Object>) -> Self {
        Triple {
            subject: subject.into(),
            predicate,
            object: object.into(),
        }
    }
}

impl From<Iri> for Subject {
    fn from(iri: Iri) -> Self {
        Subject::Iri(iri)
    }
}

impl From<BlankNode> for Subject {
    fn from(node: BlankNode) -> Self {
        Subject::Blank(node)
    }
}

impl From<Iri> for Object {
    fn from(iri: Iri) -> Self {
        Object::Iri(iri)
    }
}

impl From<BlankNode> for Object {
    fn from(node: BlankNode) -> Self {
        Object::Blank(node)
    }
}

impl From<Literal> for Object {
    fn from(literal: Literal) -> Self {
        Object::Literal(literal)
    }
}

/// Returns true for an IRI with a scheme, a non-empty remainder, and none of
/// the characters excluded by the IRI grammar.
#[must_use]
pub fn is_absolute_iri(iri: &str) -> bool {
    let Some((scheme, rest)) = iri.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    let scheme_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    scheme_ok
        && !rest.is_empty()
        && !iri.chars().any(|c| {
            c.is_control()
                || c.is_whitespace()
                || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\')
        })
}
