//! OWL restriction encoding.
//!
//! Each [`ConceptRestriction`] becomes one anonymous `owl:Restriction` node:
//!
//! ```text
//! _:b0 a owl:Restriction ;
//!     owl:onProperty ex:age ;
//!     owl:minCardinality "1"^^xsd:nonNegativeInteger .
//! ```
//!
//! Structurally identical restrictions still get separate nodes.

use crate::datatype::map_datatype;
use crate::error::Result;
use crate::model::iris::*;
use crate::model::{ConceptRestriction, RestrictionKind};
use crate::triple::{BlankNode, BlankNodeAllocator, Iri, Literal, Triple};

/// Encodes `restriction` under a fresh blank node. `property` is the IRI of
/// the restricted property.
#[must_use]
pub fn encode(
    restriction: &ConceptRestriction,
    property: Iri,
    blank_nodes: &mut BlankNodeAllocator,
) -> (BlankNode, Vec<Triple>) {
    let node = blank_nodes.fresh();
    let mut triples = vec![
        Triple::new(node.clone(), Iri::vocab(RDF_TYPE), Iri::vocab(OWL_RESTRICTION)),
        Triple::new(node.clone(), Iri::vocab(OWL_ON_PROPERTY), property),
    ];

    match &restriction.kind {
        RestrictionKind::Required { is_mandatory } => {
            let min = u32::from(*is_mandatory);
            triples.push(cardinality(&node, OWL_MIN_CARDINALITY, min));
        }
        RestrictionKind::Cardinality {
            min_cardinality,
            max_cardinality,
        } => {
            if let Some(min) = min_cardinality {
                triples.push(cardinality(&node, OWL_MIN_CARDINALITY, *min));
            }
            if let Some(max) = max_cardinality {
                triples.push(cardinality(&node, OWL_MAX_CARDINALITY, *max));
            }
        }
        RestrictionKind::ValueType { value_type } => {
            triples.push(Triple::new(
                node.clone(),
                Iri::vocab(OWL_ALL_VALUES_FROM),
                Iri::vocab(map_datatype(value_type)),
            ));
        }
    }

    (node, triples)
}

fn cardinality(node: &BlankNode, predicate: &'static str, bound: u32) -> Triple {
    Triple::new(
        node.clone(),
        Iri::vocab(predicate),
        Literal::typed(bound.to_string(), Iri::vocab(XSD_NON_NEGATIVE_INTEGER)),
    )
}

/// Mints the property IRI a restriction points at, the same way individual
/// properties are minted.
///
/// # Errors
///
/// Returns an error when the property name is blank or the namespace is
/// malformed.
pub fn property_iri(namespace: &str, restriction: &ConceptRestriction) -> Result<Iri> {
    crate::builder::minted(namespace, &restriction.property_name, "restricted property")
}
