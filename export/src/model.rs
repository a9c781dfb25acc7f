//! Ontology snapshot types.
//!
//! A snapshot is a fully materialized, owned copy of one ontology as the
//! persistence layer assembled it. The export engine only ever borrows it,
//! so one snapshot can be exported to several formats at once. Field names
//! follow the camelCase JSON the web application stores.

use serde::{Deserialize, Serialize};

/// Identifier of an entity inside a snapshot.
pub type EntityId = u64;

/// A complete ontology, ready for export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OntologySnapshot {
    /// Ontology identifier.
    #[serde(default)]
    pub id: EntityId,
    /// Display name (e.g., `"Animals"`).
    pub name: String,
    /// Canonical namespace IRI (e.g., `"http://example.org/animals#"`).
    #[serde(default)]
    pub namespace: String,
    /// Free-text description, exported as `rdfs:comment` on the ontology.
    #[serde(default)]
    pub description: Option<String>,
    /// Version string, exported as `owl:versionInfo`.
    #[serde(default)]
    pub version: Option<String>,
    /// Previously saved prefix associations as an opaque JSON object string.
    /// Malformed content is tolerated and ignored.
    #[serde(default)]
    pub stored_prefixes: Option<String>,
    /// Classes, in display order.
    #[serde(default)]
    pub concepts: Vec<Concept>,
    /// Class-level relationships.
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    /// Named individuals.
    #[serde(default)]
    pub individuals: Vec<Individual>,
    /// Relationships between individuals.
    #[serde(default)]
    pub individual_relationships: Vec<IndividualRelationship>,
    /// Other ontologies this one links to (`owl:imports`).
    #[serde(default)]
    pub linked_ontologies: Vec<LinkedOntology>,
    /// Concept templates offered by the editor. Not exported.
    #[serde(default)]
    pub custom_templates: Vec<CustomTemplate>,
}

/// An OWL class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    /// Concept identifier.
    pub id: EntityId,
    /// Name; also the source of the minted local IRI.
    pub name: String,
    /// Definition, exported as `rdfs:comment`.
    #[serde(default)]
    pub definition: String,
    /// Explicit IRI, overriding the minted one.
    #[serde(default)]
    pub uri: Option<String>,
    /// Declared properties.
    #[serde(default)]
    pub properties: Vec<ConceptProperty>,
    /// Restrictions on this concept's properties.
    #[serde(default)]
    pub restrictions: Vec<ConceptRestriction>,
}

/// A property declared on a concept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptProperty {
    /// Property name.
    pub name: String,
    /// Declared scalar type name (`"integer"`, `"string"`, ...).
    #[serde(default)]
    pub data_type: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
}

/// A restriction on how a concept uses one property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptRestriction {
    /// Name of the restricted property.
    pub property_name: String,
    /// What the restriction demands.
    #[serde(flatten)]
    pub kind: RestrictionKind,
}

/// The three restriction kinds the editor can express.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "restrictionType")]
pub enum RestrictionKind {
    /// The property is mandatory.
    #[serde(rename_all = "camelCase")]
    Required {
        /// Mandatory flag; `false` encodes a zero lower bound.
        #[serde(default = "mandatory_default")]
        is_mandatory: bool,
    },
    /// Lower and/or upper bound on the number of values.
    #[serde(rename_all = "camelCase")]
    Cardinality {
        /// Minimum number of values.
        #[serde(default)]
        min_cardinality: Option<u32>,
        /// Maximum number of values.
        #[serde(default)]
        max_cardinality: Option<u32>,
    },
    /// Every value must have the given datatype.
    #[serde(rename_all = "camelCase")]
    ValueType {
        /// Datatype name, mapped like property datatypes.
        value_type: String,
    },
}

fn mandatory_default() -> bool {
    true
}

/// A directed relationship between two concepts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    /// Relationship identifier.
    #[serde(default)]
    pub id: EntityId,
    /// Source concept.
    pub source_concept_id: EntityId,
    /// Target concept.
    pub target_concept_id: EntityId,
    /// Relation tag; `is-a` means subclassing.
    pub relation_type: String,
    /// Display label.
    #[serde(default)]
    pub label: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Externally defined predicate IRI, used instead of a minted one.
    #[serde(default)]
    pub ontology_uri: Option<String>,
}

/// A named individual (instance of a concept).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Individual {
    /// Individual identifier.
    pub id: EntityId,
    /// The concept this individual instantiates.
    pub concept_id: EntityId,
    /// Name; also the source of the minted local IRI.
    pub name: String,
    /// Display label; falls back to `name`.
    #[serde(default)]
    pub label: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Explicit IRI, overriding the minted one.
    #[serde(default)]
    pub uri: Option<String>,
    /// Property values.
    #[serde(default)]
    pub properties: Vec<IndividualProperty>,
}

/// One property value on an individual.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualProperty {
    /// Property name.
    pub name: String,
    /// Lexical value.
    pub value: String,
    /// Declared datatype name.
    #[serde(default)]
    pub data_type: String,
}

/// A directed relationship between two individuals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualRelationship {
    /// Relationship identifier.
    #[serde(default)]
    pub id: EntityId,
    /// Source individual.
    pub source_individual_id: EntityId,
    /// Target individual.
    pub target_individual_id: EntityId,
    /// Relation tag.
    pub relation_type: String,
    /// Display label.
    #[serde(default)]
    pub label: Option<String>,
    /// Externally defined predicate IRI.
    #[serde(default)]
    pub ontology_uri: Option<String>,
}

/// A link to another ontology.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedOntology {
    /// Link identifier.
    #[serde(default)]
    pub id: EntityId,
    /// Display name of the linked ontology.
    #[serde(default)]
    pub name: Option<String>,
    /// Preferred prefix for the linked namespace.
    #[serde(default)]
    pub prefix: Option<String>,
    /// Namespace IRI of the linked ontology.
    pub namespace: String,
}

/// An editor preset for creating concepts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomTemplate {
    /// Template identifier.
    #[serde(default)]
    pub id: EntityId,
    /// Template name.
    pub name: String,
    /// Grouping shown in the editor palette.
    #[serde(default)]
    pub category: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
}

impl OntologySnapshot {
    /// Looks up a concept by identifier. Returns `None` if not found.
    #[must_use]
    pub fn find_concept(&self, id: EntityId) -> Option<&Concept> {
        self.concepts.iter().find(|c| c.id == id)
    }

    /// Looks up an individual by identifier. Returns `None` if not found.
    #[must_use]
    pub fn find_individual(&self, id: EntityId) -> Option<&Individual> {
        self.individuals.iter().find(|i| i.id == id)
    }

    /// Returns the total number of restrictions across all concepts.
    #[must_use]
    pub fn restriction_count(&self) -> usize {
        self.concepts.iter().map(|c| c.restrictions.len()).sum()
    }
}

/// Standard IRI constants.
pub mod iris {
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdf:langString`.
    pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
    /// `rdfs:label`.
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    /// `rdfs:comment`.
    pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    /// `rdfs:subClassOf`.
    pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";

    /// `owl:Ontology`.
    pub const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
    /// `owl:Class`.
    pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    /// `owl:NamedIndividual`.
    pub const OWL_NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
    /// `owl:Restriction`.
    pub const OWL_RESTRICTION: &str = "http://www.w3.org/2002/07/owl#Restriction";
    /// `owl:onProperty`.
    pub const OWL_ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";
    /// `owl:minCardinality`.
    pub const OWL_MIN_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#minCardinality";
    /// `owl:maxCardinality`.
    pub const OWL_MAX_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#maxCardinality";
    /// `owl:allValuesFrom`.
    pub const OWL_ALL_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#allValuesFrom";
    /// `owl:imports`.
    pub const OWL_IMPORTS: &str = "http://www.w3.org/2002/07/owl#imports";
    /// `owl:versionInfo`.
    pub const OWL_VERSION_INFO: &str = "http://www.w3.org/2002/07/owl#versionInfo";

    // XSD datatypes
    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:integer`.
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// `xsd:long`.
    pub const XSD_LONG: &str = "http://www.w3.org/2001/XMLSchema#long";
    /// `xsd:short`.
    pub const XSD_SHORT: &str = "http://www.w3.org/2001/XMLSchema#short";
    /// `xsd:byte`.
    pub const XSD_BYTE: &str = "http://www.w3.org/2001/XMLSchema#byte";
    /// `xsd:positiveInteger`.
    pub const XSD_POSITIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#positiveInteger";
    /// `xsd:nonNegativeInteger`.
    pub const XSD_NON_NEGATIVE_INTEGER: &str =
        "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";
    /// `xsd:decimal`.
    pub const XSD_DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    /// `xsd:double`.
    pub const XSD_DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    /// `xsd:float`.
    pub const XSD_FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
    /// `xsd:boolean`.
    pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    /// `xsd:date`.
    pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
    /// `xsd:dateTime`.
    pub const XSD_DATETIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
    /// `xsd:time`.
    pub const XSD_TIME: &str = "http://www.w3.org/2001/XMLSchema#time";
    /// `xsd:anyURI`.
    pub const XSD_ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
}
