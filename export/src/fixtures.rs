//! Sample snapshots shared by the unit tests, the conformance tests and the
//! `dump_snapshot` example.

use crate::model::{
    Concept, ConceptProperty, ConceptRestriction, CustomTemplate, Individual,
    IndividualProperty, IndividualRelationship, LinkedOntology, OntologySnapshot, Relationship,
    RestrictionKind,
};

/// Namespace of [`animals`].
pub const ANIMALS_NS: &str = "http://example.org/animals#";

/// A small ontology touching every part of the snapshot model:
/// `Animal`, `Dog`, `Food`; `Dog is-a Animal`, `Dog eats Food`; three
/// restrictions on `Dog`; individuals `Fido` (age 5) and `Rex`; a linked
/// FOAF ontology used as the predicate of `Fido knows Rex`.
#[must_use]
pub fn animals() -> OntologySnapshot {
    OntologySnapshot {
        id: 1,
        name: "Animals".to_owned(),
        namespace: ANIMALS_NS.to_owned(),
        description: Some("Domestic animals and what they eat.".to_owned()),
        version: Some("1.0.0".to_owned()),
        stored_prefixes: Some(r#"{"dc": "http://purl.org/dc/terms/"}"#.to_owned()),
        concepts: vec![
            Concept {
                id: 1,
                name: "Animal".to_owned(),
                definition: "A living organism that feeds on organic matter.".to_owned(),
                ..Concept::default()
            },
            Concept {
                id: 2,
                name: "Dog".to_owned(),
                definition: "A domesticated \"canine\" companion.\nLoyal.".to_owned(),
                properties: vec![
                    ConceptProperty {
                        name: "age".to_owned(),
                        data_type: "integer".to_owned(),
                        description: Some("Age in years".to_owned()),
                    },
                    ConceptProperty {
                        name: "nickname".to_owned(),
                        data_type: "string".to_owned(),
                        description: None,
                    },
                ],
                restrictions: vec![
                    ConceptRestriction {
                        property_name: "age".to_owned(),
                        kind: RestrictionKind::Required { is_mandatory: true },
                    },
                    ConceptRestriction {
                        property_name: "nickname".to_owned(),
                        kind: RestrictionKind::Cardinality {
                            min_cardinality: Some(0),
                            max_cardinality: Some(3),
                        },
                    },
                    ConceptRestriction {
                        property_name: "age".to_owned(),
                        kind: RestrictionKind::ValueType {
                            value_type: "integer".to_owned(),
                        },
                    },
                ],
                ..Concept::default()
            },
            Concept {
                id: 3,
                name: "Food".to_owned(),
                ..Concept::default()
            },
        ],
        relationships: vec![
            Relationship {
                id: 10,
                source_concept_id: 2,
                target_concept_id: 1,
                relation_type: "is-a".to_owned(),
                ..Relationship::default()
            },
            Relationship {
                id: 11,
                source_concept_id: 2,
                target_concept_id: 3,
                relation_type: "eats".to_owned(),
                label: Some("eats".to_owned()),
                ..Relationship::default()
            },
        ],
        individuals: vec![
            Individual {
                id: 20,
                concept_id: 2,
                name: "Fido".to_owned(),
                label: Some("Fido the dog".to_owned()),
                description: Some("Lives at <No. 5> & likes \u{e9}clairs".to_owned()),
                properties: vec![
                    IndividualProperty {
                        name: "age".to_owned(),
                        value: "5".to_owned(),
                        data_type: "integer".to_owned(),
                    },
                    IndividualProperty {
                        name: "weight".to_owned(),
                        value: "12.5".to_owned(),
                        data_type: "decimal".to_owned(),
                    },
                    IndividualProperty {
                        name: "vaccinated".to_owned(),
                        value: "true".to_owned(),
                        data_type: "boolean".to_owned(),
                    },
                    IndividualProperty {
                        name: "coat".to_owned(),
                        value: "golden".to_owned(),
                        data_type: "colour".to_owned(),
                    },
                ],
                ..Individual::default()
            },
            Individual {
                id: 21,
                concept_id: 2,
                name: "Rex".to_owned(),
                ..Individual::default()
            },
        ],
        individual_relationships: vec![IndividualRelationship {
            id: 30,
            source_individual_id: 20,
            target_individual_id: 21,
            relation_type: "knows".to_owned(),
            label: None,
            ontology_uri: Some("http://xmlns.com/foaf/0.1/knows".to_owned()),
        }],
        linked_ontologies: vec![LinkedOntology {
            id: 40,
            name: Some("Friend of a Friend".to_owned()),
            prefix: Some("foaf".to_owned()),
            namespace: "http://xmlns.com/foaf/0.1/".to_owned(),
        }],
        custom_templates: vec![CustomTemplate {
            id: 50,
            name: "Pet".to_owned(),
            category: Some("Domain".to_owned()),
            description: Some("A concept for household animals".to_owned()),
        }],
    }
}

/// The smallest interesting snapshot: `Animal`, `Dog`, and `Dog is-a Animal`.
#[must_use]
pub fn dog_is_a_animal() -> OntologySnapshot {
    OntologySnapshot {
        id: 2,
        name: "Pets".to_owned(),
        namespace: "http://example.org/pets/".to_owned(),
        concepts: vec![
            Concept {
                id: 1,
                name: "Animal".to_owned(),
                ..Concept::default()
            },
            Concept {
                id: 2,
                name: "Dog".to_owned(),
                ..Concept::default()
            },
        ],
        relationships: vec![Relationship {
            id: 1,
            source_concept_id: 2,
            target_concept_id: 1,
            relation_type: "is-a".to_owned(),
            ..Relationship::default()
        }],
        ..OntologySnapshot::default()
    }
}
