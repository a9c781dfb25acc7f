//! The same facts hold in every export format.

use eidos_conformance::parse::parse;
use eidos_conformance::{ParsedGraph, ParsedTerm};
use eidos_export::model::iris::*;
use eidos_export::{export, export_named, fixtures, ExportError, ExportFormat};

const ANIMALS: &str = "http://example.org/animals#";

fn iri(local: &str) -> ParsedTerm {
    ParsedTerm::iri(format!("{ANIMALS}{local}"))
}

fn parsed(format: ExportFormat) -> ParsedGraph {
    let text = export(&fixtures::animals(), format).expect("exports");
    parse(format, &text).expect("parses")
}

#[test]
fn dog_is_a_subclass_of_animal() {
    let pets = fixtures::dog_is_a_animal();
    for format in ExportFormat::ALL {
        let text = export(&pets, format).expect("exports");
        let graph = parse(format, &text).expect("parses");
        assert!(
            graph.contains(
                &ParsedTerm::iri("http://example.org/pets/Dog"),
                RDFS_SUBCLASS_OF,
                &ParsedTerm::iri("http://example.org/pets/Animal"),
            ),
            "{format}"
        );
    }
}

#[test]
fn fido_is_five_years_old() {
    let five = ParsedTerm::literal("5", Some(XSD_INTEGER), None);
    for format in ExportFormat::ALL {
        let graph = parsed(format);
        let fido = iri("Fido");
        assert!(graph.contains(&fido, &format!("{ANIMALS}age"), &five), "{format}");
        assert!(graph.contains(&fido, RDF_TYPE, &ParsedTerm::iri(OWL_NAMED_INDIVIDUAL)));
        assert!(graph.contains(&fido, RDF_TYPE, &iri("Dog")), "{format}");
    }
}

#[test]
fn unknown_datatypes_become_strings() {
    let coat = ParsedTerm::literal("golden", Some(XSD_STRING), None);
    for format in ExportFormat::ALL {
        assert!(
            parsed(format).contains(&iri("Fido"), &format!("{ANIMALS}coat"), &coat),
            "{format}"
        );
    }
}

#[test]
fn linked_predicates_keep_their_iri() {
    for format in ExportFormat::ALL {
        assert!(
            parsed(format).contains(&iri("Fido"), "http://xmlns.com/foaf/0.1/knows", &iri("Rex")),
            "{format}"
        );
    }
}

#[test]
fn three_restrictions_on_dog() {
    for format in ExportFormat::ALL {
        let graph = parsed(format);
        let restrictions: Vec<&ParsedTerm> = graph.instances_of(OWL_RESTRICTION).collect();
        assert_eq!(restrictions.len(), 3, "{format}");

        let dog = iri("Dog");
        let parents: Vec<&ParsedTerm> = graph.objects(&dog, RDFS_SUBCLASS_OF).collect();
        for node in &restrictions {
            assert!(matches!(node, ParsedTerm::Blank(_)), "{format}");
            assert_eq!(graph.objects(node, OWL_ON_PROPERTY).count(), 1, "{format}");
            assert!(parents.contains(node), "{format}");
        }

        let max = graph
            .triples
            .iter()
            .find(|t| t.predicate == OWL_MAX_CARDINALITY)
            .map(|t| t.object.clone());
        assert_eq!(
            max,
            Some(ParsedTerm::literal("3", Some(XSD_NON_NEGATIVE_INTEGER), None)),
            "{format}"
        );
        assert!(graph
            .triples
            .iter()
            .any(|t| t.predicate == OWL_ALL_VALUES_FROM
                && t.object == ParsedTerm::iri(XSD_INTEGER)));
    }
}

#[test]
fn ontology_header() {
    let ontology = ParsedTerm::iri("http://example.org/animals");
    for format in ExportFormat::ALL {
        let graph = parsed(format);
        assert!(graph.contains(&ontology, RDF_TYPE, &ParsedTerm::iri(OWL_ONTOLOGY)));
        assert!(graph.contains(
            &ontology,
            OWL_VERSION_INFO,
            &ParsedTerm::literal("1.0.0", None, None)
        ));
        assert!(graph.contains(
            &ontology,
            OWL_IMPORTS,
            &ParsedTerm::iri("http://xmlns.com/foaf/0.1/")
        ));
    }
}

#[test]
fn format_names_select_writers() {
    let snapshot = fixtures::animals();
    let nt = export_named(&snapshot, "nt").expect("exports");
    assert!(!nt.contains("@prefix"));
    let xml = export_named(&snapshot, "RDF-XML").expect("exports");
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
    assert!(matches!(
        export_named(&snapshot, ""),
        Err(ExportError::InvalidOntologySnapshot(_))
    ));
    assert!(matches!(
        export_named(&snapshot, "csv"),
        Err(ExportError::UnsupportedFormat(_))
    ));
}

#[test]
fn dangling_references_are_rejected() {
    let mut snapshot = fixtures::animals();
    snapshot.relationships[0].target_concept_id = 999;
    for format in ExportFormat::ALL {
        assert!(matches!(
            export(&snapshot, format),
            Err(ExportError::InvalidOntologySnapshot(_))
        ));
    }
}
