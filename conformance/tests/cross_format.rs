//! Every format parses back to the same graph.

use eidos_conformance::parse::parse;
use eidos_conformance::{run_all, validate_outputs, ParsedGraph};
use eidos_export::model::IndividualProperty;
use eidos_export::{export, export_all, fixtures, ExportFormat, OntologySnapshot};

fn graphs(snapshot: &OntologySnapshot) -> Vec<(ExportFormat, ParsedGraph)> {
    export_all(snapshot)
        .expect("exports")
        .into_iter()
        .map(|(format, text)| {
            let graph = parse(format, &text)
                .unwrap_or_else(|e| panic!("{format} output does not parse: {e:#}\n{text}"));
            (format, graph)
        })
        .collect()
}

#[test]
fn animals_passes_the_full_suite() {
    let report = run_all(&fixtures::animals()).expect("runs");
    let failures: Vec<_> = report.failures().collect();
    assert!(failures.is_empty(), "{failures:#?}");
}

#[test]
fn smallest_snapshot_passes_the_full_suite() {
    let report = run_all(&fixtures::dog_is_a_animal()).expect("runs");
    assert!(report.all_passed(), "{:#?}", report.results);
}

#[test]
fn triple_counts_agree() {
    let graphs = graphs(&fixtures::animals());
    let counts: Vec<usize> = graphs.iter().map(|(_, g)| g.len()).collect();
    assert_eq!(counts.len(), 4);
    assert!(counts.iter().all(|&c| c == counts[0]), "{counts:?}");
    assert!(counts[0] > 30);
}

#[test]
fn canonical_graphs_agree() {
    let graphs = graphs(&fixtures::animals());
    let (_, reference) = &graphs[0];
    for (format, graph) in &graphs[1..] {
        assert_eq!(
            graph.canonical(),
            reference.canonical(),
            "{format} differs from turtle"
        );
    }
}

#[test]
fn malformed_prefix_json_changes_no_triples() {
    let clean = fixtures::animals();
    let mut broken = fixtures::animals();
    broken.stored_prefixes = Some("{ invalid json".to_owned());

    for format in ExportFormat::ALL {
        let a = parse(format, &export(&clean, format).expect("exports")).expect("parses");
        let b = parse(format, &export(&broken, format).expect("exports")).expect("parses");
        assert_eq!(a.canonical(), b.canonical(), "{format}");
    }

    let report = run_all(&broken).expect("runs");
    assert!(report.all_passed(), "{:#?}", report.results);
}

#[test]
fn hand_edited_output_is_caught() {
    let mut outputs = export_all(&fixtures::dog_is_a_animal()).expect("exports");
    for (format, text) in &mut outputs {
        if *format == ExportFormat::NTriples {
            let first_line_end = text.find('\n').expect("has lines") + 1;
            text.replace_range(..first_line_end, "");
        }
    }
    let (report, graphs) = validate_outputs(&outputs);
    assert_eq!(graphs.len(), 4);
    assert!(report
        .by_validator("rdf/equivalence")
        .all(|r| r.is_failure()));
}

#[test]
fn special_characters_survive_every_format() {
    let mut snapshot = fixtures::dog_is_a_animal();
    snapshot.description =
        Some("Quotes \" back\\slash <tag> & tab\there\nnew line \u{e9}".to_owned());
    snapshot.concepts[1].name = "Guide Dog/Helper".to_owned();

    let report = run_all(&snapshot).expect("runs");
    assert!(report.all_passed(), "{:#?}", report.results);
}

#[test]
fn punctuated_property_names_export_in_every_format() {
    let mut snapshot = fixtures::animals();
    for (name, value, data_type) in [
        ("weight (kg)", "12.5", "decimal"),
        ("area m\u{b2}", "0.4", "decimal"),
        ("ready!", "true", "boolean"),
    ] {
        snapshot.individuals[0].properties.push(IndividualProperty {
            name: name.to_owned(),
            value: value.to_owned(),
            data_type: data_type.to_owned(),
        });
    }

    for format in ExportFormat::ALL {
        let text = export(&snapshot, format)
            .unwrap_or_else(|e| panic!("{format} export failed: {e}"));
        assert!(!text.is_empty());
    }
    let nt = export(&snapshot, ExportFormat::NTriples).expect("exports");
    assert!(nt.contains("<http://example.org/animals#weight_%28kg%29_>"));

    let report = run_all(&snapshot).expect("runs");
    assert!(report.all_passed(), "{:#?}", report.results);
}

#[test]
fn prefixed_override_means_the_same_iri_everywhere() {
    let mut snapshot = fixtures::animals();
    snapshot.concepts[2].uri = Some("foaf:Person".to_owned());

    let person = "<http://xmlns.com/foaf/0.1/Person>";
    let nt = export(&snapshot, ExportFormat::NTriples).expect("exports");
    assert!(nt.contains(person), "{nt}");
    assert!(!nt.contains("<foaf:Person>"));

    for (format, graph) in graphs(&snapshot) {
        assert!(
            graph.canonical().iter().any(|line| line.contains(person)),
            "{format} lost the expanded override"
        );
    }
    let report = run_all(&snapshot).expect("runs");
    assert!(report.all_passed(), "{:#?}", report.results);
}
