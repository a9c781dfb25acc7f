//! Shared plumbing for the Eidos command-line clients.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use eidos_export::{ExportFormat, OntologySnapshot};
use tracing_subscriber::EnvFilter;

/// Installs the `fmt` subscriber on stderr, filtered by `RUST_LOG`
/// (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Reads a snapshot JSON document.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a snapshot.
pub fn load_snapshot(path: &Path) -> Result<OntologySnapshot> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let snapshot: OntologySnapshot = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {} as an ontology snapshot", path.display()))?;
    tracing::info!(
        ontology = %snapshot.name,
        concepts = snapshot.concepts.len(),
        individuals = snapshot.individuals.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

/// File name stem for an ontology: ASCII alphanumerics, `-` and `_` kept,
/// everything else replaced by `_`; `ontology` when the name is blank.
pub fn file_stem(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        "ontology".to_owned()
    } else {
        stem
    }
}

/// Writes each output to `<out>/<stem>.<ext>`, creating `out` if needed.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or a file cannot be
/// written.
pub fn write_outputs(
    out: &Path,
    name: &str,
    outputs: &[(ExportFormat, String)],
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;
    let stem = file_stem(name);
    outputs
        .iter()
        .map(|(format, text)| {
            let path = out.join(format!("{stem}.{}", format.file_extension()));
            fs::write(&path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(%format, path = %path.display(), bytes = text.len(), "written");
            Ok(path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_are_file_safe() {
        assert_eq!(file_stem("Animals"), "Animals");
        assert_eq!(file_stem("My Pets / v2"), "My_Pets___v2");
        assert_eq!(file_stem("  "), "ontology");
    }

    #[test]
    fn snapshots_round_trip_through_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("animals.json");
        let snapshot = eidos_export::fixtures::animals();
        fs::write(&path, serde_json::to_string(&snapshot).expect("serializes")).expect("writes");
        assert_eq!(load_snapshot(&path).expect("loads"), snapshot);
        assert!(load_snapshot(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn outputs_land_in_one_file_per_format() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("public");
        let outputs =
            eidos_export::export_all(&eidos_export::fixtures::animals()).expect("exports");
        let paths = write_outputs(&out, "Animals", &outputs).expect("writes");
        let names: Vec<String> = paths
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec!["Animals.ttl", "Animals.rdf", "Animals.nt", "Animals.jsonld"]
        );
        let nt = fs::read_to_string(out.join("Animals.nt")).expect("reads");
        assert!(!nt.contains("@prefix"));
    }
}
