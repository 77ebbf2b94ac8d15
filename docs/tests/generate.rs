//! End-to-end generation against the bundled templates.

#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::{Path, PathBuf};

use ethon_docs::{extract_metadata, generate, render, DocsConfig};
use ethon_ontology::{NamespaceMap, Ontology, RdfFormat};

fn manifest_path(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
}

fn config(ontology: &str, out: &Path) -> DocsConfig {
    DocsConfig {
        ontology: manifest_path(ontology),
        template_dir: manifest_path("../doc_resources/templates"),
        spec_out: out.join("EthOn_spec.html"),
        glossary_out: out.join("EthOn_glossary.md"),
        ..DocsConfig::default()
    }
}

#[test]
fn generates_spec_and_glossary() {
    let dir = tempfile::tempdir().unwrap();
    let config = config("tests/fixtures/sample.rdf", dir.path());
    let report = generate(&config).unwrap();

    assert_eq!(report.ontology_uri, "http://consensys.net/ethereum-ontology/");
    assert_eq!(report.class_count, 3);
    assert_eq!(report.property_count, 3);
    assert_eq!(report.annotation_property_count, 1);
    assert_eq!(report.datatype_property_count, 1);
    assert_eq!(report.object_property_count, 1);
    assert_eq!(report.glossary_entries, 5);
    assert_eq!(report.files, vec![config.spec_out.clone(), config.glossary_out.clone()]);

    let spec = fs::read_to_string(&config.spec_out).unwrap();
    assert!(spec.contains("<title>Example Ontology</title>"));
    assert!(spec.contains(r#"id="class-ethon-Apple""#));
    assert!(spec.contains(r##"href="#class-ethon-apple""##));
    assert!(spec.contains(r#"id="property-ethon-Banana""#));
    assert!(spec.contains("A &lt;count&gt; of something"));
    assert!(spec.contains("Johannes Pfeffer"));

    let glossary = fs::read_to_string(&config.glossary_out).unwrap();
    let upper = glossary.find("**Apple**: A fruit").unwrap();
    let lower = glossary.find("**apple**: lowercase").unwrap();
    assert!(upper < lower);
    assert!(glossary.contains("## B\n"));
    assert!(glossary.contains("**Banana**: A fruit-like thing"));
    assert!(glossary.contains("**number**: A <count> of something"));
    assert!(!glossary.contains("_Internal"));
    assert!(!glossary.contains("## C\n"));
}

#[test]
fn regeneration_is_byte_identical() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    generate(&config("tests/fixtures/sample.rdf", first.path())).unwrap();
    generate(&config("tests/fixtures/sample.rdf", second.path())).unwrap();

    for name in ["EthOn_spec.html", "EthOn_glossary.md"] {
        assert_eq!(
            fs::read(first.path().join(name)).unwrap(),
            fs::read(second.path().join(name)).unwrap(),
            "{name} differs between runs"
        );
    }
}

#[test]
fn missing_template_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = DocsConfig {
        glossary_template: "missing_glossary.md".to_string(),
        ..config("tests/fixtures/sample.rdf", dir.path())
    };
    let err = generate(&config).unwrap_err();

    assert!(format!("{err:#}").contains("missing_glossary.md"));
    assert!(!config.spec_out.exists());
    assert!(!config.glossary_out.exists());
}

#[test]
fn missing_ontology_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = config("tests/fixtures/absent.rdf", dir.path());
    let err = generate(&config).unwrap_err();
    assert!(format!("{err:#}").contains("absent.rdf"));
    assert!(!config.spec_out.exists());
}

#[test]
fn turtle_input_is_detected_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let config = config("tests/fixtures/sample.ttl", dir.path());
    let (documents, report) = render(&config).unwrap();

    assert_eq!(report.class_count, 2);
    assert_eq!(report.datatype_property_count, 1);
    assert!(documents.spec.contains(r#"id="class-ethon-Uncle""#));
    assert!(documents.glossary.contains("**Uncle**: A stale block referenced by a later one."));
    assert!(!config.spec_out.exists());
}

#[test]
fn ntriples_input_is_detected_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let config = config("tests/fixtures/sample.nt", dir.path());
    let report = generate(&config).unwrap();

    assert_eq!(report.ontology_uri, "http://consensys.net/ethereum-ontology/");
    assert_eq!(report.class_count, 1);
    assert_eq!(report.datatype_property_count, 1);

    let spec = fs::read_to_string(&config.spec_out).unwrap();
    assert!(spec.contains(r#"id="property-ethon-gasLimit""#));
    assert!(spec.contains(r##"href="#class-ethon-Transaction""##));
    let glossary = fs::read_to_string(&config.glossary_out).unwrap();
    assert!(glossary.contains("**Transaction**: A signed message sent to the network."));
    assert!(glossary.contains("**gasLimit**: The most gas the transaction may use."));
}

#[test]
fn title_without_contributors() {
    let ontology = Ontology::load(
        &manifest_path("tests/fixtures/sample.ttl"),
        RdfFormat::Turtle,
        NamespaceMap::with_builtins(),
    )
    .unwrap();
    let meta = extract_metadata(&ontology);
    assert_eq!(meta.title, "Example Ontology");
    assert_eq!(meta.contributors, "");
    assert!(meta.imports.is_empty());
}
