use std::io::Write;
use std::time::Duration;

use config::{Config, File, FileFormat};

use ontostore::configuration::{
    LoaderConfiguration, MissingImportHandlingStrategy, MissingOntologyHeaderStrategy,
};
use ontostore::construct::Iri;

#[test]
fn defaults() {
    let configuration = LoaderConfiguration::new();
    assert!(configuration.is_load_annotation_axioms());
    assert!(!configuration.is_strict());
    assert!(!configuration.is_report_stack_traces());
    assert!(configuration.is_follow_redirects());
    assert!(configuration.is_accepting_http_compression());
    assert_eq!(configuration.connection_timeout(), 20000);
    assert_eq!(configuration.connection_timeout_duration(), Duration::from_secs(20));
    assert_eq!(
        configuration.missing_ontology_header_strategy(),
        MissingOntologyHeaderStrategy::IncludeGraph
    );
    assert_eq!(
        configuration.missing_import_handling_strategy(),
        MissingImportHandlingStrategy::Fail
    );
    assert!(configuration.ignored_imports().is_empty());
}

#[test]
fn setters_leave_the_receiver_untouched() {
    let original = LoaderConfiguration::new();
    let strict = original.set_strict(true);
    assert!(strict.is_strict());
    assert!(!original.is_strict());
    assert!(!strict.same_instance(&original));
    assert!(strict.set_strict(true).same_instance(&strict));

    let relaxed = strict
        .set_connection_timeout(500)
        .set_follow_redirects(false)
        .set_missing_import_handling_strategy(MissingImportHandlingStrategy::Skip);
    assert_eq!(relaxed.connection_timeout(), 500);
    assert!(!relaxed.is_follow_redirects());
    assert!(relaxed.is_strict());
    assert_eq!(strict.connection_timeout(), 20000);
    assert_eq!(
        strict.missing_import_handling_strategy(),
        MissingImportHandlingStrategy::Fail
    );
}

#[test]
fn unchanged_values_return_the_same_instance() {
    let configuration = LoaderConfiguration::new();
    assert!(configuration.set_strict(false).same_instance(&configuration));
    assert!(configuration.set_connection_timeout(20000).same_instance(&configuration));
    assert!(configuration.set_load_annotation_axioms(true).same_instance(&configuration));
    assert!(configuration.clear_ignored_imports().same_instance(&configuration));

    let equal_but_distinct = configuration.set_strict(true).set_strict(false);
    assert_eq!(equal_but_distinct, configuration);
    assert!(!equal_but_distinct.same_instance(&configuration));
}

#[test]
fn ignored_imports() {
    let upper = Iri::new("http://example.org/upper").unwrap();
    let configuration = LoaderConfiguration::new().add_ignored_import(upper.clone());
    assert!(configuration.is_ignored_import(&upper));
    assert!(configuration.add_ignored_import(upper.clone()).same_instance(&configuration));

    // the W3C vocabularies are always ignored
    for vocabulary in [
        "http://www.w3.org/2002/07/owl",
        "http://www.w3.org/2002/07/owl#",
        "http://www.w3.org/2000/01/rdf-schema#",
        "http://www.w3.org/2001/XMLSchema",
    ] {
        assert!(configuration.is_ignored_import(&Iri::new(vocabulary).unwrap()));
    }

    let removed = configuration.remove_ignored_import(&upper);
    assert!(!removed.is_ignored_import(&upper));
    assert!(configuration.is_ignored_import(&upper));
    assert!(removed
        .remove_ignored_import(&upper)
        .same_instance(&removed));
    assert!(configuration.clear_ignored_imports().ignored_imports().is_empty());
}

#[test]
fn reads_settings_from_config_sources() {
    let config = Config::builder()
        .add_source(File::from_str(
            r#"
            strict = true
            connection_timeout = 5000
            missing_import_handling_strategy = "SKIP"
            ignored_imports = ["http://example.org/upper"]
            "#,
            FileFormat::Toml,
        ))
        .build()
        .unwrap();
    let configuration = LoaderConfiguration::from_config(config).unwrap();

    assert!(configuration.is_strict());
    assert_eq!(configuration.connection_timeout(), 5000);
    assert_eq!(
        configuration.missing_import_handling_strategy(),
        MissingImportHandlingStrategy::Skip
    );
    assert!(configuration.is_ignored_import(&Iri::new("http://example.org/upper").unwrap()));
    // absent keys keep their defaults
    assert!(configuration.is_load_annotation_axioms());
}

#[test]
fn rejects_invalid_ignored_imports() {
    let config = Config::builder()
        .add_source(File::from_str(
            r#"ignored_imports = ["not an iri"]"#,
            FileFormat::Toml,
        ))
        .build()
        .unwrap();
    assert!(LoaderConfiguration::from_config(config).is_err());
}

#[test]
fn loads_from_a_file() {
    let path = std::env::temp_dir().join(format!("ontostore-{}.toml", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "load_annotations = false").unwrap();
    writeln!(file, "missing_ontology_header_strategy = \"import_graph\"").unwrap();
    drop(file);

    let configuration = LoaderConfiguration::load(Some(path.as_path())).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(!configuration.is_load_annotation_axioms());
    assert_eq!(
        configuration.missing_ontology_header_strategy(),
        MissingOntologyHeaderStrategy::ImportGraph
    );
}
