//! Fatal input problems abort the generation with a typed error

use super::fixtures::*;
use benchtable::commands::generate::execute;
use benchtable::config::{ConfigError, InputSelection};
use benchtable::parser::LoadError;
use tempfile::TempDir;

#[test]
fn test_no_result_files_in_output_directory() {
    let dir = TempDir::new().unwrap();

    let err = execute(&report_config(InputSelection::SearchOutputDir, dir.path())).unwrap_err();
    match err.downcast_ref::<ConfigError>() {
        Some(ConfigError::NoResultFiles { hint }) => assert!(hint.contains("*.results*.xml")),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_definition_without_matching_files() {
    let dir = TempDir::new().unwrap();
    let definition = write_file(
        dir.path(),
        "empty.xml",
        &format!(
            r#"<table><test filename="{}/missing*.xml"/></table>"#,
            dir.path().display()
        ),
    );

    let err = execute(&report_config(
        InputSelection::TableDefinition(definition),
        &dir.path().join("out"),
    ))
    .unwrap_err();
    assert!(err
        .to_string()
        .contains("Please check the filenames in your XML-file."));
}

#[test]
fn test_definition_passed_as_result_file() {
    let dir = TempDir::new().unwrap();
    let definition = write_file(
        dir.path(),
        "table.xml",
        r#"<table><test filename="x.xml"/></table>"#,
    );

    let err = execute(&report_config(
        result_files(&[&definition]),
        &dir.path().join("out"),
    ))
    .unwrap_err();
    match err.downcast_ref::<LoadError>() {
        Some(LoadError::WrongRootTag {
            expected, found, ..
        }) => {
            assert_eq!(*expected, "test");
            assert_eq!(found, "table");
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.to_string().contains("'--xml'"));
}

#[test]
fn test_missing_definition_document() {
    let dir = TempDir::new().unwrap();
    let err = execute(&report_config(
        InputSelection::TableDefinition(dir.path().join("nope.xml")),
        dir.path(),
    ))
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LoadError>(),
        Some(LoadError::MissingDocument { .. })
    ));
}

#[test]
fn test_result_document_without_date() {
    let dir = TempDir::new().unwrap();
    let broken = write_file(
        dir.path(),
        "broken.results.xml",
        r#"<test benchmarkname="loops"><sourcefile name="a.c"/></test>"#,
    );

    let err = execute(&report_config(result_files(&[&broken]), dir.path())).unwrap_err();
    match err.downcast_ref::<LoadError>() {
        Some(LoadError::MissingAttribute { attribute, .. }) => assert_eq!(*attribute, "date"),
        other => panic!("unexpected error {other:?}"),
    }
}
