//! Tests for loading search configuration from files.

use crate::common::{builtin_store, form_numbers};
use formsift::{Error, Field, SearchConfig, SearchSession};
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.json");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_full_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{
            "weights": {"form_number": 0.5, "title": 0.25, "description": 0.15, "use_cases": 0.1},
            "threshold": 0.5,
            "page_size": 2
        }"#,
    );

    let config = SearchConfig::from_path(&path).unwrap();
    assert_eq!(config.weights.get(Field::FormNumber), 0.5);
    assert_eq!(config.weights.get(Field::UseCases), 0.1);
    assert_eq!(config.threshold, 0.5);
    assert_eq!(config.page_size, 2);
}

#[test]
fn test_config_drives_session() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"threshold": 0.5, "page_size": 2}"#);
    let config = SearchConfig::from_path(&path).unwrap();

    let mut session = SearchSession::new(builtin_store(), config).unwrap();
    session.set_query("W2");
    // Admitted at 0.5, two per page
    assert_eq!(session.state().len(), 3);
    let page = session.visible_page();
    assert_eq!(page.total_pages, 2);
    assert_eq!(form_numbers(page.items), vec!["W-2", "W-4"]);
}

#[test]
fn test_invalid_weight_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"weights": {"title": 0}}"#);
    let err = SearchConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, Error::InvalidWeight { .. }), "{:?}", err);
    assert!(err.is_configuration());

    let path = write_config(&dir, r#"{"weights": {"title": 1.5}}"#);
    assert!(matches!(SearchConfig::from_path(&path), Err(Error::InvalidWeight { .. })));
}

#[test]
fn test_unknown_weight_field_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"weights": {"author": 0.5}}"#);

    let err = SearchConfig::from_path(&path).unwrap_err();
    assert!(matches!(&err, Error::UnknownField(name) if name == "author"), "{:?}", err);
    assert!(err.is_configuration());
}

#[test]
fn test_invalid_threshold_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"threshold": -0.2}"#);

    let err = SearchConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, Error::InvalidThreshold(_)));
    assert!(err.is_configuration());
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let err = SearchConfig::from_path(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(!err.is_configuration());
}
