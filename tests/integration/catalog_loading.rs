//! Tests for loading catalogs from files.

use formsift::{rank, Catalog, Error, FieldWeights, DEFAULT_THRESHOLD};
use std::fs;
use tempfile::TempDir;

const RECORD_A: &str = r#"{
    "form_number": "8949",
    "title": "Sales and Other Dispositions of Capital Assets",
    "description": "Reports sales and exchanges of capital assets.",
    "use_cases": ["stock sales", "capital gains"],
    "file_url": "https://www.irs.gov/pub/irs-pdf/f8949.pdf"
}"#;

const RECORD_B: &str = r#"{
    "form_number": "4868",
    "title": "Application for Automatic Extension of Time To File",
    "description": "Requests more time to file an individual income tax return.",
    "use_cases": ["filing extension"],
    "file_url": "https://www.irs.gov/pub/irs-pdf/f4868.pdf"
}"#;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_bare_array() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "forms.json", &format!("[{}, {}]", RECORD_A, RECORD_B));

    let catalog = Catalog::from_path(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.records()[0].form_number, "8949");
    assert_eq!(catalog.records()[1].use_cases, vec!["filing extension"]);
}

#[test]
fn test_load_wrapped_object() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "forms.json", &format!(r#"{{"forms": [{}, {}]}}"#, RECORD_A, RECORD_B));

    let store = Catalog::from_path(&path).unwrap().into_store().unwrap();
    assert_eq!(store.len(), 2);
    assert!(store.find("4868").is_some());

    let results = rank("extension", &store, &FieldWeights::default(), DEFAULT_THRESHOLD);
    assert_eq!(results[0].record.form_number, "4868");
}

#[test]
fn test_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "forms.json", "[]");

    let store = Catalog::from_path(&path).unwrap().into_store().unwrap();
    assert!(store.is_empty());
    assert!(rank("", &store, &FieldWeights::default(), DEFAULT_THRESHOLD).is_empty());
}

#[test]
fn test_missing_file_names_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let err = Catalog::from_path(&path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "forms.json", "[{\"form_number\": \"1040\"");
    assert!(matches!(Catalog::from_path(&path), Err(Error::Json(_))));
}

#[test]
fn test_record_missing_field() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "forms.json", r#"[{"form_number": "1040", "title": "x"}]"#);
    assert!(matches!(Catalog::from_path(&path), Err(Error::Json(_))));
}

#[test]
fn test_duplicate_form_numbers_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "forms.json", &format!("[{}, {}]", RECORD_A, RECORD_A));

    let catalog = Catalog::from_path(&path).unwrap();
    match catalog.into_store() {
        Err(Error::DuplicateRecordKey(key)) => assert_eq!(key, "8949"),
        other => panic!("expected duplicate key error, got {:?}", other.map(|s| s.len())),
    }
}

#[test]
fn test_builtin_catalog_round_trips_through_file() {
    let dir = TempDir::new().unwrap();
    let builtin = Catalog::builtin().unwrap();
    let json = serde_json::to_string_pretty(builtin.records()).unwrap();
    let path = write(&dir, "builtin.json", &json);

    assert_eq!(Catalog::from_path(&path).unwrap(), builtin);
}
