//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::catalog::RecordStore;
use crate::types::Record;

/// Create a test record with a derived download URL.
///
/// This is the canonical implementation used across all tests.
pub fn make_record(form_number: &str, title: &str, description: &str, use_cases: &[&str]) -> Record {
    Record {
        form_number: form_number.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        use_cases: use_cases.iter().map(|s| s.to_string()).collect(),
        file_url: format!(
            "https://www.irs.gov/pub/irs-pdf/f{}.pdf",
            form_number.to_lowercase().replace(['-', ' '], "")
        ),
    }
}

/// `count` records with distinct, mutually dissimilar form numbers and titles.
///
/// Form numbers are `F-0000`, `F-0001`, ... and titles are "Record 0", "Record 1", ...
pub fn numbered_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            make_record(
                &format!("F-{:04}", i),
                &format!("Record {}", i),
                &format!("Synthetic description number {}", i),
                &[],
            )
        })
        .collect()
}

/// Index `numbered_records(count)`.
pub fn numbered_store(count: usize) -> RecordStore {
    // Form numbers are distinct by construction
    RecordStore::from_records(numbered_records(count)).unwrap_or_default()
}
