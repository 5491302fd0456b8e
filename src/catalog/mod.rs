// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog loading: JSON in, validated record store out.
//!
//! Two file shapes are accepted, since both show up in practice:
//!
//! ```text
//! [ { "form_number": "1040", ... }, ... ]          bare array
//! { "forms": [ { "form_number": "1040", ... } ] }  API response envelope
//! ```
//!
//! Parsing only checks shape. Uniqueness of `form_number` is checked when the
//! catalog becomes a `RecordStore`, which is the one place every loading path
//! goes through.

mod store;

pub use store::{IndexedRecord, RecordStore};

use crate::error::{Error, Result};
use crate::types::Record;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The bundled ten-form IRS catalog.
const BUILTIN_CATALOG: &str = include_str!("../../data/irs_forms.json");

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    /// A bare array of records
    Bare(Vec<Record>),
    /// `{"forms": [...]}`
    Wrapped { forms: Vec<Record> },
}

impl From<CatalogFile> for Vec<Record> {
    fn from(file: CatalogFile) -> Self {
        match file {
            CatalogFile::Bare(records) | CatalogFile::Wrapped { forms: records } => records,
        }
    }
}

/// Records as loaded, in file order, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    pub fn new(records: Vec<Record>) -> Self {
        Catalog { records }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(Catalog::new(file.into()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Catalog::from_json_str(&content)
    }

    /// The catalog compiled into the crate.
    pub fn builtin() -> Result<Self> {
        Catalog::from_json_str(BUILTIN_CATALOG)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validate and index. Fails on a duplicate `form_number`.
    pub fn into_store(self) -> Result<RecordStore> {
        RecordStore::from_records(self.records)
    }
}
