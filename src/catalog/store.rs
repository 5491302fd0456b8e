// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The record store: an immutable, indexed, ordered set of records.
//!
//! "Indexing" here is modest: every weighted field of every record is
//! normalized and split into chars once, at load. A query then only pays for
//! normalizing itself and running the DP.

use crate::error::{Error, Result};
use crate::fuzzy::FieldText;
use crate::types::{Field, Record};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// A record plus its normalized field texts.
#[derive(Debug, Clone)]
pub struct IndexedRecord {
    record: Arc<Record>,
    fields: [FieldText; 4],
}

impl IndexedRecord {
    fn new(record: Record) -> Self {
        let fields = Field::ALL.map(|field| FieldText::new(record.field_values(field)));
        IndexedRecord {
            record: Arc::new(record),
            fields,
        }
    }

    pub fn record(&self) -> &Arc<Record> {
        &self.record
    }

    pub fn field(&self, field: Field) -> &FieldText {
        &self.fields[field.slot()]
    }
}

/// Read-only after construction. Order is catalog order and is what ties fall back to.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    entries: Vec<IndexedRecord>,
    by_form_number: HashMap<String, usize>,
}

impl RecordStore {
    /// Index records in the given order. Fails on the first repeated `form_number`.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut entries = Vec::new();
        let mut by_form_number = HashMap::new();

        for record in records {
            if by_form_number.contains_key(&record.form_number) {
                return Err(Error::DuplicateRecordKey(record.form_number));
            }
            by_form_number.insert(record.form_number.clone(), entries.len());
            entries.push(IndexedRecord::new(record));
        }

        info!(records = entries.len(), "indexed record store");
        Ok(RecordStore {
            entries,
            by_form_number,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[IndexedRecord] {
        &self.entries
    }

    /// Records in catalog order.
    pub fn records(&self) -> impl Iterator<Item = &Arc<Record>> {
        self.entries.iter().map(IndexedRecord::record)
    }

    pub fn get(&self, position: usize) -> Option<&Arc<Record>> {
        self.entries.get(position).map(IndexedRecord::record)
    }

    /// Exact, case-sensitive lookup.
    pub fn find(&self, form_number: &str) -> Option<&Arc<Record>> {
        self.position_of(form_number).and_then(|position| self.get(position))
    }

    pub fn position_of(&self, form_number: &str) -> Option<usize> {
        self.by_form_number.get(form_number).copied()
    }

    pub fn contains(&self, record: &Record) -> bool {
        self.find(&record.form_number)
            .is_some_and(|stored| stored.as_ref() == record)
    }
}
