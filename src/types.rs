// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a catalog search.
//!
//! | Type           | Purpose                                               |
//! |----------------|-------------------------------------------------------|
//! | `Record`       | One catalog entry (a tax form and its metadata)       |
//! | `Field`        | The four searchable fields of a record                |
//! | `FieldWeights` | Relative importance of each field, each in `(0, 1]`   |
//! | `MatchResult`  | A record plus its distance score (lower is better)    |
//! | `SearchState`  | Query, threshold and ranked results for one search    |
//! | `SearchStats`  | Found / total / match-rate summary                    |
//!
//! # Invariants
//!
//! - **Record**: `form_number` is unique within a store. Records never change after load.
//! - **FieldWeights**: every weight is in `(0, 1]`. Enforced at construction, so a
//!   `FieldWeights` value in hand is always valid.
//! - **MatchResult**: `score` is in `[0, 1]`, `position` indexes the record store.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

// =============================================================================
// RECORD
// =============================================================================

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub form_number: String,
    pub title: String,
    pub description: String,
    pub use_cases: Vec<String>,
    pub file_url: String,
}

impl Record {
    /// Where the form's PDF lives. Opening it is the caller's job.
    pub fn file_url(&self) -> &str {
        &self.file_url
    }

    /// Raw values of one field. Scalar fields yield one value, `use_cases` one per element.
    pub fn field_values(&self, field: Field) -> Vec<&str> {
        match field {
            Field::FormNumber => vec![self.form_number.as_str()],
            Field::Title => vec![self.title.as_str()],
            Field::Description => vec![self.description.as_str()],
            Field::UseCases => self.use_cases.iter().map(String::as_str).collect(),
        }
    }
}

// =============================================================================
// FIELDS AND WEIGHTS
// =============================================================================

/// The fixed set of weighted fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FormNumber,
    Title,
    Description,
    UseCases,
}

impl Field {
    /// All weighted fields, in declaration order.
    pub const ALL: [Field; 4] = [
        Field::FormNumber,
        Field::Title,
        Field::Description,
        Field::UseCases,
    ];

    /// Name used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Field::FormNumber => "form_number",
            Field::Title => "title",
            Field::Description => "description",
            Field::UseCases => "use_cases",
        }
    }

    #[inline]
    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

/// Relative importance of each field when combining per-field distances.
///
/// Weights don't need to sum to 1. Only their ratios matter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, f64>",
    into = "BTreeMap<String, f64>"
)]
pub struct FieldWeights {
    weights: [f64; 4],
}

impl FieldWeights {
    /// `form_number` 0.3, `title` 0.3, `description` 0.2, `use_cases` 0.2.
    pub const DEFAULT: FieldWeights = FieldWeights {
        weights: [0.3, 0.3, 0.2, 0.2],
    };

    pub fn new(form_number: f64, title: f64, description: f64, use_cases: f64) -> Result<Self> {
        let mut weights = FieldWeights::DEFAULT;
        for (field, weight) in Field::ALL
            .into_iter()
            .zip([form_number, title, description, use_cases])
        {
            weights.set(field, weight)?;
        }
        Ok(weights)
    }

    /// Build from a name → weight table. Fields the table omits keep their default.
    pub fn from_map<'a, I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut weights = FieldWeights::DEFAULT;
        for (name, weight) in entries {
            let field: Field = name.parse()?;
            weights.set(field, weight)?;
        }
        Ok(weights)
    }

    fn set(&mut self, field: Field, weight: f64) -> Result<()> {
        if weight.is_nan() || weight <= 0.0 || weight > 1.0 {
            return Err(Error::InvalidWeight { field, weight });
        }
        self.weights[field.slot()] = weight;
        Ok(())
    }

    #[inline]
    pub fn get(&self, field: Field) -> f64 {
        self.weights[field.slot()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, f64)> + '_ {
        Field::ALL.into_iter().map(|field| (field, self.get(field)))
    }
}

impl Default for FieldWeights {
    fn default() -> Self {
        FieldWeights::DEFAULT
    }
}

impl TryFrom<BTreeMap<String, f64>> for FieldWeights {
    type Error = Error;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self> {
        FieldWeights::from_map(map.iter().map(|(name, weight)| (name.as_str(), *weight)))
    }
}

impl From<FieldWeights> for BTreeMap<String, f64> {
    fn from(weights: FieldWeights) -> Self {
        weights
            .iter()
            .map(|(field, weight)| (field.name().to_string(), weight))
            .collect()
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// A ranked record. Distance semantics: 0.0 is a perfect match.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub record: Arc<Record>,
    pub score: f64,
    /// Index of the record in the store it was ranked from.
    pub position: usize,
}

/// Snapshot of one search. Replaced wholesale on every query change.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub threshold: f64,
    pub results: Vec<MatchResult>,
}

impl SearchState {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// "N forms found / M total / P% match rate".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub found: usize,
    pub total: usize,
    /// Rounded percentage of the catalog matched. 0 for an empty catalog.
    pub match_rate: u32,
}

impl SearchStats {
    pub fn new(found: usize, total: usize) -> Self {
        let match_rate = if total == 0 {
            0
        } else {
            (found as f64 / total as f64 * 100.0).round() as u32
        };
        SearchStats {
            found,
            total,
            match_rate,
        }
    }
}
