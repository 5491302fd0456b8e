// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Everything that can go wrong before the first query runs.
//!
//! Ranking, pagination and selection are total over their inputs, so the only
//! failures are startup failures: a bad weight table, a bad threshold, a zero
//! page size, a catalog with two records under the same form number, or a
//! catalog/config file that can't be read or parsed.

use crate::types::Field;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Weight table names a field outside `form_number`, `title`, `description`, `use_cases`.
    #[error("unknown weighted field '{0}' (expected form_number, title, description or use_cases)")]
    UnknownField(String),

    /// Weight outside `(0, 1]`.
    #[error("weight for '{field}' must be in (0, 1], got {weight}")]
    InvalidWeight { field: Field, weight: f64 },

    /// Threshold outside `[0, 1]`.
    #[error("threshold must be in [0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("page size must be greater than zero")]
    InvalidPageSize,

    /// Two records share a form number.
    #[error("duplicate form number '{0}' in catalog")]
    DuplicateRecordKey(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for errors caused by the search configuration rather than the catalog.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::UnknownField(_)
                | Error::InvalidWeight { .. }
                | Error::InvalidThreshold(_)
                | Error::InvalidPageSize
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
