// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration: weights, threshold, page size.
//!
//! Every key is optional in the JSON file; omitted keys keep their defaults.
//!
//! ```json
//! {
//!   "weights": { "form_number": 0.3, "title": 0.3, "description": 0.2, "use_cases": 0.2 },
//!   "threshold": 0.4,
//!   "page_size": 5
//! }
//! ```
//!
//! `weights` is read as a plain name → weight map and turned into
//! `FieldWeights` after parsing, so an unknown field or out-of-range weight comes
//! back as its own `Error` variant rather than a JSON error. Threshold and page
//! size are checked by `validate`, which `SearchSession::new` always runs, so a
//! bad configuration is reported before any query is accepted.

use crate::error::{Error, Result};
use crate::scoring::DEFAULT_THRESHOLD;
use crate::search::paginate::DEFAULT_PAGE_SIZE;
use crate::types::FieldWeights;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchConfig {
    pub weights: FieldWeights,
    pub threshold: f64,
    pub page_size: usize,
}

/// On-disk shape, before weight names are resolved.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    weights: BTreeMap<String, f64>,
    threshold: f64,
    page_size: usize,
}

impl Default for RawConfig {
    fn default() -> Self {
        RawConfig {
            weights: BTreeMap::new(),
            threshold: DEFAULT_THRESHOLD,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TryFrom<RawConfig> for SearchConfig {
    type Error = Error;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let entries = raw.weights.iter().map(|(name, weight)| (name.as_str(), *weight));
        let weights = FieldWeights::from_map(entries)?;
        let config = SearchConfig {
            weights,
            threshold: raw.threshold,
            page_size: raw.page_size,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            weights: FieldWeights::DEFAULT,
            threshold: DEFAULT_THRESHOLD,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(json)?;
        SearchConfig::try_from(raw)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        SearchConfig::from_json_str(&content)
    }

    /// Check threshold is in `[0, 1]` and page size is non-zero.
    pub fn validate(&self) -> Result<()> {
        if self.threshold.is_nan() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::InvalidThreshold(self.threshold));
        }
        self.page_size()?;
        Ok(())
    }

    pub fn page_size(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.page_size).ok_or(Error::InvalidPageSize)
    }

    /// Same config with another threshold, validated.
    pub fn with_threshold(self, threshold: f64) -> Result<Self> {
        let config = SearchConfig { threshold, ..self };
        config.validate()?;
        Ok(config)
    }

    /// Same config with another page size, validated.
    pub fn with_page_size(self, page_size: usize) -> Result<Self> {
        let config = SearchConfig { page_size, ..self };
        config.validate()?;
        Ok(config)
    }
}
