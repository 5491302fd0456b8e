// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Two layers here: a substring Levenshtein that finds where a query best fits
//! inside a field, and the matcher that turns that alignment into a distance.

mod levenshtein;
pub mod matcher;

pub use levenshtein::*;
pub use matcher::{field_distance, match_field, value_distance, FieldText, Query};
