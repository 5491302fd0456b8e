// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field distance: how far a query is from one field of one record.
//!
//! The score is a distance in `[0, 1]`, lower is better:
//!
//! ```text
//! distance = min(1, errors / query_len + MAX_LOCATION_PENALTY * min(start, LOCATION_DISTANCE) / LOCATION_DISTANCE)
//! ```
//!
//! where `errors` and `start` come from the best substring alignment of the
//! query inside the field. If the best alignment needs more than
//! `floor(query_len * MAX_ERROR_RATIO)` edits the field is a miss (distance 1).
//!
//! # Properties
//!
//! - Exact containment at offset 0 scores 0. Exact containment further in
//!   scores at most `MAX_LOCATION_PENALTY`.
//! - Tolerance grows with the query: a 2-char query tolerates 1 edit (and pays
//!   0.5 for it), a 10-char query tolerates 5 and pays 0.1 per edit.
//! - The location penalty is capped well below one edit on any query up to
//!   10 chars, so it only reorders matches of equal quality.
//!
//! # Constants
//!
//! | Constant               | Value | Effect                                          |
//! |------------------------|-------|-------------------------------------------------|
//! | `MAX_ERROR_RATIO`      | 0.5   | Distances up to 0.5 are reachable by edits      |
//! | `MAX_LOCATION_PENALTY` | 0.1   | Cost of a match far into the field              |
//! | `LOCATION_DISTANCE`    | 100   | Offsets past 100 chars all pay the full penalty |

use super::levenshtein::best_alignment;
use crate::utils::normalize;

/// Distance of an exact hit at the start of a field.
pub const PERFECT_MATCH: f64 = 0.0;

/// Distance of a field that doesn't match at all.
pub const NO_MATCH: f64 = 1.0;

/// Fraction of the query length that may be edited before a field is a miss.
pub const MAX_ERROR_RATIO: f64 = 0.5;

/// Penalty paid by a match starting at or after `LOCATION_DISTANCE`.
pub const MAX_LOCATION_PENALTY: f64 = 0.1;

/// Char offset at which the location penalty saturates.
pub const LOCATION_DISTANCE: usize = 100;

/// A normalized query, split into chars once per search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    chars: Vec<char>,
}

impl Query {
    pub fn new(raw: &str) -> Self {
        let text = normalize(raw);
        let chars = text.chars().collect();
        Query { text, chars }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Edits this query tolerates before a field counts as a miss.
    pub fn max_errors(&self) -> usize {
        max_errors(self.len())
    }
}

/// Normalized text of one field of one record.
///
/// Scalar fields hold one value; `use_cases` holds one per element so each is
/// matched on its own and the best one speaks for the field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldText {
    values: Vec<Vec<char>>,
}

impl FieldText {
    pub fn new<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        FieldText {
            values: values
                .into_iter()
                .map(|value| normalize(value).chars().collect())
                .collect(),
        }
    }

    pub fn values(&self) -> impl Iterator<Item = &[char]> {
        self.values.iter().map(Vec::as_slice)
    }
}

/// `floor(query_len * MAX_ERROR_RATIO)`.
pub fn max_errors(query_len: usize) -> usize {
    (query_len as f64 * MAX_ERROR_RATIO).floor() as usize
}

/// Penalty for a match starting at char offset `start`. Range `[0, MAX_LOCATION_PENALTY]`.
pub fn location_penalty(start: usize) -> f64 {
    MAX_LOCATION_PENALTY * start.min(LOCATION_DISTANCE) as f64 / LOCATION_DISTANCE as f64
}

/// Distance between a query and one normalized value.
pub fn value_distance(query: &Query, value: &[char]) -> f64 {
    if query.is_empty() {
        return PERFECT_MATCH;
    }
    if value.is_empty() {
        return NO_MATCH;
    }

    match best_alignment(query.chars(), value, query.max_errors()) {
        Some(alignment) => {
            let accuracy = alignment.errors as f64 / query.len() as f64;
            (accuracy + location_penalty(alignment.start)).min(NO_MATCH)
        }
        None => NO_MATCH,
    }
}

/// Distance between a query and a field: the best of the field's values.
///
/// A field with no values (an empty `use_cases` list) is a miss.
pub fn field_distance(query: &Query, field: &FieldText) -> f64 {
    field
        .values()
        .map(|value| value_distance(query, value))
        .fold(NO_MATCH, f64::min)
}

/// One-shot convenience: normalize both sides and score.
///
/// Ranking builds `Query` and `FieldText` once and calls `field_distance`
/// directly; this is for callers scoring a single pair.
pub fn match_field<'a, I>(query: &str, values: I) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    field_distance(&Query::new(query), &FieldText::new(values))
}
