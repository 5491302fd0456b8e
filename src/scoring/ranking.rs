// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Ascending distance, then catalog order. Two records with the same score
//! come out in the order the catalog lists them, on every call.

use crate::types::MatchResult;
use std::cmp::Ordering;

/// Compare two search results for ranking.
///
/// Sort order:
/// 1. **Score** - ascending (lower distance wins)
/// 2. **Position** - catalog order, for absolute determinism
///
/// Scores are compared with `total_cmp`, so the order is total even if a NaN
/// ever slipped in (it sorts last).
pub fn compare_results(a: &MatchResult, b: &MatchResult) -> Ordering {
    match a.score.total_cmp(&b.score) {
        Ordering::Equal => a.position.cmp(&b.position),
        ord => ord,
    }
}
