// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: query in, ranked results out, then sliced into pages.
//!
//! Everything culminates here. The store has normalized every field, the
//! matcher knows how far a query is from a field, the scorer knows how to
//! combine fields. `rank` runs them over the whole store and sorts.
//!
//! An empty query is not a miss: it returns every record with the best score,
//! in catalog order, which is the "show everything" state a cleared search box
//! falls back to.

pub mod paginate;
pub mod selection;

use crate::catalog::RecordStore;
use crate::fuzzy::{field_distance, Query};
use crate::scoring::ranking::compare_results;
use crate::scoring::{combine_scores, BEST_SCORE};
use crate::types::{Field, FieldWeights, MatchResult, SearchState};
use tracing::debug;

/// Rank every record in the store against `query`.
///
/// Deterministic: the same arguments always produce the same results in the
/// same order with the same scores.
pub fn rank(
    query: &str,
    store: &RecordStore,
    weights: &FieldWeights,
    threshold: f64,
) -> Vec<MatchResult> {
    let query = Query::new(query);

    if query.is_empty() {
        return store
            .records()
            .enumerate()
            .map(|(position, record)| MatchResult {
                record: record.clone(),
                score: BEST_SCORE,
                position,
            })
            .collect();
    }

    let mut results: Vec<MatchResult> = store
        .entries()
        .iter()
        .enumerate()
        .filter_map(|(position, entry)| {
            let fields = Field::ALL
                .map(|field| (weights.get(field), field_distance(&query, entry.field(field))));
            combine_scores(&fields, threshold).map(|score| MatchResult {
                record: entry.record().clone(),
                score,
                position,
            })
        })
        .collect();

    results.sort_by(compare_results);

    debug!(
        query = query.as_str(),
        threshold,
        matched = results.len(),
        total = store.len(),
        "ranked catalog"
    );
    results
}

/// Run a search and package it as a `SearchState` snapshot.
pub fn search(
    query: &str,
    store: &RecordStore,
    weights: &FieldWeights,
    threshold: f64,
) -> SearchState {
    SearchState {
        query: query.to_string(),
        threshold,
        results: rank(query, store, weights, threshold),
    }
}
