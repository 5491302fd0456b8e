//! Shared test utilities and fixtures.

#![allow(dead_code)]

use formsift::{
    rank, Catalog, FieldWeights, MatchResult, RecordStore, SearchConfig, SearchSession,
    DEFAULT_THRESHOLD,
};

// Re-export canonical test utilities from formsift::testing
pub use formsift::testing::{make_record, numbered_records, numbered_store};

/// Tolerance for scores checked against hand-computed values.
pub const SCORE_TOLERANCE: f64 = 1e-3;

/// The bundled IRS catalog, indexed.
pub fn builtin_store() -> RecordStore {
    Catalog::builtin()
        .and_then(Catalog::into_store)
        .expect("built-in catalog must load")
}

/// A session over the bundled catalog with the default configuration.
pub fn builtin_session() -> SearchSession {
    SearchSession::new(builtin_store(), SearchConfig::default()).expect("default config is valid")
}

/// Rank the bundled catalog with default weights.
pub fn rank_builtin(query: &str, threshold: f64) -> Vec<MatchResult> {
    rank(query, &builtin_store(), &FieldWeights::default(), threshold)
}

/// Rank the bundled catalog with default weights and threshold.
pub fn rank_default(query: &str) -> Vec<MatchResult> {
    rank_builtin(query, DEFAULT_THRESHOLD)
}

pub fn form_numbers(results: &[MatchResult]) -> Vec<&str> {
    results.iter().map(|r| r.record.form_number.as_str()).collect()
}

pub fn assert_score(result: &MatchResult, expected: f64) {
    assert!(
        (result.score - expected).abs() < SCORE_TOLERANCE,
        "{}: expected score {}, got {}",
        result.record.form_number,
        expected,
        result.score
    );
}

/// Scores non-decreasing, ties broken by catalog position.
pub fn assert_sorted(results: &[MatchResult]) {
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score < b.score || (a.score == b.score && a.position < b.position),
            "out of order: {} ({}, #{}) before {} ({}, #{})",
            a.record.form_number,
            a.score,
            a.position,
            b.record.form_number,
            b.score,
            b.position
        );
    }
}
