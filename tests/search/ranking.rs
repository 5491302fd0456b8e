//! Ranking order on realistic queries against the bundled catalog.

use crate::common::{assert_score, assert_sorted, builtin_store, form_numbers, rank_builtin, rank_default};
use formsift::{rank, FieldWeights};

#[test]
fn test_topic_queries() {
    let cases: &[(&str, &[&str])] = &[
        ("partnership", &["1065"]),
        ("corporation", &["1120-S", "1120", "1099-NEC"]),
        ("self employment", &["Schedule SE (Form 1040)"]),
        ("child tax credit", &["Schedule 8812 (Form 1040)"]),
        ("contractor", &["1099-NEC", "Schedule SE (Form 1040)"]),
        ("payroll", &["W-4", "941"]),
        ("quarterly", &["941"]),
        ("1099", &["1099-NEC"]),
    ];

    for (query, expected) in cases {
        let results = rank_default(query);
        assert_eq!(form_numbers(&results), *expected, "query {:?}", query);
        assert_sorted(&results);
    }
}

#[test]
fn test_more_matching_fields_rank_higher() {
    // W-4 has "withholding" in its title; W-2 and 941 only in use cases
    let results = rank_default("withholding");
    assert_eq!(form_numbers(&results), vec!["W-4", "W-2", "941"]);
    assert_score(&results[0], 0.1996);
    assert_score(&results[1], 0.32);
    assert_score(&results[2], 0.32);
}

#[test]
fn test_equal_scores_keep_catalog_order() {
    // W-2 and 941 tie on "withholding"; 1120 and 1120-S tie on "1120"
    let results = rank_default("withholding");
    assert_eq!(results[1].score, results[2].score);
    assert!(results[1].position < results[2].position);

    let results = rank_default("1120");
    assert_eq!(form_numbers(&results), vec!["1120", "1120-S"]);
    assert_eq!(results[0].score, results[1].score);
}

#[test]
fn test_misspelled_title_still_matches() {
    let results = rank_default("Wage and Tax Statment");
    assert_eq!(form_numbers(&results), vec!["W-2"]);
    assert_score(&results[0], 0.2943);
}

#[test]
fn test_case_and_accents_are_ignored() {
    let plain = rank_default("partnership");
    assert_eq!(form_numbers(&rank_default("PARTNERSHIP")), form_numbers(&plain));
    assert_eq!(form_numbers(&rank_default("  Partnërship ")), form_numbers(&plain));
}

#[test]
fn test_broad_query() {
    let results = rank_default("tax");
    assert_eq!(results.len(), 8);
    assert_eq!(results[0].record.form_number, "1040");
    assert_sorted(&results);

    let results = rank_default("income");
    assert_eq!(
        form_numbers(&results),
        vec!["1040", "1120-S", "1120", "1065", "W-4", "941"]
    );
}

#[test]
fn test_nonsense_matches_nothing() {
    assert!(rank_default("xyzzy").is_empty());
}

#[test]
fn test_threshold_extremes() {
    // Zero keeps only records with an exact field match
    let results = rank_builtin("1040", 0.0);
    assert_eq!(form_numbers(&results), vec!["1040"]);
    assert_eq!(results[0].score, 0.0);

    // One keeps everything, misses included
    let results = rank_builtin("1040", 1.0);
    assert_eq!(results.len(), 10);
    assert_eq!(results[0].record.form_number, "1040");
    assert_score(&results[0], 0.7);
    assert_sorted(&results);
}

#[test]
fn test_weights_shift_ranking() {
    let store = builtin_store();

    // All weight on the form number: "1040" ranks the exact form first with a perfect score
    let weights = FieldWeights::new(1.0, 0.01, 0.01, 0.01).unwrap();
    let results = rank("1040", &store, &weights, 0.4);
    assert_eq!(results[0].record.form_number, "1040");
    assert!(results[0].score < 0.02);

    // Same records either way, only the scores move
    let default = rank("payroll", &store, &FieldWeights::default(), 0.4);
    let uses_heavy = rank("payroll", &store, &FieldWeights::new(0.1, 0.1, 0.1, 1.0).unwrap(), 0.4);
    assert_eq!(form_numbers(&default), form_numbers(&uses_heavy));
}
