// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind record scores.
//!
//! A record score is a weighted average of its four field distances, with each
//! field's distance capped at the threshold:
//!
//! ```text
//! score = Σ w_f · min(d_f, threshold) / Σ w_f
//! ```
//!
//! A record is kept only if at least one field is *accepted* (`d_f ≤ threshold`).
//!
//! # Capping
//!
//! A field distance above the threshold counts as exactly the threshold. One
//! accepted field keeps a record, and every further matching field lowers its
//! score. Uncapped, a perfect `form_number` hit with three misses would average
//! 0.7 under the default weights and drop out at 0.4.
//!
//! # Key Invariant: Threshold Monotonicity
//!
//! ```text
//! kept(t1) ∧ t1 ≤ t2 → kept(t2)
//! ```
//!
//! `kept` only asks whether some `d_f ≤ t`, which stays true as `t` grows, and
//! the capped average can never exceed `t`.

/// Default maximum distance at which a field (and so a record) still matches.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Score given to every record when the query is empty.
pub const BEST_SCORE: f64 = 0.0;

/// Does a field distance count as a match under this threshold?
#[inline]
pub fn is_accepted(distance: f64, threshold: f64) -> bool {
    distance <= threshold
}

/// Combine `(weight, distance)` pairs into one record score.
///
/// Returns `None` when no field is accepted. The result is in `[0, threshold]`.
pub fn combine_scores(fields: &[(f64, f64)], threshold: f64) -> Option<f64> {
    if !fields
        .iter()
        .any(|&(_, distance)| is_accepted(distance, threshold))
    {
        return None;
    }

    let (weighted, total_weight) = fields
        .iter()
        .fold((0.0, 0.0), |(weighted, total), &(weight, distance)| {
            (weighted + weight * distance.min(threshold), total + weight)
        });

    // Rounding in the sum can land one ulp past the threshold
    Some((weighted / total_weight).min(threshold))
}
