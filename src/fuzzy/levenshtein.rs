// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Substring edit distance with early exits.
//!
//! Plain Levenshtein compares two whole strings. A catalog query like "payroll"
//! should hit "Employer payroll tax" without paying for the 13 characters around
//! it, so the DP here is the semi-global variant (Sellers 1980): the first row is
//! all zeros, meaning the pattern may start anywhere in the text for free, and
//! the answer is the minimum over the last row, meaning it may end anywhere too.
//!
//! Two early exits keep the common miss cheap:
//! 1. If the text is shorter than `pattern.len() - max`, no substring can be
//!    close enough. Return before allocating.
//! 2. If every cell of a row exceeds `max`, later rows can only grow. Abandon.

/// Where and how well a pattern aligns inside a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    /// Edits needed to turn the aligned substring into the pattern.
    pub errors: usize,
    /// Char offset in the text where the aligned substring starts.
    pub start: usize,
    /// Char offset one past the aligned substring's end.
    pub end: usize,
}

/// Best alignment of `pattern` against any substring of `text`, if one is within `max` edits.
///
/// "Best" is the fewest errors; among those, the earliest start; among those,
/// the earliest end. Every cell carries `(errors, start)` and takes the
/// lexicographic minimum over its three predecessors, so the tie-break is exact,
/// not an artifact of which predecessor happened to be checked first.
pub fn best_alignment(pattern: &[char], text: &[char], max: usize) -> Option<Alignment> {
    let m = pattern.len();
    let n = text.len();

    if m == 0 {
        return Some(Alignment {
            errors: 0,
            start: 0,
            end: 0,
        });
    }

    // Early-exit: every char of the pattern beyond the text's length is an edit
    if n + max < m {
        return None;
    }

    // Row 0: the empty pattern aligns at every offset with zero cost
    let mut prev: Vec<(usize, usize)> = (0..=n).map(|j| (0, j)).collect();
    let mut cur: Vec<(usize, usize)> = vec![(0, 0); n + 1];

    for (i, &pc) in pattern.iter().enumerate() {
        cur[0] = (i + 1, 0);
        let mut min_row = cur[0].0;

        for j in 1..=n {
            let cost = usize::from(pc != text[j - 1]);
            let diagonal = (prev[j - 1].0 + cost, prev[j - 1].1);
            let skip_pattern = (prev[j].0 + 1, prev[j].1);
            let skip_text = (cur[j - 1].0 + 1, cur[j - 1].1);

            let cell = diagonal.min(skip_pattern).min(skip_text);
            cur[j] = cell;
            min_row = min_row.min(cell.0);
        }

        // Early-exit: if minimum in this row exceeds max, no point continuing
        if min_row > max {
            return None;
        }

        std::mem::swap(&mut prev, &mut cur);
    }

    prev.iter()
        .enumerate()
        .filter(|(_, &(errors, _))| errors <= max)
        .map(|(end, &(errors, start))| Alignment { errors, start, end })
        .min_by_key(|a| (a.errors, a.start, a.end))
}
