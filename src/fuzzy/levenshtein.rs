// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with length-difference pruning.
//!
//! `|len(a) - len(b)|` is a lower bound on edit distance. If two words differ in
//! length by more than the allowed distance, `within_distance` skips the O(nm)
//! DP entirely. Nothing else short-circuits: once the matrix is built it is
//! built in full.

/// Hard cap on the allowed edit distance, whatever the query length.
pub const MAX_EDIT_DISTANCE: usize = 3;

/// Default fuzzy threshold: allowed edits per query character.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.3;

/// Tokens this short or shorter never get edit tolerance.
pub const MIN_FUZZY_TOKEN_LEN: usize = 2;

/// Classic Levenshtein distance over Unicode scalar values.
///
/// Insertion, deletion and substitution each cost 1. Uses the full
/// `(m+1) × (n+1)` matrix.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());

    let mut matrix = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        matrix[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[m][n]
}

/// Are these strings within `max` edits of each other?
///
/// Length difference is checked first; only survivors pay for the matrix.
pub fn within_distance(a: &str, b: &str, max: usize) -> bool {
    // Character counts, not byte lengths
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len.abs_diff(b_len) > max {
        return false;
    }

    levenshtein(a, b) <= max
}

/// Allowed edits for a query token of `token_len` characters.
///
/// `min(floor(token_len × threshold), MAX_EDIT_DISTANCE)`. Negative or NaN
/// thresholds allow no edits.
pub fn max_edit_distance(token_len: usize, threshold: f64) -> usize {
    let raw = (token_len as f64 * threshold).floor();
    if raw.is_nan() || raw <= 0.0 {
        return 0;
    }
    (raw as usize).min(MAX_EDIT_DISTANCE)
}
