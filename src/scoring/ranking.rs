// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored items get sorted.
//!
//! Sort order:
//! 1. **Score** - descending
//! 2. **Insertion position** - ascending, so equal scores keep the order in
//!    which items were added to the index
//!
//! The position tiebreaker makes the ranking a total order; two identical
//! searches on an unmodified index always return the same sequence.

use crate::types::SearchItem;
use std::cmp::Ordering;

/// An item with its score and its position in the index at query time.
#[derive(Debug, Clone, Copy)]
pub struct ScoredItem<'a> {
    pub item: &'a SearchItem,
    pub score: f64,
    pub position: usize,
}

/// Compare two scored items for ranking (`Less` means `a` ranks first).
pub fn compare_scored(a: &ScoredItem<'_>, b: &ScoredItem<'_>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.position.cmp(&b.position))
}

/// Sort best-first and keep at most `limit` entries.
pub fn rank(mut scored: Vec<ScoredItem<'_>>, limit: usize) -> Vec<ScoredItem<'_>> {
    scored.sort_by(compare_scored);
    scored.truncate(limit);
    scored
}
