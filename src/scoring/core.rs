// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Every contribution is a fixed weight times the field boost, so scores scale
//! linearly with boosts and the ordering inside one field never changes when
//! its boost does.
//!
//! # Passes per field
//!
//! | Pass      | Runs when                         | Per token contribution          |
//! |-----------|-----------------------------------|---------------------------------|
//! | Substring | always                            | 1.0 (+0.5 whole word, +0.3 lead)|
//! | Fuzzy     | substring missed, fuzzy enabled   | 0.3 once if any word is close   |
//! | Prefix    | both missed, prefix enabled       | 0.4 per word starting with token|
//!
//! A field value that equals the token collects all three substring weights
//! (1.8), strictly more than an embedded, non-boundary occurrence (1.0 or 1.3).

use crate::fuzzy::{max_edit_distance, within_distance, MIN_FUZZY_TOKEN_LEN};
use crate::options::SearchOptions;
use crate::types::SearchItem;
use crate::utils::{contains_whole_word, normalize, tokenize};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Field value contains the token.
pub const SUBSTRING_SCORE: f64 = 1.0;

/// Token also stands as a whole word.
pub const WORD_BOUNDARY_BONUS: f64 = 0.5;

/// Field value starts with the token.
pub const LEADING_MATCH_BONUS: f64 = 0.3;

/// Some word of the field is within the allowed edit distance.
pub const FUZZY_MATCH_SCORE: f64 = 0.3;

/// A word of the field starts with the token.
pub const PREFIX_MATCH_SCORE: f64 = 0.4;

/// Score of one field, or of a whole item when summed.
///
/// `hits` counts scoring events independently of their weight, so "did anything
/// match" never depends on the boosts in play.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MatchScore {
    pub score: f64,
    pub hits: usize,
}

impl MatchScore {
    #[inline]
    pub fn is_match(&self) -> bool {
        self.hits > 0
    }

    #[inline]
    fn add(&mut self, weight: f64, boost: f64) {
        self.score += weight * boost;
        self.hits += 1;
    }
}

impl std::ops::AddAssign for MatchScore {
    fn add_assign(&mut self, other: Self) {
        self.score += other.score;
        self.hits += other.hits;
    }
}

/// Score one field value against the query tokens.
///
/// `tokens` must already come from `tokenize`. The value is normalized here.
pub fn score_field(value: &str, tokens: &[String], boost: f64, options: &SearchOptions) -> MatchScore {
    let text = normalize(value);
    let mut result = MatchScore::default();

    for token in tokens {
        if text.contains(token.as_str()) {
            result.add(SUBSTRING_SCORE, boost);
            if contains_whole_word(&text, token) {
                result.add(WORD_BOUNDARY_BONUS, boost);
            }
            if text.starts_with(token.as_str()) {
                result.add(LEADING_MATCH_BONUS, boost);
            }
        }
    }

    if result.is_match() {
        return result;
    }

    // Both fallback passes work on the field's words, punctuation stripped
    let words = tokenize(value);

    if let Some(threshold) = options.fuzzy.threshold() {
        for token in tokens {
            if fuzzy_hit(&text, &words, token, threshold) {
                result.add(FUZZY_MATCH_SCORE, boost);
            }
        }
    }

    if result.is_match() || !options.prefix {
        return result;
    }

    for token in tokens {
        for word in &words {
            if word.starts_with(token.as_str()) {
                result.add(PREFIX_MATCH_SCORE, boost);
            }
        }
    }

    result
}

/// Is `token` approximately present in the field?
///
/// Short tokens only match by plain containment; longer ones tolerate up to
/// `max_edit_distance` edits against any single word.
fn fuzzy_hit(text: &str, words: &[String], token: &str, threshold: f64) -> bool {
    let token_len = token.chars().count();
    if token_len <= MIN_FUZZY_TOKEN_LEN {
        return text.contains(token);
    }

    let max = max_edit_distance(token_len, threshold);
    words.iter().any(|word| within_distance(token, word, max))
}

/// Score an item across every requested field.
///
/// Fields that are absent or not textual contribute nothing.
pub fn score_item(item: &SearchItem, tokens: &[String], options: &SearchOptions) -> MatchScore {
    let mut total = MatchScore::default();
    for field in &options.fields {
        if let Some(value) = item.text(field) {
            total += score_field(value, tokens, options.boost_for(field), options);
        }
    }
    total
}
