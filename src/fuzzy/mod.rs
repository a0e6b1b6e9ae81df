// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! The allowed distance grows with the length of the query token and is capped
//! at `MAX_EDIT_DISTANCE`, so a long query can absorb a few typos while a short
//! one cannot drift into unrelated words.

mod levenshtein;

pub use levenshtein::*;
