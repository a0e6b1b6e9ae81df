// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Each requested field is scored in up to three passes: substring (with
//! word-boundary and leading-match bonuses), then fuzzy, then prefix. The
//! later passes only run for a field the earlier ones missed entirely.

mod core;
pub mod ranking;

pub use core::*;
