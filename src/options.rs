// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-query options: limit, searched fields, boosts, fuzzy and prefix toggles.
//!
//! Options are built fresh for each query and never mutated once the search
//! starts. `SearchOptions::default()` reproduces the search bar's behaviour:
//! 50 results over title/description/content, title boosted ×2, content ×0.5,
//! fuzzy at 0.3, prefix on.

use crate::fuzzy::DEFAULT_FUZZY_THRESHOLD;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Default result limit.
pub const DEFAULT_LIMIT: usize = 50;

/// Fields searched when the caller names none.
pub const DEFAULT_FIELDS: &[&str] = &["title", "description", "content"];

/// Boost applied to a field with no explicit weight.
pub const DEFAULT_FIELD_BOOST: f64 = 1.0;

/// Fuzzy matching switch, optionally carrying its own threshold.
///
/// Deserializes from either a boolean (`true` means the default threshold)
/// or a number (the threshold itself).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "FuzzySetting", into = "FuzzySetting")]
pub enum FuzzyMode {
    Disabled,
    Threshold(f64),
}

impl FuzzyMode {
    /// The threshold when enabled.
    pub fn threshold(self) -> Option<f64> {
        match self {
            FuzzyMode::Disabled => None,
            FuzzyMode::Threshold(t) => Some(t),
        }
    }
}

impl Default for FuzzyMode {
    fn default() -> Self {
        FuzzyMode::Threshold(DEFAULT_FUZZY_THRESHOLD)
    }
}

impl From<bool> for FuzzyMode {
    fn from(enabled: bool) -> Self {
        if enabled {
            FuzzyMode::default()
        } else {
            FuzzyMode::Disabled
        }
    }
}

impl From<f64> for FuzzyMode {
    fn from(threshold: f64) -> Self {
        FuzzyMode::Threshold(threshold)
    }
}

/// Wire form of `FuzzyMode`: `true`, `false`, or a number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
enum FuzzySetting {
    Flag(bool),
    Threshold(f64),
}

impl From<FuzzySetting> for FuzzyMode {
    fn from(setting: FuzzySetting) -> Self {
        match setting {
            FuzzySetting::Flag(b) => b.into(),
            FuzzySetting::Threshold(t) => t.into(),
        }
    }
}

impl From<FuzzyMode> for FuzzySetting {
    fn from(mode: FuzzyMode) -> Self {
        match mode {
            FuzzyMode::Disabled => FuzzySetting::Flag(false),
            FuzzyMode::Threshold(t) => FuzzySetting::Threshold(t),
        }
    }
}

/// Options for one `SearchIndex::search` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Maximum number of items returned.
    pub limit: usize,
    /// Field names scored, in order. `"title"` addresses the item title.
    pub fields: Vec<String>,
    /// Per-field multiplier. Fields missing here use `DEFAULT_FIELD_BOOST`.
    #[serde(deserialize_with = "finite_boosts")]
    pub boost: BTreeMap<String, f64>,
    pub fuzzy: FuzzyMode,
    pub prefix: bool,
}

/// Boost tables from files must hold finite, non-negative weights.
fn finite_boosts<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let boost = BTreeMap::<String, f64>::deserialize(deserializer)?;
    if let Some((field, weight)) = boost.iter().find(|(_, w)| !w.is_finite() || **w < 0.0) {
        return Err(serde::de::Error::custom(format!(
            "boost for '{}' must be a non-negative number, got {}",
            field, weight
        )));
    }
    Ok(boost)
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            fields: DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect(),
            boost: [("title", 2.0), ("description", 1.0), ("content", 0.5)]
                .into_iter()
                .map(|(f, w)| (f.to_string(), w))
                .collect(),
            fuzzy: FuzzyMode::default(),
            prefix: true,
        }
    }
}

impl SearchOptions {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Replace the searched field list.
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Set one field's boost, keeping the others.
    pub fn with_boost(mut self, field: impl Into<String>, weight: f64) -> Self {
        self.boost.insert(field.into(), weight);
        self
    }

    /// Replace the whole boost table.
    pub fn with_boosts(mut self, boost: BTreeMap<String, f64>) -> Self {
        self.boost = boost;
        self
    }

    pub fn with_fuzzy(mut self, fuzzy: impl Into<FuzzyMode>) -> Self {
        self.fuzzy = fuzzy.into();
        self
    }

    pub fn with_prefix(mut self, prefix: bool) -> Self {
        self.prefix = prefix;
        self
    }

    /// Boost for `field`, defaulting to `DEFAULT_FIELD_BOOST`.
    #[inline]
    pub fn boost_for(&self, field: &str) -> f64 {
        self.boost.get(field).copied().unwrap_or(DEFAULT_FIELD_BOOST)
    }
}
