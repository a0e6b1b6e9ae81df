// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search index.
//!
//! A `SearchItem` is a title plus an open set of named fields (author, category,
//! status, and whatever else the backend sends). Field values are a closed set of
//! kinds so the scorer can pattern-match instead of guessing at runtime: only
//! `FieldValue::Text` ever contributes to a score.
//!
//! # Invariants
//!
//! - **ItemId**: non-empty once the item is stored in a `SearchIndex`.
//!   Generated ids are UUID v4 strings; collisions are not checked.
//! - **SearchItem::title**: always present, possibly empty. It is addressable
//!   as the field named `"title"` so callers can boost it like any other field.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Name under which the title is exposed to field lookups.
pub const TITLE_FIELD: &str = "title";

/// Stable identifier of a stored item.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    /// Fresh random identifier (UUID v4, simple form).
    pub fn generate() -> Self {
        ItemId(uuid::Uuid::new_v4().simple().to_string())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        ItemId(id)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        ItemId(id.to_string())
    }
}

/// Value of a named field.
///
/// Only `Text` is scored. Numbers, booleans and nulls are carried along so the
/// item round-trips to the UI unchanged, but the scorer skips them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl FieldValue {
    /// The text of a `Text` value, `None` for every other kind.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

/// Keys tried, in order, when flattening a nested JSON object into text.
const NESTED_LABEL_KEYS: &[&str] = &["name", "nombre", "title", "titulo"];

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(FieldValue::from_json(value))
    }
}

impl FieldValue {
    /// Map an arbitrary JSON value onto the closed set of field kinds.
    ///
    /// Nested references such as `{"id": 3, "name": "Educación"}` become the
    /// text of their label key. Arrays of strings are joined with spaces.
    /// Anything else without a textual reading becomes `Null`.
    pub fn from_json(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::String(s) => FieldValue::Text(s),
            Value::Number(n) => n.as_f64().map_or(FieldValue::Null, FieldValue::Number),
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Null => FieldValue::Null,
            Value::Object(mut map) => NESTED_LABEL_KEYS
                .iter()
                .find_map(|key| match map.remove(*key) {
                    Some(Value::String(s)) => Some(FieldValue::Text(s)),
                    _ => None,
                })
                .unwrap_or(FieldValue::Null),
            Value::Array(values) => {
                let words: Vec<String> = values
                    .into_iter()
                    .filter_map(|v| match v {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect();
                if words.is_empty() {
                    FieldValue::Null
                } else {
                    FieldValue::Text(words.join(" "))
                }
            }
        }
    }
}

/// A searchable record: identifier, title, and any number of extra fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchItem {
    /// Empty until the index assigns one.
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: ItemId,
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldValue>,
}

/// Accept string or numeric ids (`"42"` and `42` both become `ItemId("42")`).
pub(crate) fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ItemId, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(ItemId(s)),
        serde_json::Value::Number(n) => Ok(ItemId(n.to_string())),
        serde_json::Value::Null => Ok(ItemId::default()),
        other => Err(de::Error::custom(format!("invalid item id: {}", other))),
    }
}

impl SearchItem {
    /// Item with no id yet; the index assigns one on insert.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ItemId::default(),
            title: title.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Item with an explicit id.
    pub fn with_id(id: impl Into<ItemId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Look up a field by name. `"title"` resolves to the title.
    pub fn get(&self, name: &str) -> Option<FieldRef<'_>> {
        if name == TITLE_FIELD {
            return Some(FieldRef::Text(&self.title));
        }
        self.fields.get(name).map(|value| match value {
            FieldValue::Text(s) => FieldRef::Text(s),
            _ => FieldRef::Other,
        })
    }

    /// Text of a field, `None` when absent or not textual.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            FieldRef::Text(s) => Some(s),
            FieldRef::Other => None,
        }
    }
}

/// Borrowed view of a field: text to score, or something the scorer skips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRef<'a> {
    Text(&'a str),
    Other,
}
