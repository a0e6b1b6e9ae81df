// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory search index.
//!
//! A flat, insertion-ordered collection of `SearchItem`s. There is no inverted
//! index: each query tokenizes once and scores every item, which is what a
//! search surface holding a few thousand theses needs. With the `parallel`
//! feature the scoring loop runs on rayon; the result order is the same.
//!
//! The index does no internal locking. Callers that share one instance across
//! tasks serialize mutation themselves (see `controller::LocalBackend`).

use crate::options::SearchOptions;
use crate::scoring::ranking::{rank, ScoredItem};
use crate::scoring::score_item;
use crate::types::{ItemId, SearchItem};
use crate::utils::tokenize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Searchable collection of items owned by one search surface.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    items: Vec<SearchItem>,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from `items`, assigning ids where missing.
    pub fn from_items(items: impl IntoIterator<Item = SearchItem>) -> Self {
        let mut index = Self::new();
        index.add_items(items);
        index
    }

    /// Insert one item, generating an id if it has none. Returns the stored id.
    ///
    /// An item whose id is already present is stored again; deduplication is
    /// the caller's business.
    pub fn add_item(&mut self, mut item: SearchItem) -> ItemId {
        if item.id.is_empty() {
            item.id = ItemId::generate();
        }
        let id = item.id.clone();
        self.items.push(item);
        id
    }

    /// Insert items in order. Returns their stored ids, in the same order.
    pub fn add_items(&mut self, items: impl IntoIterator<Item = SearchItem>) -> Vec<ItemId> {
        items.into_iter().map(|item| self.add_item(item)).collect()
    }

    /// Remove the first item with this id. Absent ids are a no-op.
    pub fn remove_item(&mut self, id: &str) -> Option<SearchItem> {
        let position = self.items.iter().position(|item| item.id.as_str() == id)?;
        Some(self.items.remove(position))
    }

    /// The first item with this id, if any.
    pub fn get_item(&self, id: &str) -> Option<&SearchItem> {
        self.items.iter().find(|item| item.id.as_str() == id)
    }

    /// Drop every item. The index stays usable.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SearchItem> {
        self.items.iter()
    }

    /// Ranked items matching `query`, best first, at most `options.limit`.
    ///
    /// Empty and whitespace-only queries return nothing.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<&SearchItem> {
        self.search_scored(query, options)
            .into_iter()
            .map(|scored| scored.item)
            .collect()
    }

    /// Like `search`, keeping each item's score and index position.
    pub fn search_scored(&self, query: &str, options: &SearchOptions) -> Vec<ScoredItem<'_>> {
        let tokens = tokenize(query);
        if tokens.is_empty() || options.limit == 0 {
            return Vec::new();
        }

        let scored = self.score_all(&tokens, options);
        let matched = scored.len();
        let ranked = rank(scored, options.limit);

        tracing::debug!(
            query,
            tokens = tokens.len(),
            items = self.items.len(),
            matched,
            returned = ranked.len(),
            "local search"
        );
        ranked
    }

    #[cfg(not(feature = "parallel"))]
    fn score_all(&self, tokens: &[String], options: &SearchOptions) -> Vec<ScoredItem<'_>> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(position, item)| scored_match(position, item, tokens, options))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn score_all(&self, tokens: &[String], options: &SearchOptions) -> Vec<ScoredItem<'_>> {
        self.items
            .par_iter()
            .enumerate()
            .filter_map(|(position, item)| scored_match(position, item, tokens, options))
            .collect()
    }
}

fn scored_match<'a>(
    position: usize,
    item: &'a SearchItem,
    tokens: &[String],
    options: &SearchOptions,
) -> Option<ScoredItem<'a>> {
    let score = score_item(item, tokens, options);
    score.is_match().then_some(ScoredItem {
        item,
        score: score.score,
        position,
    })
}

impl FromIterator<SearchItem> for SearchIndex {
    fn from_iter<I: IntoIterator<Item = SearchItem>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}
