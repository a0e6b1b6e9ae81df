// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What the search bar shows.

use crate::types::SearchItem;

/// Phase of the live search, as published to the UI.
///
/// A superseded request never appears here: its outcome is discarded and the
/// phase reflects whatever superseded it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchPhase {
    /// Empty query, nothing shown, nothing in flight.
    #[default]
    Idle,
    /// Query changed; waiting out the debounce window.
    Typing,
    /// Request in flight.
    Searching,
    /// Request finished; possibly no results.
    Success(Vec<SearchItem>),
    /// Request failed; message ready for display.
    Failed(String),
}

/// One published state of the controller.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchSnapshot {
    /// Bumped on every input, clear or retry. Completions carrying an older
    /// generation are stale and never committed.
    pub generation: u64,
    /// Raw input as last typed.
    pub query: String,
    pub phase: SearchPhase,
}

/// The mutually exclusive panels a search bar renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchView<'a> {
    /// Nothing to show yet (idle, or still typing).
    Blank,
    Loading,
    Error(&'a str),
    NoResults,
    Results(&'a [SearchItem]),
}

impl SearchSnapshot {
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SearchPhase::Searching)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, SearchPhase::Idle)
    }

    /// Results of a successful search, empty otherwise.
    pub fn results(&self) -> &[SearchItem] {
        match &self.phase {
            SearchPhase::Success(items) => items,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            SearchPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Has a search finished (either way) for the current query?
    pub fn is_resolved(&self) -> bool {
        matches!(self.phase, SearchPhase::Success(_) | SearchPhase::Failed(_))
    }

    pub fn view(&self) -> SearchView<'_> {
        match &self.phase {
            SearchPhase::Idle | SearchPhase::Typing => SearchView::Blank,
            SearchPhase::Searching => SearchView::Loading,
            SearchPhase::Failed(message) => SearchView::Error(message),
            SearchPhase::Success(items) if items.is_empty() => SearchView::NoResults,
            SearchPhase::Success(items) => SearchView::Results(items),
        }
    }
}
