//! Shared test utilities and fixtures.

#![allow(dead_code)]

use unerg_search::{SearchIndex, SearchItem, SearchOptions};

// Re-export canonical test utilities from unerg_search::testing
pub use unerg_search::testing::{make_item, sample_theses, ScriptedBackend};

// ============================================================================
// INDEX BUILDERS
// ============================================================================

/// Index over the sample theses t1..t5.
pub fn sample_index() -> SearchIndex {
    SearchIndex::from_items(sample_theses())
}

/// Index of title-only items with ids "0", "1", ...
pub fn title_index(titles: &[&str]) -> SearchIndex {
    SearchIndex::from_items(
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| SearchItem::with_id(i.to_string(), *title)),
    )
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Ids of the results of `query`, best first.
pub fn result_ids(index: &SearchIndex, query: &str, options: &SearchOptions) -> Vec<String> {
    index
        .search(query, options)
        .into_iter()
        .map(|item| item.id.to_string())
        .collect()
}

/// Options with fuzzy and prefix matching both switched off.
pub fn exact_options() -> SearchOptions {
    SearchOptions::default().with_fuzzy(false).with_prefix(false)
}
