//! Index-level invariants: ids, limits, ordering, idempotence.

use proptest::prelude::*;
use std::collections::HashSet;
use unerg_search::{tokenize, SearchIndex, SearchItem, SearchOptions};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Generate random word-like strings, accents included.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-záéíóúñ]{2,8}").unwrap()
}

/// Generate random titles (multiple words).
fn title_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..6).prop_map(|words| words.join(" "))
}

/// Generate a corpus of items with generated ids.
fn corpus_strategy() -> impl Strategy<Value = Vec<SearchItem>> {
    prop::collection::vec(
        (title_strategy(), title_strategy()).prop_map(|(title, description)| {
            SearchItem::new(title).field("description", description)
        }),
        1..20,
    )
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..3).prop_map(|words| words.join(" "))
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_generated_ids_unique(items in corpus_strategy()) {
        let mut index = SearchIndex::new();
        let ids = index.add_items(items);
        let unique: HashSet<_> = ids.iter().collect();
        prop_assert_eq!(unique.len(), ids.len());
        prop_assert_eq!(index.len(), ids.len());
    }

    #[test]
    fn prop_blank_query_empty(items in corpus_strategy(), spaces in "[ \t\n]{0,5}") {
        let index = SearchIndex::from_items(items);
        prop_assert!(index.search(&spaces, &SearchOptions::default()).is_empty());
    }

    #[test]
    fn prop_results_within_limit(
        items in corpus_strategy(),
        query in query_strategy(),
        limit in 0usize..10,
    ) {
        let index = SearchIndex::from_items(items);
        let opts = SearchOptions::default().with_limit(limit);
        prop_assert!(index.search(&query, &opts).len() <= limit);
    }

    #[test]
    fn prop_scores_non_increasing(items in corpus_strategy(), query in query_strategy()) {
        let index = SearchIndex::from_items(items);
        let scored = index.search_scored(&query, &SearchOptions::default());
        for pair in scored.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].position < pair[1].position);
            }
        }
    }

    #[test]
    fn prop_search_idempotent(items in corpus_strategy(), query in query_strategy()) {
        let index = SearchIndex::from_items(items);
        let opts = SearchOptions::default();
        let first: Vec<_> = index.search(&query, &opts).into_iter().map(|i| i.id.clone()).collect();
        let second: Vec<_> = index.search(&query, &opts).into_iter().map(|i| i.id.clone()).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_exact_results_contain_a_token(items in corpus_strategy(), query in query_strategy()) {
        let index = SearchIndex::from_items(items);
        let opts = SearchOptions::default().with_fuzzy(false).with_prefix(false);
        let tokens = tokenize(&query);
        for item in index.search(&query, &opts) {
            let text = tokenize(&format!(
                "{} {}",
                item.title,
                item.text("description").unwrap_or_default()
            ))
            .join(" ");
            prop_assert!(tokens.iter().any(|t| text.contains(t.as_str())));
        }
    }

    #[test]
    fn prop_own_title_always_found(items in corpus_strategy(), pick in any::<prop::sample::Index>()) {
        let index = SearchIndex::from_items(items);
        let target = pick.get(&index.iter().collect::<Vec<_>>()).id.clone();
        let title = index.get_item(target.as_str()).map(|i| i.title.clone()).unwrap_or_default();
        let opts = SearchOptions::default().with_limit(usize::MAX);
        let found = index.search(&title, &opts).into_iter().any(|i| i.id == target);
        prop_assert!(found);
    }
}
