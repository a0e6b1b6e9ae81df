//! Scoring invariants: word boundaries and boosts.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use unerg_search::{SearchIndex, SearchItem, SearchOptions};

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,8}").unwrap()
}

fn corpus_strategy() -> impl Strategy<Value = Vec<SearchItem>> {
    prop::collection::vec(
        (
            prop::collection::vec(word_strategy(), 1..5),
            prop::collection::vec(word_strategy(), 0..5),
        )
            .prop_map(|(title, content)| {
                SearchItem::new(title.join(" ")).field("content", content.join(" "))
            }),
        1..15,
    )
}

fn scores(index: &SearchIndex, query: &str, opts: &SearchOptions) -> HashMap<String, f64> {
    index
        .search_scored(query, opts)
        .into_iter()
        .map(|s| (s.item.id.to_string(), s.score))
        .collect()
}

proptest! {
    /// A standalone word outranks the same letters glued inside another word.
    #[test]
    fn prop_whole_word_beats_embedded(word in word_strategy()) {
        let index = SearchIndex::from_items(vec![
            SearchItem::with_id("embedded", format!("x{}x", word)),
            SearchItem::with_id("whole", format!("x {} x", word)),
        ]);
        let opts = SearchOptions::default().with_fuzzy(false);
        let ranked: Vec<_> = index.search(&word, &opts).into_iter().map(|i| i.id.to_string()).collect();
        prop_assert_eq!(ranked, vec!["whole".to_string(), "embedded".to_string()]);
    }

    /// Which items match never depends on the boosts.
    #[test]
    fn prop_boosts_do_not_filter(
        items in corpus_strategy(),
        query in word_strategy(),
        title_boost in 0.0f64..10.0,
        content_boost in 0.0f64..10.0,
    ) {
        let index = SearchIndex::from_items(items);
        let base = SearchOptions::default().with_limit(usize::MAX);
        let boosted = base.clone()
            .with_boost("title", title_boost)
            .with_boost("content", content_boost);

        let a: HashSet<_> = scores(&index, &query, &base).into_keys().collect();
        let b: HashSet<_> = scores(&index, &query, &boosted).into_keys().collect();
        prop_assert_eq!(a, b);
    }

    /// Raising one field's boost never lowers any item's score.
    #[test]
    fn prop_boost_monotonic(
        items in corpus_strategy(),
        query in word_strategy(),
        low in 0.0f64..5.0,
        extra in 0.0f64..5.0,
    ) {
        let index = SearchIndex::from_items(items);
        let base = SearchOptions::default().with_limit(usize::MAX);
        let before = scores(&index, &query, &base.clone().with_boost("title", low));
        let after = scores(&index, &query, &base.with_boost("title", low + extra));

        for (id, score) in &before {
            let raised = after.get(id).copied().unwrap_or(f64::NEG_INFINITY);
            prop_assert!(raised + 1e-9 >= *score, "{}: {} -> {}", id, score, raised);
        }
    }

    /// Turning fuzzy matching on only ever adds results.
    #[test]
    fn prop_fuzzy_only_adds(items in corpus_strategy(), query in word_strategy()) {
        let index = SearchIndex::from_items(items);
        let base = SearchOptions::default().with_limit(usize::MAX);
        let strict: HashSet<_> = scores(&index, &query, &base.clone().with_fuzzy(false)).into_keys().collect();
        let fuzzy: HashSet<_> = scores(&index, &query, &base).into_keys().collect();
        prop_assert!(strict.is_subset(&fuzzy));
    }
}
