//! Same input, same output.

use super::common::{sample_index, sample_theses};
use unerg_search::{SearchIndex, SearchOptions};

#[test]
fn test_repeated_search_identical() {
    let index = sample_index();
    let opts = SearchOptions::default();
    for query in ["de", "a", "aplicasion", "energia solar", "red"] {
        let first = index.search_scored(query, &opts);
        for _ in 0..5 {
            let again = index.search_scored(query, &opts);
            assert_eq!(first.len(), again.len());
            for (a, b) in first.iter().zip(&again) {
                assert_eq!(a.item.id, b.item.id);
                assert_eq!(a.score, b.score);
            }
        }
    }
}

#[test]
fn test_search_does_not_mutate_index() {
    let index = sample_index();
    let before: Vec<_> = index.iter().cloned().collect();
    let _ = index.search("de", &SearchOptions::default());
    let after: Vec<_> = index.iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn test_rebuilt_index_same_results() {
    let a = sample_index();
    let b = SearchIndex::from_items(sample_theses());
    let opts = SearchOptions::default();
    let ids = |index: &SearchIndex| -> Vec<String> {
        index
            .search("de", &opts)
            .into_iter()
            .map(|item| item.id.to_string())
            .collect()
    };
    assert_eq!(ids(&a), ids(&b));
}
