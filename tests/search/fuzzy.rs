//! Fuzzy and prefix fallbacks.

use super::common::{result_ids, sample_index, title_index};
use unerg_search::{FuzzyMode, SearchOptions};

#[test]
fn test_accents_do_not_matter() {
    let index = sample_index();
    let opts = SearchOptions::default().with_fuzzy(false);
    assert_eq!(result_ids(&index, "aplicacion", &opts), vec!["t1"]);
    assert_eq!(result_ids(&index, "APLICACIÓN", &opts), vec!["t1"]);
}

#[test]
fn test_typo_found_with_fuzzy() {
    let index = sample_index();
    let opts = SearchOptions::default();
    assert_eq!(result_ids(&index, "aplicasion", &opts), vec!["t1"]);
    assert_eq!(result_ids(&index, "inventaro", &opts), vec!["t1"]);
}

#[test]
fn test_typo_missed_without_fuzzy() {
    let index = sample_index();
    let opts = SearchOptions::default().with_fuzzy(FuzzyMode::Disabled);
    assert!(result_ids(&index, "aplicasion", &opts).is_empty());
    assert!(result_ids(&index, "inventaro", &opts).is_empty());
}

#[test]
fn test_fuzzy_scores_below_substring() {
    let index = title_index(&["Inventario", "Inventarios"]);
    let exact = index.search_scored("inventario", &SearchOptions::default());
    let typo = index.search_scored("inventaro", &SearchOptions::default());
    assert_eq!(exact.len(), 2);
    assert_eq!(typo.len(), 2);
    assert!(typo[0].score < exact[1].score);
}

#[test]
fn test_zero_threshold_disables_fuzzy() {
    let index = sample_index();
    let opts = SearchOptions::default().with_fuzzy(0.0);
    assert!(result_ids(&index, "aplicasion", &opts).is_empty());
}

#[test]
fn test_short_tokens_never_fuzzy_match() {
    // "zx" is one edit from many two-letter words but must not match
    let index = title_index(&["de la en"]);
    assert!(result_ids(&index, "zx", &SearchOptions::default()).is_empty());
}

#[test]
fn test_edit_distance_is_capped() {
    // Eight edits away: far beyond the cap whatever the threshold
    let index = title_index(&["abcdefghij"]);
    let opts = SearchOptions::default().with_fuzzy(1.0);
    assert!(result_ids(&index, "abzzzzzzzz", &opts).is_empty());
}
