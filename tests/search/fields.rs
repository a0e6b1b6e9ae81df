//! Field selection and boosts.

use super::common::{exact_options, result_ids, sample_index};
use unerg_search::{SearchIndex, SearchItem, SearchOptions};

#[test]
fn test_default_fields_ignore_author() {
    let index = sample_index();
    assert!(result_ids(&index, "gomez", &exact_options()).is_empty());
}

#[test]
fn test_custom_fields_search_author() {
    let index = sample_index();
    let opts = exact_options().with_fields(["title", "author"]);
    assert_eq!(result_ids(&index, "gomez", &opts), vec!["t3"]);
}

#[test]
fn test_missing_field_contributes_nothing() {
    let index = SearchIndex::from_items(vec![
        SearchItem::with_id("a", "Sin autor"),
        SearchItem::with_id("b", "Con autor").field("author", "Pedro"),
    ]);
    let opts = exact_options().with_fields(["author"]);
    assert_eq!(result_ids(&index, "pedro", &opts), vec!["b"]);
}

#[test]
fn test_numeric_fields_are_not_text() {
    let index = sample_index();
    let opts = exact_options().with_fields(["year"]);
    assert!(result_ids(&index, "2022", &opts).is_empty());
}

#[test]
fn test_boost_changes_order() {
    let index = SearchIndex::from_items(vec![
        SearchItem::with_id("by-title", "Suelos"),
        SearchItem::with_id("by-desc", "Otro").field("description", "suelos"),
    ]);
    let default = result_ids(&index, "suelos", &exact_options());
    assert_eq!(default, vec!["by-title", "by-desc"]);

    let boosted = exact_options().with_boost("description", 10.0);
    assert_eq!(result_ids(&index, "suelos", &boosted), vec!["by-desc", "by-title"]);
}

#[test]
fn test_zero_boost_still_matches() {
    let index = sample_index();
    let opts = exact_options().with_boost("title", 0.0);
    assert_eq!(result_ids(&index, "redes", &opts), vec!["t3"]);
}

#[test]
fn test_unboosted_field_uses_default_weight() {
    let opts = SearchOptions::default();
    assert_eq!(opts.boost_for("author"), 1.0);
    assert_eq!(opts.boost_for("title"), 2.0);
}
