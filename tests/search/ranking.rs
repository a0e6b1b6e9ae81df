//! Ranking: what beats what, and how ties resolve.

use super::common::{exact_options, result_ids, sample_index, title_index};
use unerg_search::{SearchItem, SearchOptions};

// ============================================================================
// SINGLE-TERM RANKING
// ============================================================================

#[test]
fn test_title_hit_found() {
    let index = sample_index();
    assert_eq!(result_ids(&index, "redes", &SearchOptions::default()), vec!["t3"]);
}

#[test]
fn test_whole_word_beats_embedded() {
    let index = title_index(&["Subredes de datos", "La red de datos"]);
    let ids = result_ids(&index, "red", &exact_options());
    assert_eq!(ids, vec!["1", "0"]);
}

#[test]
fn test_leading_match_beats_inner_match() {
    let index = title_index(&["Modelo de redes", "Redes y modelos"]);
    let ids = result_ids(&index, "redes", &exact_options());
    assert_eq!(ids, vec!["1", "0"]);
}

#[test]
fn test_exact_title_beats_longer_title() {
    // "agua" alone collects every substring bonus
    let index = title_index(&["Calidad del agua", "Agua"]);
    let scored = index.search_scored("agua", &exact_options());
    assert_eq!(scored[0].item.id.as_str(), "1");
    assert!(scored[0].score > scored[1].score);
}

#[test]
fn test_title_outweighs_content_by_default() {
    let index = unerg_search::SearchIndex::from_items(vec![
        SearchItem::with_id("content", "Otro tema").field("content", "cuenca hidrográfica"),
        SearchItem::with_id("title", "Cuenca hidrográfica"),
    ]);
    assert_eq!(
        result_ids(&index, "cuenca", &SearchOptions::default()),
        vec!["title", "content"]
    );
}

// ============================================================================
// MULTI-TERM RANKING
// ============================================================================

#[test]
fn test_more_terms_matched_ranks_higher() {
    let index = title_index(&["Energía eólica", "Energía solar"]);
    let ids = result_ids(&index, "energia solar", &exact_options());
    assert_eq!(ids, vec!["1", "0"]);
}

#[test]
fn test_terms_accumulate_across_fields() {
    let index = unerg_search::SearchIndex::from_items(vec![
        SearchItem::with_id("a", "Energía").field("description", "solar"),
        SearchItem::with_id("b", "Energía"),
    ]);
    let scored = index.search_scored("energia solar", &exact_options());
    assert_eq!(scored[0].item.id.as_str(), "a");
    assert!(scored[0].score > scored[1].score);
}

// ============================================================================
// TIES
// ============================================================================

#[test]
fn test_ties_keep_insertion_order() {
    let index = title_index(&["Tesis", "Tesis", "Tesis"]);
    assert_eq!(result_ids(&index, "tesis", &exact_options()), vec!["0", "1", "2"]);
}

#[test]
fn test_sample_ties_keep_insertion_order() {
    // t2..t5 all score the same for a single-letter query
    let index = sample_index();
    let ids = result_ids(&index, "a", &SearchOptions::default());
    assert_eq!(ids, vec!["t1", "t2", "t3", "t4", "t5"]);
}

#[test]
fn test_scores_non_increasing() {
    let index = sample_index();
    let scored = index.search_scored("de", &SearchOptions::default());
    assert_eq!(scored.len(), 5);
    for pair in scored.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}
