//! Edit distance properties.

use proptest::prelude::*;
use unerg_search::{levenshtein, max_edit_distance, within_distance};

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zñ]{0,10}").unwrap()
}

proptest! {
    #[test]
    fn prop_levenshtein_symmetric(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    #[test]
    fn prop_levenshtein_identity(a in word_strategy()) {
        prop_assert_eq!(levenshtein(&a, &a), 0);
    }

    #[test]
    fn prop_levenshtein_bounded_by_longer(a in word_strategy(), b in word_strategy()) {
        let longer = a.chars().count().max(b.chars().count());
        let shorter = a.chars().count().min(b.chars().count());
        let d = levenshtein(&a, &b);
        prop_assert!(d <= longer);
        prop_assert!(d >= longer - shorter);
    }

    #[test]
    fn prop_within_distance_agrees(a in word_strategy(), b in word_strategy(), max in 0usize..4) {
        prop_assert_eq!(within_distance(&a, &b, max), levenshtein(&a, &b) <= max);
    }

    #[test]
    fn prop_max_edit_distance_capped(len in 0usize..100, threshold in 0.0f64..1.0) {
        prop_assert!(max_edit_distance(len, threshold) <= 3);
        prop_assert!(max_edit_distance(len, threshold) <= len);
    }
}
