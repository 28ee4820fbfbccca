//! Filter correctness against a direct reading of the rule.

use super::*;
use benchsift::{passes, Dimension};

/// OR within a dimension, AND across dimensions, with unused dimensions ignored.
fn oracle(item: &Item, filters: &FilterSet) -> bool {
    Dimension::ALL.into_iter().all(|dimension| {
        let active: Vec<&str> = filters.values(dimension).collect();
        active.is_empty() || active.contains(&dimension.value_of(item))
    })
}

proptest! {
    #[test]
    fn passes_matches_oracle(
        items in catalog_strategy(),
        pairs in filter_pairs_strategy(),
    ) {
        let filters = filter_set(&items, &pairs);
        for item in &items {
            prop_assert_eq!(passes(item, &filters), oracle(item, &filters));
        }
    }

    /// Toggling a value on and back off restores the previous set.
    #[test]
    fn toggle_round_trip(
        items in catalog_strategy(),
        pairs in filter_pairs_strategy(),
        extra in filter_pairs_strategy(),
    ) {
        let vocabulary = FilterVocabulary::from_items(&items);
        let mut filters = filter_set(&items, &pairs);
        let original = filters.clone();

        for (dimension, value) in &extra {
            if filters.toggle(&vocabulary, dimension, value, true) {
                prop_assert!(filters.toggle(&vocabulary, dimension, value, false));
            }
        }
        prop_assert_eq!(filters, original);
    }

    /// Only vocabulary values ever become active.
    #[test]
    fn active_values_come_from_the_catalog(
        items in catalog_strategy(),
        pairs in filter_pairs_strategy(),
    ) {
        let vocabulary = FilterVocabulary::from_items(&items);
        let filters = filter_set(&items, &pairs);
        for (dimension, value) in filters.pairs() {
            prop_assert!(vocabulary.contains(dimension, value));
        }
    }
}
