//! Sort stability and ordering.

use super::*;
use benchsift::{compare_items, run};
use std::cmp::Ordering;

proptest! {
    /// Items with equal keys keep their pre-sort relative order.
    #[test]
    fn sort_is_stable(
        items in catalog_strategy(),
        text in query_strategy(),
        sort in sort_strategy(),
    ) {
        let index = build_index(&items);
        let query = query_spec(&text);
        let unsorted = run(&index, &query, &FilterSet::new(), &SortSpec::default());
        let sorted = run(&index, &query, &FilterSet::new(), &sort);

        let before: Vec<&str> = unsorted.iter().map(|r| r.id.as_str()).collect();
        let position = |id: &str| before.iter().position(|b| *b == id).unwrap();

        for pair in sorted.windows(2) {
            let a = &index.get(&pair[0].id).unwrap().item;
            let b = &index.get(&pair[1].id).unwrap().item;
            match compare_items(a, b, &sort) {
                Ordering::Less => {}
                Ordering::Equal => prop_assert!(position(&a.id) < position(&b.id)),
                Ordering::Greater => prop_assert!(false, "out of order: {} before {}", a.id, b.id),
            }
        }
    }

    /// Sorting keeps the same set of results.
    #[test]
    fn sort_is_a_permutation(
        items in catalog_strategy(),
        text in query_strategy(),
        sort in sort_strategy(),
    ) {
        let index = build_index(&items);
        let query = query_spec(&text);
        let mut unsorted: Vec<String> = run(&index, &query, &FilterSet::new(), &SortSpec::default())
            .into_iter()
            .map(|r| r.id)
            .collect();
        let mut sorted: Vec<String> = run(&index, &query, &FilterSet::new(), &sort)
            .into_iter()
            .map(|r| r.id)
            .collect();
        unsorted.sort();
        sorted.sort();
        prop_assert_eq!(unsorted, sorted);
    }

    /// Descending is ascending with equal runs left in place.
    #[test]
    fn desc_reverses_key_order(
        items in catalog_strategy(),
        field in prop::sample::select(vec![SortField::Points, SortField::Difficulty, SortField::Title]),
    ) {
        let index = build_index(&items);
        let desc = SortSpec::new(field, SortOrder::Desc);
        let results = run(&index, &QuerySpec::default(), &FilterSet::new(), &desc);
        for pair in results.windows(2) {
            let a = &index.get(&pair[0].id).unwrap().item;
            let b = &index.get(&pair[1].id).unwrap().item;
            prop_assert_ne!(compare_items(a, b, &SortSpec::new(field, SortOrder::Asc)), Ordering::Less);
        }
    }
}
