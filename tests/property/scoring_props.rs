//! Scoring monotonicity and highlight validity.

use super::*;
use benchsift::{run, score_entry, IndexEntry};
use std::sync::Arc;

fn terms(words: &[String]) -> Vec<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

proptest! {
    /// Adding a term to the query never lowers an item's score.
    #[test]
    fn adding_a_term_never_lowers_score(
        items in catalog_strategy(),
        base in prop::collection::vec(word_strategy(), 1..3),
        extra in word_strategy(),
    ) {
        for item in items {
            let entry = IndexEntry::new(Arc::new(item));
            let before = score_entry(&entry, &terms(&base));

            let mut extended = base.clone();
            extended.push(extra.clone());
            let after = score_entry(&entry, &terms(&extended));

            prop_assert!(after.score >= before.score);
        }
    }

    /// An item that matched keeps matching when the query grows.
    #[test]
    fn matches_survive_longer_queries(
        items in catalog_strategy(),
        base in phrase_strategy(2),
        extra in word_strategy(),
    ) {
        let index = build_index(&items);
        let short = run(&index, &query_spec(&base), &FilterSet::new(), &SortSpec::default());
        let long_text = format!("{} {}", base, extra);
        let long = run(&index, &query_spec(&long_text), &FilterSet::new(), &SortSpec::default());

        for result in &short {
            let grown = long.iter().find(|r| r.id == result.id);
            prop_assert!(grown.is_some());
            prop_assert!(grown.unwrap().score >= result.score);
        }
    }

    /// Every span is non-empty, inside its field, and on char boundaries.
    #[test]
    fn highlights_are_valid(
        items in catalog_strategy(),
        text in query_strategy(),
    ) {
        let index = build_index(&items);
        for result in run(&index, &query_spec(&text), &FilterSet::new(), &SortSpec::default()) {
            let item = &index.get(&result.id).unwrap().item;
            for h in &result.highlights {
                let field = h.field.text_of(item);
                prop_assert!(h.start < h.end);
                prop_assert!(h.end <= field.len());
                prop_assert!(field.is_char_boundary(h.start));
                prop_assert!(field.is_char_boundary(h.end));
            }
        }
    }

    /// Spans over mixed-script titles still land on the matched text.
    #[test]
    fn highlights_cover_the_match(
        prefix in prop::sample::select(vec!["", "Café ", "Über ", "Ωmega ", "日本 "]),
        word in word_strategy(),
    ) {
        let title = format!("{}{}", prefix, word.to_uppercase());
        let item = make_benchmark("x", &title, "Web", "beginner", 1, CompletionStatus::NotStarted);
        let index = build_index(&[item]);
        let results = run(&index, &query_spec(&word), &FilterSet::new(), &SortSpec::default());

        prop_assert_eq!(results.len(), 1);
        let title_span = results[0]
            .highlights
            .iter()
            .find(|h| h.field == benchsift::HighlightField::Title);
        prop_assert!(title_span.is_some());
        let span = title_span.unwrap();
        prop_assert_eq!(title[span.start..span.end].to_lowercase(), word);
    }
}
