//! Sorting through the pipeline.

use crate::common::{ids, make_benchmark, sample_index};
use benchsift::{
    build_index, run, CompletionStatus, FilterSet, QuerySpec, SortField, SortOrder, SortSpec,
};

fn sorted(field: SortField, order: SortOrder) -> Vec<String> {
    let index = sample_index();
    run(&index, &QuerySpec::default(), &FilterSet::new(), &SortSpec::new(field, order))
        .into_iter()
        .map(|r| r.id)
        .collect()
}

#[test]
fn title_ascending_and_descending() {
    assert_eq!(sorted(SortField::Title, SortOrder::Asc), vec!["2", "1", "3"]);
    assert_eq!(sorted(SortField::Title, SortOrder::Desc), vec!["3", "1", "2"]);
}

#[test]
fn difficulty_uses_domain_order() {
    assert_eq!(sorted(SortField::Difficulty, SortOrder::Asc), vec!["1", "2", "3"]);
    assert_eq!(sorted(SortField::Difficulty, SortOrder::Desc), vec!["3", "2", "1"]);
}

#[test]
fn completed_sorts_by_progress() {
    assert_eq!(sorted(SortField::Completed, SortOrder::Asc), vec!["3", "2", "1"]);
}

#[test]
fn category_is_lexicographic() {
    // Easy < Hard < Medium
    assert_eq!(sorted(SortField::Category, SortOrder::Asc), vec!["1", "3", "2"]);
}

#[test]
fn default_sort_keeps_score_order() {
    let index = sample_index();
    let desc_default = SortSpec::new(SortField::Default, SortOrder::Desc);
    let plain = run(&index, &QuerySpec::new("network"), &FilterSet::new(), &SortSpec::default());
    let reversed = run(&index, &QuerySpec::new("network"), &FilterSet::new(), &desc_default);
    assert_eq!(plain, reversed);
}

#[test]
fn ties_keep_pipeline_order_in_both_directions() {
    let items = vec![
        make_benchmark("a", "Alpha", "Easy", "beginner", 10, CompletionStatus::NotStarted),
        make_benchmark("b", "Bravo", "Easy", "beginner", 20, CompletionStatus::NotStarted),
        make_benchmark("c", "Charlie", "Easy", "beginner", 10, CompletionStatus::NotStarted),
        make_benchmark("d", "Delta", "Easy", "beginner", 20, CompletionStatus::NotStarted),
    ];
    let index = build_index(&items);

    let asc = run(
        &index,
        &QuerySpec::default(),
        &FilterSet::new(),
        &SortSpec::new(SortField::Points, SortOrder::Asc),
    );
    assert_eq!(ids(&asc), vec!["a", "c", "b", "d"]);

    let desc = run(
        &index,
        &QuerySpec::default(),
        &FilterSet::new(),
        &SortSpec::new(SortField::Points, SortOrder::Desc),
    );
    assert_eq!(ids(&desc), vec!["b", "d", "a", "c"]);
}

#[test]
fn unknown_difficulty_sinks_to_the_end() {
    let items = vec![
        make_benchmark("x", "Mystery", "Easy", "legendary", 1, CompletionStatus::NotStarted),
        make_benchmark("y", "Known", "Easy", "expert", 1, CompletionStatus::NotStarted),
    ];
    let index = build_index(&items);
    let results = run(
        &index,
        &QuerySpec::default(),
        &FilterSet::new(),
        &SortSpec::new(SortField::Difficulty, SortOrder::Asc),
    );
    assert_eq!(ids(&results), vec!["y", "x"]);
}

#[test]
fn unknown_sort_field_name_means_default() {
    let field: SortField = "popularity".parse().unwrap_or_default();
    assert_eq!(field, SortField::Default);
    let status: SortField = "status".parse().unwrap_or_default();
    assert_eq!(status, SortField::Completed);
}
