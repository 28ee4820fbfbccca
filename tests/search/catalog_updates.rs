//! Catalog generations, change notifications and loading from disk.

use crate::common::{ids, make_benchmark, recording_sink, sample_catalog, SAMPLE_CATALOG_JSON};
use benchsift::{
    load_catalog, parse_catalog, Catalog, CatalogChange, CatalogError, CompletionStatus,
    EngineConfig, ManualScheduler, SearchEngine,
};
use std::io::Write;

#[test]
fn snapshot_survives_a_new_generation() {
    let catalog = Catalog::new(sample_catalog());
    let before = catalog.snapshot();

    assert!(catalog.apply(CatalogChange::Remove("2".to_string())));
    let after = catalog.snapshot();

    assert_eq!(before.generation(), 0);
    assert_eq!(before.len(), 3);
    assert_eq!(after.generation(), 1);
    assert_eq!(after.len(), 2);
}

#[test]
fn no_op_changes_publish_nothing() {
    let catalog = Catalog::new(sample_catalog());
    assert!(!catalog.apply(CatalogChange::Remove("missing".to_string())));
    assert!(!catalog.apply(CatalogChange::SetStatus {
        id: "1".to_string(),
        status: CompletionStatus::Completed,
    }));
    assert!(!catalog.apply(CatalogChange::Upsert(sample_catalog().remove(0))));
    assert_eq!(catalog.generation(), 0);
}

#[test]
fn upsert_appends_new_items_at_the_end() {
    let catalog = Catalog::new(sample_catalog());
    let item = make_benchmark("4", "Login Throttling", "Medium", "advanced", 40, CompletionStatus::NotStarted);
    assert!(catalog.apply(CatalogChange::Upsert(item)));

    let index = catalog.snapshot();
    assert_eq!(index.position("4"), Some(3));
}

#[test]
fn engine_results_follow_catalog_changes() {
    let clock = ManualScheduler::new();
    let (sink, seen) = recording_sink();
    let engine = SearchEngine::new(sample_catalog(), clock, &EngineConfig::default(), sink);

    engine.commit_query("login");
    assert_eq!(ids(&seen.lock()[0].results), vec!["2"]);

    let item = make_benchmark("4", "Login Throttling", "Medium", "advanced", 40, CompletionStatus::NotStarted);
    assert!(engine.apply(CatalogChange::Upsert(item)));

    let seen = seen.lock();
    let last = seen.last().unwrap();
    assert_eq!(last.generation, 1);
    // Title prefix outranks title infix
    assert_eq!(ids(&last.results), vec!["4", "2"]);
    assert_eq!(last.summary.total, 4);
}

#[test]
fn replace_swaps_the_whole_catalog() {
    let clock = ManualScheduler::new();
    let (sink, _seen) = recording_sink();
    let engine = SearchEngine::new(sample_catalog(), clock, &EngineConfig::default(), sink);

    assert!(engine.toggle_filter("category", "Easy", true));
    let replacement = vec![make_benchmark("z", "Zig Allocator", "Systems", "expert", 80, CompletionStatus::NotStarted)];
    assert!(engine.apply(CatalogChange::Replace(replacement)));

    assert!(engine.filters().is_empty());
    assert_eq!(ids(&engine.search_now().results), vec!["z"]);
}

#[test]
fn loads_catalog_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_CATALOG_JSON.as_bytes()).unwrap();

    let items = load_catalog(file.path()).unwrap();
    assert_eq!(items, sample_catalog());
}

#[test]
fn unknown_status_degrades_to_not_started() {
    let items = parse_catalog(r#"[{"id": "1", "title": "A", "completionStatus": "abandoned"}]"#).unwrap();
    assert_eq!(items[0].completion_status, CompletionStatus::NotStarted);
}

#[test]
fn duplicate_ids_are_rejected_on_load() {
    let err = parse_catalog(r#"[{"id": "1"}, {"id": "1"}]"#).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(ref id) if id == "1"));
}
