//! Debounced entry point, driven by the fake clock.

use crate::common::{recording_sink, sample_catalog, sample_index};
use benchsift::{
    Debouncer, EngineConfig, FilterSet, ManualScheduler, QuerySpec, SearchEngine, SearchRequest,
    SortSpec,
};
use std::sync::Arc;
use std::time::Duration;

const WINDOW: Duration = Duration::from_millis(275);

fn request(text: &str) -> SearchRequest {
    SearchRequest {
        index: Arc::new(sample_index()),
        query: QuerySpec::new(text),
        filters: FilterSet::new(),
        sort: SortSpec::default(),
    }
}

#[test]
fn nothing_runs_inside_the_window() {
    let clock = ManualScheduler::new();
    let (sink, seen) = recording_sink();
    let debouncer = Debouncer::new(clock.clone(), WINDOW, sink);

    debouncer.submit(request("login"));
    clock.advance(Duration::from_millis(274));
    assert!(seen.lock().is_empty());
    assert!(debouncer.is_pending());

    clock.advance(Duration::from_millis(1));
    assert_eq!(seen.lock().len(), 1);
    assert!(!debouncer.is_pending());
}

#[test]
fn each_keystroke_restarts_the_window() {
    let clock = ManualScheduler::new();
    let (sink, seen) = recording_sink();
    let debouncer = Debouncer::new(clock.clone(), WINDOW, sink);

    for text in ["n", "ne", "neu", "neur", "neura", "neural"] {
        debouncer.submit(request(text));
        clock.advance(Duration::from_millis(200));
    }
    assert!(seen.lock().is_empty());
    assert_eq!(clock.pending(), 1);

    clock.advance(Duration::from_millis(75));
    let seen = seen.lock();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].summary.query, "neural");
    assert_eq!(seen[0].results[0].id, "3");
}

#[test]
fn flush_runs_pending_immediately() {
    let clock = ManualScheduler::new();
    let (sink, seen) = recording_sink();
    let debouncer = Debouncer::new(clock.clone(), WINDOW, sink);

    assert!(!debouncer.flush());
    debouncer.submit(request("login"));
    assert!(debouncer.flush());
    assert_eq!(seen.lock().len(), 1);
    assert_eq!(clock.pending(), 0);
    assert_eq!(clock.advance(WINDOW * 2), 0);
}

#[test]
fn cancel_drops_the_pending_run() {
    let clock = ManualScheduler::new();
    let (sink, seen) = recording_sink();
    let debouncer = Debouncer::new(clock.clone(), WINDOW, sink);

    debouncer.submit(request("login"));
    debouncer.cancel();
    clock.advance(WINDOW);
    assert!(seen.lock().is_empty());
}

#[test]
fn engine_uses_configured_window() {
    let clock = ManualScheduler::new();
    let (sink, seen) = recording_sink();
    let config = EngineConfig {
        debounce_ms: 50,
        ..EngineConfig::default()
    };
    let engine = SearchEngine::new(sample_catalog(), clock.clone(), &config, sink);

    engine.set_query("login");
    clock.advance(Duration::from_millis(50));
    assert_eq!(seen.lock().len(), 1);
    assert_eq!(engine.debouncer().delay(), Duration::from_millis(50));
}

#[test]
fn filter_toggle_during_typing_supersedes_pending_run() {
    let clock = ManualScheduler::new();
    let (sink, seen) = recording_sink();
    let engine = SearchEngine::new(sample_catalog(), clock.clone(), &EngineConfig::default(), sink);

    engine.set_query("network");
    engine.toggle_filter("category", "Hard", true);
    assert_eq!(seen.lock().len(), 1);
    assert_eq!(seen.lock()[0].results[0].id, "3");

    // The keystroke run was folded into the toggle run
    assert_eq!(clock.advance(WINDOW), 0);
    assert_eq!(seen.lock().len(), 1);
}

#[cfg(feature = "tokio-scheduler")]
mod tokio_timer {
    use super::*;
    use benchsift::TokioScheduler;

    #[tokio::test(start_paused = true)]
    async fn burst_collapses_to_one_run() {
        let (sink, seen) = recording_sink();
        let engine =
            SearchEngine::new(sample_catalog(), TokioScheduler, &EngineConfig::default(), sink);

        engine.set_query("lo");
        engine.set_query("log");
        engine.set_query("login");
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(seen.lock().is_empty());

        tokio::time::sleep(Duration::from_millis(300)).await;
        let seen = seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].results[0].id, "2");
    }

    #[test]
    fn outside_a_runtime_searches_synchronously() {
        let (sink, seen) = recording_sink();
        let debouncer = Debouncer::new(TokioScheduler, WINDOW, sink);
        debouncer.submit(request("login"));
        assert_eq!(seen.lock().len(), 1);
        assert!(!debouncer.is_pending());
    }
}
