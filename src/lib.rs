//! Client-side search, filter and sort engine for benchmark catalogs.
//!
//! A catalog of benchmark items is indexed once per generation. Every run of
//! the pipeline scores the index against a free-text query, keeps what passes
//! the active filters, and orders the survivors by the selected sort. Typing is
//! debounced; committed queries, filter toggles and sort changes run at once.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────────┐
//! │  build/     │────▶│  catalog.rs  │────▶│    index.rs       │
//! │ (JSON load, │     │ (Arc swap,   │     │ (IndexEntry,      │
//! │  NFC)       │     │  generation) │     │  keywords)        │
//! └─────────────┘     └──────────────┘     └───────────────────┘
//!                                                   │
//!        ┌──────────────────────────────────────────┘
//!        ▼
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────────┐
//! │  scoring/   │────▶│  filter.rs   │────▶│ scoring/ranking   │
//! │ (score,     │     │ (OR within,  │     │ (stable sort      │
//! │  highlights)│     │  AND across) │     │  comparators)     │
//! └─────────────┘     └──────────────┘     └───────────────────┘
//!        │                                          │
//!        ▼                                          ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 search/ (pipeline, debounce)                 │
//! │            engine.rs (view state, result sink)               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Scoring
//!
//! | Match                                   | Points    |
//! |-----------------------------------------|-----------|
//! | title starts with term                  | 100       |
//! | title contains term                     | 50        |
//! | description contains term               | 25        |
//! | category contains term                  | 20        |
//! | keyword contains term                   | 10        |
//! | otherwise, a word within edit distance 1| 5 - d     |
//!
//! # Usage
//!
//! ```
//! use benchsift::{build_index, run, FilterSet, QuerySpec, SortSpec};
//! use benchsift::testing::sample_catalog;
//!
//! let index = build_index(&sample_catalog());
//! let results = run(&index, &QuerySpec::new("login"), &FilterSet::new(), &SortSpec::default());
//! assert_eq!(results[0].id, "2");
//! ```

pub mod build;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod fuzzy;
pub mod index;
pub mod scoring;
pub mod search;
pub mod types;
pub mod util;

// Test utilities (always compiled, hidden from docs)
#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use build::{load_catalog, parse_catalog};
pub use catalog::{Catalog, CatalogChange};
pub use config::EngineConfig;
pub use engine::SearchEngine;
pub use error::{CatalogError, ConfigError, ScheduleError};
pub use filter::{passes, Dimension, FilterSet, FilterVocabulary};
pub use fuzzy::levenshtein_within;
pub use index::{build_index, CatalogIndex, IndexEntry};
pub use scoring::ranking::{compare_items, SortField, SortOrder, SortSpec};
pub use scoring::score_entry;
pub use search::debounce::{Debouncer, ManualScheduler, ResultSink, Scheduler};
#[cfg(feature = "tokio-scheduler")]
pub use search::debounce::TokioScheduler;
pub use search::{run, ResultSummary, SearchOutcome, SearchRequest};
pub use types::{
    CompletionStatus, Highlight, HighlightField, Item, QuerySpec, SearchResult, DIFFICULTY_LEVELS,
};
