// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `SearchEngine`: the adapter surface UI code talks to.
//!
//! It owns the catalog, the active filters, the sort selection and the last
//! query text, and forwards runs to a [`Debouncer`]. Results leave through the
//! sink passed at construction; the engine never renders anything.
//!
//! Which calls are debounced:
//!
//! | Call                         | Run                     |
//! |------------------------------|-------------------------|
//! | `set_query` (keystroke)      | debounced               |
//! | `commit_query` (blur/Enter)  | immediate               |
//! | `toggle_filter`, `set_sort`  | immediate, if changed   |
//! | `apply` (catalog change)     | immediate, if changed   |

use crate::catalog::{Catalog, CatalogChange};
use crate::config::EngineConfig;
use crate::filter::{FilterSet, FilterVocabulary};
use crate::index::CatalogIndex;
use crate::scoring::ranking::SortSpec;
use crate::search::debounce::{Debouncer, ResultSink, Scheduler};
use crate::search::{SearchOutcome, SearchRequest};
use crate::types::{Item, QuerySpec};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct ViewState {
    query: QuerySpec,
    filters: FilterSet,
    sort: SortSpec,
    vocabulary: FilterVocabulary,
}

pub struct SearchEngine<S: Scheduler> {
    catalog: Catalog,
    view: Mutex<ViewState>,
    debouncer: Debouncer<S>,
}

impl<S: Scheduler> SearchEngine<S> {
    pub fn new(items: Vec<Item>, scheduler: S, config: &EngineConfig, sink: ResultSink) -> Self {
        let catalog = Catalog::new(items);
        let vocabulary = FilterVocabulary::from_index(&catalog.snapshot());
        Self {
            catalog,
            view: Mutex::new(ViewState {
                vocabulary,
                ..ViewState::default()
            }),
            debouncer: Debouncer::new(scheduler, config.debounce(), sink),
        }
    }

    /// Current index snapshot.
    pub fn index(&self) -> Arc<CatalogIndex> {
        self.catalog.snapshot()
    }

    pub fn debouncer(&self) -> &Debouncer<S> {
        &self.debouncer
    }

    pub fn filters(&self) -> FilterSet {
        self.view.lock().filters.clone()
    }

    pub fn vocabulary(&self) -> FilterVocabulary {
        self.view.lock().vocabulary.clone()
    }

    pub fn sort(&self) -> SortSpec {
        self.view.lock().sort
    }

    pub fn query(&self) -> QuerySpec {
        self.view.lock().query.clone()
    }

    /// A request for the current view against the current snapshot.
    pub fn request(&self) -> SearchRequest {
        let view = self.view.lock();
        SearchRequest {
            index: self.catalog.snapshot(),
            query: view.query.clone(),
            filters: view.filters.clone(),
            sort: view.sort,
        }
    }

    /// Run the current view synchronously and return the outcome without
    /// touching the sink or the debouncer.
    pub fn search_now(&self) -> SearchOutcome {
        self.request().execute()
    }

    /// Keystroke path: debounced.
    pub fn set_query(&self, text: impl Into<String>) {
        self.view.lock().query = QuerySpec::new(text);
        self.debouncer.submit(self.request());
    }

    /// Blur/Enter path: runs immediately, superseding any pending keystroke run.
    pub fn commit_query(&self, text: impl Into<String>) {
        self.view.lock().query = QuerySpec::new(text);
        self.refresh();
    }

    /// Apply a filter toggle event. Returns whether the active set changed.
    pub fn toggle_filter(&self, dimension: &str, value: &str, checked: bool) -> bool {
        let changed = {
            let mut view = self.view.lock();
            let ViewState {
                filters, vocabulary, ..
            } = &mut *view;
            filters.toggle(vocabulary, dimension, value, checked)
        };
        if changed {
            self.refresh();
        }
        changed
    }

    pub fn clear_filters(&self) {
        let had_filters = {
            let mut view = self.view.lock();
            let had = !view.filters.is_empty();
            view.filters.clear();
            had
        };
        if had_filters {
            self.refresh();
        }
    }

    pub fn set_sort(&self, sort: SortSpec) {
        let changed = {
            let mut view = self.view.lock();
            std::mem::replace(&mut view.sort, sort) != sort
        };
        if changed {
            self.refresh();
        }
    }

    /// Apply a catalog change notification.
    ///
    /// A new generation refreshes the filter vocabulary, drops active filter
    /// values that no longer exist, and re-runs the current view.
    pub fn apply(&self, change: CatalogChange) -> bool {
        if !self.catalog.apply(change) {
            return false;
        }
        {
            let mut view = self.view.lock();
            view.vocabulary = FilterVocabulary::from_index(&self.catalog.snapshot());
            let ViewState {
                filters, vocabulary, ..
            } = &mut *view;
            if filters.retain_known(vocabulary) {
                tracing::debug!("dropped filters no longer present in catalog");
            }
        }
        self.refresh();
        true
    }

    /// Re-run the current view now.
    pub fn refresh(&self) {
        self.debouncer.submit_now(self.request());
    }
}
