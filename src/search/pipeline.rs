// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search/filter/sort pipeline.
//!
//! ```text
//! entries ──▶ score (if query) ──▶ filter ──▶ sort ──▶ SearchResult[]
//!             drop score 0,         keeps       stable;
//!             stable desc by score  order       default = no-op
//! ```
//!
//! Pure and synchronous. The debounced entry point lives in `debounce`; this
//! function is what it eventually calls.

use super::utils::{is_active_query, parse_query};
use crate::filter::{passes, FilterSet};
use crate::index::{CatalogIndex, IndexEntry};
use crate::scoring::ranking::{compare_items, SortSpec};
use crate::scoring::score_entry;
use crate::types::{Highlight, QuerySpec, SearchResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A surviving entry, addressed by its catalog position.
struct Candidate {
    position: usize,
    score: u32,
    highlights: Vec<Highlight>,
}

/// Run the pipeline over an index snapshot.
///
/// 1. With an active query, score every entry, keep `score > 0`, and order by
///    score descending (ties keep catalog order). Otherwise every entry is a
///    candidate with score 0, in catalog order.
/// 2. Drop candidates that fail the filters. Never reorders.
/// 3. Stable-sort by `sort`. `default` leaves step 1/2 order untouched.
pub fn run<I>(index: &I, query: &QuerySpec, filters: &FilterSet, sort: &SortSpec) -> Vec<SearchResult>
where
    I: AsRef<[IndexEntry]> + ?Sized,
{
    let entries = index.as_ref();

    let mut candidates: Vec<Candidate> = if is_active_query(&query.text) {
        let terms = parse_query(&query.text);
        let mut scored: Vec<Candidate> = entries
            .iter()
            .enumerate()
            .filter_map(|(position, entry)| {
                let scored = score_entry(entry, &terms);
                (scored.score > 0).then_some(Candidate {
                    position,
                    score: scored.score,
                    highlights: scored.highlights,
                })
            })
            .collect();
        // sort_by is stable: equal scores keep catalog order
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    } else {
        (0..entries.len())
            .map(|position| Candidate {
                position,
                score: 0,
                highlights: Vec::new(),
            })
            .collect()
    };

    candidates.retain(|candidate| passes(&entries[candidate.position].item, filters));

    if !sort.is_default() {
        candidates.sort_by(|a, b| {
            compare_items(&entries[a.position].item, &entries[b.position].item, sort)
        });
    }

    candidates
        .into_iter()
        .map(|candidate| SearchResult {
            id: entries[candidate.position].id.clone(),
            score: candidate.score,
            highlights: candidate.highlights,
        })
        .collect()
}

/// Numbers for a "Showing N of M results" status line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    /// Items in the result list.
    pub shown: usize,
    /// Items in the catalog.
    pub total: usize,
    /// The query text as entered, trimmed. Empty when no query is active.
    pub query: String,
}

impl ResultSummary {
    pub fn new(results: &[SearchResult], total: usize, query: &QuerySpec) -> Self {
        let query = if is_active_query(&query.text) {
            query.text.trim().to_string()
        } else {
            String::new()
        };
        Self {
            shown: results.len(),
            total,
            query,
        }
    }

    pub fn is_filtered(&self) -> bool {
        self.shown < self.total
    }
}

/// Everything one pipeline run needs, bound to an index generation.
///
/// Holding the `Arc` keeps the snapshot alive even if the catalog publishes a
/// new generation while the run is pending.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub index: Arc<CatalogIndex>,
    pub query: QuerySpec,
    pub filters: FilterSet,
    pub sort: SortSpec,
}

impl SearchRequest {
    pub fn execute(&self) -> SearchOutcome {
        let results = run(&*self.index, &self.query, &self.filters, &self.sort);
        let summary = ResultSummary::new(&results, self.index.len(), &self.query);
        SearchOutcome {
            generation: self.index.generation(),
            results,
            summary,
        }
    }
}

/// What the renderer and the status line receive after a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Index generation the results were computed against.
    pub generation: u64,
    pub results: Vec<SearchResult>,
    pub summary: ResultSummary,
}
