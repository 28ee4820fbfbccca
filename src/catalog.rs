// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The live catalog: a copy-on-write index snapshot.
//!
//! Readers take an `Arc<CatalogIndex>` and keep it for as long as they need.
//! Every change builds a complete new index with the next generation number and
//! swaps the pointer. Nothing is ever patched in place, so a search running on
//! generation N is unaffected by a status change that publishes N+1.
//!
//! Rebuilds are linear in catalog size, which is fine at the tens-to-hundreds
//! of items a catalog holds.

use crate::index::CatalogIndex;
use crate::types::{CompletionStatus, Item};
use parking_lot::RwLock;
use std::sync::Arc;

/// A change notification from whoever owns the items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogChange {
    /// Replace the whole catalog.
    Replace(Vec<Item>),
    /// Add an item, or update the item with the same id in place.
    Upsert(Item),
    /// Remove the item with this id.
    Remove(String),
    /// Update one item's completion status.
    SetStatus { id: String, status: CompletionStatus },
}

/// Holds the current index generation.
#[derive(Debug)]
pub struct Catalog {
    current: RwLock<Arc<CatalogIndex>>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            current: RwLock::new(Arc::new(CatalogIndex::from_items(
                items.into_iter().map(Arc::new),
                0,
            ))),
        }
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<CatalogIndex> {
        Arc::clone(&self.current.read())
    }

    pub fn generation(&self) -> u64 {
        self.current.read().generation()
    }

    pub fn len(&self) -> usize {
        self.current.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.read().is_empty()
    }

    /// Apply a change. Returns `true` if a new generation was published.
    ///
    /// Changes that would not alter anything (removing an unknown id, setting a
    /// status to its current value) publish nothing.
    pub fn apply(&self, change: CatalogChange) -> bool {
        let mut current = self.current.write();
        let mut items: Vec<Arc<Item>> = current.items().cloned().collect();

        let changed = match change {
            CatalogChange::Replace(replacement) => {
                items = replacement.into_iter().map(Arc::new).collect();
                true
            }
            CatalogChange::Upsert(item) => {
                let item = item.composed();
                match items.iter().position(|existing| existing.id == item.id) {
                    Some(position) if *items[position] == item => false,
                    Some(position) => {
                        items[position] = Arc::new(item);
                        true
                    }
                    None => {
                        items.push(Arc::new(item));
                        true
                    }
                }
            }
            CatalogChange::Remove(id) => {
                let before = items.len();
                items.retain(|existing| existing.id != id);
                items.len() != before
            }
            CatalogChange::SetStatus { id, status } => {
                match items.iter().position(|existing| existing.id == id) {
                    Some(position) if items[position].completion_status != status => {
                        let mut updated = Item::clone(&items[position]);
                        updated.completion_status = status;
                        items[position] = Arc::new(updated);
                        true
                    }
                    _ => false,
                }
            }
        };

        if changed {
            let generation = current.generation() + 1;
            *current = Arc::new(CatalogIndex::from_items(items, generation));
        }
        changed
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
