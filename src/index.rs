// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog index construction.
//!
//! One `IndexEntry` per item, in catalog order. An entry carries everything the
//! scorer needs precomputed: the lowercased searchable text, the lowercased
//! title and description with their offset maps, and a bounded keyword list.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **ONE_ENTRY_PER_ITEM**: `entries.len() == items.len()`, same order.
//! 2. **DETERMINISTIC**: same items in, same entries out.
//! 3. **KEYWORD_BOUND**: at most `MAX_KEYWORDS` keywords per entry, each longer
//!    than `MIN_KEYWORD_LEN` chars.
//!
//! An index is never patched. Any catalog change builds a new `CatalogIndex`
//! with the next generation number; see `catalog`.

use crate::types::Item;
use crate::util::normalize::{lowercase, FoldedText};
use std::collections::HashMap;
use std::sync::Arc;

/// Keywords must be longer than this many chars.
pub const MIN_KEYWORD_LEN: usize = 2;

/// Keywords kept per item. Long descriptions only contribute their first words.
pub const MAX_KEYWORDS: usize = 20;

/// Precomputed searchable form of one catalog item.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub id: String,
    /// Lowercased `title description category points`, space separated.
    pub text: String,
    pub keywords: Vec<String>,
    pub item: Arc<Item>,
    pub(crate) title: FoldedText,
    pub(crate) description: FoldedText,
    pub(crate) category: String,
}

impl IndexEntry {
    /// Items whose text isn't NFC are replaced by a composed copy, so the
    /// stored item, its highlight offsets and parsed queries all agree.
    pub fn new(item: Arc<Item>) -> Self {
        let item = if item.is_composed() {
            item
        } else {
            Arc::new(Item::clone(&item).composed())
        };

        let text = lowercase(&format!(
            "{} {} {} {}",
            item.title, item.description, item.category, item.points
        ));
        let keywords = extract_keywords(&text);

        Self {
            id: item.id.clone(),
            title: FoldedText::new(&item.title),
            description: FoldedText::new(&item.description),
            category: lowercase(&item.category),
            text,
            keywords,
            item,
        }
    }
}

/// Split on anything that isn't alphanumeric and keep the first
/// `MAX_KEYWORDS` tokens longer than `MIN_KEYWORD_LEN` chars.
pub fn extract_keywords(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() > MIN_KEYWORD_LEN)
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}

/// An immutable, generation-stamped index over a catalog snapshot.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    generation: u64,
    entries: Vec<IndexEntry>,
    positions: HashMap<String, usize>,
}

impl CatalogIndex {
    /// Index `items` in order. Duplicate ids all get entries; lookup by id
    /// resolves to the first one.
    pub fn from_items<I>(items: I, generation: u64) -> Self
    where
        I: IntoIterator<Item = Arc<Item>>,
    {
        let entries: Vec<IndexEntry> = items.into_iter().map(IndexEntry::new).collect();

        let mut positions = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            positions.entry(entry.id.clone()).or_insert(position);
        }

        tracing::debug!(generation, entries = entries.len(), "built catalog index");

        Self {
            generation,
            entries,
            positions,
        }
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&IndexEntry> {
        self.position(id).map(|position| &self.entries[position])
    }

    /// Catalog position of an item.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// The indexed items, in catalog order.
    pub fn items(&self) -> impl Iterator<Item = &Arc<Item>> + '_ {
        self.entries.iter().map(|entry| &entry.item)
    }
}

impl AsRef<[IndexEntry]> for CatalogIndex {
    fn as_ref(&self) -> &[IndexEntry] {
        &self.entries
    }
}

/// Build a generation-0 index from a plain item slice.
pub fn build_index(items: &[Item]) -> CatalogIndex {
    CatalogIndex::from_items(items.iter().cloned().map(Arc::new), 0)
}
