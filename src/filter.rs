// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Faceted filtering: category, difficulty and completion status.
//!
//! Values inside one dimension are OR-ed, dimensions are AND-ed. A dimension
//! with no active values places no constraint, so an empty `FilterSet` lets
//! every item through.
//!
//! Filter pairs are validated when they are added: a `(dimension, value)` pair
//! that no catalog item carries is ignored. The `FilterVocabulary` built from
//! the current index is the source of truth for what exists.

use crate::index::CatalogIndex;
use crate::types::Item;
use crate::util::normalize::lowercase;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

/// An independent facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Category,
    Difficulty,
    Status,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Category, Dimension::Difficulty, Dimension::Status];

    /// Parse a dimension name. Unknown names are `None` and callers drop them.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "category" => Some(Dimension::Category),
            "difficulty" => Some(Dimension::Difficulty),
            "status" | "completion" | "completionstatus" => Some(Dimension::Status),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Category => "category",
            Dimension::Difficulty => "difficulty",
            Dimension::Status => "status",
        }
    }

    /// The item attribute this dimension filters on.
    pub fn value_of(self, item: &Item) -> &str {
        match self {
            Dimension::Category => &item.category,
            Dimension::Difficulty => &item.difficulty,
            Dimension::Status => item.completion_status.as_str(),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values that actually occur in the catalog, per dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterVocabulary {
    values: BTreeMap<Dimension, BTreeSet<String>>,
}

impl FilterVocabulary {
    pub fn from_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let mut values: BTreeMap<Dimension, BTreeSet<String>> = BTreeMap::new();
        for item in items {
            for dimension in Dimension::ALL {
                let value = dimension.value_of(item);
                if !value.is_empty() {
                    values.entry(dimension).or_default().insert(value.to_string());
                }
            }
        }
        Self { values }
    }

    pub fn from_index(index: &CatalogIndex) -> Self {
        Self::from_items(index.items().map(Arc::as_ref))
    }

    pub fn contains(&self, dimension: Dimension, value: &str) -> bool {
        self.values
            .get(&dimension)
            .is_some_and(|values| values.contains(value))
    }

    /// The catalog's spelling of `value`: an exact match if there is one,
    /// otherwise the first case-insensitive match.
    pub fn resolve(&self, dimension: Dimension, value: &str) -> Option<&str> {
        let values = self.values.get(&dimension)?;
        let value = value.trim();
        if let Some(exact) = values.get(value) {
            return Some(exact.as_str());
        }
        let folded = lowercase(value);
        values
            .iter()
            .find(|known| lowercase(known) == folded)
            .map(String::as_str)
    }

    /// Known values of a dimension, sorted.
    pub fn values(&self, dimension: Dimension) -> impl Iterator<Item = &str> + '_ {
        self.values
            .get(&dimension)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }
}

/// Active filter pairs, grouped by dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    active: BTreeMap<Dimension, BTreeSet<String>>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(dimension name, value)` pairs, dropping anything the
    /// vocabulary doesn't know.
    pub fn from_pairs<'a, I>(pairs: I, vocabulary: &FilterVocabulary) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut set = Self::new();
        for (dimension, value) in pairs {
            set.toggle(vocabulary, dimension, value, true);
        }
        set
    }

    /// Apply a UI toggle event. Returns whether the set changed.
    ///
    /// Unknown dimension names and values absent from the vocabulary are
    /// ignored. Unchecking is never validated, so a stale value can always be
    /// removed.
    pub fn toggle(
        &mut self,
        vocabulary: &FilterVocabulary,
        dimension: &str,
        value: &str,
        checked: bool,
    ) -> bool {
        let Some(parsed) = Dimension::parse(dimension) else {
            tracing::debug!(dimension, value, "ignoring filter toggle for unknown dimension");
            return false;
        };
        self.set(vocabulary, parsed, value, checked)
    }

    /// Typed form of [`FilterSet::toggle`].
    pub fn set(
        &mut self,
        vocabulary: &FilterVocabulary,
        dimension: Dimension,
        value: &str,
        checked: bool,
    ) -> bool {
        if !checked {
            return self.remove(dimension, value);
        }
        if !vocabulary.contains(dimension, value) {
            tracing::debug!(%dimension, value, "ignoring filter value absent from catalog");
            return false;
        }
        self.active
            .entry(dimension)
            .or_default()
            .insert(value.to_string())
    }

    fn remove(&mut self, dimension: Dimension, value: &str) -> bool {
        let Some(values) = self.active.get_mut(&dimension) else {
            return false;
        };
        let removed = values.remove(value);
        if values.is_empty() {
            self.active.remove(&dimension);
        }
        removed
    }

    /// Drop values the catalog no longer carries. Returns whether anything went.
    pub fn retain_known(&mut self, vocabulary: &FilterVocabulary) -> bool {
        let before = self.len();
        for (dimension, values) in &mut self.active {
            values.retain(|value| vocabulary.contains(*dimension, value));
        }
        self.active.retain(|_, values| !values.is_empty());
        self.len() != before
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Total number of active pairs.
    pub fn len(&self) -> usize {
        self.active.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn is_active(&self, dimension: Dimension, value: &str) -> bool {
        self.active
            .get(&dimension)
            .is_some_and(|values| values.contains(value))
    }

    /// Active values of one dimension.
    pub fn values(&self, dimension: Dimension) -> impl Iterator<Item = &str> + '_ {
        self.active
            .get(&dimension)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// All active pairs, grouped by dimension.
    pub fn pairs(&self) -> impl Iterator<Item = (Dimension, &str)> + '_ {
        self.active
            .iter()
            .flat_map(|(dimension, values)| values.iter().map(move |v| (*dimension, v.as_str())))
    }
}

/// Does `item` pass every dimension that has at least one active value?
pub fn passes(item: &Item, filters: &FilterSet) -> bool {
    filters
        .active
        .iter()
        .all(|(dimension, values)| values.is_empty() || values.contains(dimension.value_of(item)))
}
