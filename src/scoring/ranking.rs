// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! User-selected ordering: how the visible list gets sorted.
//!
//! `compare_items` only looks at the chosen key. Ties are left to the sort
//! algorithm, which must be stable: equal keys keep the order the pipeline
//! produced, which is relevance order while a query is active.
//!
//! `default` compares everything as equal, so a stable sort with it is a no-op
//! and relevance order wins until the user explicitly picks a field.

use crate::types::{difficulty_rank, Item};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Sortable item attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Default,
    Title,
    Points,
    Category,
    Difficulty,
    Completed,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Default => "default",
            SortField::Title => "title",
            SortField::Points => "points",
            SortField::Category => "category",
            SortField::Difficulty => "difficulty",
            SortField::Completed => "completed",
        }
    }
}

/// Unknown field names fall back to `default` instead of failing.
impl FromStr for SortField {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value.trim().to_ascii_lowercase().as_str() {
            "title" => SortField::Title,
            "points" => SortField::Points,
            "category" => SortField::Category,
            "difficulty" => SortField::Difficulty,
            "completed" | "status" => SortField::Completed,
            _ => SortField::Default,
        })
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Anything that isn't `desc` sorts ascending.
impl FromStr for SortOrder {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(if value.trim().eq_ignore_ascii_case("desc") {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        })
    }
}

/// Chosen sort field and direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// True when sorting with this spec cannot change any order.
    #[inline]
    pub fn is_default(&self) -> bool {
        self.field == SortField::Default
    }
}

/// Compare two items by the chosen key.
///
/// - `title`, `category`: lexicographic on lowercased text
/// - `points`: numeric
/// - `difficulty`: beginner < intermediate < advanced < expert < unknown
/// - `completed`: not-started < in-progress < completed
/// - `default`: always `Equal`
///
/// `desc` reverses the key comparison. Equal stays equal in both directions,
/// which is what keeps ties in pipeline order.
pub fn compare_items(a: &Item, b: &Item, spec: &SortSpec) -> Ordering {
    let ordering = match spec.field {
        SortField::Default => Ordering::Equal,
        SortField::Title => cmp_lowercase(&a.title, &b.title),
        SortField::Category => cmp_lowercase(&a.category, &b.category),
        SortField::Points => a.points.cmp(&b.points),
        SortField::Difficulty => difficulty_rank(&a.difficulty).cmp(&difficulty_rank(&b.difficulty)),
        SortField::Completed => a.completion_status.rank().cmp(&b.completion_status.rank()),
    };

    match spec.order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

/// Case-insensitive comparison without allocating lowercased copies.
fn cmp_lowercase(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
