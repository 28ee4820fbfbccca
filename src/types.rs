// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records the engine reads and the records it hands back.
//!
//! `Item` belongs to the catalog: the engine never mutates one, it only indexes
//! and ranks it. `SearchResult` is what the renderer consumes: an id, a score and
//! the byte spans to highlight.
//!
//! # Invariants
//!
//! - **Highlight**: `start < end ≤ field.len()`, both on char boundaries of the
//!   *original* field text (not the lowercased copy).
//! - **SearchResult**: `score == 0` exactly when no query was active.

use crate::util::normalize::{compose, is_composed};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CATALOG RECORDS
// =============================================================================

/// One benchmark in the catalog.
///
/// Every field defaults when missing, null or of the wrong type, so a
/// half-filled record still indexes; search simply finds nothing in the empty
/// fields. Numeric ids and titles are kept as their decimal text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(deserialize_with = "lenient::text")]
    pub category: String,
    #[serde(deserialize_with = "lenient::text")]
    pub difficulty: String,
    #[serde(deserialize_with = "lenient::points")]
    pub points: u32,
    #[serde(deserialize_with = "lenient::status")]
    pub completion_status: CompletionStatus,
}

impl Item {
    /// Are all text fields already NFC?
    pub fn is_composed(&self) -> bool {
        [&self.title, &self.description, &self.category, &self.difficulty]
            .into_iter()
            .all(|field| is_composed(field))
    }

    /// This item with its text fields composed to NFC, matching how queries
    /// are normalized.
    pub fn composed(self) -> Item {
        if self.is_composed() {
            return self;
        }
        Item {
            title: compose(&self.title),
            description: compose(&self.description),
            category: compose(&self.category),
            difficulty: compose(&self.difficulty),
            ..self
        }
    }
}

/// Field deserializers that degrade instead of rejecting the record.
mod lenient {
    use super::CompletionStatus;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Strings as-is, numbers and booleans as text, anything else empty.
    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(text) => text,
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) => flag.to_string(),
            _ => String::new(),
        })
    }

    /// Non-negative numbers (saturating, fractions truncated) or numeric
    /// strings. Everything else is 0.
    pub fn points<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(number) => match number.as_u64() {
                Some(whole) => u32::try_from(whole).unwrap_or(u32::MAX),
                None => number
                    .as_f64()
                    .filter(|value| value.is_finite() && *value > 0.0)
                    .map_or(0, |value| value.min(f64::from(u32::MAX)) as u32),
            },
            Value::String(text) => text.trim().parse().unwrap_or(0),
            _ => 0,
        })
    }

    pub fn status<'de, D: Deserializer<'de>>(deserializer: D) -> Result<CompletionStatus, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(text) => CompletionStatus::from(text),
            _ => CompletionStatus::default(),
        })
    }
}

/// Where the user stands on a benchmark.
///
/// Variant order is the sort rank: not-started < in-progress < completed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CompletionStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl CompletionStatus {
    pub const ALL: [CompletionStatus; 3] = [
        CompletionStatus::NotStarted,
        CompletionStatus::InProgress,
        CompletionStatus::Completed,
    ];

    /// The kebab-case name used in catalogs and status filters.
    pub fn as_str(self) -> &'static str {
        match self {
            CompletionStatus::NotStarted => "not-started",
            CompletionStatus::InProgress => "in-progress",
            CompletionStatus::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
    }

    /// Sort rank used by the `completed` sort field.
    #[inline]
    pub fn rank(self) -> u8 {
        self as u8
    }
}

/// Unrecognized status strings degrade to `not-started` instead of failing the
/// whole catalog load.
impl From<String> for CompletionStatus {
    fn from(value: String) -> Self {
        Self::parse(&value).unwrap_or_default()
    }
}

impl From<CompletionStatus> for String {
    fn from(status: CompletionStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty levels in their domain order.
pub const DIFFICULTY_LEVELS: [&str; 4] = ["beginner", "intermediate", "advanced", "expert"];

/// Rank for the `difficulty` sort field.
///
/// beginner=0 < intermediate=1 < advanced=2 < expert=3. Anything else ranks
/// after expert so unclassified benchmarks sink to the end of an ascending sort.
pub fn difficulty_rank(difficulty: &str) -> u8 {
    let difficulty = difficulty.trim();
    DIFFICULTY_LEVELS
        .iter()
        .position(|level| level.eq_ignore_ascii_case(difficulty))
        .map_or(DIFFICULTY_LEVELS.len() as u8, |rank| rank as u8)
}

// =============================================================================
// QUERY
// =============================================================================

/// The text the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec {
    pub text: String,
}

impl QuerySpec {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// Which original field a highlight span points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightField {
    Title,
    Description,
}

impl HighlightField {
    /// The original text this span refers to.
    pub fn text_of(self, item: &Item) -> &str {
        match self {
            HighlightField::Title => &item.title,
            HighlightField::Description => &item.description,
        }
    }
}

/// A matched byte range in an original item field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub field: HighlightField,
    pub start: usize,
    pub end: usize,
}

/// One visible item, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    /// Relevance score. Zero when no query is active.
    pub score: u32,
    pub highlights: Vec<Highlight>,
}
