// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing shared by the pipeline and the CLI.

use crate::util::normalize::{compose, lowercase};

/// Trimmed query text shorter than this (in chars) means "no query".
pub const MIN_QUERY_LEN: usize = 2;

/// Is this query text long enough to trigger scoring?
pub fn is_active_query(text: &str) -> bool {
    text.trim().chars().count() >= MIN_QUERY_LEN
}

/// Parse a query string into lowercased, whitespace-separated terms.
///
/// Single-char terms are kept: they still match exact substrings, the scorer
/// just skips them in the fuzzy channel.
///
/// # Example
///
/// ```ignore
/// let terms = parse_query("Hello  World");
/// assert_eq!(terms, vec!["hello", "world"]);
/// ```
pub fn parse_query(text: &str) -> Vec<String> {
    lowercase(&compose(text))
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
