// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Catalog entries are short, so a bounded Levenshtein per candidate word is
//! all the machinery this needs.

mod levenshtein;

pub use levenshtein::*;
