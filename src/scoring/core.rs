// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance.
//!
//! Every query term is checked against five channels and the contributions are
//! summed. Channels are independent: a term that hits the title, a keyword and
//! a fuzzy neighbour earns all three. Items that match a term in several ways
//! should float above items that match it once.
//!
//! # Constants
//!
//! | Channel               | Score | Highlight   |
//! |-----------------------|-------|-------------|
//! | Title, at offset 0    | 100   | title       |
//! | Title, elsewhere      | 50    | title       |
//! | Description           | 25    | description |
//! | Category              | 20    | none        |
//! | Keyword contains term | 10    | none        |
//! | Fuzzy word, distance d| 5 - d | none        |
//!
//! These are fixed values, not tuning knobs. Rankings in saved views and tests
//! depend on them.

use crate::fuzzy::levenshtein_bounded;
use crate::index::IndexEntry;
use crate::types::{Highlight, HighlightField};
use crate::util::normalize::FoldedText;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Term found at the very start of the title.
pub const TITLE_PREFIX_SCORE: u32 = 100;

/// Term found elsewhere in the title.
pub const TITLE_SCORE: u32 = 50;

/// Term found in the description.
pub const DESCRIPTION_SCORE: u32 = 25;

/// Term found in the category name.
pub const CATEGORY_SCORE: u32 = 20;

/// Some keyword contains the term.
pub const KEYWORD_SCORE: u32 = 10;

/// Fuzzy base: a word at distance `d` earns `FUZZY_BASE_SCORE - d`.
pub const FUZZY_BASE_SCORE: u32 = 5;

/// Largest edit distance the fuzzy channel accepts.
pub const MAX_FUZZY_DISTANCE: usize = 1;

/// Terms shorter than this (in chars) skip the fuzzy channel.
pub const MIN_FUZZY_TERM_LEN: usize = 2;

/// Score and highlight spans for one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoredEntry {
    pub score: u32,
    pub highlights: Vec<Highlight>,
}

/// Score one index entry against lowercased query terms.
///
/// The total is the sum over terms, so adding a term never lowers a score.
pub fn score_entry(entry: &IndexEntry, terms: &[String]) -> ScoredEntry {
    let mut scored = ScoredEntry::default();
    for term in terms {
        scored.score += score_term(entry, term, &mut scored.highlights);
    }
    scored
}

/// Contribution of a single term, pushing any highlights it produces.
pub fn score_term(entry: &IndexEntry, term: &str, highlights: &mut Vec<Highlight>) -> u32 {
    if term.is_empty() {
        return 0;
    }

    let mut score = 0;

    if let Some(offset) = entry.title.find(term) {
        score += if offset == 0 {
            TITLE_PREFIX_SCORE
        } else {
            TITLE_SCORE
        };
        push_highlight(highlights, HighlightField::Title, &entry.title, offset, term);
    }

    if let Some(offset) = entry.description.find(term) {
        score += DESCRIPTION_SCORE;
        push_highlight(
            highlights,
            HighlightField::Description,
            &entry.description,
            offset,
            term,
        );
    }

    if entry.category.contains(term) {
        score += CATEGORY_SCORE;
    }

    if entry.keywords.iter().any(|keyword| keyword.contains(term)) {
        score += KEYWORD_SCORE;
    }

    score + fuzzy_score(&entry.text, term)
}

/// Sum of fuzzy contributions from every whitespace-delimited word of `text`.
///
/// Only words within one char of the term's length are compared. Distance 0
/// still counts here even if an exact channel already fired.
pub fn fuzzy_score(text: &str, term: &str) -> u32 {
    let term_len = term.chars().count();
    if term_len < MIN_FUZZY_TERM_LEN {
        return 0;
    }

    text.split_whitespace()
        .filter(|word| word.chars().count().abs_diff(term_len) <= MAX_FUZZY_DISTANCE)
        .filter_map(|word| levenshtein_bounded(term, word, MAX_FUZZY_DISTANCE))
        .map(|distance| FUZZY_BASE_SCORE.saturating_sub(distance as u32))
        .sum()
}

fn push_highlight(
    highlights: &mut Vec<Highlight>,
    field: HighlightField,
    folded: &FoldedText,
    offset: usize,
    term: &str,
) {
    if let Some((start, end)) = folded.original_span(offset, offset + term.len()) {
        highlights.push(Highlight { field, start, end });
    }
}
