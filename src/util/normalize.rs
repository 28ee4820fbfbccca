// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case folding that remembers where every byte came from.
//!
//! Matching happens on lowercased text, but highlights have to point into the
//! text the user actually sees. Lowercasing is not length-preserving in UTF-8
//! (`İ` lowercases to two chars, three bytes), so a plain `to_lowercase()` plus
//! the match offset would land mid-character. `FoldedText` keeps a per-byte map
//! back to the original char that produced it.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Compose text into NFC so "café" typed with a combining accent matches a
/// catalog entry stored precomposed.
#[cfg(feature = "unicode-normalization")]
pub fn compose(value: &str) -> String {
    value.nfc().collect()
}

/// Without unicode-normalization the text is assumed to be composed already.
#[cfg(not(feature = "unicode-normalization"))]
pub fn compose(value: &str) -> String {
    value.to_string()
}

/// Is `value` already in NFC?
#[cfg(feature = "unicode-normalization")]
pub fn is_composed(value: &str) -> bool {
    unicode_normalization::is_nfc(value)
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn is_composed(_value: &str) -> bool {
    true
}

/// Lowercase char by char.
///
/// `str::to_lowercase` applies context rules (final sigma), which would make a
/// query fold differently from the same word inside a longer field. Every piece
/// of text the engine compares goes through this function instead.
pub fn lowercase(value: &str) -> String {
    value.chars().flat_map(char::to_lowercase).collect()
}

/// Lowercased text plus a byte-level map back into the original.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldedText {
    lower: String,
    /// For every byte of `lower`: the byte range of the original char it came from.
    origin: Vec<(usize, usize)>,
}

impl FoldedText {
    pub fn new(original: &str) -> Self {
        let mut lower = String::with_capacity(original.len());
        let mut origin = Vec::with_capacity(original.len());

        for (start, ch) in original.char_indices() {
            let end = start + ch.len_utf8();
            for folded in ch.to_lowercase() {
                lower.push(folded);
                origin.extend(std::iter::repeat((start, end)).take(folded.len_utf8()));
            }
        }

        debug_assert_eq!(lower.len(), origin.len());
        Self { lower, origin }
    }

    /// The lowercased text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.lower
    }

    /// Byte offset of the first occurrence of `needle` in the lowercased text.
    #[inline]
    pub fn find(&self, needle: &str) -> Option<usize> {
        self.lower.find(needle)
    }

    /// Map a byte range of the lowercased text onto the original text.
    ///
    /// The result always starts and ends on original char boundaries and is
    /// never empty. Returns `None` for an empty or out-of-range input.
    pub fn original_span(&self, start: usize, end: usize) -> Option<(usize, usize)> {
        if start >= end || end > self.origin.len() {
            return None;
        }
        let (orig_start, _) = self.origin[start];
        let (_, orig_end) = self.origin[end - 1];
        Some((orig_start, orig_end))
    }
}
