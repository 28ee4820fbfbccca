// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the benchsift CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `BENCHSIFT_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and plain output when stdout isn't a TTY.
//!
//! Highlight spans become bold colored runs; the spans themselves come straight
//! from the engine and are byte ranges into the original title.

use benchsift::filter::{Dimension, FilterVocabulary};
use benchsift::{CatalogIndex, Highlight, HighlightField, Item, ResultSummary, SearchResult};
use std::sync::OnceLock;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("BENCHSIFT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(GRAY);

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply color if TTY, otherwise return plain text
pub fn color(c: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", c, text, RESET)
    } else {
        text.to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// HIGHLIGHTING
// ═══════════════════════════════════════════════════════════════════════════

/// Sort and merge overlapping or touching spans of one field.
pub fn merge_spans(highlights: &[Highlight], field: HighlightField) -> Vec<(usize, usize)> {
    let mut spans: Vec<(usize, usize)> = highlights
        .iter()
        .filter(|h| h.field == field)
        .map(|h| (h.start, h.end))
        .collect();
    spans.sort_unstable();

    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
    for (start, end) in spans {
        match merged.last_mut() {
            Some((_, last_end)) if start <= *last_end => *last_end = (*last_end).max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

/// Wrap every span of `text` in `open`/`close`. Spans that don't fall on char
/// boundaries are skipped rather than splitting a character.
pub fn mark_spans(text: &str, spans: &[(usize, usize)], open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len() + spans.len() * (open.len() + close.len()));
    let mut cursor = 0;
    for &(start, end) in spans {
        if start < cursor || end > text.len() || !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            continue;
        }
        out.push_str(&text[cursor..start]);
        out.push_str(open);
        out.push_str(&text[start..end]);
        out.push_str(close);
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}

fn highlighted(item: &Item, highlights: &[Highlight], field: HighlightField) -> String {
    let text = field.text_of(item);
    if !use_colors() {
        return text.to_string();
    }
    let open = format!("{}{}", BOLD, YELLOW());
    mark_spans(text, &merge_spans(highlights, field), &open, RESET)
}

// ═══════════════════════════════════════════════════════════════════════════
// OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

/// Print the ranked list. Results whose id vanished from `index` are skipped.
pub fn print_results(index: &CatalogIndex, results: &[SearchResult], limit: Option<usize>) {
    let shown = limit.unwrap_or(results.len()).min(results.len());
    for (rank, result) in results.iter().take(shown).enumerate() {
        let Some(entry) = index.get(&result.id) else {
            continue;
        };
        let item = &entry.item;

        let score = if result.score > 0 {
            color(&GRAY(), &format!("  score {}", result.score))
        } else {
            String::new()
        };
        println!(
            "{:>3}. {} {}{}",
            rank + 1,
            color(&GRAY(), &format!("[{}]", item.id)),
            highlighted(item, &result.highlights, HighlightField::Title),
            score
        );
        println!(
            "     {} · {} · {} · {}",
            color(&BLUE(), &item.category),
            color(&MAGENTA(), &item.difficulty),
            color(&GREEN(), &format!("{} pts", item.points)),
            item.completion_status
        );

        if result
            .highlights
            .iter()
            .any(|h| h.field == HighlightField::Description)
        {
            println!(
                "     {}",
                highlighted(item, &result.highlights, HighlightField::Description)
            );
        }
    }

    if shown < results.len() {
        println!(
            "{}",
            color(DIM, &format!("     … {} more", results.len() - shown))
        );
    }
}

/// The "Showing N of M results" line.
pub fn summary_line(summary: &ResultSummary) -> String {
    let noun = if summary.total == 1 { "result" } else { "results" };
    if summary.query.is_empty() {
        format!("Showing {} of {} {}", summary.shown, summary.total, noun)
    } else {
        format!(
            "Showing {} of {} {} for \"{}\"",
            summary.shown, summary.total, noun, summary.query
        )
    }
}

pub fn print_summary(summary: &ResultSummary) {
    println!();
    println!("{}", color(BOLD, &summary_line(summary)));
}

/// Index statistics and filter vocabulary for `inspect`.
pub fn print_inspect(index: &CatalogIndex, vocabulary: &FilterVocabulary) {
    let keyword_counts: Vec<usize> = index.entries().iter().map(|e| e.keywords.len()).collect();
    let total_keywords: usize = keyword_counts.iter().sum();
    let max_keywords = keyword_counts.iter().copied().max().unwrap_or(0);

    println!("{}", color(BOLD, "Catalog index"));
    println!("  generation  {}", index.generation());
    println!("  entries     {}", index.len());
    println!(
        "  keywords    {} total, {} max per entry",
        total_keywords, max_keywords
    );
    println!();
    println!("{}", color(BOLD, "Filter vocabulary"));
    for dimension in Dimension::ALL {
        let values: Vec<&str> = vocabulary.values(dimension).collect();
        println!(
            "  {:<11} {}",
            dimension.as_str(),
            if values.is_empty() {
                color(DIM, "(none)")
            } else {
                values.join(", ")
            }
        );
    }
}
