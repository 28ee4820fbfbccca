// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the benchsift command-line interface.
//!
//! Two subcommands: `search` runs the pipeline once over a JSON catalog and
//! prints the visible list, `inspect` shows what the index and the filter
//! vocabulary look like for a catalog.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "benchsift",
    about = "Search, filter and sort a benchmark catalog",
    version
)]
pub struct Cli {
    /// JSON config file (debounceMs, resultLimit, logFilter)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a catalog and display the visible items in order
    Search {
        /// Path to the catalog JSON file
        catalog: PathBuf,

        /// Search query (shorter than 2 characters means no query)
        #[arg(default_value = "")]
        query: String,

        /// Only show these categories (repeatable, OR-combined)
        #[arg(long)]
        category: Vec<String>,

        /// Only show these difficulties (repeatable, OR-combined)
        #[arg(long)]
        difficulty: Vec<String>,

        /// Only show these completion states: not-started, in-progress, completed
        #[arg(long)]
        status: Vec<String>,

        /// Sort field: default, title, points, category, difficulty, completed
        #[arg(long, default_value = "default")]
        sort: String,

        /// Sort order: asc or desc
        #[arg(long, default_value = "asc")]
        order: String,

        /// Maximum number of results to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results and summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show index statistics and the filter vocabulary of a catalog
    Inspect {
        /// Path to the catalog JSON file
        catalog: PathBuf,
    },
}
