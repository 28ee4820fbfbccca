// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the fallible edges of the crate.
//!
//! The engine itself degrades instead of failing: missing fields index as empty
//! text, unknown filter values never match, unknown sort fields mean `default`.
//! Errors only come from loading things off disk and from timers.

use std::path::PathBuf;
use thiserror::Error;

/// Loading a catalog file failed.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate item id {0:?}")]
    DuplicateId(String),
}

/// Loading configuration failed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("environment variable {var}={value:?} is not a valid number")]
    InvalidEnv { var: &'static str, value: String },
}

/// A scheduler could not arm a timer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("no timer is available in this environment")]
    Unavailable,
}
