// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where index, scorer, filters and sort come together.
//!
//! `pipeline::run` is the pure transformation from (index, query, filters,
//! sort) to an ordered result list. `debounce` wraps it for interactive input,
//! where every keystroke would otherwise trigger a full run.

pub mod debounce;
pub mod pipeline;
pub mod utils;

pub use pipeline::{run, ResultSummary, SearchOutcome, SearchRequest};
