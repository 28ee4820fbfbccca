// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how results get their numbers and their order.
//!
//! `core` turns a query into a relevance score per entry. `ranking` is the
//! user-chosen sort applied afterwards; it never looks at scores.

mod core;
pub mod ranking;

pub use self::core::*;
