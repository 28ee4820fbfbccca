// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Resolution order, later wins:
//! 1. Built-in defaults
//! 2. JSON config file (`--config`), every field optional
//! 3. `BENCHSIFT_DEBOUNCE_MS` / `BENCHSIFT_LIMIT` environment variables
//! 4. CLI flags (applied by the binary)
//!
//! Scoring weights are fixed constants in `scoring`, not settings.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default debounce window for interactive input.
pub const DEFAULT_DEBOUNCE_MS: u64 = 275;

pub const ENV_DEBOUNCE_MS: &str = "BENCHSIFT_DEBOUNCE_MS";
pub const ENV_LIMIT: &str = "BENCHSIFT_LIMIT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Quiet period before a typed query runs.
    pub debounce_ms: u64,
    /// Maximum results printed by the CLI. `None` prints everything.
    pub result_limit: Option<usize>,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            result_limit: None,
            log_filter: "warn".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Defaults, then the optional file, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env(|var| std::env::var(var).ok())
    }

    /// Apply environment overrides read through `lookup`.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_DEBOUNCE_MS) {
            self.debounce_ms = parse_env(ENV_DEBOUNCE_MS, value)?;
        }
        if let Some(value) = lookup(ENV_LIMIT) {
            self.result_limit = Some(parse_env(ENV_LIMIT, value)?);
        }
        Ok(self)
    }
}

fn parse_env<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { var, value })
}
