// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading catalogs from JSON.
//!
//! This is the catalog collaborator's side of the boundary: it produces the
//! `Item` snapshot the engine indexes. Text fields are composed to NFC on the
//! way in so highlight offsets refer to the same text the engine matched.

mod document;

pub use document::CatalogFile;

use crate::error::CatalogError;
use crate::types::Item;
use std::collections::HashSet;
use std::path::Path;

/// Parse catalog JSON, normalize text fields and reject duplicate ids.
pub fn parse_catalog(json: &str) -> Result<Vec<Item>, CatalogError> {
    let file: CatalogFile = serde_json::from_str(json)?;
    let items: Vec<Item> = file.into_items().into_iter().map(Item::composed).collect();

    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        if !seen.insert(item.id.as_str()) {
            return Err(CatalogError::DuplicateId(item.id.clone()));
        }
    }
    Ok(items)
}

/// Read and parse a catalog file.
pub fn load_catalog(path: &Path) -> Result<Vec<Item>, CatalogError> {
    let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let items = parse_catalog(&json)?;
    tracing::info!(path = %path.display(), items = items.len(), "loaded catalog");
    Ok(items)
}
