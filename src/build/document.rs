use crate::types::Item;
use serde::Deserialize;

/// On-disk catalog shape.
///
/// Either a bare array of items or an object wrapping them, so exports from
/// other tools load without reshaping.
#[derive(Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum CatalogFile {
    /// `[ {..}, {..} ]`
    List(Vec<Item>),
    /// `{ "version": 1, "items": [ .. ] }`
    Wrapped {
        #[serde(default)]
        version: Option<u32>,
        items: Vec<Item>,
    },
}

impl CatalogFile {
    pub fn into_items(self) -> Vec<Item> {
        match self {
            CatalogFile::List(items) | CatalogFile::Wrapped { items, .. } => items,
        }
    }
}
