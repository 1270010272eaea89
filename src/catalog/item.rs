//! Catalog data model and file loading

use super::CatalogError;
use crate::constants::FILTER_ALL;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// One filter tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDef {
    pub id: String,
    pub label: String,
}

/// A showcased project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    pub short_description: String,
    /// Display-only tags, in display order
    #[serde(default)]
    pub tags: Vec<String>,
    /// Filter ids this item belongs to
    #[serde(default)]
    pub categories: Vec<String>,
    /// External link (e.g. source repository)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl CatalogItem {
    /// Whether the item shows up under `filter`
    pub fn matches(&self, filter: &str) -> bool {
        filter == FILTER_ALL || self.categories.iter().any(|category| category == filter)
    }
}

/// Extended record shown in the detail modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetail {
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// Complete static catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub filters: Vec<FilterDef>,
    pub items: Vec<CatalogItem>,
    #[serde(default)]
    pub details: BTreeMap<String, ItemDetail>,
}

impl Catalog {
    /// Load a catalog from a `.toml` or `.json` file and validate it
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let catalog: Catalog = match extension.as_deref() {
            Some("toml") => toml::from_str(&content).map_err(|source| CatalogError::Toml {
                path: path.to_path_buf(),
                source,
            })?,
            Some("json") => serde_json::from_str(&content).map_err(|source| CatalogError::Json {
                path: path.to_path_buf(),
                source,
            })?,
            _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        };

        catalog.validate()?;
        log::info!(
            "Loaded catalog from {} ({} items, {} filters)",
            path.display(),
            catalog.items.len(),
            catalog.filters.len()
        );
        Ok(catalog)
    }

    /// Check ids, filters and the detail side table for consistency
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut filter_ids = HashSet::new();
        for filter in &self.filters {
            if !filter_ids.insert(filter.id.as_str()) {
                return Err(CatalogError::DuplicateFilter(filter.id.clone()));
            }
        }
        if !filter_ids.contains(FILTER_ALL) {
            return Err(CatalogError::MissingAllFilter);
        }

        let mut item_ids = HashSet::new();
        for item in &self.items {
            if !item_ids.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateItem(item.id.clone()));
            }
            if let Some(category) = item
                .categories
                .iter()
                .find(|category| !filter_ids.contains(category.as_str()))
            {
                return Err(CatalogError::UndeclaredCategory {
                    item: item.id.clone(),
                    category: category.clone(),
                });
            }
        }

        if let Some(orphan) = self.details.keys().find(|id| !item_ids.contains(id.as_str())) {
            return Err(CatalogError::OrphanDetail(orphan.clone()));
        }

        Ok(())
    }

    pub fn item(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn filter(&self, id: &str) -> Option<&FilterDef> {
        self.filters.iter().find(|filter| filter.id == id)
    }
}
