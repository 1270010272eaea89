//! Project catalog, filters and selection.
//!
//! A [`Catalog`] is static data: showcase items, the filters that slice them, and an
//! optional side table of extended details keyed by item id. The
//! [`CatalogController`] layers the two pieces of mutable UI state on top of it:
//! the active filter and the selected item that drives the detail modal.

pub mod builtin;
pub mod controller;
pub mod item;

pub use builtin::BUILTIN_CATALOG;
pub use controller::{CatalogController, DismissReason, Selection};
pub use item::{Catalog, CatalogItem, FilterDef, ItemDetail};

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a catalog or when the UI hands in an unknown key
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown filter '{0}'")]
    UnknownFilter(String),

    #[error("unknown catalog item '{0}'")]
    UnknownItem(String),

    #[error("duplicate catalog item id '{0}'")]
    DuplicateItem(String),

    #[error("duplicate filter id '{0}'")]
    DuplicateFilter(String),

    #[error("catalog must declare exactly one 'all' filter")]
    MissingAllFilter,

    #[error("item '{item}' uses undeclared category '{category}'")]
    UndeclaredCategory { item: String, category: String },

    #[error("detail record '{0}' has no matching item")]
    OrphanDetail(String),

    #[error("failed to read catalog file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML catalog {path}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse JSON catalog {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported catalog format for {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),
}
