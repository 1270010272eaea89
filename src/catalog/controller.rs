//! Filter and selection state over a static catalog.

use super::item::{Catalog, CatalogItem, FilterDef, ItemDetail};
use super::CatalogError;
use crate::constants::FILTER_ALL;

/// Which item, if any, is expanded in the detail modal
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Closed,
    Open(String),
}

/// How the modal was dismissed; every reason clears the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The explicit close control
    CloseAction,
    /// Escape key
    Cancel,
    /// Interaction outside the modal
    Backdrop,
}

/// Owns the catalog, the active filter and the current selection.
///
/// Filter and selection are independent: changing one never touches the other.
/// Unknown filter keys and item ids are rejected with an error and leave the
/// state exactly as it was.
#[derive(Debug, Clone)]
pub struct CatalogController {
    catalog: Catalog,
    active_filter: String,
    selection: Selection,
    revision: u64,
}

impl CatalogController {
    /// Validate `catalog` and start with the "all" filter and nothing selected
    pub fn new(catalog: Catalog) -> Result<Self, CatalogError> {
        catalog.validate()?;
        Ok(Self {
            catalog,
            active_filter: FILTER_ALL.to_string(),
            selection: Selection::Closed,
            revision: 0,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.catalog.items
    }

    pub fn filters(&self) -> &[FilterDef] {
        &self.catalog.filters
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    /// Index of the active filter within [`Self::filters`]
    pub fn active_filter_index(&self) -> usize {
        self.catalog
            .filters
            .iter()
            .position(|filter| filter.id == self.active_filter)
            .unwrap_or(0)
    }

    /// Bumped on every observable state change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the active filter
    pub fn set_filter(&mut self, key: &str) -> Result<(), CatalogError> {
        if self.catalog.filter(key).is_none() {
            return Err(CatalogError::UnknownFilter(key.to_string()));
        }
        if self.active_filter != key {
            self.active_filter = key.to_string();
            self.revision += 1;
        }
        Ok(())
    }

    /// Move to the filter `offset` tabs away, wrapping around
    pub fn cycle_filter(&mut self, offset: isize) -> &str {
        let len = self.catalog.filters.len();
        if len > 0 {
            let next = wrap_index(self.active_filter_index(), offset, len);
            let key = self.catalog.filters[next].id.clone();
            if self.active_filter != key {
                self.active_filter = key;
                self.revision += 1;
            }
        }
        &self.active_filter
    }

    /// Items matching the active filter, in catalog order
    pub fn filtered_items(&self) -> Vec<&CatalogItem> {
        self.items_for(&self.active_filter)
    }

    /// Items matching `filter`, in catalog order, without changing state
    pub fn items_for(&self, filter: &str) -> Vec<&CatalogItem> {
        self.catalog.items.iter().filter(|item| item.matches(filter)).collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.catalog
            .items
            .iter()
            .filter(|item| item.matches(&self.active_filter))
            .count()
    }

    /// Open the modal on `id`, re-targeting directly if another item is open
    pub fn select(&mut self, id: &str) -> Result<(), CatalogError> {
        if self.catalog.item(id).is_none() {
            return Err(CatalogError::UnknownItem(id.to_string()));
        }
        if self.selection != Selection::Open(id.to_string()) {
            self.selection = Selection::Open(id.to_string());
            self.revision += 1;
        }
        Ok(())
    }

    /// Re-target the open modal to the item `offset` places away in the filtered view.
    ///
    /// Does nothing while the modal is closed or the view is empty.
    pub fn select_relative(&mut self, offset: isize) -> Option<&CatalogItem> {
        let current = match &self.selection {
            Selection::Open(id) => id.clone(),
            Selection::Closed => return None,
        };

        let next_id = {
            let visible = self.filtered_items();
            if visible.is_empty() {
                return None;
            }
            let next = match visible.iter().position(|item| item.id == current) {
                Some(index) => wrap_index(index, offset, visible.len()),
                None => 0,
            };
            visible[next].id.clone()
        };

        self.select(&next_id).ok()?;
        self.selected_item()
    }

    /// Close the modal. Idempotent.
    pub fn clear_selection(&mut self) {
        if self.selection != Selection::Closed {
            self.selection = Selection::Closed;
            self.revision += 1;
        }
    }

    /// External dismiss signal; all reasons map to [`Self::clear_selection`]
    pub fn dismiss(&mut self, reason: DismissReason) {
        log::debug!("Catalog: modal dismissed via {:?}", reason);
        self.clear_selection();
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_modal_open(&self) -> bool {
        matches!(self.selection, Selection::Open(_))
    }

    pub fn selected_item(&self) -> Option<&CatalogItem> {
        match &self.selection {
            Selection::Open(id) => self.catalog.item(id),
            Selection::Closed => None,
        }
    }

    pub fn item(&self, id: &str) -> Option<&CatalogItem> {
        self.catalog.item(id)
    }

    /// Extended record for `id`; absence is normal for items without one
    pub fn detail_for(&self, id: &str) -> Option<&ItemDetail> {
        self.catalog.details.get(id)
    }
}

fn wrap_index(index: usize, offset: isize, len: usize) -> usize {
    let len = len as isize;
    (index as isize + offset).rem_euclid(len) as usize
}
