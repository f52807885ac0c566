//! Results view: fetched items, their refinement, and pagination.

use catalog_query::RefinementConfig;
use tracing::debug;

use crate::engine::{refine, Faceted, Refinement};
use crate::selection::RefinementSelection;

/// State of one displayed search result.
///
/// Created when a search returns and dropped when the user goes back to the
/// search form, taking the refinement selection with it.
#[derive(Debug, Clone)]
pub struct ResultsView<T> {
    items: Vec<T>,
    selection: RefinementSelection,
    refinement: Refinement<T>,
    page_size: usize,
    page: usize,
}

impl<T: Faceted + Clone> ResultsView<T> {
    /// A page size of zero is treated as one.
    pub fn new(items: Vec<T>, config: &RefinementConfig) -> Self {
        Self {
            items,
            selection: RefinementSelection::with_facets(config.facets.iter().cloned()),
            refinement: Refinement::NotFiltered,
            page_size: config.page_size.max(1),
            page: 1,
        }
    }

    /// All fetched items, unrefined.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn selection(&self) -> &RefinementSelection {
        &self.selection
    }

    /// Edit the selection. Changes take effect on [`ResultsView::apply_refinement`].
    pub fn selection_mut(&mut self) -> &mut RefinementSelection {
        &mut self.selection
    }

    pub fn refinement(&self) -> &Refinement<T> {
        &self.refinement
    }

    /// Refine the items by the current selection and go back to page 1.
    pub fn apply_refinement(&mut self) -> &Refinement<T> {
        self.refinement = refine(&self.items, &self.selection);
        self.page = 1;
        &self.refinement
    }

    /// Deselect everything and show all items from page 1.
    pub fn clear_refinement(&mut self) {
        self.selection.clear();
        self.refinement = Refinement::NotFiltered;
        self.page = 1;
    }

    /// Items currently shown across all pages.
    pub fn visible(&self) -> &[T] {
        self.refinement.visible(&self.items)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Move to a page, clamped to `1..=page_count()`.
    pub fn set_page(&mut self, page: usize) {
        let clamped = page.clamp(1, self.page_count().max(1));
        if clamped != page {
            debug!(requested = page, page = clamped, "page out of range");
        }
        self.page = clamped;
    }

    /// Number of pages for the visible items. Zero when nothing is visible.
    pub fn page_count(&self) -> usize {
        self.visible().len().div_ceil(self.page_size)
    }

    /// Items on a 1-based page; empty past the last page.
    pub fn page_items(&self, page: usize) -> &[T] {
        let visible = self.visible();
        let start = page.saturating_sub(1).saturating_mul(self.page_size);
        if page == 0 || start >= visible.len() {
            return &[];
        }
        let end = (start + self.page_size).min(visible.len());
        &visible[start..end]
    }

    /// Items on the current page.
    pub fn current_page_items(&self) -> &[T] {
        self.page_items(self.page)
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
