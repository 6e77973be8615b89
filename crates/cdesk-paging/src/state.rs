//! Per-section paging state.
//!
//! # Invariants
//!
//! - `1 <= current_page <= max(total_pages, 1)` after every mutation.
//! - `total_items` and `total_pages` are recomputed whenever the dataset or
//!   the page size changes.
//! - An active filter never replaces the dataset. The filtered view is
//!   computed on demand by [`PageState::view`].

use serde::Serialize;

use crate::error::{PagingError, Result};
use crate::filter::{RecordFilter, filter};
use crate::math::{clamp_page, compute_total_pages, slice};
use crate::record::Record;
use crate::section::SectionKind;

/// Page size used when nothing else is configured.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Which load path last wrote a section's dataset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ownership {
    /// Nothing has been loaded since registration or the last reset.
    #[default]
    Unset,
    /// Live data from the section's loader.
    Real,
    /// Sample data from the auto-initializer.
    Fallback,
}

/// Defaults a section returns to on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDefaults {
    items_per_page: usize,
}

impl PageDefaults {
    /// Create defaults with the given page size.
    pub fn new(items_per_page: usize) -> Result<Self> {
        if items_per_page == 0 {
            return Err(PagingError::InvalidPageSize { size: 0 });
        }
        Ok(Self { items_per_page })
    }

    /// Configured page size.
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }
}

impl Default for PageDefaults {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

/// Description of the page handed to a renderer.
///
/// Counts describe the rendered view, so they reflect an active filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Section the page belongs to.
    pub section: SectionKind,
    /// One-based current page.
    pub current_page: usize,
    /// Pages in the view.
    pub total_pages: usize,
    /// Items in the view.
    pub total_items: usize,
    /// Zero-based index of the first item on the page.
    pub start_index: usize,
    /// Zero-based exclusive end index.
    pub end_index: usize,
}

impl PageMeta {
    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Paging configuration and dataset of one section.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    section: SectionKind,
    defaults: PageDefaults,
    current_page: usize,
    items_per_page: usize,
    total_items: usize,
    total_pages: usize,
    dataset: Vec<Record>,
    ownership: Ownership,
    filter: Option<RecordFilter>,
}

impl PageState {
    /// Create an empty state at page 1.
    pub fn new(section: SectionKind, defaults: PageDefaults) -> Self {
        Self {
            section,
            defaults,
            current_page: 1,
            items_per_page: defaults.items_per_page,
            total_items: 0,
            total_pages: 0,
            dataset: Vec::new(),
            ownership: Ownership::Unset,
            filter: None,
        }
    }

    pub fn section(&self) -> SectionKind {
        self.section
    }

    pub fn defaults(&self) -> PageDefaults {
        self.defaults
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn dataset(&self) -> &[Record] {
        &self.dataset
    }

    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    pub fn filter(&self) -> Option<&RecordFilter> {
        self.filter.as_ref()
    }

    /// Records visible under the active filter (all records without one).
    pub fn view(&self) -> Vec<&Record> {
        match &self.filter {
            Some(criteria) => filter(&self.dataset, |record| criteria.matches(record)),
            None => self.dataset.iter().collect(),
        }
    }

    /// Describe the current page of the filtered view.
    pub fn meta(&self) -> PageMeta {
        self.meta_of(&self.view())
    }

    /// Describe the current page of an already computed `view`.
    pub(crate) fn meta_of(&self, view: &[&Record]) -> PageMeta {
        let total_pages = view.len().div_ceil(self.items_per_page);
        let current_page = clamp_page(self.current_page, total_pages);
        let page = slice(view, current_page, self.items_per_page);
        PageMeta {
            section: self.section,
            current_page,
            total_pages,
            total_items: view.len(),
            start_index: page.start_index,
            end_index: page.end_index,
        }
    }

    /// Page count of the filtered view.
    pub fn view_total_pages(&self) -> usize {
        let items = match &self.filter {
            Some(criteria) => self
                .dataset
                .iter()
                .filter(|record| criteria.matches(record))
                .count(),
            None => self.total_items,
        };
        items.div_ceil(self.items_per_page)
    }

    /// Replace the dataset and record who wrote it. The current page is
    /// kept when still in range.
    pub(crate) fn replace_dataset(&mut self, dataset: Vec<Record>, ownership: Ownership) {
        self.dataset = dataset;
        self.ownership = ownership;
        self.recompute();
    }

    /// Change the page size and return to page 1. Zero is rejected and
    /// leaves the state untouched.
    pub(crate) fn set_items_per_page(&mut self, size: usize) -> Result<()> {
        compute_total_pages(self.total_items, size)?;
        self.items_per_page = size;
        self.current_page = 1;
        self.recompute();
        Ok(())
    }

    /// Move to `page`, clamped to the filtered view. Returns the page landed on.
    pub(crate) fn set_current_page(&mut self, page: usize) -> usize {
        self.current_page = clamp_page(page, self.view_total_pages());
        self.current_page
    }

    /// Install or clear filter criteria and return to page 1.
    pub(crate) fn set_filter(&mut self, criteria: Option<RecordFilter>) {
        self.filter = criteria.filter(|c| !c.is_empty());
        self.current_page = 1;
    }

    /// Restore registration defaults.
    pub(crate) fn reset(&mut self) {
        *self = Self::new(self.section, self.defaults);
    }

    fn recompute(&mut self) {
        self.total_items = self.dataset.len();
        self.total_pages = self.total_items.div_ceil(self.items_per_page);
        self.current_page = clamp_page(self.current_page, self.view_total_pages());
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn records(n: usize) -> Vec<Record> {
        (0..n).map(|i| json!({"id": i})).collect()
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = PageState::new(SectionKind::Users, PageDefaults::default());
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 0);
        assert_eq!(state.ownership(), Ownership::Unset);
    }

    #[test]
    fn test_zero_defaults_rejected() {
        assert_eq!(
            PageDefaults::new(0),
            Err(PagingError::InvalidPageSize { size: 0 })
        );
    }

    #[test]
    fn test_replace_recomputes_and_clamps() {
        let mut state = PageState::new(SectionKind::Users, PageDefaults::default());
        state.replace_dataset(records(23), Ownership::Real);
        assert_eq!(state.total_items(), 23);
        assert_eq!(state.total_pages(), 3);

        state.set_current_page(3);
        state.replace_dataset(records(12), Ownership::Real);
        assert_eq!(state.current_page(), 2);

        let meta = state.meta();
        assert_eq!((meta.start_index, meta.end_index), (10, 12));
        assert!(meta.has_previous());
        assert!(!meta.has_next());
    }

    #[test]
    fn test_invalid_page_size_keeps_state() {
        let mut state = PageState::new(SectionKind::Users, PageDefaults::default());
        state.replace_dataset(records(12), Ownership::Real);
        state.set_current_page(2);
        let before = state.clone();
        assert!(state.set_items_per_page(0).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_empty_filter_is_dropped() {
        let mut state = PageState::new(SectionKind::Users, PageDefaults::default());
        state.set_filter(Some(RecordFilter::search("")));
        assert!(state.filter().is_none());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let defaults = PageDefaults::new(25).unwrap();
        let mut state = PageState::new(SectionKind::Sites, defaults);
        state.replace_dataset(records(60), Ownership::Fallback);
        state.set_items_per_page(5).unwrap();
        state.set_current_page(7);
        state.reset();
        assert_eq!(state, PageState::new(SectionKind::Sites, defaults));
    }
}
