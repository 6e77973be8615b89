//! Pure pagination math and page-window shaping helpers.
//!
//! Pages are one-based throughout. Nothing here touches a registry, so these
//! functions can be used (and tested) on any slice.

use serde::Serialize;

use crate::error::{PagingError, Result};

/// Radius of the page window shown around the current page.
pub const DEFAULT_WINDOW_RADIUS: usize = 2;

/// Compute the number of pages for a collection.
///
/// An empty collection has zero pages.
pub fn compute_total_pages(total_items: usize, items_per_page: usize) -> Result<usize> {
    if items_per_page == 0 {
        return Err(PagingError::InvalidPageSize { size: 0 });
    }
    Ok(total_items.div_ceil(items_per_page))
}

/// Clamp a requested page into `1..=max(total_pages, 1)`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// The items of one page plus their position in the source sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice<'a, T> {
    /// Items on the page.
    pub items: &'a [T],
    /// Zero-based index of the first item.
    pub start_index: usize,
    /// Zero-based exclusive end index.
    pub end_index: usize,
}

impl<T> PageSlice<'_, T> {
    /// Number of items on the page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cut one page out of `dataset`.
///
/// A page past the end yields an empty slice rather than an error.
pub fn slice<T>(dataset: &[T], current_page: usize, items_per_page: usize) -> PageSlice<'_, T> {
    let start_index = current_page.saturating_sub(1).saturating_mul(items_per_page);
    let end_index = start_index.saturating_add(items_per_page).min(dataset.len());
    let items = if start_index >= dataset.len() {
        &dataset[..0]
    } else {
        &dataset[start_index..end_index]
    };
    PageSlice {
        items,
        start_index,
        end_index,
    }
}

/// One entry of the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageLink {
    /// A clickable page number.
    Page(usize),
    /// Collapsed run of pages.
    Ellipsis,
}

/// Build the page-number strip around `current_page`.
///
/// The first and last page are always present. Each hidden run collapses to
/// a single ellipsis, except a run of exactly one page, which is cheaper to
/// show as the page itself.
pub fn page_window(current_page: usize, total_pages: usize, radius: usize) -> Vec<PageLink> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current = clamp_page(current_page, total_pages);
    let low = current.saturating_sub(radius).max(1);
    let high = current.saturating_add(radius).min(total_pages);

    let mut links = Vec::with_capacity(high - low + 5);
    if low > 1 {
        links.push(PageLink::Page(1));
        match low - 1 {
            1 => {}
            2 => links.push(PageLink::Page(2)),
            _ => links.push(PageLink::Ellipsis),
        }
    }
    links.extend((low..=high).map(PageLink::Page));
    if high < total_pages {
        match total_pages - high {
            1 => {}
            2 => links.push(PageLink::Page(total_pages - 1)),
            _ => links.push(PageLink::Ellipsis),
        }
        links.push(PageLink::Page(total_pages));
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::PageLink::{Ellipsis, Page};

    #[test]
    fn test_total_pages() {
        assert_eq!(compute_total_pages(0, 10), Ok(0));
        assert_eq!(compute_total_pages(1, 10), Ok(1));
        assert_eq!(compute_total_pages(10, 10), Ok(1));
        assert_eq!(compute_total_pages(23, 10), Ok(3));
        assert_eq!(
            compute_total_pages(5, 0),
            Err(PagingError::InvalidPageSize { size: 0 })
        );
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(99, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn test_slice_last_partial_page() {
        let data: Vec<u32> = (0..23).collect();
        let page = slice(&data, 3, 10);
        assert_eq!(page.items, &[20, 21, 22]);
        assert_eq!((page.start_index, page.end_index), (20, 23));
    }

    #[test]
    fn test_slice_past_end_is_empty() {
        let data = [1, 2, 3];
        let page = slice(&data, 5, 2);
        assert!(page.is_empty());
        assert_eq!(page.start_index, 8);
    }

    #[test]
    fn test_window_small_total() {
        assert_eq!(page_window(1, 1, 2), vec![Page(1)]);
        assert_eq!(
            page_window(2, 4, 2),
            vec![Page(1), Page(2), Page(3), Page(4)]
        );
        assert!(page_window(1, 0, 2).is_empty());
    }

    #[test]
    fn test_window_middle() {
        assert_eq!(
            page_window(10, 20, 2),
            vec![
                Page(1),
                Ellipsis,
                Page(8),
                Page(9),
                Page(10),
                Page(11),
                Page(12),
                Ellipsis,
                Page(20)
            ]
        );
    }

    #[test]
    fn test_window_single_page_gap_is_filled() {
        assert_eq!(
            page_window(4, 9, 1),
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Ellipsis,
                Page(9)
            ]
        );
    }

    #[test]
    fn test_window_clamps_current() {
        assert_eq!(page_window(50, 5, 1), vec![Page(1), Ellipsis, Page(4), Page(5)]);
    }
}
