//! Client-side display window for the note list.

/// One page of a slice, as shown by the list tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow<'a, T> {
    /// Items on this page
    pub items: &'a [T],
    /// Zero-based page index after clamping
    pub page: usize,
    /// Total number of pages (at least 1, even for an empty slice)
    pub page_count: usize,
}

impl<T> PageWindow<'_, T> {
    pub const fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub const fn has_next(&self) -> bool {
        self.page + 1 < self.page_count
    }
}

/// Slice `items` into the window for `page`.
///
/// Out-of-range pages clamp to the last page so a shrinking list (after a
/// delete) never shows an empty tab while earlier notes exist. A zero
/// `page_size` is treated as 1.
pub fn page_window<T>(items: &[T], page: usize, page_size: usize) -> PageWindow<'_, T> {
    let page_size = page_size.max(1);
    let page_count = items.len().div_ceil(page_size).max(1);
    let page = page.min(page_count - 1);
    let start = page * page_size;
    let end = (start + page_size).min(items.len());

    PageWindow {
        items: &items[start.min(end)..end],
        page,
        page_count,
    }
}
