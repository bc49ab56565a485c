//! Pagination math.
//!
//! [`Page`] is the caller's requested window; [`PageWindow`] is the clamped
//! window actually read. The engine clamps reads but never mutates the
//! caller's page state — a UI holding `currentPage = 99` keeps it, and simply
//! sees the last page until its state catches up.

/// A requested page: size plus 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Rows per page. Must be at least 1; the executor rejects 0.
    pub size: usize,
    /// Requested 1-based page number.
    pub number: usize,
}

impl Page {
    /// Creates a page spec.
    pub fn of(size: usize, number: usize) -> Self {
        Page { size, number }
    }

    /// Computes the clamped window over `total_matching` records.
    ///
    /// `total_pages` has a floor of 1 so an empty result still renders as
    /// "page 1 of 1". Callers must have validated `size >= 1`.
    pub fn window(self, total_matching: usize) -> PageWindow {
        let total_pages = total_matching.div_ceil(self.size).max(1);
        let page = self.number.clamp(1, total_pages);
        let start = (page - 1) * self.size;
        let end = (start + self.size).min(total_matching);
        PageWindow {
            page,
            total_pages,
            start,
            end,
        }
    }
}

impl Default for Page {
    /// Ten rows, first page — the admin tables' defaults.
    fn default() -> Self {
        Page::of(10, 1)
    }
}

/// The clamped slice a [`Page`] resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Effective 1-based page number after clamping.
    pub page: usize,
    /// Total page count, at least 1.
    pub total_pages: usize,
    /// Zero-based start index into the filtered records.
    pub start: usize,
    /// Zero-based end index (exclusive).
    pub end: usize,
}
