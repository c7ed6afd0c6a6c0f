//! Pagination of large URL sets into sub-sitemaps.
//!
//! Pages are 1-indexed. Page `i` covers the half-open range
//! `[(i - 1) * limit, min(i * limit, total))`.

use std::num::NonZeroUsize;
use std::ops::Range;

/// Number of pages needed to hold `total` entries, `limit` per page.
pub fn page_count(total: usize, limit: NonZeroUsize) -> usize {
    total.div_ceil(limit.get())
}

/// Index range covered by `page`, or `None` when the page starts at or past `total`.
pub fn page_range(total: usize, page: NonZeroUsize, limit: NonZeroUsize) -> Option<Range<usize>> {
    let start = (page.get() - 1).checked_mul(limit.get())?;
    if start >= total {
        return None;
    }
    let end = start.saturating_add(limit.get()).min(total);
    Some(start..end)
}

/// The entries belonging to `page`, or `None` if there is no such page.
///
/// An empty result is never returned: a page past the end is "no such page",
/// not an empty but valid one.
pub fn slice_page<T>(items: &[T], page: NonZeroUsize, limit: NonZeroUsize) -> Option<&[T]> {
    page_range(items.len(), page, limit).map(|range| &items[range])
}
