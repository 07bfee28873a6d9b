//! Page arithmetic. Pages are 1-indexed; items are 0-indexed.

use std::num::NonZeroUsize;
use std::ops::Range;

/// Number of pages needed to show `item_count` items, `items_per_page` at a time.
/// Zero items means zero pages.
pub fn total_pages(item_count: usize, items_per_page: NonZeroUsize) -> usize {
    item_count.div_ceil(items_per_page.get())
}

/// Index range of the items shown on `page`.
///
/// `page` is expected to be in `1..=total_pages`. Page `0` or a page past the end
/// yields an empty range rather than panicking.
pub fn page_bounds(item_count: usize, page: usize, items_per_page: NonZeroUsize) -> Range<usize> {
    let per_page = items_per_page.get();
    let start = page
        .saturating_sub(1)
        .saturating_mul(per_page)
        .min(item_count);
    let end = page.saturating_mul(per_page).min(item_count).max(start);
    start..end
}

/// The contiguous slice of `items` shown on `page`.
pub fn items_for_page<T>(items: &[T], page: usize, items_per_page: NonZeroUsize) -> &[T] {
    &items[page_bounds(items.len(), page, items_per_page)]
}

/// Clamps a requested page into `1..=total_pages`, or `None` when there are no pages.
pub fn clamp_page(requested: usize, total_pages: usize) -> Option<usize> {
    if total_pages == 0 {
        None
    } else {
        Some(requested.clamp(1, total_pages))
    }
}
