//! "Load more" pagination.

use core::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Number of products revealed per page.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(12) {
    Some(size) => size,
    None => panic!("page size must be non-zero"),
};

/// How the display layer should apply a freshly computed slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Replace everything shown with pages `1..=page`.
    Replace,
    /// Append only page `page` to what is already shown.
    Append,
}

/// Visible window over the sorted, filtered products.
#[derive(Debug, PartialEq, Eq)]
pub struct PageSlice<'a, T> {
    pub items: &'a [T],
    pub has_more: bool,
}

/// Compute the visible slice for `page` (1-based).
///
/// Replace mode always covers pages `1..=page`, while append mode only covers
/// the newly revealed page. Indices are clamped to the list length and page `0`
/// yields an empty slice.
pub fn paginate<T>(items: &[T], page: u32, page_size: usize, mode: RenderMode) -> PageSlice<'_, T> {
    let page = page as usize;
    let end_unclamped = page.saturating_mul(page_size);
    let end = end_unclamped.min(items.len());
    let start = match mode {
        RenderMode::Replace => 0,
        RenderMode::Append => page.saturating_sub(1).saturating_mul(page_size).min(end),
    };

    PageSlice {
        items: &items[start..end],
        has_more: end_unclamped < items.len(),
    }
}
