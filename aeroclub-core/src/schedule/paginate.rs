//! Fixed-size pages of aircraft for daily browsing.

use serde::Serialize;

use crate::domain::Resource;

/// Aircraft rows per page in Browse mode.
pub const PAGE_SIZE: usize = 8;

/// One page of the fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourcePage<'a> {
    pub page_index: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub items: &'a [Resource],
}

/// Number of pages needed for `total` resources. An empty fleet still has one
/// (empty) page so that page 0 is always valid.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE).max(1)
}

/// Whether `page_index` addresses an existing page.
pub fn is_valid_page(page_index: usize, total: usize) -> bool {
    page_index < page_count(total)
}

/// Slice `[page_index * PAGE_SIZE, (page_index + 1) * PAGE_SIZE)` of the fleet,
/// clipped to its length. Returns `None` for a page past the end; callers
/// treat that as a no-op.
pub fn page_slice(resources: &[Resource], page_index: usize) -> Option<ResourcePage<'_>> {
    if !is_valid_page(page_index, resources.len()) {
        return None;
    }
    let start = page_index * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(resources.len());
    Some(ResourcePage {
        page_index,
        page_size: PAGE_SIZE,
        page_count: page_count(resources.len()),
        items: &resources[start.min(end)..end],
    })
}
