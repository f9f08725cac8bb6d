//! Pagination primitives for the ERP's paged endpoints.

use serde::{Deserialize, Serialize};

/// A page of items as returned by the remote API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub page: u32,
    pub page_size: u32,
    pub items: Vec<T>,
    pub total: Option<u64>,
}

/// Cursor for infinite-scroll style fetching.
///
/// A feed is exhausted once a page comes back with fewer than `page_size`
/// items (a full page means there may be more). Resetting the cursor starts
/// the feed over, e.g. when the selected customer or category changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    next: u32,
    page_size: u32,
    exhausted: bool,
}

impl PageCursor {
    pub fn new(page_size: u32) -> Self {
        Self {
            next: 1,
            page_size,
            exhausted: false,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// The page to fetch next, or `None` once the feed is exhausted.
    pub fn next_page(&self) -> Option<u32> {
        (!self.exhausted).then_some(self.next)
    }

    /// Record how many items the last fetch returned.
    pub fn record(&mut self, fetched: usize) {
        if fetched < self.page_size as usize {
            self.exhausted = true;
        } else {
            self.next += 1;
        }
    }

    /// Start the feed over from page 1.
    pub fn reset(&mut self) {
        self.next = 1;
        self.exhausted = false;
    }
}
