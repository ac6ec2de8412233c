//! Paging types for catalog listings.

use serde::{Deserialize, Serialize};

/// Default page size when a listing request gives none.
pub const DEFAULT_PAGE_SIZE: u32 = 30;

/// A page request: zero-based page index and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Zero-based page index.
    #[serde(default)]
    pub page: u32,
    /// Number of items per page.
    #[serde(default = "default_size")]
    pub size: u32,
}

fn default_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Page {
    /// Creates a page request.
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page as usize) * (self.size as usize)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results plus the total count across all pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageOf<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Zero-based page index.
    pub page: u32,
    /// Requested page size.
    pub size: u32,
    /// Total number of items across all pages.
    pub total: u64,
}

impl<T> PageOf<T> {
    /// Slices one page out of a full result set.
    ///
    /// A page past the end yields an empty page with the correct total.
    pub fn slice(all: Vec<T>, page: Page) -> Self {
        let total = all.len() as u64;
        let items = all
            .into_iter()
            .skip(page.offset())
            .take(page.size as usize)
            .collect();
        Self {
            items,
            page: page.page,
            size: page.size,
            total,
        }
    }

    /// Returns `true` if this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
