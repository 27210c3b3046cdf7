//! Consumer anchor state: loaded pages, the viewed position and the
//! closest-item lookup used to derive refresh keys.

use crate::{config::PagingConfig, page::Page};

/// Snapshot of what a consumer has loaded and where it is looking.
///
/// Positions are indices into the flattened sequence of loaded items, first
/// page first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingState<T> {
    /// Loaded pages in key order
    pub pages: Vec<Page<T>>,

    /// Position of the item the consumer is viewing, if any
    pub anchor_position: Option<usize>,

    /// Window configuration the pages were loaded with
    pub config: PagingConfig,
}

impl<T> PagingState<T> {
    /// Create state from loaded pages.
    pub fn new(pages: Vec<Page<T>>, anchor_position: Option<usize>, config: PagingConfig) -> Self {
        Self {
            pages,
            anchor_position,
            config,
        }
    }

    /// Total number of loaded items.
    pub fn item_count(&self) -> usize {
        self.pages.iter().map(Page::len).sum()
    }

    /// Whether no item is loaded.
    pub fn is_empty(&self) -> bool {
        self.pages.iter().all(Page::is_empty)
    }

    /// Loaded items in order.
    pub fn items(&self) -> impl Iterator<Item = &T> + '_ {
        self.pages.iter().flat_map(|page| page.data.iter())
    }

    /// First loaded item.
    pub fn first_item(&self) -> Option<&T> {
        self.items().next()
    }

    /// Last loaded item.
    pub fn last_item(&self) -> Option<&T> {
        self.pages.iter().rev().find_map(|page| page.data.last())
    }

    /// Item at `position`, or the last loaded item when `position` is past
    /// the end. `None` only when nothing is loaded.
    pub fn closest_item_to_position(&self, position: usize) -> Option<&T> {
        self.items().nth(position).or_else(|| self.last_item())
    }

    /// Page containing `position`, clamped to the last non-empty page.
    pub fn closest_page_to_position(&self, position: usize) -> Option<&Page<T>> {
        let mut remaining = position;
        let mut closest = None;
        for page in self.pages.iter().filter(|page| !page.is_empty()) {
            if remaining < page.len() {
                return Some(page);
            }
            remaining -= page.len();
            closest = Some(page);
        }
        closest
    }
}
