//! Consumer-side paging driver
//!
//! Holds the pages loaded so far and issues refresh / append / prepend loads
//! against a [`PagingSource`]. Keys are treated as positions: the item at
//! flattened index `i` has key `first_key + i`, so retained pages are always
//! contiguous.

mod state;

pub use state::PagingState;

use std::fmt;

use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::{
    config::PagingConfig,
    page::{Key, LoadParams, Page, FLOOR_KEY},
    source::PagingSource,
    LoadError,
};

/// Errors surfaced by the pager driver
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PagerError {
    /// Underlying source load failed or was cancelled
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Loaded data is stale; call `refresh` first
    #[error("paged data was invalidated; refresh before loading more")]
    Invalidated,

    /// Paging configuration rejected
    #[error("invalid paging configuration: {0}")]
    InvalidConfig(String),
}

/// Driver tracking loaded pages over a positional key space.
pub struct Pager<S: PagingSource> {
    source: S,
    state: PagingState<S::Item>,
    first_key: Key,
    invalidated: bool,
}

impl<S> fmt::Debug for Pager<S>
where
    S: PagingSource + fmt::Debug,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pager")
            .field("source", &self.source)
            .field("state", &self.state)
            .field("first_key", &self.first_key)
            .field("invalidated", &self.invalidated)
            .finish()
    }
}

impl<S: PagingSource> Pager<S> {
    /// Create a pager with nothing loaded.
    pub fn new(source: S, config: PagingConfig) -> Self {
        Self {
            source,
            state: PagingState::new(Vec::new(), None, config),
            first_key: FLOOR_KEY,
            invalidated: false,
        }
    }

    /// Underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Current paging state.
    pub fn state(&self) -> &PagingState<S::Item> {
        &self.state
    }

    /// Loaded pages in key order.
    pub fn pages(&self) -> &[Page<S::Item>] {
        &self.state.pages
    }

    /// Loaded items in order.
    pub fn items(&self) -> impl Iterator<Item = &S::Item> + '_ {
        self.state.items()
    }

    /// Key of the first retained item, `None` when nothing is loaded.
    pub fn first_key(&self) -> Option<Key> {
        if self.state.is_empty() {
            None
        } else {
            Some(self.first_key)
        }
    }

    /// Whether data was invalidated since the last refresh.
    pub fn is_invalidated(&self) -> bool {
        self.invalidated
    }

    /// Record the position the consumer is viewing.
    pub fn set_anchor(&mut self, position: usize) {
        self.state.anchor_position = Some(position);
    }

    /// Forget the anchor; the next refresh starts from the floor.
    pub fn clear_anchor(&mut self) {
        self.state.anchor_position = None;
    }

    /// Mark loaded data stale. Appends and prepends fail until `refresh`.
    pub fn invalidate(&mut self) {
        debug!(items = self.state.item_count(), "pager invalidated");
        self.invalidated = true;
    }

    /// Reload the window around the anchor, replacing every loaded page.
    ///
    /// On failure the previous pages are kept.
    pub async fn refresh(&mut self, cancel: &CancellationToken) -> Result<usize, PagerError> {
        let key = if self.state.is_empty() {
            None
        } else {
            self.source.refresh_key(&self.state)
        };
        let load_size = self.state.config.initial_load_size;
        debug!(key = ?key, load_size, "refreshing");

        let page = self
            .source
            .load(LoadParams::refresh(key, load_size), cancel)
            .await?;

        let new_first = key.unwrap_or(FLOOR_KEY);
        let loaded = page.len();
        let anchor_key = self.anchor_key();

        self.state.pages = vec![page];
        self.first_key = new_first;
        self.invalidated = false;
        self.state.anchor_position = anchor_key.map(|anchor| {
            let offset = usize::try_from(anchor.saturating_sub(new_first)).unwrap_or(0);
            offset.min(loaded.saturating_sub(1))
        });

        Ok(loaded)
    }

    /// Load the page after the last one. `Ok(None)` when the source has no
    /// further page.
    pub async fn append(&mut self, cancel: &CancellationToken) -> Result<Option<usize>, PagerError> {
        if self.invalidated {
            return Err(PagerError::Invalidated);
        }
        let Some(next_key) = self.state.pages.last().and_then(|page| page.next_key) else {
            return Ok(None);
        };
        let page_size = self.state.config.page_size;
        debug!(key = next_key, load_size = page_size, "appending");

        let page = self
            .source
            .load(LoadParams::at(next_key, page_size), cancel)
            .await?;
        let loaded = page.len();
        self.state.pages.push(page);
        self.trim_front();

        Ok(Some(loaded))
    }

    /// Load the page before the first one, filling only the gap down to the
    /// source's previous key. `Ok(None)` at the floor.
    pub async fn prepend(&mut self, cancel: &CancellationToken) -> Result<Option<usize>, PagerError> {
        if self.invalidated {
            return Err(PagerError::Invalidated);
        }
        let Some(prev_key) = self.state.pages.first().and_then(|page| page.prev_key) else {
            return Ok(None);
        };
        let page_size = Key::try_from(self.state.config.page_size).unwrap_or(Key::MAX);
        let start = prev_key.max(self.first_key.saturating_sub(page_size));
        if start >= self.first_key {
            return Ok(None);
        }
        let load_size = (self.first_key - start) as usize;
        debug!(key = start, load_size, "prepending");

        let page = self
            .source
            .load(LoadParams::at(start, load_size), cancel)
            .await?;
        let loaded = page.len();
        self.state.pages.insert(0, page);
        self.first_key = start;
        if let Some(anchor) = self.state.anchor_position.as_mut() {
            *anchor += loaded;
        }
        self.trim_back();

        Ok(Some(loaded))
    }

    fn anchor_key(&self) -> Option<Key> {
        let anchor = self.state.anchor_position?;
        let count = self.state.item_count();
        if count == 0 {
            return None;
        }
        let offset = Key::try_from(anchor.min(count - 1)).ok()?;
        Some(self.first_key.saturating_add(offset))
    }

    fn over_capacity(&self) -> bool {
        match self.state.config.max_size {
            Some(max_size) => self.state.pages.len() > 1 && self.state.item_count() > max_size,
            None => false,
        }
    }

    /// Drop leading pages while over capacity, stopping at the page that
    /// holds the anchor.
    fn trim_front(&mut self) {
        while self.over_capacity() {
            let front_len = self.state.pages[0].len();
            if self.state.anchor_position.is_some_and(|anchor| anchor < front_len) {
                debug!(front_len, "leading page holds the anchor, keeping it");
                break;
            }
            self.state.pages.remove(0);
            self.first_key = self.first_key.saturating_add(front_len as Key);
            if let Some(anchor) = self.state.anchor_position.as_mut() {
                *anchor -= front_len;
            }
            debug!(dropped = front_len, first_key = self.first_key, "dropped leading page");
        }
    }

    /// Drop trailing pages while over capacity, stopping at the page that
    /// holds the anchor. An anchor past the end counts as the last item.
    fn trim_back(&mut self) {
        while self.over_capacity() {
            let count = self.state.item_count();
            let back_len = self.state.pages.last().map_or(0, Page::len);
            let back_start = count - back_len;
            if self.state.anchor_position.is_some_and(|anchor| anchor >= back_start) {
                debug!(back_len, "trailing page holds the anchor, keeping it");
                break;
            }
            self.state.pages.pop();
            debug!(dropped = back_len, "dropped trailing page");
        }
    }
}
