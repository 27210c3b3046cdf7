//! # Incremental key-based paging
//!
//! This library pages through an unbounded, ordered sequence of generated
//! articles. Every page is addressed by an integer key; a page carries the
//! keys needed to fetch its neighbours, so a consumer can walk the sequence in
//! both directions and re-centre its window after invalidation.
//!
//! ## Components
//!
//! 1. **Source** ([`ArticlePagingSource`]): produces one page per load request,
//!    suspending on a cancellable timer for every non-initial page
//! 2. **State** ([`PagingState`]): the consumer's loaded pages and anchor
//! 3. **Driver** ([`Pager`]): refresh / append / prepend over any
//!    [`PagingSource`], with an optional retained-size cap
//!
//! ## Usage Example
//!
//! ```no_run
//! use article_pager::{ArticlePagingSource, LoadParams, SourceConfig, PagingSource};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn demo() -> Result<(), article_pager::LoadError> {
//! let source = ArticlePagingSource::new(SourceConfig::default());
//! let cancel = CancellationToken::new();
//!
//! let first = source.load(LoadParams::refresh(None, 30), &cancel).await?;
//! assert_eq!(first.prev_key, None);
//! assert_eq!(first.next_key, Some(30));
//!
//! let second = source.load(LoadParams::at(30, 10), &cancel).await?;
//! assert_eq!(second.data[0].id, 30);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod article;   // Deterministic item generation
pub mod config;    // Source and paging configuration
pub mod page;      // Page envelope, load parameters, key arithmetic
pub mod pager;     // Consumer-side paging driver and anchor state
pub mod source;    // Paging source trait and the article source

// Re-exports for convenience
pub use article::Article;
pub use config::{PagingConfig, SourceConfig};
pub use page::{Key, LoadParams, Page, PageBounds, FLOOR_KEY};
pub use pager::{Pager, PagerError, PagingState};
pub use source::{ArticlePagingSource, PagingSource};

use thiserror::Error;

/// Errors that can occur while loading a page
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Load size of zero, key below the floor, or key arithmetic overflow
    #[error("invalid load parameters: {0}")]
    InvalidParams(String),

    /// Caller cancelled the load while it was suspended
    #[error("load cancelled before the page was produced")]
    Cancelled,

    /// Creation timestamp for an item cannot be represented
    #[error("creation timestamp out of range for item {id}")]
    TimestampOutOfRange {
        /// Item whose timestamp overflowed
        id: Key,
    },
}

impl LoadError {
    /// Whether this error reports a cancellation rather than a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, LoadError::Cancelled)
    }
}
