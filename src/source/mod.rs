//! Paging sources: anything that can produce a keyed page on request.

mod articles;

pub use articles::ArticlePagingSource;

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::{
    page::{Key, LoadParams, Page},
    pager::PagingState,
    LoadError,
};

/// Trait implemented by data sources driven by the [`Pager`](crate::Pager).
pub trait PagingSource: Send + Sync {
    /// Item type produced by the source.
    type Item: Clone + Send + Sync;

    /// Load one page.
    ///
    /// Implementations that suspend must observe `cancel` at their suspension
    /// points and return [`LoadError::Cancelled`] without producing a page.
    /// Dropping the returned future must also abandon the load.
    fn load(
        &self,
        params: LoadParams,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<Page<Self::Item>, LoadError>> + Send;

    /// Key to reload from after invalidation, derived from the consumer's
    /// anchor. `None` reloads from the floor.
    fn refresh_key(&self, state: &PagingState<Self::Item>) -> Option<Key>;
}
