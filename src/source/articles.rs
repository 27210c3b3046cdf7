//! Article source: generates pages on demand and simulates a remote fetch
//! for every page past the floor.

use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::{
    article::Article,
    config::SourceConfig,
    page::{clamp_to_floor, Key, LoadParams, Page, PageBounds},
    pager::PagingState,
    source::PagingSource,
    LoadError,
};

/// Source generating articles on demand, simulating a remote fetch for every
/// page that does not start at the floor key.
#[derive(Debug, Clone)]
pub struct ArticlePagingSource {
    config: SourceConfig,
}

impl ArticlePagingSource {
    /// Create a source; the origin timestamp is fixed for its lifetime.
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }

    /// Source configuration.
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Generate the article at `id`.
    pub fn article(&self, id: Key) -> Result<Article, LoadError> {
        Article::generate(id, self.config.origin)
    }

    /// Generate the page described by `bounds` without any delay.
    pub fn generate_page(&self, bounds: &PageBounds) -> Result<Page<Article>, LoadError> {
        let data = bounds
            .keys()
            .map(|id| self.article(id))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(data, bounds.prev_key, Some(bounds.next_key)))
    }
}

impl PagingSource for ArticlePagingSource {
    type Item = Article;

    async fn load(
        &self,
        params: LoadParams,
        cancel: &CancellationToken,
    ) -> Result<Page<Article>, LoadError> {
        let bounds = params.bounds()?;

        if bounds.is_remote() {
            let delay = self.config.load_delay;
            debug!(
                key = bounds.start,
                load_size = params.load_size,
                delay_ms = delay.as_millis() as u64,
                "simulating remote fetch"
            );
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!(key = bounds.start, "load cancelled during delay");
                    return Err(LoadError::Cancelled);
                }
                _ = tokio::time::sleep(delay) => {}
            }
        }

        let page = self.generate_page(&bounds)?;
        trace!(
            start = bounds.start,
            end = bounds.end,
            prev_key = ?page.prev_key,
            next_key = ?page.next_key,
            "page loaded"
        );
        Ok(page)
    }

    fn refresh_key(&self, state: &PagingState<Article>) -> Option<Key> {
        let anchor = state.anchor_position?;
        let article = state.closest_item_to_position(anchor)?;
        let half_page = Key::try_from(state.config.page_size / 2).unwrap_or(Key::MAX);
        Some(clamp_to_floor(article.id.saturating_sub(half_page)))
    }
}
