//! Source and paging configuration
//!
//! [`SourceConfig`] tunes the article source (load delay, origin timestamp).
//! [`PagingConfig`] describes the consumer window: page size, initial load
//! size and the optional cap on retained items.

use std::time::Duration;

use chrono::{Local, NaiveDateTime};

use crate::pager::PagerError;

/// Default simulated latency for non-initial pages
pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(3_000);

/// Environment variable overriding the load delay in milliseconds
pub const LOAD_DELAY_ENV: &str = "ARTICLE_PAGER_LOAD_DELAY_MS";

/// Configuration of the article source
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Delay applied to every load whose start key is not the floor
    pub load_delay: Duration,

    /// Timestamp the first article was created at
    pub origin: NaiveDateTime,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            load_delay: DEFAULT_LOAD_DELAY,
            origin: Local::now().naive_local(),
        }
    }
}

impl SourceConfig {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var(LOAD_DELAY_ENV) {
            match v.trim().parse::<u64>() {
                Ok(ms) => cfg.load_delay = Duration::from_millis(ms),
                Err(_) => tracing::warn!(value = %v, "ignoring invalid {}", LOAD_DELAY_ENV),
            }
        }

        cfg
    }

    /// Set the simulated load delay.
    pub fn with_load_delay(mut self, load_delay: Duration) -> Self {
        self.load_delay = load_delay;
        self
    }

    /// Pin the origin timestamp (useful for reproducible output).
    pub fn with_origin(mut self, origin: NaiveDateTime) -> Self {
        self.origin = origin;
        self
    }
}

/// Consumer window configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingConfig {
    /// Items requested per append/prepend
    pub page_size: usize,

    /// Items requested by a refresh
    pub initial_load_size: usize,

    /// Cap on retained items; `None` keeps everything
    pub max_size: Option<usize>,
}

impl PagingConfig {
    /// Configuration with `initial_load_size = 3 * page_size` and no cap.
    pub fn new(page_size: usize) -> Result<Self, PagerError> {
        if page_size == 0 {
            return Err(PagerError::InvalidConfig(
                "page size must be > 0".to_string(),
            ));
        }
        Ok(Self {
            page_size,
            initial_load_size: page_size.saturating_mul(3),
            max_size: None,
        })
    }

    /// Override the refresh load size.
    pub fn with_initial_load_size(mut self, initial_load_size: usize) -> Result<Self, PagerError> {
        if initial_load_size == 0 {
            return Err(PagerError::InvalidConfig(
                "initial load size must be > 0".to_string(),
            ));
        }
        self.initial_load_size = initial_load_size;
        self.validate_max_size()?;
        Ok(self)
    }

    /// Cap retained items; must leave room for the refresh window plus one
    /// page on each side.
    pub fn with_max_size(mut self, max_size: usize) -> Result<Self, PagerError> {
        self.max_size = Some(max_size);
        self.validate_max_size()?;
        Ok(self)
    }

    fn validate_max_size(&self) -> Result<(), PagerError> {
        let Some(max_size) = self.max_size else {
            return Ok(());
        };
        let minimum = self
            .initial_load_size
            .max(self.page_size)
            .saturating_add(self.page_size.saturating_mul(2));
        if max_size < minimum {
            return Err(PagerError::InvalidConfig(format!(
                "max size {} must be at least {} (window plus one page each side)",
                max_size, minimum
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay() {
        assert_eq!(SourceConfig::default().load_delay, Duration::from_secs(3));
    }

    #[test]
    fn test_paging_config_defaults() {
        let cfg = PagingConfig::new(10).unwrap();
        assert_eq!(cfg.initial_load_size, 30);
        assert_eq!(cfg.max_size, None);
    }

    #[test]
    fn test_paging_config_rejects_zero_page_size() {
        assert!(matches!(
            PagingConfig::new(0),
            Err(PagerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_max_size_must_fit_window() {
        let cfg = PagingConfig::new(10).unwrap();
        assert!(cfg.with_max_size(49).is_err());
        assert_eq!(cfg.with_max_size(50).unwrap().max_size, Some(50));
    }

    #[test]
    fn test_initial_load_size_validation() {
        let cfg = PagingConfig::new(10).unwrap();
        assert!(matches!(
            cfg.with_initial_load_size(0),
            Err(PagerError::InvalidConfig(_))
        ));
        assert_eq!(cfg.with_initial_load_size(15).unwrap().initial_load_size, 15);

        let capped = cfg.with_max_size(50).unwrap();
        assert!(matches!(
            capped.with_initial_load_size(31),
            Err(PagerError::InvalidConfig(_))
        ));
        assert_eq!(capped.with_initial_load_size(20).unwrap().max_size, Some(50));
    }
}
