#![allow(dead_code)]

use std::time::Duration;

use article_pager::{ArticlePagingSource, SourceConfig};
use chrono::{NaiveDate, NaiveDateTime};

pub fn fixed_origin() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 6, 15)
        .expect("valid date")
        .and_hms_opt(9, 30, 0)
        .expect("valid time")
}

/// Source with a pinned origin and the given delay.
pub fn source_with_delay(delay: Duration) -> ArticlePagingSource {
    ArticlePagingSource::new(
        SourceConfig::default()
            .with_origin(fixed_origin())
            .with_load_delay(delay),
    )
}

/// Source that never suspends.
pub fn instant_source() -> ArticlePagingSource {
    source_with_delay(Duration::ZERO)
}

/// Current-thread runtime with timers, for driving loads inside proptest.
pub fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("runtime builds")
}
