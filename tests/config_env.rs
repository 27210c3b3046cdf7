//! Environment overrides for the source configuration
//!
//! Kept in its own test binary so the variable does not leak into others.

use std::time::Duration;

use article_pager::config::{DEFAULT_LOAD_DELAY, LOAD_DELAY_ENV};
use article_pager::SourceConfig;

#[test]
fn load_delay_env_override() {
    std::env::set_var(LOAD_DELAY_ENV, " 250 ");
    assert_eq!(SourceConfig::from_env().load_delay, Duration::from_millis(250));

    std::env::set_var(LOAD_DELAY_ENV, "soon");
    assert_eq!(SourceConfig::from_env().load_delay, DEFAULT_LOAD_DELAY);

    std::env::remove_var(LOAD_DELAY_ENV);
    assert_eq!(SourceConfig::from_env().load_delay, DEFAULT_LOAD_DELAY);
}
