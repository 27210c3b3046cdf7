//! Deterministic article generation

use chrono::{NaiveDateTime, TimeDelta};

use crate::{page::Key, LoadError};

/// Generated article, a pure function of its id and the source origin.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Article {
    /// Position of the article in the sequence.
    pub id: Key,
    /// Display label.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Creation time, `id` days before the origin.
    pub created: NaiveDateTime,
}

impl Article {
    /// Generate the article for `id` relative to `origin`.
    pub fn generate(id: Key, origin: NaiveDateTime) -> Result<Self, LoadError> {
        let created = TimeDelta::try_days(id)
            .and_then(|age| origin.checked_sub_signed(age))
            .ok_or(LoadError::TimestampOutOfRange { id })?;

        Ok(Self {
            id,
            title: format!("Article {}", id),
            description: format!("This describes article {}", id),
            created,
        })
    }
}
