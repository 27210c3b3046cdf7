//! Page envelope, load parameters and key arithmetic
//!
//! Keys are positional: key `n` addresses the `n`-th item of the sequence.
//! A request for `load_size` items at `start` covers the half-open range
//! `[start, start + load_size)`.

use std::ops::Range;

use crate::LoadError;

/// Integer cursor identifying a page's position in the sequence
pub type Key = i64;

/// Minimum valid key; backward navigation is clamped here
pub const FLOOR_KEY: Key = 0;

/// Clamp a derived key so it never falls below the floor.
pub fn clamp_to_floor(key: Key) -> Key {
    key.max(FLOOR_KEY)
}

/// Parameters of a single load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadParams {
    /// Key to load from; `None` loads the initial page
    pub key: Option<Key>,
    /// Number of items requested
    pub load_size: usize,
}

impl LoadParams {
    /// Initial (or post-invalidation) load, optionally from a refresh key.
    pub fn refresh(key: Option<Key>, load_size: usize) -> Self {
        Self { key, load_size }
    }

    /// Load from an explicit key, in either direction.
    pub fn at(key: Key, load_size: usize) -> Self {
        Self {
            key: Some(key),
            load_size,
        }
    }

    /// Validate and resolve the request into concrete page bounds.
    pub fn bounds(&self) -> Result<PageBounds, LoadError> {
        PageBounds::resolve(self)
    }
}

/// Resolved key arithmetic for one load request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    /// First key in the page (inclusive)
    pub start: Key,
    /// One past the last key in the page
    pub end: Key,
    /// Key of the preceding page, `None` only at the floor
    pub prev_key: Option<Key>,
    /// Key of the following page; the sequence never ends
    pub next_key: Key,
}

impl PageBounds {
    /// Compute bounds for a request, rejecting invalid parameters.
    pub fn resolve(params: &LoadParams) -> Result<Self, LoadError> {
        if params.load_size == 0 {
            return Err(LoadError::InvalidParams(
                "load size must be > 0".to_string(),
            ));
        }
        let start = params.key.unwrap_or(FLOOR_KEY);
        if start < FLOOR_KEY {
            return Err(LoadError::InvalidParams(format!(
                "key {} is below the floor key {}",
                start, FLOOR_KEY
            )));
        }
        let size = Key::try_from(params.load_size).map_err(|_| {
            LoadError::InvalidParams(format!("load size {} overflows key space", params.load_size))
        })?;
        let end = start.checked_add(size).ok_or_else(|| {
            LoadError::InvalidParams(format!(
                "range starting at {} with {} items overflows key space",
                start, size
            ))
        })?;

        let prev_key = if start == FLOOR_KEY {
            None
        } else {
            Some(clamp_to_floor(start - size))
        };

        Ok(Self {
            start,
            end,
            prev_key,
            next_key: end,
        })
    }

    /// Keys covered by the page, ascending.
    pub fn keys(&self) -> Range<Key> {
        self.start..self.end
    }

    /// Number of items in the page.
    pub fn len(&self) -> usize {
        usize::try_from(self.end - self.start).unwrap_or(usize::MAX)
    }

    /// Whether the page covers no keys.
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// Whether producing this page must suspend on the load delay.
    pub fn is_remote(&self) -> bool {
        self.start != FLOOR_KEY
    }
}

/// One batch of items plus the keys for adjacent batches.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page<T> {
    /// Items in ascending key order
    pub data: Vec<T>,
    /// Key of the preceding page, if any
    pub prev_key: Option<Key>,
    /// Key of the following page, if any
    pub next_key: Option<Key>,
}

impl<T> Page<T> {
    /// Construct a page.
    pub fn new(data: Vec<T>, prev_key: Option<Key>, next_key: Option<Key>) -> Self {
        Self {
            data,
            prev_key,
            next_key,
        }
    }

    /// Number of items in the page.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the page holds no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
