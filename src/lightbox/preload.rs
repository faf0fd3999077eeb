// SPDX-License-Identifier: MPL-2.0
//! Remembers which assets were already handed to the view for preloading.
//!
//! Navigating back and forth over the same slots would otherwise ask the view
//! to preload the same URLs again and again. The memory is an LRU so it stays
//! bounded across many galleries.

use lru::LruCache;
use std::num::NonZeroUsize;

use crate::config::{DEFAULT_PRELOAD_CACHE_SIZE, MIN_PRELOAD_CACHE_SIZE};

#[derive(Debug)]
pub struct PreloadTracker {
    seen: LruCache<String, ()>,
}

impl Default for PreloadTracker {
    fn default() -> Self {
        Self::new(DEFAULT_PRELOAD_CACHE_SIZE)
    }
}

impl PreloadTracker {
    /// Creates a tracker remembering up to `capacity` URLs (at least 2).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(MIN_PRELOAD_CACHE_SIZE))
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            seen: LruCache::new(capacity),
        }
    }

    /// Records `url` and returns whether it still needs preloading.
    pub fn claim(&mut self, url: &str) -> bool {
        if self.seen.get(url).is_some() {
            return false;
        }
        self.seen.put(url.to_string(), ());
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
