// SPDX-License-Identifier: MPL-2.0
//! Remote media access: picture range requests, provider URL patterns and
//! video thumbnail lookup.

pub mod fetch;
pub mod provider;
pub mod thumbnail;

// Re-export commonly used types
pub use fetch::{parse_items, RangeFetcher, RetryPolicy};
pub use provider::{classify, MediaSource};
pub use thumbnail::ThumbnailResolver;
