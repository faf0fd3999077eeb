// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **API**: endpoints and credentials
//! - **Network**: retry, backoff and timeouts
//! - **Lightbox**: preload bookkeeping
//! - **Diagnostics**: status log size

// ==========================================================================
// API Defaults
// ==========================================================================

/// Date-ranged picture endpoint.
pub const DEFAULT_API_ENDPOINT: &str = "https://api.nasa.gov/planetary/apod";

/// Public, heavily rate-limited key. Replace it for real use.
pub const DEFAULT_API_KEY: &str = "DEMO_KEY";

/// oEmbed endpoint used to look up Vimeo thumbnails.
pub const DEFAULT_OEMBED_ENDPOINT: &str = "https://vimeo.com/api/oembed.json";

/// Base of the per-date reference pages.
pub const DEFAULT_REFERENCE_BASE: &str = crate::domain::slot::DEFAULT_REFERENCE_BASE;

// ==========================================================================
// Network Defaults
// ==========================================================================

/// Total requests per range fetch, first attempt included.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Upper bound for configured attempts.
pub const MAX_MAX_ATTEMPTS: u32 = 10;

/// Delay before the first retry; doubles for each further retry.
pub const DEFAULT_BASE_BACKOFF_MS: u64 = 250;

/// Per-request timeout for range requests (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Timeout for the single oEmbed thumbnail lookup (in seconds).
pub const DEFAULT_THUMBNAIL_TIMEOUT_SECS: u64 = 5;

// ==========================================================================
// Lightbox Defaults
// ==========================================================================

/// Number of recently preloaded asset URLs remembered by the lightbox.
pub const DEFAULT_PRELOAD_CACHE_SIZE: usize = 32;

/// Minimum preload memory.
pub const MIN_PRELOAD_CACHE_SIZE: usize = 2;

/// Horizontal drag distance (in pixels) a swipe must exceed to navigate.
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Status events kept by the status log.
pub const DEFAULT_STATUS_LOG_CAPACITY: usize = 64;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_MAX_ATTEMPTS >= 1);
    assert!(DEFAULT_MAX_ATTEMPTS <= MAX_MAX_ATTEMPTS);
    assert!(DEFAULT_BASE_BACKOFF_MS > 0);
    assert!(DEFAULT_THUMBNAIL_TIMEOUT_SECS > 0);
    assert!(DEFAULT_PRELOAD_CACHE_SIZE >= MIN_PRELOAD_CACHE_SIZE);
    assert!(DEFAULT_STATUS_LOG_CAPACITY > 0);
};
