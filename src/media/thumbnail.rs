// SPDX-License-Identifier: MPL-2.0
//! Best-effort thumbnail lookup for video entries.
//!
//! Resolution order:
//!
//! 1. the thumbnail the API already provides
//! 2. a URL derived from the provider pattern (YouTube), no network
//! 3. one oEmbed request (Vimeo), bounded by a timeout
//!
//! The oEmbed request is never retried and its failures never propagate: the
//! caller simply gets `None` and shows a placeholder.

use serde::Deserialize;
use std::time::Duration;
use url::Url;

use super::provider::classify;
use crate::application::port::HttpTransport;
use crate::config::defaults::DEFAULT_THUMBNAIL_TIMEOUT_SECS;
use crate::domain::RemoteItem;

/// Fields of an oEmbed response that can carry a thumbnail.
#[derive(Debug, Deserialize)]
struct OEmbedThumbnail {
    thumbnail_url: Option<String>,
    thumbnail_url_with_play_button: Option<String>,
}

/// Finds preview images for video entries.
#[derive(Debug, Clone)]
pub struct ThumbnailResolver<T> {
    transport: T,
    oembed_endpoint: Url,
    timeout: Duration,
}

impl<T: HttpTransport> ThumbnailResolver<T> {
    pub fn new(transport: T, oembed_endpoint: Url) -> Self {
        Self {
            transport,
            oembed_endpoint,
            timeout: Duration::from_secs(DEFAULT_THUMBNAIL_TIMEOUT_SECS),
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Thumbnail URL for `item`, or `None` if none could be found.
    pub async fn resolve(&self, item: &RemoteItem) -> Option<String> {
        if let Some(provided) = item.provided_thumbnail() {
            return Some(provided.to_string());
        }

        let url = item.url.as_deref().unwrap_or_default();
        let source = classify(url);
        if let Some(derived) = source.thumbnail_url() {
            return Some(derived);
        }
        if source.is_vimeo() {
            return self.lookup_oembed(url).await;
        }
        None
    }

    /// The single oEmbed request for `video_url`.
    async fn lookup_oembed(&self, video_url: &str) -> Option<String> {
        let mut request = self.oembed_endpoint.clone();
        request.query_pairs_mut().append_pair("url", video_url);

        let response = match tokio::time::timeout(self.timeout, self.transport.get(&request)).await {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => {
                tracing::debug!(error = %err, "oEmbed lookup failed");
                return None;
            }
            Err(_) => {
                tracing::debug!(timeout = ?self.timeout, "oEmbed lookup timed out");
                return None;
            }
        };

        if !response.is_success() {
            tracing::debug!(status = response.status, "oEmbed lookup rejected");
            return None;
        }

        match serde_json::from_str::<OEmbedThumbnail>(&response.body) {
            Ok(fields) => [fields.thumbnail_url, fields.thumbnail_url_with_play_button]
                .into_iter()
                .flatten()
                .find(|candidate| !candidate.is_empty()),
            Err(err) => {
                tracing::debug!(error = %err, "oEmbed response was not understood");
                None
            }
        }
    }
}
