// SPDX-License-Identifier: MPL-2.0
//! The "show nine days starting at a date" use case.
//!
//! A load resolves the [`DateWindow`], fetches the range, builds the slots and
//! announces progress on a [`StatusSink`]. Every load takes a [`LoadTicket`];
//! starting another load invalidates the previous ticket, and a load whose
//! ticket went stale returns `Ok(None)` instead of a gallery. Hosts therefore
//! never render an older response over a newer one.

use chrono::NaiveDate;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use url::Url;

use crate::application::port::{HttpTransport, StatusSink};
use crate::config::Config;
use crate::domain::{DateWindow, GallerySlot, Status};
use crate::error::Result;
use crate::gallery::GalleryBuilder;
use crate::media::{RangeFetcher, ThumbnailResolver};

/// Identifies one load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// A gallery ready to render.
#[derive(Debug, Clone)]
pub struct LoadedGallery {
    pub window: DateWindow,
    pub slots: Arc<[GallerySlot]>,
    pub ticket: LoadTicket,
}

/// Forwards announcements only while `ticket` is the current load.
struct CurrentLoadStatus<'a> {
    generation: &'a AtomicU64,
    ticket: LoadTicket,
    inner: &'a dyn StatusSink,
}

impl StatusSink for CurrentLoadStatus<'_> {
    fn announce(&self, status: &Status) {
        if self.generation.load(Ordering::SeqCst) == self.ticket.0 {
            self.inner.announce(status);
        } else {
            tracing::debug!(%status, "dropping announcement from a superseded load");
        }
    }
}

/// Loads galleries through one transport.
#[derive(Debug)]
pub struct GalleryLoader<T> {
    fetcher: RangeFetcher<T>,
    builder: GalleryBuilder<T>,
    generation: AtomicU64,
}

impl<T: HttpTransport + Clone> GalleryLoader<T> {
    /// Wires a loader from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Config`] if a configured endpoint is not
    /// a valid URL.
    pub fn from_config(config: &Config, transport: T) -> Result<Self> {
        let endpoint = Url::parse(&config.api.endpoint)?;
        let oembed = Url::parse(&config.api.oembed_endpoint)?;
        let fetcher = RangeFetcher::new(
            transport.clone(),
            endpoint,
            config.api.api_key.clone(),
            config.network.retry_policy(),
        );
        let thumbnails =
            ThumbnailResolver::new(transport, oembed).with_timeout(config.network.thumbnail_timeout());
        Ok(Self::new(fetcher, GalleryBuilder::new(thumbnails)))
    }
}

impl<T: HttpTransport> GalleryLoader<T> {
    pub fn new(fetcher: RangeFetcher<T>, builder: GalleryBuilder<T>) -> Self {
        Self {
            fetcher,
            builder,
            generation: AtomicU64::new(0),
        }
    }

    /// Starts a new load, invalidating every earlier ticket.
    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` belongs to the most recent load.
    #[must_use]
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Loads the gallery for a user-selected start date.
    ///
    /// Returns `Ok(None)` if a newer load started while this one was in flight.
    /// From that point on the superseded load stops retrying and announces
    /// nothing more on `status`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Date`] for an unparseable date (no
    /// request is made) and [`crate::error::Error::Fetch`] when the range
    /// request fails. Either way a [`Status::Failed`] has been announced.
    pub async fn load(
        &self,
        selected: &str,
        today: NaiveDate,
        status: &dyn StatusSink,
    ) -> Result<Option<LoadedGallery>> {
        // Even a rejected date supersedes whatever load is still in flight.
        let ticket = self.begin();
        let status = CurrentLoadStatus {
            generation: &self.generation,
            ticket,
            inner: status,
        };

        let window = match DateWindow::compute(selected, today) {
            Ok(window) => window,
            Err(err) => {
                status.announce(&Status::Failed {
                    message: err.to_string(),
                });
                return Err(err.into());
            }
        };

        if window.truncated {
            status.announce(&Status::Truncated { end: window.end });
        }
        status.announce(&Status::Loading);

        let fetched = self
            .fetcher
            .fetch_range_while(&window, &status, || self.is_current(ticket))
            .await;
        if !self.is_current(ticket) {
            tracing::debug!(start = %window.start, "discarding superseded range response");
            return Ok(None);
        }
        let items = match fetched {
            Ok(items) => items,
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch picture range");
                status.announce(&Status::Failed {
                    message: err.user_message().to_string(),
                });
                return Err(err.into());
            }
        };

        let slots = self.builder.build_slots(&window, &items, today).await;
        if !self.is_current(ticket) {
            tracing::debug!(start = %window.start, "discarding superseded gallery");
            return Ok(None);
        }

        status.announce(&Status::Displayed {
            start: window.start,
        });
        Ok(Some(LoadedGallery {
            window,
            slots: slots.into(),
            ticket,
        }))
    }
}
