// SPDX-License-Identifier: MPL-2.0
//! Turns a sparse date → item map into the dense nine-slot gallery.

use chrono::NaiveDate;

use crate::application::port::HttpTransport;
use crate::domain::{
    DateWindow, GallerySlot, ImageEntry, ItemsByDate, RemoteItem, SlotMedia, VideoDuration,
    VideoEntry,
};
use crate::media::ThumbnailResolver;

/// Title shown for video entries that have none.
const UNTITLED_VIDEO: &str = "(video)";

/// Classifies one day of the window.
///
/// `thumbnail` is only used for video entries; pass whatever the
/// [`ThumbnailResolver`] found for `item`.
#[must_use]
pub fn classify_slot(
    date: NaiveDate,
    item: Option<&RemoteItem>,
    today: NaiveDate,
    thumbnail: Option<String>,
) -> GallerySlot {
    let media = match item {
        Some(item) if item.is_image() => SlotMedia::Image(ImageEntry {
            url: item.image_url().to_string(),
            title: item.title.clone().unwrap_or_default(),
            explanation: item.explanation.clone().unwrap_or_default(),
        }),
        Some(item) if item.is_video() => SlotMedia::Video(VideoEntry {
            url: item.url.clone().unwrap_or_default(),
            title: item
                .title
                .clone()
                .filter(|title| !title.is_empty())
                .unwrap_or_else(|| UNTITLED_VIDEO.to_string()),
            explanation: item.explanation.clone().unwrap_or_default(),
            thumbnail,
            duration: item.duration_secs().map(VideoDuration::from_secs),
        }),
        _ if date > today => SlotMedia::Future,
        _ => SlotMedia::Empty,
    };
    GallerySlot { date, media }
}

/// Builds galleries, resolving video thumbnails along the way.
#[derive(Debug, Clone)]
pub struct GalleryBuilder<T> {
    thumbnails: ThumbnailResolver<T>,
}

impl<T: HttpTransport> GalleryBuilder<T> {
    pub fn new(thumbnails: ThumbnailResolver<T>) -> Self {
        Self { thumbnails }
    }

    /// Exactly nine slots, slot `i` being `window.start + i` days.
    ///
    /// Thumbnail lookups run one after another in date order; a failed lookup
    /// only leaves that slot without a thumbnail.
    pub async fn build_slots(
        &self,
        window: &DateWindow,
        items: &ItemsByDate,
        today: NaiveDate,
    ) -> Vec<GallerySlot> {
        let mut slots = Vec::with_capacity(crate::domain::WINDOW_DAYS as usize);
        for date in window.days() {
            let item = items.get(&date);
            let thumbnail = match item {
                Some(item) if item.is_video() => self.thumbnails.resolve(item).await,
                _ => None,
            };
            slots.push(classify_slot(date, item, today, thumbnail));
        }
        slots
    }
}
