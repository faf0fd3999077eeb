// SPDX-License-Identifier: MPL-2.0
//! Gallery slot descriptors.
//!
//! A gallery is always nine [`GallerySlot`]s in ascending date order. The
//! position of a slot in that list is the index the lightbox navigates by.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Base of the per-date reference page on the APOD website.
pub const DEFAULT_REFERENCE_BASE: &str = "https://apod.nasa.gov/apod/";

/// Coarse media kind of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
    None,
}

/// Video length in whole seconds.
///
/// Displays as `H:MM:SS`, or `M:SS` when shorter than an hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct VideoDuration(u64);

impl VideoDuration {
    #[must_use]
    pub fn from_secs(seconds: u64) -> Self {
        Self(seconds)
    }

    #[must_use]
    pub fn as_secs(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VideoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 3600;
        let minutes = (self.0 % 3600) / 60;
        let seconds = self.0 % 60;
        if hours > 0 {
            write!(f, "{}:{:02}:{:02}", hours, minutes, seconds)
        } else {
            write!(f, "{}:{:02}", minutes, seconds)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageEntry {
    pub url: String,
    pub title: String,
    /// Full text; shortening for display happens at render time.
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoEntry {
    pub url: String,
    pub title: String,
    pub explanation: String,
    pub thumbnail: Option<String>,
    pub duration: Option<VideoDuration>,
}

/// What a slot shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotMedia {
    Image(ImageEntry),
    Video(VideoEntry),
    /// The date is after today; no picture exists yet.
    Future,
    /// The date is today or earlier but the API returned nothing for it.
    Empty,
}

/// One of the nine fixed positions of a gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GallerySlot {
    pub date: NaiveDate,
    pub media: SlotMedia,
}

impl GallerySlot {
    #[must_use]
    pub fn kind(&self) -> MediaKind {
        match self.media {
            SlotMedia::Image(_) => MediaKind::Image,
            SlotMedia::Video(_) => MediaKind::Video,
            SlotMedia::Future | SlotMedia::Empty => MediaKind::None,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match &self.media {
            SlotMedia::Image(image) => &image.title,
            SlotMedia::Video(video) => &video.title,
            SlotMedia::Future | SlotMedia::Empty => "",
        }
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        match &self.media {
            SlotMedia::Image(image) => &image.explanation,
            SlotMedia::Video(video) => &video.explanation,
            SlotMedia::Future | SlotMedia::Empty => "",
        }
    }

    /// The asset worth warming up before this slot is shown: the picture
    /// itself for images, the thumbnail for videos.
    #[must_use]
    pub fn preload_asset(&self) -> Option<&str> {
        match &self.media {
            SlotMedia::Image(image) if !image.url.is_empty() => Some(&image.url),
            SlotMedia::Video(video) => video.thumbnail.as_deref(),
            _ => None,
        }
    }

    /// Caption line shared by the gallery and the lightbox.
    #[must_use]
    pub fn caption(&self) -> String {
        format!("{} — {}", self.date, self.title())
    }
}

/// Reference page for a date: `<base>apYYMMDD.html`.
#[must_use]
pub fn reference_page_url(base: &str, date: NaiveDate) -> String {
    format!(
        "{}ap{:02}{:02}{:02}.html",
        base,
        date.year().rem_euclid(100),
        date.month(),
        date.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn short_durations_have_no_hour_segment() {
        assert_eq!(VideoDuration::from_secs(0).to_string(), "0:00");
        assert_eq!(VideoDuration::from_secs(65).to_string(), "1:05");
        assert_eq!(VideoDuration::from_secs(3599).to_string(), "59:59");
    }

    #[test]
    fn long_durations_include_hours() {
        assert_eq!(VideoDuration::from_secs(3600).to_string(), "1:00:00");
        assert_eq!(VideoDuration::from_secs(3725).to_string(), "1:02:05");
    }

    #[test]
    fn reference_url_uses_two_digit_fields() {
        assert_eq!(
            reference_page_url(DEFAULT_REFERENCE_BASE, date(2024, 1, 3)),
            "https://apod.nasa.gov/apod/ap240103.html"
        );
        assert_eq!(
            reference_page_url(DEFAULT_REFERENCE_BASE, date(2005, 11, 25)),
            "https://apod.nasa.gov/apod/ap051125.html"
        );
    }

    #[test]
    fn placeholders_have_no_media_and_no_preload() {
        let slot = GallerySlot {
            date: date(2024, 1, 2),
            media: SlotMedia::Empty,
        };
        assert_eq!(slot.kind(), MediaKind::None);
        assert_eq!(slot.preload_asset(), None);
        assert_eq!(slot.caption(), "2024-01-02 — ");
    }

    #[test]
    fn video_preloads_its_thumbnail() {
        let slot = GallerySlot {
            date: date(2024, 1, 3),
            media: SlotMedia::Video(VideoEntry {
                url: "https://vimeo.com/1".into(),
                title: "Eclipse".into(),
                explanation: String::new(),
                thumbnail: Some("https://i.vimeocdn.com/1.jpg".into()),
                duration: None,
            }),
        };
        assert_eq!(slot.kind(), MediaKind::Video);
        assert_eq!(slot.preload_asset(), Some("https://i.vimeocdn.com/1.jpg"));
        assert_eq!(slot.caption(), "2024-01-03 — Eclipse");
    }
}
