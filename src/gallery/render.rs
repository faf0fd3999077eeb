// SPDX-License-Identifier: MPL-2.0
//! Display helpers for gallery slots.
//!
//! Slots keep their full text; shortening and labeling happen here, at
//! render time.

use std::fmt::Write as _;

use crate::domain::{GallerySlot, SlotMedia};

/// Explanations longer than this are cut in gallery cards.
pub const EXCERPT_CHARS: usize = 200;

/// First `limit` characters of `text`, with `...` appended when cut.
#[must_use]
pub fn excerpt(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Short label describing the slot's card.
#[must_use]
pub fn card_label(slot: &GallerySlot) -> &'static str {
    match &slot.media {
        SlotMedia::Image(_) => "image",
        SlotMedia::Video(video) if video.thumbnail.is_some() => "video",
        SlotMedia::Video(_) => "video (no preview)",
        SlotMedia::Future => "future date",
        SlotMedia::Empty => "no image",
    }
}

/// Second line of a gallery card.
#[must_use]
pub fn card_detail(slot: &GallerySlot) -> String {
    match &slot.media {
        SlotMedia::Image(image) => excerpt(&image.explanation, EXCERPT_CHARS),
        SlotMedia::Video(video) => {
            let mut detail = String::from("Video entry");
            if let Some(duration) = video.duration {
                let _ = write!(detail, " ({duration})");
            }
            if video.thumbnail.is_none() && !video.url.is_empty() {
                let _ = write!(detail, ", open video: {}", video.url);
            }
            detail
        }
        SlotMedia::Future => "No image available for future dates.".to_string(),
        SlotMedia::Empty => "APOD not available for this date.".to_string(),
    }
}

/// Plain-text card: `[index] caption  <label>` followed by an indented detail line.
#[must_use]
pub fn render_card(index: usize, slot: &GallerySlot) -> String {
    let title_line = match &slot.media {
        SlotMedia::Future => format!("{} — Future date", slot.date),
        SlotMedia::Empty => format!("{} — No image", slot.date),
        _ => slot.caption(),
    };
    format!(
        "[{}] {}  <{}>\n    {}",
        index,
        title_line,
        card_label(slot),
        card_detail(slot)
    )
}
