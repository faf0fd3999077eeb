// SPDX-License-Identifier: MPL-2.0
//! The nine-slot gallery: building slot descriptors and acting on them.
//!
//! Building is split from materialization: [`builder`] produces plain
//! [`GallerySlot`] values, [`render`] turns them into text, and hosts decide
//! how cards look.

pub mod builder;
pub mod render;

pub use builder::{classify_slot, GalleryBuilder};

use crate::domain::{reference_page_url, GallerySlot, MediaKind};

/// What activating (clicking) a gallery card should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotActivation {
    /// Open the lightbox at this slot index.
    OpenLightbox(usize),
    /// Open this page outside the gallery.
    OpenExternal(String),
}

/// Resolves a click on card `index`.
///
/// Image and video cards open the lightbox; placeholder cards open the date's
/// reference page. Returns `None` for an index outside the gallery.
#[must_use]
pub fn activate(slots: &[GallerySlot], index: usize, reference_base: &str) -> Option<SlotActivation> {
    let slot = slots.get(index)?;
    Some(match slot.kind() {
        MediaKind::Image | MediaKind::Video => SlotActivation::OpenLightbox(index),
        MediaKind::None => SlotActivation::OpenExternal(reference_page_url(reference_base, slot.date)),
    })
}
