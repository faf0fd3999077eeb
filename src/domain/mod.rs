// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure gallery types and rules.
//!
//! Nothing in here performs I/O. Dates come from `chrono`, remote payloads are
//! described with `serde`, and every rule can be tested without a network or
//! a view.
//!
//! # Modules
//!
//! - [`window`]: the 9-day [`DateWindow`] and date parsing
//! - [`item`]: [`RemoteItem`] as returned by the picture API
//! - [`slot`]: [`GallerySlot`] descriptors and [`VideoDuration`]
//! - [`status`]: user-facing [`Status`] announcements

pub mod item;
pub mod slot;
pub mod status;
pub mod window;

pub use item::{ItemsByDate, RemoteItem};
pub use slot::{reference_page_url, GallerySlot, ImageEntry, MediaKind, SlotMedia, VideoDuration, VideoEntry};
pub use status::Status;
pub use window::{parse_date, DateError, DateWindow, WINDOW_DAYS};
