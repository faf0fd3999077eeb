// SPDX-License-Identifier: MPL-2.0
//! Application layer - use cases and the ports they depend on.
//!
//! - [`port`]: traits the host and infrastructure implement (network, status
//!   announcements, lightbox view)
//! - [`loader`]: the "show a 9-day gallery" use case tying window, fetch and
//!   slot building together
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain types only
//! - Infrastructure implements the ports (see [`crate::infrastructure`])
//! - Hosts drive the use cases and render what they return

pub mod loader;
pub mod port;

pub use loader::{GalleryLoader, LoadTicket, LoadedGallery};
