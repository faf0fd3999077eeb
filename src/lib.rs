// SPDX-License-Identifier: MPL-2.0
//! `apod_lens` shows nine consecutive days of NASA's Astronomy Picture of the
//! Day as a gallery, with a lightbox to browse them one by one.
//!
//! The crate is split the usual way: pure [`domain`] types, [`application`]
//! use cases and ports, [`infrastructure`] adapters, and the [`gallery`] and
//! [`lightbox`] logic hosts drive. Hosts provide the actual surfaces by
//! implementing the ports in [`application::port`].

#![doc(html_root_url = "https://docs.rs/apod_lens/0.1.0")]

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod infrastructure;
pub mod lightbox;
pub mod media;
