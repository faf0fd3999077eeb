// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`http`]: plain `GET` requests returning status and body
//! - [`status`]: sink for user-facing status announcements
//! - [`lightbox`]: the surface the lightbox renders into
//!
//! # Design Notes
//!
//! - Ports use domain types only (no `reqwest` types, no markup)
//! - The HTTP port returns `impl Future`, so adapters may be plain `async fn`s
//!   and test doubles need no runtime of their own

pub mod http;
pub mod lightbox;
pub mod status;

pub use http::{HttpResponse, HttpTransport, TransportError};
pub use lightbox::{LightboxContent, LightboxView};
pub use status::{NullStatus, StatusSink};
