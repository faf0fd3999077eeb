// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`http`]: `reqwest`-backed [`HttpTransport`]
//!
//! [`HttpTransport`]: crate::application::port::HttpTransport

pub mod http;

pub use http::ReqwestTransport;
