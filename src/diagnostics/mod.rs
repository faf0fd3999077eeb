// SPDX-License-Identifier: MPL-2.0
//! Diagnostics: bounded records of what the gallery told the user.
//!
//! - [`CircularBuffer`]: generic ring buffer with a fixed capacity
//! - [`StatusLog`]: a [`StatusSink`](crate::application::port::StatusSink)
//!   keeping recent announcements, exportable as JSON

mod buffer;
mod status_log;

pub use buffer::CircularBuffer;
pub use status_log::{StatusLog, StatusRecord};
