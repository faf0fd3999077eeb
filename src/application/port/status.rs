// SPDX-License-Identifier: MPL-2.0
//! Status sink port.
//!
//! Hosts surface these announcements however they like: a live region, a
//! toast, a line on stderr. The sink takes `&self` so it can be shared by
//! the fetcher and the loader during one load.

use crate::domain::Status;

/// Receives status announcements.
pub trait StatusSink {
    fn announce(&self, status: &Status);
}

/// Discards every announcement.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStatus;

impl StatusSink for NullStatus {
    fn announce(&self, _status: &Status) {}
}

impl<S: StatusSink + ?Sized> StatusSink for &S {
    fn announce(&self, status: &Status) {
        (**self).announce(status);
    }
}
