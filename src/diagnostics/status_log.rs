// SPDX-License-Identifier: MPL-2.0
//! In-memory record of status announcements.
//!
//! [`StatusLog`] is a [`StatusSink`] that keeps the most recent announcements
//! with their timestamps. Hosts can read the latest one to drive a live region
//! and export the whole log as JSON when reporting a problem.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};

use super::CircularBuffer;
use crate::application::port::StatusSink;
use crate::config::DEFAULT_STATUS_LOG_CAPACITY;
use crate::domain::Status;

/// One recorded announcement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusRecord {
    pub at: DateTime<Utc>,
    pub message: String,
    #[serde(flatten)]
    pub status: Status,
}

/// Bounded, thread-safe log of status announcements.
#[derive(Debug)]
pub struct StatusLog {
    records: Mutex<CircularBuffer<StatusRecord>>,
}

impl Default for StatusLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_STATUS_LOG_CAPACITY)
    }
}

impl StatusLog {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Mutex::new(CircularBuffer::new(capacity)),
        }
    }

    fn records(&self) -> MutexGuard<'_, CircularBuffer<StatusRecord>> {
        // A poisoned log is still a usable log.
        self.records
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// The most recent announcement.
    #[must_use]
    pub fn latest(&self) -> Option<Status> {
        self.records().last().map(|record| record.status.clone())
    }

    /// All retained announcements, oldest first.
    #[must_use]
    pub fn statuses(&self) -> Vec<Status> {
        self.records()
            .iter()
            .map(|record| record.status.clone())
            .collect()
    }

    /// All retained announcement texts, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.records()
            .iter()
            .map(|record| record.message.clone())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    pub fn clear(&self) {
        self.records().clear();
    }

    /// Serializes the retained records as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let records: Vec<StatusRecord> = self.records().iter().cloned().collect();
        serde_json::to_string_pretty(&records)
    }
}

impl StatusSink for StatusLog {
    fn announce(&self, status: &Status) {
        tracing::info!(status = %status, "status");
        self.records().push(StatusRecord {
            at: Utc::now(),
            message: status.to_string(),
            status: status.clone(),
        });
    }
}
