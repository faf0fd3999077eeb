// SPDX-License-Identifier: MPL-2.0
//! Status announcements for the gallery's live region.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// A user-visible status change.
///
/// The `Display` output is the text announced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Status {
    /// A range request is in flight.
    Loading,
    /// A retry is about to happen. `attempt` counts retries, not requests.
    Retrying { attempt: u32, of: u32 },
    /// The window was cut short at today.
    Truncated { end: NaiveDate },
    /// A gallery was rendered.
    Displayed { start: NaiveDate },
    /// The load failed; `message` is already user-facing.
    Failed { message: String },
}

impl Status {
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Status::Failed { .. })
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Status::Loading | Status::Retrying { .. })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Loading => write!(f, "Loading space photos…"),
            Status::Retrying { attempt, of } => {
                write!(f, "Network issue, retrying ({}/{})...", attempt, of)
            }
            Status::Truncated { end } => write!(
                f,
                "Selected 9-day window extends into the future; fetching up to {}.",
                end
            ),
            Status::Displayed { start } => write!(f, "Displayed 9-day view starting {}", start),
            Status::Failed { message } => write!(f, "{}", message),
        }
    }
}
