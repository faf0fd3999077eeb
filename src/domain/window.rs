// SPDX-License-Identifier: MPL-2.0
//! The 9-day date window shown by one gallery render.

use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Number of calendar days (and slots) in one gallery window.
pub const WINDOW_DAYS: u64 = 9;

/// Date format accepted from the user and sent to the API.
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The input was empty or not a `YYYY-MM-DD` calendar date.
    InvalidDate(String),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::InvalidDate(input) if input.is_empty() => {
                write!(f, "Please select a start date")
            }
            DateError::InvalidDate(input) => write!(f, "Invalid start date: {:?}", input),
        }
    }
}

impl std::error::Error for DateError {}

/// Parses a `YYYY-MM-DD` date, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] when the input does not name a real
/// calendar day.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| DateError::InvalidDate(trimmed.to_string()))
}

/// Range of dates requested from the API for one gallery.
///
/// `end` is `start + 8 days` unless that would run past today, in which case
/// `end` is today and `truncated` is set. The low end is never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub truncated: bool,
}

impl DateWindow {
    /// Resolves the window for a user-selected start date.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidDate`] if `selected` cannot be parsed.
    pub fn compute(selected: &str, today: NaiveDate) -> Result<Self, DateError> {
        let start = parse_date(selected)?;
        Self::starting_at(start, today)
    }

    /// Resolves the window for an already parsed start date.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidDate`] if the window would overflow the
    /// supported calendar range.
    pub fn starting_at(start: NaiveDate, today: NaiveDate) -> Result<Self, DateError> {
        let full_end = start
            .checked_add_days(Days::new(WINDOW_DAYS - 1))
            .ok_or_else(|| DateError::InvalidDate(start.to_string()))?;

        if full_end > today {
            Ok(Self {
                start,
                end: today,
                truncated: true,
            })
        } else {
            Ok(Self {
                start,
                end: full_end,
                truncated: false,
            })
        }
    }

    /// The nine calendar days rendered for this window, ascending.
    ///
    /// This ignores truncation: days past `end` still get a slot.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..WINDOW_DAYS).filter_map(move |offset| self.start.checked_add_days(Days::new(offset)))
    }

    /// `start` formatted for the `start_date` query parameter.
    #[must_use]
    pub fn start_param(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    /// `end` formatted for the `end_date` query parameter.
    #[must_use]
    pub fn end_param(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }
}
