// SPDX-License-Identifier: MPL-2.0
//! Picture entries as returned by the remote API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::window::parse_date;

/// Fetched entries keyed by their calendar date.
pub type ItemsByDate = BTreeMap<NaiveDate, RemoteItem>;

/// One entry of the picture API.
///
/// Every field is optional: the API omits fields freely and the gallery
/// degrades to placeholders instead of rejecting the whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteItem {
    pub date: Option<String>,
    pub media_type: Option<String>,
    pub url: Option<String>,
    pub hdurl: Option<String>,
    pub title: Option<String>,
    pub explanation: Option<String>,
    pub thumbnail_url: Option<String>,

    // The duration shows up under different names depending on the entry.
    pub duration: Option<Value>,
    pub video_duration: Option<Value>,
    pub length: Option<Value>,
    pub duration_seconds: Option<Value>,
    pub runtime: Option<Value>,
}

impl RemoteItem {
    /// The entry's date, if present and well formed.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(|d| parse_date(d).ok())
    }

    /// Whether the media discriminator says "image".
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.media_type.as_deref() == Some("image")
    }

    /// Whether the entry carries any media discriminator other than "image".
    #[must_use]
    pub fn is_video(&self) -> bool {
        matches!(self.media_type.as_deref(), Some(kind) if !kind.is_empty() && kind != "image")
    }

    /// `url`, falling back to `hdurl`.
    #[must_use]
    pub fn image_url(&self) -> &str {
        non_empty(self.url.as_deref())
            .or_else(|| non_empty(self.hdurl.as_deref()))
            .unwrap_or_default()
    }

    /// Thumbnail URL provided by the API itself.
    #[must_use]
    pub fn provided_thumbnail(&self) -> Option<&str> {
        non_empty(self.thumbnail_url.as_deref())
    }

    /// Duration in whole seconds.
    ///
    /// The first non-blank candidate key wins (`duration`, `video_duration`,
    /// `length`, `duration_seconds`, `runtime`). If that value is not a
    /// non-negative number the result is `None`; later keys are not consulted.
    #[must_use]
    pub fn duration_secs(&self) -> Option<u64> {
        [
            &self.duration,
            &self.video_duration,
            &self.length,
            &self.duration_seconds,
            &self.runtime,
        ]
        .into_iter()
        .flatten()
        .find(|value| !is_blank(value))
        .and_then(seconds_from_value)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Values that do not count as a duration being present.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_none_or(|f| f == 0.0 || f.is_nan()),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn seconds_from_value(value: &Value) -> Option<u64> {
    let seconds = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if seconds.is_finite() && seconds >= 0.0 {
        Some(seconds.floor() as u64)
    } else {
        None
    }
}
