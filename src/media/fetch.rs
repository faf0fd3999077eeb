// SPDX-License-Identifier: MPL-2.0
//! Date-ranged picture requests with retry and exponential backoff.
//!
//! One gallery load issues one range request. Transient failures (no response,
//! or 502/503/504) are retried with a doubling delay; anything else is
//! reported immediately.

use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::application::port::{HttpResponse, HttpTransport, StatusSink};
use crate::config::defaults::{DEFAULT_BASE_BACKOFF_MS, DEFAULT_MAX_ATTEMPTS, MAX_MAX_ATTEMPTS};
use crate::domain::{DateWindow, ItemsByDate, RemoteItem, Status};
use crate::error::FetchError;

/// How often and how patiently a range request is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_backoff: Duration::from_millis(DEFAULT_BASE_BACKOFF_MS),
        }
    }
}

impl RetryPolicy {
    /// Creates a policy; `max_attempts` counts the first request and is
    /// clamped to `1..=10`.
    #[must_use]
    pub fn new(max_attempts: u32, base_backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.clamp(1, MAX_MAX_ATTEMPTS),
            base_backoff,
        }
    }

    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay before request number `attempt` (1-based).
    ///
    /// Zero for the first request, then `base * 2^(attempt - 2)`.
    #[must_use]
    pub fn delay_before(&self, attempt: u32) -> Duration {
        if attempt < 2 {
            return Duration::ZERO;
        }
        self.base_backoff
            .saturating_mul(2u32.saturating_pow(attempt - 2))
    }

    /// Whether a response with this status is worth another attempt.
    #[must_use]
    pub fn is_retryable_status(status: u16) -> bool {
        matches!(status, 502..=504)
    }
}

/// Client for the date-ranged picture endpoint.
#[derive(Debug, Clone)]
pub struct RangeFetcher<T> {
    transport: T,
    endpoint: Url,
    api_key: String,
    policy: RetryPolicy,
}

impl<T: HttpTransport> RangeFetcher<T> {
    pub fn new(transport: T, endpoint: Url, api_key: impl Into<String>, policy: RetryPolicy) -> Self {
        Self {
            transport,
            endpoint,
            api_key: api_key.into(),
            policy,
        }
    }

    #[must_use]
    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Full request URL for a window.
    #[must_use]
    pub fn range_url(&self, window: &DateWindow) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("start_date", &window.start_param())
            .append_pair("end_date", &window.end_param())
            .append_pair("api_key", &self.api_key);
        url
    }

    /// Fetches every entry in `[window.start, window.end]`, keyed by date.
    ///
    /// Announces [`Status::Retrying`] on `status` before each retry.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Network`] if no attempt got a response
    /// - [`FetchError::Api`] for a non-retryable status, or a retryable one
    ///   that persisted through the last attempt
    /// - [`FetchError::Parse`] if the body is not an item or a list of items
    pub async fn fetch_range(
        &self,
        window: &DateWindow,
        status: &dyn StatusSink,
    ) -> Result<ItemsByDate, FetchError> {
        self.fetch_range_while(window, status, || true).await
    }

    /// Like [`Self::fetch_range`], but gives up retrying as soon as
    /// `keep_going` returns `false`.
    ///
    /// `keep_going` is checked before each retry is announced and again after
    /// the backoff sleep. An abandoned fetch returns the last failure without
    /// announcing anything further.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_range`].
    pub async fn fetch_range_while(
        &self,
        window: &DateWindow,
        status: &dyn StatusSink,
        keep_going: impl Fn() -> bool,
    ) -> Result<ItemsByDate, FetchError> {
        let url = self.range_url(window);
        let max_attempts = self.policy.max_attempts;
        let mut last_response: Option<HttpResponse> = None;
        let mut last_failure = String::from("no attempt was made");

        for attempt in 1..=max_attempts {
            if attempt > 1 {
                if !keep_going() {
                    tracing::debug!(attempt, "range request abandoned before retrying");
                    break;
                }
                status.announce(&Status::Retrying {
                    attempt: attempt - 1,
                    of: max_attempts - 1,
                });
                tokio::time::sleep(self.policy.delay_before(attempt)).await;
                if !keep_going() {
                    tracing::debug!(attempt, "range request abandoned during backoff");
                    break;
                }
            }

            match self.transport.get(&url).await {
                Ok(response) if response.is_success() => {
                    tracing::debug!(
                        start = %window.start,
                        end = %window.end,
                        attempt,
                        "range request succeeded"
                    );
                    return parse_items(&response.body);
                }
                Ok(response) if RetryPolicy::is_retryable_status(response.status) => {
                    tracing::warn!(
                        status = response.status,
                        attempt,
                        max_attempts,
                        "server returned a transient error"
                    );
                    last_response = Some(response);
                }
                Ok(response) => {
                    return Err(FetchError::Api {
                        status: response.status,
                        body: response.body,
                    });
                }
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        attempt,
                        max_attempts,
                        "range request got no response"
                    );
                    last_response = None;
                    last_failure = err.to_string();
                }
            }
        }

        match last_response {
            Some(response) => Err(FetchError::Api {
                status: response.status,
                body: response.body,
            }),
            None => Err(FetchError::Network(last_failure)),
        }
    }
}

/// Parses a response body holding either one item or an array of items.
///
/// Elements that are `null`, not an item, or without a valid date are
/// skipped. When two items share a date the later one wins.
///
/// # Errors
///
/// Returns [`FetchError::Parse`] if the body is not JSON or is neither an
/// object nor an array.
pub fn parse_items(body: &str) -> Result<ItemsByDate, FetchError> {
    let value: Value = serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    let entries = match value {
        Value::Array(entries) => entries,
        single @ Value::Object(_) => vec![single],
        other => {
            return Err(FetchError::Parse(format!(
                "expected an item or a list of items, got {}",
                json_kind(&other)
            )))
        }
    };

    let mut by_date = ItemsByDate::new();
    for entry in entries.into_iter().filter(|e| !e.is_null()) {
        let item: RemoteItem = match serde_json::from_value(entry) {
            Ok(item) => item,
            Err(err) => {
                tracing::debug!(error = %err, "skipping entry that is not an item");
                continue;
            }
        };
        match item.parsed_date() {
            Some(date) => {
                by_date.insert(date, item);
            }
            None => tracing::debug!(date = ?item.date, "skipping entry without a usable date"),
        }
    }
    Ok(by_date)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
