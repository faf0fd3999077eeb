// SPDX-License-Identifier: MPL-2.0
//! HTTP transport port.
//!
//! The fetcher and the thumbnail resolver only ever issue `GET` requests and
//! care about two outcomes: a response (any status, with its body) or no
//! response at all. [`HttpTransport`] models exactly that.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use url::Url;

/// A received response. Non-success statuses are still responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// No response was obtained (DNS, refused connection, timeout, broken body).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError(String);

impl TransportError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for TransportError {}

/// Issues `GET` requests.
pub trait HttpTransport {
    /// Fetches `url`, resolving to the response or to a transport failure.
    fn get(&self, url: &Url) -> impl Future<Output = Result<HttpResponse, TransportError>>;
}

impl<T: HttpTransport> HttpTransport for Arc<T> {
    fn get(&self, url: &Url) -> impl Future<Output = Result<HttpResponse, TransportError>> {
        (**self).get(url)
    }
}
