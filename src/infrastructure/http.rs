// SPDX-License-Identifier: MPL-2.0
//! `reqwest` adapter for the HTTP port.

use std::time::Duration;
use url::Url;

use crate::application::port::{HttpResponse, HttpTransport, TransportError};

const USER_AGENT: &str = concat!("ApodLens/", env!("CARGO_PKG_VERSION"));

/// HTTP transport backed by a shared `reqwest` client.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a client whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::new(e.to_string()))?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| TransportError::new(e.without_url().to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::new(e.without_url().to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
