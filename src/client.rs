//! # HTTP Client Module
//!
//! Blocking HTTP client wrapper used by every contract step.
//!
//! ## Overview
//!
//! [`ApiClient`] owns a `reqwest` blocking client and the base URL of the
//! service under test. Every operation issues exactly one request and
//! returns an [`ApiResponse`] capturing the status code and the raw body
//! text; transport failures (DNS, refused connection, timeout) surface as
//! `anyhow::Error` with context. There are no retries and no fallback -
//! the caller decides what a non-success status means.
//!
//! The client is fully synchronous: one request in flight at a time, no
//! suspension points beyond the blocking network call itself.

use anyhow::{Context, Result};
use http::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::HarnessConfig;

/// Blocking client bound to one base URL.
#[derive(Debug)]
pub struct ApiClient {
    client: reqwest::blocking::Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client from harness configuration.
    ///
    /// Timeouts are applied only when configured; by default the client
    /// waits indefinitely, like the suite it replaces.
    pub fn new(config: &HarnessConfig) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(connect) = config.connect_timeout {
            builder = builder.connect_timeout(connect);
        }
        // The blocking client defaults to a 30s request timeout; `None`
        // disables it, restoring the "no timeout unless configured" contract.
        builder = builder.timeout(config.request_timeout);
        let client = builder.build().context("failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Base URL this client addresses.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join an endpoint path onto the base URL.
    ///
    /// `Url::join` would drop the `/v2` suffix of the Petstore base for
    /// absolute paths, so the path is appended textually with exactly one
    /// separating slash.
    pub fn endpoint_url(&self, path: &str) -> Result<Url> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).with_context(|| format!("invalid endpoint URL: {joined}"))
    }

    /// GET an endpoint.
    pub fn get(&self, path: &str) -> Result<ApiResponse> {
        self.execute(Method::GET, path, &[], None::<&()>)
    }

    /// GET an endpoint with query parameters.
    pub fn get_with_query(&self, path: &str, query: &[(&str, &str)]) -> Result<ApiResponse> {
        self.execute(Method::GET, path, query, None::<&()>)
    }

    /// POST a JSON body to an endpoint.
    pub fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<ApiResponse> {
        self.execute(Method::POST, path, &[], Some(body))
    }

    /// PUT a JSON body to an endpoint.
    pub fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<ApiResponse> {
        self.execute(Method::PUT, path, &[], Some(body))
    }

    /// DELETE an endpoint.
    pub fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.execute(Method::DELETE, path, &[], None::<&()>)
    }

    fn execute<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<ApiResponse> {
        let url = self.endpoint_url(path)?;
        let mut request = self.client.request(method.clone(), url.clone());
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request
            .send()
            .with_context(|| format!("{method} {url} failed"))?;
        let status = response.status();
        let body = response
            .text()
            .with_context(|| format!("{method} {url}: failed to read response body"))?;
        tracing::debug!(%method, %url, status = status.as_u16(), "request completed");
        Ok(ApiResponse { status, body })
    }
}

/// One HTTP exchange: status code plus the raw body text.
///
/// The body is kept as text so failure messages can always quote what the
/// service actually sent, even when it is not valid JSON.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: String,
}

impl ApiResponse {
    /// Build a response from parts (used by tests and the contract driver).
    pub fn from_parts(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Response status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Raw body text.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Deserialize the body into a typed record.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body)
            .with_context(|| format!("response body is not the expected shape: {}", self.body))
    }

    /// Parse the body as untyped JSON for spot-checking individual fields.
    pub fn json_value(&self) -> Result<serde_json::Value> {
        serde_json::from_str(&self.body)
            .with_context(|| format!("response body is not JSON: {}", self.body))
    }
}
