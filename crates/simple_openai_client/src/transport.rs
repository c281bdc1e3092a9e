//! HTTP transport seam.

use crate::HttpMethod;
use async_trait::async_trait;
use simple_openai_error::{HttpError, OpenAIResult};
use std::time::Duration;
use tracing::{debug, error, instrument};

/// A fully resolved request, ready to send.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct HttpRequest {
    /// HTTP verb
    method: HttpMethod,
    /// Absolute URL without the query string
    url: String,
    /// Query parameters
    query: Vec<(String, String)>,
    /// Request headers
    headers: Vec<(String, String)>,
    /// JSON body
    body: Option<serde_json::Value>,
}

impl HttpRequest {
    pub(crate) fn new(
        method: HttpMethod,
        url: String,
        query: Vec<(String, String)>,
        headers: Vec<(String, String)>,
        body: Option<serde_json::Value>,
    ) -> Self {
        Self {
            method,
            url,
            query,
            headers,
            body,
        }
    }

    /// Value of the first header named `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct HttpResponse {
    status: u16,
    body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub(crate) fn into_body(self) -> String {
        self.body
    }
}

/// Sends resolved requests.
///
/// Non-2xx responses are returned as responses, not errors; only failures to
/// complete the exchange are errors.
#[async_trait]
pub trait HttpTransport: Send + Sync + std::fmt::Debug {
    /// Sends `request` and returns the raw response.
    async fn send(&self, request: HttpRequest) -> OpenAIResult<HttpResponse>;
}

/// [`HttpTransport`] backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with an optional per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error if the underlying client cannot be created.
    pub fn new(timeout: Option<Duration>) -> OpenAIResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| HttpError::new(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Wraps an existing `reqwest` client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn send(&self, request: HttpRequest) -> OpenAIResult<HttpResponse> {
        let HttpRequest {
            method,
            url,
            query,
            headers,
            body,
        } = request;

        let method = match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &url);
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        for (name, value) in &headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            error!(error = ?e, "HTTP request failed");
            HttpError::for_url(format!("Request failed: {}", e), &url)
        })?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| {
            error!(status, error = ?e, "Failed to read response body");
            HttpError::for_url(format!("Failed to read response body: {}", e), &url)
        })?;

        debug!(status, bytes = text.len(), "Received response");
        Ok(HttpResponse::new(status, text))
    }
}
