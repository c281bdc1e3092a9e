//! Generic dispatcher: resolves a [`Call`] against the route table, sends it
//! and decodes the response.

use crate::{BodyKind, Call, HttpRequest, HttpTransport, ResponseShape, RouteTable};
use serde::de::DeserializeOwned;
use simple_openai_core::Page;
use simple_openai_error::{ApiError, ConfigError, JsonError, OpenAIResult};
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// Maps calls onto HTTP requests.
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn HttpTransport>,
    routes: Arc<RouteTable>,
    base_url: String,
    headers: Arc<Vec<(String, String)>>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("transport", &self.transport)
            .field("routes", &self.routes.len())
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Creates a dispatcher.
    ///
    /// `headers` are sent with every request, ahead of route-specific headers.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        routes: RouteTable,
        base_url: impl Into<String>,
        headers: Vec<(String, String)>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            routes: Arc::new(routes),
            base_url,
            headers: Arc::new(headers),
        }
    }

    /// Route table in use.
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves `call` into a request without sending it.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the operation is unknown, returns a
    /// different shape than `expected`, the body does not match the route's
    /// body kind, or the path arguments do not fit the template.
    pub fn prepare(&self, call: Call, expected: ResponseShape) -> OpenAIResult<HttpRequest> {
        let (operation, args, body, query) = call.into_parts();
        let route = self.routes.get(operation)?;

        if route.shape != expected {
            return Err(ConfigError::new(format!(
                "Operation {} returns {} but was called for {}",
                operation, route.shape, expected
            ))
            .into());
        }

        match (route.body, body.is_some()) {
            (BodyKind::Json, false) => {
                return Err(ConfigError::new(format!(
                    "Operation {} requires a JSON body",
                    operation
                ))
                .into());
            }
            (BodyKind::None, true) => {
                return Err(ConfigError::new(format!(
                    "Operation {} does not accept a body",
                    operation
                ))
                .into());
            }
            _ => {}
        }

        let path = route.render_path(&args)?;
        let url = format!("{}{}", self.base_url, path);

        let mut headers = self.headers.as_ref().clone();
        headers.extend(
            route
                .headers
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string())),
        );

        Ok(HttpRequest::new(route.method, url, query, headers, body))
    }

    /// Dispatches a call whose route returns a single object.
    #[instrument(skip(self, call), fields(operation = call.operation()))]
    pub async fn object<R>(&self, call: Call) -> OpenAIResult<R>
    where
        R: DeserializeOwned,
    {
        let operation = call.operation();
        let body = self.execute(call, ResponseShape::Object).await?;
        decode(operation, &body)
    }

    /// Dispatches a call whose route returns a list envelope.
    #[instrument(skip(self, call), fields(operation = call.operation()))]
    pub async fn list<R>(&self, call: Call) -> OpenAIResult<Page<R>>
    where
        R: DeserializeOwned,
    {
        let operation = call.operation();
        let body = self.execute(call, ResponseShape::List).await?;
        let page: Page<R> = decode(operation, &body)?;
        debug!(operation, items = page.len(), "Decoded list response");
        Ok(page)
    }

    async fn execute(&self, call: Call, expected: ResponseShape) -> OpenAIResult<String> {
        let operation = call.operation();
        let request = self.prepare(call, expected).inspect_err(|e| {
            error!(operation, error = %e, "Call could not be mapped to a request");
        })?;

        debug!(
            operation,
            method = %request.method(),
            url = %request.url(),
            query_params = request.query().len(),
            has_body = request.body().is_some(),
            "Sending request"
        );

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            let err = ApiError::from_response(*response.status(), response.body());
            error!(
                operation,
                status = err.status,
                error = %err.message,
                "API error"
            );
            return Err(err.into());
        }

        Ok(response.into_body())
    }
}

fn decode<R>(operation: &str, body: &str) -> OpenAIResult<R>
where
    R: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        error!(operation, error = %e, "Failed to parse response");
        JsonError::decoding(
            format!("Failed to decode response of {}: {}", operation, e),
            body,
        )
        .into()
    })
}
