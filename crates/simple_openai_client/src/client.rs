//! The `SimpleOpenAI` client.

use crate::services::{self, ChatCompletions, Embeddings, Models, ThreadMessages, Threads};
use crate::{
    ClientConfig, DEFAULT_BASE_URL, Dispatcher, HttpTransport, ReqwestTransport, Route, RouteTable,
};
use simple_openai_error::{ConfigError, OpenAIResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

/// Typed client for the OpenAI REST API.
///
/// Cloning is cheap; clones share the transport and route table.
///
/// # Examples
///
/// ```no_run
/// use simple_openai_client::SimpleOpenAI;
///
/// # async fn run() -> simple_openai_error::OpenAIResult<()> {
/// let openai = SimpleOpenAI::builder().api_key("sk-...").build()?;
/// let messages = openai.thread_messages().get_list("thread_abc123").await?;
/// for message in &messages {
///     println!("{}: {}", message.role(), message.text());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SimpleOpenAI {
    dispatcher: Dispatcher,
}

impl SimpleOpenAI {
    /// Creates a builder for `SimpleOpenAI`.
    pub fn builder() -> SimpleOpenAIBuilder {
        SimpleOpenAIBuilder::default()
    }

    /// Creates a client from a [`ClientConfig`] using the default transport.
    pub fn from_config(config: &ClientConfig) -> OpenAIResult<Self> {
        SimpleOpenAIBuilder::from_config(config).build()
    }

    /// Creates a client from `OPENAI_*` environment variables.
    ///
    /// See [`ClientConfig::from_env`].
    pub fn from_env() -> OpenAIResult<Self> {
        Self::from_config(&ClientConfig::from_env()?)
    }

    /// The dispatcher, for calling custom routes registered on the builder.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Thread message operations.
    pub fn thread_messages(&self) -> ThreadMessages<'_> {
        ThreadMessages::new(&self.dispatcher)
    }

    /// Thread operations.
    pub fn threads(&self) -> Threads<'_> {
        Threads::new(&self.dispatcher)
    }

    /// Model operations.
    pub fn models(&self) -> Models<'_> {
        Models::new(&self.dispatcher)
    }

    /// Chat completion operations.
    pub fn chat_completions(&self) -> ChatCompletions<'_> {
        ChatCompletions::new(&self.dispatcher)
    }

    /// Embedding operations.
    pub fn embeddings(&self) -> Embeddings<'_> {
        Embeddings::new(&self.dispatcher)
    }
}

/// Builder for [`SimpleOpenAI`].
///
/// `build` validates every route, built-in and custom, so a malformed route
/// fails here rather than on first use.
#[derive(Default)]
pub struct SimpleOpenAIBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    organization: Option<String>,
    project: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn HttpTransport>>,
    routes: Vec<Route>,
}

impl SimpleOpenAIBuilder {
    fn from_config(config: &ClientConfig) -> Self {
        Self {
            api_key: Some(config.api_key().clone()),
            base_url: Some(config.base_url().clone()),
            organization: config.organization().clone(),
            project: config.project().clone(),
            timeout: config.timeout(),
            ..Self::default()
        }
    }

    /// API key sent as a bearer token. Required.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Base URL (default: "https://api.openai.com/v1").
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sends `OpenAI-Organization` with every request.
    pub fn organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    /// Sends `OpenAI-Project` with every request.
    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Per-request timeout for the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replaces the default `reqwest` transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Registers an extra route, callable through [`SimpleOpenAI::dispatcher`].
    pub fn route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the API key is missing or empty, or
    /// if any route is invalid or registered twice.
    #[instrument(skip(self), fields(custom_routes = self.routes.len()))]
    pub fn build(self) -> OpenAIResult<SimpleOpenAI> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::new("An API key is required"))?;

        let routes = RouteTable::new(services::all_routes().chain(self.routes))?;

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(self.timeout)?),
        };

        let mut headers = vec![("Authorization".to_string(), format!("Bearer {}", api_key))];
        if let Some(organization) = self.organization {
            headers.push(("OpenAI-Organization".to_string(), organization));
        }
        if let Some(project) = self.project {
            headers.push(("OpenAI-Project".to_string(), project));
        }

        let base_url = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        debug!(
            base_url = %base_url,
            routes = routes.len(),
            "Created OpenAI client"
        );

        Ok(SimpleOpenAI {
            dispatcher: Dispatcher::new(transport, routes, base_url, headers),
        })
    }
}
