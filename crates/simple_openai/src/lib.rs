//! Typed client for the OpenAI REST API.
//!
//! This crate re-exports the error types, the resource DTOs and the
//! [`SimpleOpenAI`] client with its per-resource service handles.
//!
//! # Usage
//!
//! ```no_run
//! use simple_openai::{SimpleOpenAI, ThreadMessageRequest, ThreadMessageRole};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let openai = SimpleOpenAI::from_env()?;
//!
//!     let request = ThreadMessageRequest::builder()
//!         .role(ThreadMessageRole::User)
//!         .content("Please, tell me what an LLM is?")
//!         .build()?;
//!     let message = openai
//!         .thread_messages()
//!         .create("thread_abc123", &request)
//!         .await?;
//!     println!("{}", message.id());
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

pub use simple_openai_error::{
    ApiError, ConfigError, HttpError, JsonError, OpenAIError, OpenAIErrorKind, OpenAIResult,
};

pub use simple_openai_core::*;

pub use simple_openai_client::{
    BodyKind, Call, ChatCompletions, ClientConfig, ClientConfigBuilder, ClientConfigBuilderError,
    DEFAULT_BASE_URL, Dispatcher, Embeddings, HttpMethod, HttpRequest, HttpResponse,
    HttpTransport, Models, ReqwestTransport, ResponseShape, Route, RouteTable, SimpleOpenAI,
    SimpleOpenAIBuilder, ThreadMessages, Threads, services, to_field_map,
};
