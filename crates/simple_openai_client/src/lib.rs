//! Typed client for the OpenAI REST API.
//!
//! Each REST operation is a declarative [`Route`] (operation name, verb, path
//! template, body kind, response shape). Service handles such as
//! [`ThreadMessages`] turn method arguments into a [`Call`]; the
//! [`Dispatcher`] resolves the call against the [`RouteTable`], sends it
//! through an [`HttpTransport`] and decodes the response into the declared
//! type.

mod call;
mod client;
mod config;
mod dispatcher;
mod query;
mod route;
pub mod services;
mod transport;

pub use call::Call;
pub use client::{SimpleOpenAI, SimpleOpenAIBuilder};
pub use config::{ClientConfig, ClientConfigBuilder, ClientConfigBuilderError, DEFAULT_BASE_URL};
pub use dispatcher::Dispatcher;
pub use query::to_field_map;
pub use route::{BodyKind, HttpMethod, ResponseShape, Route, RouteTable};
pub use services::{ChatCompletions, Embeddings, Models, ThreadMessages, Threads};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
