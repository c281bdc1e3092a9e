//! Per-resource service handles.
//!
//! Each module declares its operations as `const` routes and exposes a
//! borrowed handle whose methods build a [`Call`](crate::Call) and hand it to
//! the [`Dispatcher`](crate::Dispatcher).

pub mod chat;
pub mod embeddings;
pub mod models;
pub mod thread_messages;
pub mod threads;

pub use chat::ChatCompletions;
pub use embeddings::Embeddings;
pub use models::Models;
pub use thread_messages::ThreadMessages;
pub use threads::Threads;

use crate::Route;

/// Header required by the Assistants v2 endpoints.
pub(crate) const ASSISTANTS_V2: &[(&str, &str)] = &[("OpenAI-Beta", "assistants=v2")];

/// Every built-in route.
pub fn all_routes() -> impl Iterator<Item = Route> {
    [
        thread_messages::ROUTES,
        threads::ROUTES,
        models::ROUTES,
        chat::ROUTES,
        embeddings::ROUTES,
    ]
    .into_iter()
    .flatten()
    .copied()
}
