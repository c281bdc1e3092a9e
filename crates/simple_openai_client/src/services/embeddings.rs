//! Embeddings.

use crate::{Call, Dispatcher, Route};
use simple_openai_core::{EmbeddingRequest, EmbeddingResponse};
use simple_openai_error::OpenAIResult;
use tracing::instrument;

/// Operation names.
pub mod ops {
    pub const CREATE: &str = "embeddings.create";
}

pub const ROUTES: &[Route] = &[Route::post(ops::CREATE, "/embeddings").with_json_body()];

/// Embedding operations.
#[derive(Debug, Clone, Copy)]
pub struct Embeddings<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> Embeddings<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Embeds the input text.
    #[instrument(skip_all, fields(model = %request.model()))]
    pub async fn create(&self, request: &EmbeddingRequest) -> OpenAIResult<EmbeddingResponse> {
        let call = Call::new(ops::CREATE).json(request)?;
        self.dispatcher.object(call).await
    }
}
