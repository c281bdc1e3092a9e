//! Chat completions.

use crate::{Call, Dispatcher, Route};
use simple_openai_core::{ChatRequest, ChatResponse};
use simple_openai_error::OpenAIResult;
use tracing::instrument;

/// Operation names.
pub mod ops {
    pub const CREATE: &str = "chat_completions.create";
}

pub const ROUTES: &[Route] = &[Route::post(ops::CREATE, "/chat/completions").with_json_body()];

/// Chat completion operations.
#[derive(Debug, Clone, Copy)]
pub struct ChatCompletions<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> ChatCompletions<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Creates a completion for the conversation in `request`.
    #[instrument(skip_all, fields(model = %request.model(), messages = request.messages().len()))]
    pub async fn create(&self, request: &ChatRequest) -> OpenAIResult<ChatResponse> {
        let call = Call::new(ops::CREATE).json(request)?;
        self.dispatcher.object(call).await
    }
}
