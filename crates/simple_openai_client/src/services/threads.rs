//! Assistants threads.

use super::ASSISTANTS_V2;
use crate::{Call, Dispatcher, Route};
use simple_openai_core::{Deleted, Thread, ThreadModifyRequest, ThreadRequest};
use simple_openai_error::OpenAIResult;
use tracing::instrument;

/// Operation names.
pub mod ops {
    pub const CREATE: &str = "threads.create";
    pub const GET_ONE: &str = "threads.get_one";
    pub const MODIFY: &str = "threads.modify";
    pub const DELETE: &str = "threads.delete";
}

pub const ROUTES: &[Route] = &[
    Route::post(ops::CREATE, "/threads")
        .with_json_body()
        .with_headers(ASSISTANTS_V2),
    Route::get(ops::GET_ONE, "/threads/{thread_id}").with_headers(ASSISTANTS_V2),
    Route::post(ops::MODIFY, "/threads/{thread_id}")
        .with_json_body()
        .with_headers(ASSISTANTS_V2),
    Route::delete(ops::DELETE, "/threads/{thread_id}").with_headers(ASSISTANTS_V2),
];

/// Thread operations.
#[derive(Debug, Clone, Copy)]
pub struct Threads<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> Threads<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Creates a thread.
    #[instrument(skip_all)]
    pub async fn create(&self, request: &ThreadRequest) -> OpenAIResult<Thread> {
        let call = Call::new(ops::CREATE).json(request)?;
        self.dispatcher.object(call).await
    }

    /// Retrieves a thread.
    #[instrument(skip(self))]
    pub async fn get_one(&self, thread_id: &str) -> OpenAIResult<Thread> {
        self.dispatcher
            .object(Call::new(ops::GET_ONE).arg(thread_id))
            .await
    }

    /// Modifies a thread.
    #[instrument(skip(self, request))]
    pub async fn modify(
        &self,
        thread_id: &str,
        request: &ThreadModifyRequest,
    ) -> OpenAIResult<Thread> {
        let call = Call::new(ops::MODIFY).arg(thread_id).json(request)?;
        self.dispatcher.object(call).await
    }

    /// Deletes a thread.
    #[instrument(skip(self))]
    pub async fn delete(&self, thread_id: &str) -> OpenAIResult<Deleted> {
        self.dispatcher
            .object(Call::new(ops::DELETE).arg(thread_id))
            .await
    }
}
