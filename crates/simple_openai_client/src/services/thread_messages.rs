//! Messages within an assistants thread.

use super::ASSISTANTS_V2;
use crate::{Call, Dispatcher, Route};
use simple_openai_core::{
    Deleted, Page, ThreadMessage, ThreadMessageModifyRequest, ThreadMessageQuery,
    ThreadMessageRequest,
};
use simple_openai_error::OpenAIResult;
use tracing::instrument;

/// Operation names.
pub mod ops {
    pub const CREATE: &str = "thread_messages.create";
    pub const GET_LIST: &str = "thread_messages.get_list";
    pub const GET_ONE: &str = "thread_messages.get_one";
    pub const MODIFY: &str = "thread_messages.modify";
    pub const DELETE: &str = "thread_messages.delete";
}

pub const ROUTES: &[Route] = &[
    Route::post(ops::CREATE, "/threads/{thread_id}/messages")
        .with_json_body()
        .with_headers(ASSISTANTS_V2),
    Route::get(ops::GET_LIST, "/threads/{thread_id}/messages")
        .returning_list()
        .with_headers(ASSISTANTS_V2),
    Route::get(ops::GET_ONE, "/threads/{thread_id}/messages/{message_id}")
        .with_headers(ASSISTANTS_V2),
    Route::post(ops::MODIFY, "/threads/{thread_id}/messages/{message_id}")
        .with_json_body()
        .with_headers(ASSISTANTS_V2),
    Route::delete(ops::DELETE, "/threads/{thread_id}/messages/{message_id}")
        .with_headers(ASSISTANTS_V2),
];

/// Thread message operations.
#[derive(Debug, Clone, Copy)]
pub struct ThreadMessages<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> ThreadMessages<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Adds a message to a thread.
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        thread_id: &str,
        request: &ThreadMessageRequest,
    ) -> OpenAIResult<ThreadMessage> {
        let call = Call::new(ops::CREATE).arg(thread_id).json(request)?;
        self.dispatcher.object(call).await
    }

    /// Lists the messages of a thread with default paging.
    #[instrument(skip(self))]
    pub async fn get_list(&self, thread_id: &str) -> OpenAIResult<Page<ThreadMessage>> {
        self.dispatcher
            .list(Call::new(ops::GET_LIST).arg(thread_id))
            .await
    }

    /// Lists the messages of a thread with paging and filter parameters.
    #[instrument(skip(self, query))]
    pub async fn get_list_with(
        &self,
        thread_id: &str,
        query: &ThreadMessageQuery,
    ) -> OpenAIResult<Page<ThreadMessage>> {
        let call = Call::new(ops::GET_LIST).arg(thread_id).query(query)?;
        self.dispatcher.list(call).await
    }

    /// Retrieves one message.
    #[instrument(skip(self))]
    pub async fn get_one(&self, thread_id: &str, message_id: &str) -> OpenAIResult<ThreadMessage> {
        let call = Call::new(ops::GET_ONE).arg(thread_id).arg(message_id);
        self.dispatcher.object(call).await
    }

    /// Modifies a message's metadata.
    #[instrument(skip(self, request))]
    pub async fn modify(
        &self,
        thread_id: &str,
        message_id: &str,
        request: &ThreadMessageModifyRequest,
    ) -> OpenAIResult<ThreadMessage> {
        let call = Call::new(ops::MODIFY)
            .arg(thread_id)
            .arg(message_id)
            .json(request)?;
        self.dispatcher.object(call).await
    }

    /// Deletes a message.
    #[instrument(skip(self))]
    pub async fn delete(&self, thread_id: &str, message_id: &str) -> OpenAIResult<Deleted> {
        let call = Call::new(ops::DELETE).arg(thread_id).arg(message_id);
        self.dispatcher.object(call).await
    }
}
