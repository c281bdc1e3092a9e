//! Models.

use crate::{Call, Dispatcher, Route};
use simple_openai_core::{Deleted, Model, Page};
use simple_openai_error::OpenAIResult;
use tracing::instrument;

/// Operation names.
pub mod ops {
    pub const GET_LIST: &str = "models.get_list";
    pub const GET_ONE: &str = "models.get_one";
    pub const DELETE: &str = "models.delete";
}

pub const ROUTES: &[Route] = &[
    Route::get(ops::GET_LIST, "/models").returning_list(),
    Route::get(ops::GET_ONE, "/models/{model_id}"),
    Route::delete(ops::DELETE, "/models/{model_id}"),
];

/// Model operations.
#[derive(Debug, Clone, Copy)]
pub struct Models<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> Models<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Lists available models.
    #[instrument(skip(self))]
    pub async fn get_list(&self) -> OpenAIResult<Page<Model>> {
        self.dispatcher.list(Call::new(ops::GET_LIST)).await
    }

    /// Retrieves one model.
    #[instrument(skip(self))]
    pub async fn get_one(&self, model_id: &str) -> OpenAIResult<Model> {
        self.dispatcher
            .object(Call::new(ops::GET_ONE).arg(model_id))
            .await
    }

    /// Deletes a fine-tuned model owned by the organization.
    #[instrument(skip(self))]
    pub async fn delete(&self, model_id: &str) -> OpenAIResult<Deleted> {
        self.dispatcher
            .object(Call::new(ops::DELETE).arg(model_id))
            .await
    }
}
