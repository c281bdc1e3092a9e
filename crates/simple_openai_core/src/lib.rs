//! Request and response data types for the simple_openai client library.
//!
//! Every type mirrors the JSON shape of an OpenAI REST resource. Field names
//! are the snake_case wire names; request types are built with builders.

mod attachment;
mod chat;
mod content;
mod deleted;
mod embedding;
mod model;
mod page;
mod serde_util;
mod thread;
mod thread_message;
mod usage;

pub use attachment::{Attachment, AttachmentBuilder, AttachmentBuilderError, AttachmentTool};
pub use chat::{
    ChatChoice, ChatMessage, ChatRequest, ChatRequestBuilder, ChatRequestBuilderError,
    ChatResponse, ChatRole,
};
pub use content::{
    Annotation, ContentPart, FileCitation, FilePath, ImageDetail, ImageFile, ImageUrl,
    MessageContent, MessageContentBlock, TextContent,
};
pub use deleted::Deleted;
pub use embedding::{
    Embedding, EmbeddingInput, EmbeddingRequest, EmbeddingRequestBuilder,
    EmbeddingRequestBuilderError, EmbeddingResponse, EmbeddingVector, EncodingFormat,
};
pub use model::Model;
pub use page::{Order, Page};
pub use thread::{
    CodeInterpreterResources, FileSearchResources, Thread, ThreadModifyRequest,
    ThreadModifyRequestBuilder, ThreadModifyRequestBuilderError, ThreadRequest,
    ThreadRequestBuilder, ThreadRequestBuilderError, ToolResources, ToolResourcesBuilder,
    ToolResourcesBuilderError,
};
pub use thread_message::{
    IncompleteDetails, ThreadMessage, ThreadMessageModifyRequest,
    ThreadMessageModifyRequestBuilder, ThreadMessageModifyRequestBuilderError,
    ThreadMessageQuery, ThreadMessageQueryBuilder, ThreadMessageQueryBuilderError,
    ThreadMessageRequest, ThreadMessageRequestBuilder, ThreadMessageRequestBuilderError,
    ThreadMessageRole, ThreadMessageStatus,
};
pub use usage::Usage;
