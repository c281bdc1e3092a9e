//! Messages within an assistants thread.

use crate::{Attachment, MessageContent, MessageContentBlock, Order};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Author of a thread message.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ThreadMessageRole {
    User,
    Assistant,
}

/// Processing status of a thread message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ThreadMessageStatus {
    InProgress,
    Incomplete,
    Completed,
}

/// Why a message ended up incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct IncompleteDetails {
    reason: String,
}

/// A message as stored in a thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ThreadMessage {
    /// Message identifier
    id: String,
    /// Object type (always "thread.message")
    object: String,
    /// Unix timestamp (seconds) of creation
    created_at: i64,
    /// Thread the message belongs to
    thread_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<ThreadMessageStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    incomplete_details: Option<IncompleteDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    incomplete_at: Option<i64>,
    /// Author of the message
    role: ThreadMessageRole,
    /// Content blocks, in order
    #[serde(default, deserialize_with = "crate::serde_util::null_as_default")]
    content: Vec<MessageContentBlock>,
    /// Assistant that authored the message, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    assistant_id: Option<String>,
    /// Run that produced the message, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    run_id: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_util::null_as_default")]
    attachments: Vec<Attachment>,
    #[serde(default, deserialize_with = "crate::serde_util::null_as_default")]
    metadata: HashMap<String, String>,
}

impl ThreadMessage {
    /// Concatenated text of all text blocks.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(MessageContentBlock::as_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Request to add a message to a thread.
///
/// # Examples
///
/// ```
/// use simple_openai_core::{Attachment, AttachmentTool, ThreadMessageRequest, ThreadMessageRole};
///
/// let request = ThreadMessageRequest::builder()
///     .role(ThreadMessageRole::User)
///     .content("Please, tell me what an LLM is?")
///     .attachment(
///         Attachment::builder()
///             .file_id("fileId")
///             .tool(AttachmentTool::FileSearch)
///             .build()
///             .unwrap(),
///     )
///     .build()
///     .unwrap();
///
/// let json = serde_json::to_value(&request).unwrap();
/// assert_eq!(json["role"], "user");
/// assert_eq!(json["attachments"][0]["file_id"], "fileId");
/// assert!(json.get("metadata").is_none());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), pattern = "owned")]
pub struct ThreadMessageRequest {
    /// Author of the message
    role: ThreadMessageRole,
    /// Text or multi-part content
    content: MessageContent,
    /// Files to attach
    #[builder(default, setter(each(name = "attachment")))]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<Attachment>,
    /// Up to 16 key-value pairs
    #[builder(default)]
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    metadata: HashMap<String, String>,
}

impl ThreadMessageRequest {
    /// Creates a builder for `ThreadMessageRequest`.
    pub fn builder() -> ThreadMessageRequestBuilder {
        ThreadMessageRequestBuilder::default()
    }
}

/// Request to modify a thread message. Only metadata can change.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), pattern = "owned")]
pub struct ThreadMessageModifyRequest {
    #[builder(default)]
    metadata: HashMap<String, String>,
}

impl ThreadMessageModifyRequest {
    /// Creates a builder for `ThreadMessageModifyRequest`.
    pub fn builder() -> ThreadMessageModifyRequestBuilder {
        ThreadMessageModifyRequestBuilder::default()
    }
}

/// Cursor and filter parameters for listing thread messages.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), pattern = "owned", default)]
pub struct ThreadMessageQuery {
    /// Page size, 1 to 100
    #[builder(setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
    #[builder(setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<Order>,
    /// Return items after this message ID
    #[builder(setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    after: Option<String>,
    /// Return items before this message ID
    #[builder(setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    before: Option<String>,
    /// Only messages produced by this run
    #[builder(setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    run_id: Option<String>,
}

impl ThreadMessageQuery {
    /// Creates a builder for `ThreadMessageQuery`.
    pub fn builder() -> ThreadMessageQueryBuilder {
        ThreadMessageQueryBuilder::default()
    }
}
