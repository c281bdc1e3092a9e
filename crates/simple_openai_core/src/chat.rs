//! Chat completions (non-streaming).

use crate::Usage;
use serde::{Deserialize, Serialize};

/// Author of a chat message.
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
pub enum ChatRole {
    System,
    Developer,
    User,
    Assistant,
}

/// A message in a chat conversation.
///
/// # Examples
///
/// ```
/// use simple_openai_core::{ChatMessage, ChatRole};
///
/// let message = ChatMessage::user("Hello!");
/// assert_eq!(*message.role(), ChatRole::User);
/// assert_eq!(message.content().as_deref(), Some("Hello!"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ChatMessage {
    /// Role of the message author
    role: ChatRole,
    /// Message text; `null` when the assistant refused
    #[serde(default)]
    content: Option<String>,
    /// Optional participant name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// Refusal text from the assistant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refusal: Option<String>,
}

impl ChatMessage {
    fn with_role(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: Some(content.into()),
            name: None,
            refusal: None,
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::with_role(ChatRole::System, content)
    }

    /// Create a developer message
    pub fn developer(content: impl Into<String>) -> Self {
        Self::with_role(ChatRole::Developer, content)
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::with_role(ChatRole::User, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::with_role(ChatRole::Assistant, content)
    }

    /// Sets the participant name.
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }
}

/// Chat completion request.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into), pattern = "owned")]
pub struct ChatRequest {
    /// Model identifier
    model: String,
    /// Conversation so far
    #[builder(setter(each(name = "message")))]
    messages: Vec<ChatMessage>,
    /// Sampling temperature, 0 to 2
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Nucleus sampling mass
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    /// Upper bound on generated tokens, reasoning included
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_completion_tokens: Option<u32>,
    /// Number of choices to generate
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    n: Option<u32>,
    /// Stop sequences
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stop: Option<Vec<String>>,
    /// Seed for best-effort deterministic sampling
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seed: Option<i64>,
    /// End-user identifier
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<String>,
}

impl ChatRequest {
    /// Creates a builder for `ChatRequest`.
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }
}

/// A generated choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ChatChoice {
    index: u32,
    message: ChatMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Chat completion response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ChatResponse {
    /// Completion identifier
    id: String,
    /// Object type (always "chat.completion")
    object: String,
    /// Unix timestamp (seconds) of creation
    created: i64,
    /// Model that served the request
    model: String,
    /// Generated choices
    choices: Vec<ChatChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    usage: Option<Usage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    system_fingerprint: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}
