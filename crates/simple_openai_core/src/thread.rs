//! Assistants threads.

use crate::ThreadMessageRequest;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Files available to the code interpreter tool.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
)]
pub struct CodeInterpreterResources {
    #[serde(default, deserialize_with = "crate::serde_util::null_as_default")]
    file_ids: Vec<String>,
}

impl CodeInterpreterResources {
    pub fn new(file_ids: Vec<String>) -> Self {
        Self { file_ids }
    }
}

/// Vector stores available to the file search tool.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
)]
pub struct FileSearchResources {
    #[serde(default, deserialize_with = "crate::serde_util::null_as_default")]
    vector_store_ids: Vec<String>,
}

impl FileSearchResources {
    pub fn new(vector_store_ids: Vec<String>) -> Self {
        Self { vector_store_ids }
    }
}

/// Resources made available to the assistant's tools in a thread.
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
#[builder(pattern = "owned", default)]
pub struct ToolResources {
    #[builder(setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code_interpreter: Option<CodeInterpreterResources>,
    #[builder(setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    file_search: Option<FileSearchResources>,
}

impl ToolResources {
    /// Creates a builder for `ToolResources`.
    pub fn builder() -> ToolResourcesBuilder {
        ToolResourcesBuilder::default()
    }
}

/// A conversation thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Thread {
    /// Thread identifier
    id: String,
    /// Object type (always "thread")
    object: String,
    /// Unix timestamp (seconds) of creation
    created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tool_resources: Option<ToolResources>,
    #[serde(default, deserialize_with = "crate::serde_util::null_as_default")]
    metadata: HashMap<String, String>,
}

/// Request to create a thread, optionally seeded with messages.
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
pub struct ThreadRequest {
    #[builder(setter(each(name = "message")))]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    messages: Vec<ThreadMessageRequest>,
    #[builder(setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tool_resources: Option<ToolResources>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    metadata: HashMap<String, String>,
}

impl ThreadRequest {
    /// Creates a builder for `ThreadRequest`.
    pub fn builder() -> ThreadRequestBuilder {
        ThreadRequestBuilder::default()
    }
}

/// Request to modify a thread.
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
pub struct ThreadModifyRequest {
    #[builder(setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tool_resources: Option<ToolResources>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    metadata: HashMap<String, String>,
}

impl ThreadModifyRequest {
    /// Creates a builder for `ThreadModifyRequest`.
    pub fn builder() -> ThreadModifyRequestBuilder {
        ThreadModifyRequestBuilder::default()
    }
}
