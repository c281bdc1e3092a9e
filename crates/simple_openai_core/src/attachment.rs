//! File attachments on thread messages.

use serde::{Deserialize, Serialize};

/// Tool a message attachment is made available to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(tag = "type", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AttachmentTool {
    CodeInterpreter,
    FileSearch,
}

/// A file attached to a message, and the tools it should be added to.
///
/// # Examples
///
/// ```
/// use simple_openai_core::{Attachment, AttachmentTool};
///
/// let attachment = Attachment::builder()
///     .file_id("file-abc123")
///     .tool(AttachmentTool::FileSearch)
///     .build()
///     .unwrap();
///
/// let json = serde_json::to_value(&attachment).unwrap();
/// assert_eq!(json["tools"][0]["type"], "file_search");
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
pub struct Attachment {
    /// ID of the uploaded file
    file_id: String,
    /// Tools to add the file to
    #[builder(default, setter(each(name = "tool")))]
    #[serde(default, deserialize_with = "crate::serde_util::null_as_default")]
    tools: Vec<AttachmentTool>,
}

impl Attachment {
    /// Creates a builder for `Attachment`.
    pub fn builder() -> AttachmentBuilder {
        AttachmentBuilder::default()
    }
}
