//! Message content, as sent and as returned.

use serde::{Deserialize, Serialize};

/// Resolution hint for image content.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ImageDetail {
    Auto,
    Low,
    High,
}

/// Image referenced by uploaded file ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ImageFile {
    file_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    detail: Option<ImageDetail>,
}

impl ImageFile {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
            detail: None,
        }
    }

    pub fn with_detail(self, detail: ImageDetail) -> Self {
        Self {
            detail: Some(detail),
            ..self
        }
    }
}

/// Image referenced by URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ImageUrl {
    url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    detail: Option<ImageDetail>,
}

impl ImageUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            detail: None,
        }
    }

    pub fn with_detail(self, detail: ImageDetail) -> Self {
        Self {
            detail: Some(detail),
            ..self
        }
    }
}

/// One part of a multi-part message request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageFile { image_file: ImageFile },
    ImageUrl { image_url: ImageUrl },
}

/// Content of a message request: plain text or a list of parts.
///
/// # Examples
///
/// ```
/// use simple_openai_core::{ContentPart, ImageUrl, MessageContent};
///
/// let text = MessageContent::from("What is an LLM?");
/// assert_eq!(serde_json::to_value(&text).unwrap(), "What is an LLM?");
///
/// let parts = MessageContent::from(vec![
///     ContentPart::Text { text: "Describe this".to_string() },
///     ContentPart::ImageUrl { image_url: ImageUrl::new("https://example.com/cat.png") },
/// ]);
/// let json = serde_json::to_value(&parts).unwrap();
/// assert_eq!(json[1]["type"], "image_url");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        MessageContent::Text(text.to_string())
    }
}

/// File ID cited by a file citation annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct FileCitation {
    file_id: String,
}

/// File ID generated by a file path annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct FilePath {
    file_id: String,
}

/// Annotation on a span of message text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Annotation {
    /// Citation pointing at a file used by file search
    FileCitation {
        text: String,
        file_citation: FileCitation,
        start_index: u32,
        end_index: u32,
    },
    /// Path to a file generated by the code interpreter
    FilePath {
        text: String,
        file_path: FilePath,
        start_index: u32,
        end_index: u32,
    },
}

/// Text content of a returned message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct TextContent {
    value: String,
    #[serde(default, deserialize_with = "crate::serde_util::null_as_default")]
    annotations: Vec<Annotation>,
}

/// One content block of a returned message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageContentBlock {
    Text { text: TextContent },
    ImageFile { image_file: ImageFile },
    ImageUrl { image_url: ImageUrl },
    Refusal { refusal: String },
}

impl MessageContentBlock {
    /// The text value, for text blocks.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessageContentBlock::Text { text } => Some(text.value()),
            _ => None,
        }
    }
}
