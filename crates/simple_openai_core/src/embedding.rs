//! Embeddings.

use crate::Usage;
use serde::{Deserialize, Serialize};

/// Text to embed: one string or a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
#[serde(untagged)]
pub enum EmbeddingInput {
    Text(String),
    Batch(Vec<String>),
}

impl From<&str> for EmbeddingInput {
    fn from(text: &str) -> Self {
        EmbeddingInput::Text(text.to_string())
    }
}

/// Wire format for returned vectors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EncodingFormat {
    Float,
    Base64,
}

/// Embedding request.
///
/// # Examples
///
/// ```
/// use simple_openai_core::EmbeddingRequest;
///
/// let request = EmbeddingRequest::builder()
///     .model("text-embedding-3-small")
///     .input(vec!["first".to_string(), "second".to_string()])
///     .build()
///     .unwrap();
/// let json = serde_json::to_value(&request).unwrap();
/// assert_eq!(json["input"][1], "second");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into), pattern = "owned")]
pub struct EmbeddingRequest {
    /// Model identifier
    model: String,
    /// Text to embed
    input: EmbeddingInput,
    /// Output dimensions (text-embedding-3 and later)
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dimensions: Option<u32>,
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    encoding_format: Option<EncodingFormat>,
    /// End-user identifier
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<String>,
}

impl EmbeddingRequest {
    /// Creates a builder for `EmbeddingRequest`.
    pub fn builder() -> EmbeddingRequestBuilder {
        EmbeddingRequestBuilder::default()
    }
}

/// An embedding vector as returned, in whichever encoding was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmbeddingVector {
    Float(Vec<f32>),
    Base64(String),
}

impl EmbeddingVector {
    /// The float components, when the float encoding was used.
    pub fn as_floats(&self) -> Option<&[f32]> {
        match self {
            EmbeddingVector::Float(values) => Some(values),
            EmbeddingVector::Base64(_) => None,
        }
    }
}

/// One embedding in a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Embedding {
    object: String,
    /// Position of the input this embedding belongs to
    index: u32,
    embedding: EmbeddingVector,
}

/// Embedding response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct EmbeddingResponse {
    object: String,
    data: Vec<Embedding>,
    model: String,
    #[serde(default)]
    usage: Usage,
}
