//! Token usage reported by the API.

use serde::{Deserialize, Serialize};

/// Token counts for a completed request.
///
/// Every count is optional because not every endpoint reports every figure
/// (embeddings, for instance, never report completion tokens).
///
/// # Examples
///
/// ```
/// use simple_openai_core::Usage;
///
/// let usage: Usage = serde_json::from_str(
///     r#"{"prompt_tokens": 9, "completion_tokens": 12, "total_tokens": 21}"#,
/// ).unwrap();
/// assert_eq!(*usage.prompt_tokens(), Some(9));
/// assert_eq!(*usage.total_tokens(), Some(21));
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
)]
pub struct Usage {
    /// Tokens in the prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prompt_tokens: Option<u32>,
    /// Tokens in the generated completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completion_tokens: Option<u32>,
    /// Total tokens billed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total_tokens: Option<u32>,
}

impl Usage {
    /// Creates usage data with all three counts.
    pub fn new(prompt_tokens: u32, completion_tokens: u32, total_tokens: u32) -> Self {
        Self {
            prompt_tokens: Some(prompt_tokens),
            completion_tokens: Some(completion_tokens),
            total_tokens: Some(total_tokens),
        }
    }
}
