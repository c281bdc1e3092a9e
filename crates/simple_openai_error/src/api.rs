//! Errors reported by the OpenAI API itself.

use serde::Deserialize;

/// Error envelope returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(rename = "type", default)]
    error_type: Option<String>,
    #[serde(default)]
    param: Option<String>,
    #[serde(default)]
    code: Option<serde_json::Value>,
}

/// Non-2xx response with source location.
///
/// # Examples
///
/// ```
/// use simple_openai_error::ApiError;
///
/// let body = r#"{"error":{"message":"No thread found","type":"invalid_request_error","param":null,"code":null}}"#;
/// let err = ApiError::from_response(404, body);
/// assert_eq!(err.status, 404);
/// assert_eq!(err.message, "No thread found");
/// assert_eq!(err.error_type.as_deref(), Some("invalid_request_error"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code
    pub status: u16,
    /// Error message from the API, or the raw body if it was not an error envelope
    pub message: String,
    /// API error type (e.g. `invalid_request_error`)
    pub error_type: Option<String>,
    /// Request parameter the error refers to
    pub param: Option<String>,
    /// API error code
    pub code: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ApiError {
    /// Build an ApiError from a response status and body.
    #[track_caller]
    pub fn from_response(status: u16, body: &str) -> Self {
        let location = std::panic::Location::caller();
        let (message, error_type, param, code) =
            match serde_json::from_str::<ErrorEnvelope>(body) {
                Ok(ErrorEnvelope { error }) => (
                    error.message,
                    error.error_type,
                    error.param,
                    error.code.and_then(|c| match c {
                        serde_json::Value::String(s) => Some(s),
                        serde_json::Value::Null => None,
                        other => Some(other.to_string()),
                    }),
                ),
                Err(_) => (body.to_string(), None, None, None),
            };
        Self {
            status,
            message,
            error_type,
            param,
            code,
            line: location.line(),
            file: location.file(),
        }
    }

    /// True for 5xx responses.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API Error (status {}): {}", self.status, self.message)?;
        if let Some(error_type) = &self.error_type {
            write!(f, " [{}]", error_type)?;
        }
        write!(f, " at line {} in {}", self.line, self.file)
    }
}

impl std::error::Error for ApiError {}
