//! Error types for the simple_openai client library.
//!
//! Every error records the file and line where it was raised. Component errors
//! are unified under [`OpenAIError`], which boxes an [`OpenAIErrorKind`].

mod api;
mod config;
mod http;
mod json;

pub use api::ApiError;
pub use config::ConfigError;
pub use http::HttpError;
pub use json::JsonError;

/// Crate-level error variants.
#[derive(Debug, Clone, derive_more::From, derive_more::Display)]
pub enum OpenAIErrorKind {
    /// Call could not be mapped onto a valid request
    #[display("{}", _0)]
    Config(ConfigError),
    /// Transport failure
    #[display("{}", _0)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[display("{}", _0)]
    Json(JsonError),
    /// Non-2xx response from the API
    #[display("{}", _0)]
    Api(ApiError),
}

/// simple_openai error with kind discrimination.
///
/// # Examples
///
/// ```
/// use simple_openai_error::{ConfigError, OpenAIError, OpenAIErrorKind};
///
/// let err: OpenAIError = ConfigError::new("No route registered for operation models.get_one").into();
/// assert!(err.is_config());
/// assert!(matches!(err.kind(), OpenAIErrorKind::Config(_)));
/// ```
#[derive(Debug, Clone)]
pub struct OpenAIError(Box<OpenAIErrorKind>);

impl OpenAIError {
    /// Create a new error from a kind.
    pub fn new(kind: OpenAIErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &OpenAIErrorKind {
        &self.0
    }

    /// True if the call failed while being mapped to a request.
    pub fn is_config(&self) -> bool {
        matches!(*self.0, OpenAIErrorKind::Config(_))
    }

    /// The API error, if the server answered with a non-2xx status.
    pub fn api(&self) -> Option<&ApiError> {
        match &*self.0 {
            OpenAIErrorKind::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl std::fmt::Display for OpenAIError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OpenAI Error: {}", self.0)
    }
}

impl std::error::Error for OpenAIError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &*self.0 {
            OpenAIErrorKind::Config(e) => Some(e),
            OpenAIErrorKind::Http(e) => Some(e),
            OpenAIErrorKind::Json(e) => Some(e),
            OpenAIErrorKind::Api(e) => Some(e),
        }
    }
}

// Generic From implementation for any type that converts to OpenAIErrorKind
impl<T> From<T> for OpenAIError
where
    T: Into<OpenAIErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for simple_openai operations.
pub type OpenAIResult<T> = std::result::Result<T, OpenAIError>;
