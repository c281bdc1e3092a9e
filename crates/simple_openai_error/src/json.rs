//! JSON encoding and decoding error types.

/// Longest body excerpt kept in a [`JsonError`].
const EXCERPT_LEN: usize = 256;

/// JSON serialization/deserialization error with source location.
#[derive(Debug, Clone)]
pub struct JsonError {
    /// The underlying error message
    pub message: String,
    /// Leading part of the payload that failed to decode, if any
    pub excerpt: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a new JsonError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            excerpt: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create a JsonError for a payload that could not be decoded.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_openai_error::JsonError;
    ///
    /// let body = "x".repeat(1000);
    /// let err = JsonError::decoding("expected value", &body);
    /// assert!(err.excerpt.unwrap().len() < body.len());
    /// ```
    #[track_caller]
    pub fn decoding(message: impl Into<String>, body: &str) -> Self {
        let location = std::panic::Location::caller();
        let excerpt = match body.char_indices().nth(EXCERPT_LEN) {
            Some((idx, _)) => format!("{}...", &body[..idx]),
            None => body.to_string(),
        };
        Self {
            message: message.into(),
            excerpt: Some(excerpt),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "JSON Error: {} at line {} in {}",
            self.message, self.line, self.file
        )?;
        if let Some(excerpt) = &self.excerpt {
            write!(f, " (body: {})", excerpt)?;
        }
        Ok(())
    }
}

impl std::error::Error for JsonError {}
