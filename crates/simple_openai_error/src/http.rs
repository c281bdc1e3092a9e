//! Transport failures: the request never produced an HTTP status.

/// Connection, TLS, timeout or body-read failure with source location.
///
/// Non-2xx responses are not transport failures; they become
/// [`ApiError`](crate::ApiError).
#[derive(Debug, Clone)]
pub struct HttpError {
    /// What went wrong, usually the rendered reqwest error
    pub message: String,
    /// URL of the request, when one had been resolved
    pub url: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Transport failure not tied to a particular request, such as a client
    /// that could not be built.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            url: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Transport failure while sending to or reading from `url`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_openai_error::HttpError;
    ///
    /// let err = HttpError::for_url(
    ///     "Request failed: operation timed out",
    ///     "https://api.openai.com/v1/models",
    /// );
    /// assert_eq!(err.url.as_deref(), Some("https://api.openai.com/v1/models"));
    /// assert!(err.to_string().contains("(https://api.openai.com/v1/models)"));
    /// ```
    #[track_caller]
    pub fn for_url(message: impl Into<String>, url: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            url: Some(url.into()),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP Error: {}", self.message)?;
        if let Some(url) = &self.url {
            write!(f, " ({})", url)?;
        }
        write!(f, " at line {} in {}", self.line, self.file)
    }
}

impl std::error::Error for HttpError {}
