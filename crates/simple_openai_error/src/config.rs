//! Configuration error types.

use std::sync::Arc;

/// Mapping or configuration failure with source location.
///
/// Raised whenever a call cannot be mapped onto a well-formed HTTP request:
/// unknown operations, malformed route templates, response shape mismatches,
/// query fields without a scalar wire form, or missing credentials.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Underlying cause, if any
    pub source: Option<Arc<dyn std::error::Error + Send + Sync>>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_openai_error::ConfigError;
    ///
    /// let err = ConfigError::new("Missing required field");
    /// assert!(err.message.contains("Missing required"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            source: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create a new ConfigError that keeps the error which caused it.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_openai_error::ConfigError;
    /// use std::error::Error;
    ///
    /// let cause = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    /// let err = ConfigError::with_source("Cannot read config.toml", cause);
    /// assert!(err.source().is_some());
    /// ```
    #[track_caller]
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            source: Some(Arc::new(source)),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Configuration Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
