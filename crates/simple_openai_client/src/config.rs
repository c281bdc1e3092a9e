//! Client configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use simple_openai_error::{ConfigError, OpenAIResult};
use std::path::Path;
use std::time::Duration;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Connection settings for [`SimpleOpenAI`](crate::SimpleOpenAI).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ClientConfig {
    /// API key sent as a bearer token; read from files, never written out
    #[serde(skip_serializing)]
    api_key: String,
    /// Base URL (default: "https://api.openai.com/v1")
    #[builder(default = "default_base_url()")]
    #[serde(default = "default_base_url")]
    base_url: String,
    /// Value for the `OpenAI-Organization` header
    #[builder(default, setter(into, strip_option))]
    #[serde(default)]
    organization: Option<String>,
    /// Value for the `OpenAI-Project` header
    #[builder(default, setter(into, strip_option))]
    #[serde(default)]
    project: Option<String>,
    /// Per-request timeout in seconds
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    timeout_secs: Option<u64>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("organization", &self.organization)
            .field("project", &self.project)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ClientConfig {
    /// Creates a builder for `ClientConfig`.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Create config from environment variables
    ///
    /// Reads:
    /// - `OPENAI_API_KEY` (required)
    /// - `OPENAI_BASE_URL` (default: "https://api.openai.com/v1")
    /// - `OPENAI_ORGANIZATION` (optional)
    /// - `OPENAI_PROJECT` (optional)
    /// - `OPENAI_TIMEOUT_SECS` (optional)
    pub fn from_env() -> OpenAIResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from any variable source; `from_env` uses the process environment.
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> OpenAIResult<Self> {
        let api_key = lookup("OPENAI_API_KEY")
            .ok_or_else(|| ConfigError::new("OPENAI_API_KEY not set"))?;
        let timeout_secs = match lookup("OPENAI_TIMEOUT_SECS") {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                ConfigError::with_source(
                    format!("OPENAI_TIMEOUT_SECS is not a number of seconds: {:?}", raw),
                    e,
                )
            })?),
            None => None,
        };

        let config = Self {
            api_key,
            base_url: lookup("OPENAI_BASE_URL").unwrap_or_else(default_base_url),
            organization: lookup("OPENAI_ORGANIZATION"),
            project: lookup("OPENAI_PROJECT"),
            timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    #[tracing::instrument(skip(path))]
    pub fn from_file(path: impl AsRef<Path>) -> OpenAIResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::with_source(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::with_source(
                format!("Failed to parse config file {}", path.display()),
                e,
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the key is present and the base URL is an HTTP(S) URL.
    pub fn validate(&self) -> OpenAIResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::new("API key is empty").into());
        }
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ConfigError::new(format!(
                "Base URL must start with http:// or https://, got {:?}",
                self.base_url
            ))
            .into());
        }
        Ok(())
    }

    /// Per-request timeout, if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_env_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[("OPENAI_API_KEY", "sk-test")])).unwrap();
        assert_eq!(config.api_key(), "sk-test");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(*config.organization(), None);
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://localhost:8080/v1"),
            ("OPENAI_PROJECT", "proj_1"),
            ("OPENAI_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();
        assert_eq!(config.base_url(), "http://localhost:8080/v1");
        assert_eq!(config.project().as_deref(), Some("proj_1"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_env_missing_key() {
        let err = ClientConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_env_bad_timeout_keeps_cause() {
        use std::error::Error;

        let err = ClientConfig::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        let config_err = err.source().expect("config error");
        assert!(config_err.source().is_some());
    }

    #[test]
    fn test_serialize_omits_key() {
        let config = ClientConfig::builder()
            .api_key("sk-secret")
            .project("proj_1")
            .build()
            .unwrap();
        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("api_key").is_none());
        assert_eq!(json["project"], "proj_1");
        assert!(!json.to_string().contains("sk-secret"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = ClientConfig::builder().api_key("sk-secret").build().unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("redacted"));
    }
}
