//! Declarative routing table.
//!
//! Every REST operation is a `const` [`Route`]: operation name, HTTP verb,
//! path template, body kind and response shape. A [`RouteTable`] validates a
//! set of routes once, when the client is built, so a malformed route is
//! reported before any request is sent.

use regex::Regex;
use simple_openai_error::{ConfigError, OpenAIResult};
use std::collections::HashMap;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]*)\}").expect("valid placeholder pattern"));

static PLACEHOLDER_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("valid placeholder name pattern"));

/// HTTP verbs used by the API.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// Shape of a successful response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ResponseShape {
    /// A single JSON object
    Object,
    /// A `{"object": "list", "data": [...]}` envelope
    List,
}

/// Whether a route carries a request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum BodyKind {
    None,
    Json,
}

/// One REST operation.
///
/// # Examples
///
/// ```
/// use simple_openai_client::{HttpMethod, ResponseShape, Route};
///
/// const LIST: Route = Route::get("thread_messages.get_list", "/threads/{thread_id}/messages")
///     .returning_list();
///
/// assert_eq!(LIST.method, HttpMethod::Get);
/// assert_eq!(LIST.shape, ResponseShape::List);
/// assert_eq!(LIST.render_path(&["thread_1".to_string()]).unwrap(), "/threads/thread_1/messages");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Route {
    /// Unique operation name, `<resource>.<operation>`
    pub operation: &'static str,
    /// HTTP verb
    pub method: HttpMethod,
    /// Path template relative to the base URL, with `{name}` placeholders
    pub path: &'static str,
    /// Request body kind
    pub body: BodyKind,
    /// Response body shape
    pub shape: ResponseShape,
    /// Extra headers sent with this route
    pub headers: &'static [(&'static str, &'static str)],
}

impl Route {
    const fn new(operation: &'static str, method: HttpMethod, path: &'static str) -> Self {
        Self {
            operation,
            method,
            path,
            body: BodyKind::None,
            shape: ResponseShape::Object,
            headers: &[],
        }
    }

    /// A GET route returning an object.
    pub const fn get(operation: &'static str, path: &'static str) -> Self {
        Self::new(operation, HttpMethod::Get, path)
    }

    /// A POST route returning an object.
    pub const fn post(operation: &'static str, path: &'static str) -> Self {
        Self::new(operation, HttpMethod::Post, path)
    }

    /// A DELETE route returning an object.
    pub const fn delete(operation: &'static str, path: &'static str) -> Self {
        Self::new(operation, HttpMethod::Delete, path)
    }

    /// Declares a JSON request body.
    pub const fn with_json_body(self) -> Self {
        Self {
            body: BodyKind::Json,
            ..self
        }
    }

    /// Declares a list response.
    pub const fn returning_list(self) -> Self {
        Self {
            shape: ResponseShape::List,
            ..self
        }
    }

    /// Declares extra headers.
    pub const fn with_headers(self, headers: &'static [(&'static str, &'static str)]) -> Self {
        Self { headers, ..self }
    }

    /// Placeholder names in the path template, in order.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a placeholder is empty, badly named
    /// or the braces are unbalanced.
    pub fn placeholders(&self) -> OpenAIResult<Vec<&'static str>> {
        let path: &'static str = self.path;
        let mut names = Vec::new();
        for capture in PLACEHOLDER.captures_iter(path) {
            let name = capture.get(1).map(|m| m.as_str()).unwrap_or_default();
            if !PLACEHOLDER_NAME.is_match(name) {
                return Err(ConfigError::new(format!(
                    "Invalid placeholder {{{}}} in path {} of operation {}",
                    name, path, self.operation
                ))
                .into());
            }
            names.push(name);
        }

        let remainder = PLACEHOLDER.replace_all(path, "");
        if remainder.contains(['{', '}']) {
            return Err(ConfigError::new(format!(
                "Unbalanced braces in path {} of operation {}",
                path, self.operation
            ))
            .into());
        }
        Ok(names)
    }

    /// Checks that the route can produce a well-formed request.
    pub fn validate(&self) -> OpenAIResult<()> {
        if self.operation.trim().is_empty() {
            return Err(ConfigError::new(format!(
                "Route for path {} has no operation name",
                self.path
            ))
            .into());
        }
        if !self.path.starts_with('/') {
            return Err(ConfigError::new(format!(
                "Path of operation {} must start with '/', got {:?}",
                self.operation, self.path
            ))
            .into());
        }
        if self.body == BodyKind::Json && self.method != HttpMethod::Post {
            return Err(ConfigError::new(format!(
                "Operation {} declares a JSON body on a {} request",
                self.operation, self.method
            ))
            .into());
        }
        let names = self.placeholders()?;
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(ConfigError::new(format!(
                    "Placeholder {{{}}} appears twice in path {} of operation {}",
                    name, self.path, self.operation
                ))
                .into());
            }
        }
        Ok(())
    }

    /// Substitutes `args` into the path template, in placeholder order.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the argument count does not match
    /// the placeholders, or an argument is empty or contains `/`, `?` or `#`.
    pub fn render_path(&self, args: &[String]) -> OpenAIResult<String> {
        let names = self.placeholders()?;
        if names.len() != args.len() {
            return Err(ConfigError::new(format!(
                "Operation {} expects {} path argument(s) ({}), got {}",
                self.operation,
                names.len(),
                names.join(", "),
                args.len()
            ))
            .into());
        }

        for (name, value) in names.iter().zip(args) {
            if value.is_empty() || value.contains(['/', '?', '#']) {
                return Err(ConfigError::new(format!(
                    "Path argument {} of operation {} is empty or contains reserved characters: {:?}",
                    name, self.operation, value
                ))
                .into());
            }
        }

        let mut values = args.iter();
        let rendered = PLACEHOLDER.replace_all(self.path, |_: &regex::Captures<'_>| {
            values.next().cloned().unwrap_or_default()
        });
        Ok(rendered.into_owned())
    }
}

/// Validated set of routes, keyed by operation name.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<&'static str, Route>,
}

impl RouteTable {
    /// Validates and indexes `routes`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for the first invalid route or
    /// duplicated operation name.
    pub fn new(routes: impl IntoIterator<Item = Route>) -> OpenAIResult<Self> {
        let mut table = Self::default();
        for route in routes {
            table.insert(route)?;
        }
        Ok(table)
    }

    /// Validates and adds one route.
    pub fn insert(&mut self, route: Route) -> OpenAIResult<()> {
        route.validate()?;
        if self.routes.contains_key(route.operation) {
            return Err(ConfigError::new(format!(
                "Operation {} is registered twice",
                route.operation
            ))
            .into());
        }
        self.routes.insert(route.operation, route);
        Ok(())
    }

    /// Looks up the route for `operation`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no route is registered.
    pub fn get(&self, operation: &str) -> OpenAIResult<&Route> {
        self.routes.get(operation).ok_or_else(|| {
            ConfigError::new(format!("No route registered for operation {}", operation)).into()
        })
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True if no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Registered operation names, sorted.
    pub fn operations(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.routes.keys().copied().collect();
        names.sort_unstable();
        names
    }
}
