//! A single invocation of a routed operation.

use crate::to_field_map;
use serde::Serialize;
use simple_openai_error::{JsonError, OpenAIResult};

/// Arguments for one call: operation name, path arguments, body and query.
///
/// # Examples
///
/// ```
/// use simple_openai_client::Call;
/// use simple_openai_core::ThreadMessageModifyRequest;
///
/// let call = Call::new("thread_messages.modify")
///     .arg("thread_1")
///     .arg("msg_1")
///     .json(&ThreadMessageModifyRequest::default())
///     .unwrap();
/// assert_eq!(call.operation(), "thread_messages.modify");
/// assert_eq!(call.args().len(), 2);
/// ```
///
/// Query parameters are appended with [`Call::query`] and read back with
/// [`Call::query_params`]:
///
/// ```
/// use simple_openai_client::Call;
/// use simple_openai_core::{Order, ThreadMessageQuery};
///
/// let query = ThreadMessageQuery::builder().order(Order::Asc).build().unwrap();
/// let call = Call::new("thread_messages.get_list")
///     .arg("thread_1")
///     .query(&query)
///     .unwrap();
/// assert_eq!(call.query_params(), &[("order".to_string(), "asc".to_string())]);
/// ```
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct Call {
    /// Operation name, looked up in the route table
    #[getter(skip)]
    operation: &'static str,
    /// Path arguments, in placeholder order
    args: Vec<String>,
    /// Encoded JSON body
    body: Option<serde_json::Value>,
    /// Query parameters
    #[getter(skip)]
    query: Vec<(String, String)>,
}

impl Call {
    /// Starts a call to `operation`.
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            args: Vec::new(),
            body: None,
            query: Vec::new(),
        }
    }

    /// Operation name.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Query parameters appended so far.
    pub fn query_params(&self) -> &[(String, String)] {
        &self.query
    }

    /// Appends a path argument.
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Sets the JSON body.
    ///
    /// # Errors
    ///
    /// Returns a JSON error if `body` cannot be serialized.
    pub fn json<B>(mut self, body: &B) -> OpenAIResult<Self>
    where
        B: Serialize + ?Sized,
    {
        let encoded = serde_json::to_value(body).map_err(|e| {
            JsonError::new(format!(
                "Failed to encode body for {}: {}",
                self.operation, e
            ))
        })?;
        self.body = Some(encoded);
        Ok(self)
    }

    /// Appends query parameters taken from the fields of `params`.
    ///
    /// # Errors
    ///
    /// See [`to_field_map`].
    pub fn query<Q>(mut self, params: &Q) -> OpenAIResult<Self>
    where
        Q: Serialize + ?Sized,
    {
        self.query.extend(to_field_map(params)?);
        Ok(self)
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        &'static str,
        Vec<String>,
        Option<serde_json::Value>,
        Vec<(String, String)>,
    ) {
        (self.operation, self.args, self.body, self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Paging {
        after: Option<String>,
        limit: u32,
    }

    #[test]
    fn test_query_appends_and_reads_back() {
        let call = Call::new("models.get_list")
            .query(&Paging {
                after: None,
                limit: 5,
            })
            .unwrap()
            .query(&Paging {
                after: Some("model_1".to_string()),
                limit: 10,
            })
            .unwrap();

        assert_eq!(
            call.query_params(),
            &[
                ("limit".to_string(), "5".to_string()),
                ("after".to_string(), "model_1".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
        assert!(call.body().is_none());
        assert!(call.args().is_empty());
    }
}
