//! Flattens request DTOs into wire-named query parameters.

use serde::Serialize;
use serde_json::Value;
use simple_openai_error::{ConfigError, JsonError, OpenAIResult};

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Serializes `value` and returns its top-level fields as `(wire_name, value)` pairs.
///
/// `null` fields are skipped. Strings are kept verbatim, numbers and booleans
/// are rendered with `to_string`, and enum unit variants appear under their
/// serde wire name.
///
/// # Errors
///
/// Returns a configuration error if `value` does not serialize to a JSON
/// object, or if a field has no scalar wire form (an array, a nested object,
/// or an enum variant carrying data).
///
/// # Examples
///
/// ```
/// use simple_openai_client::to_field_map;
/// use simple_openai_core::{Order, ThreadMessageQuery};
///
/// let query = ThreadMessageQuery::builder().limit(5u32).order(Order::Desc).build().unwrap();
/// let pairs = to_field_map(&query).unwrap();
/// assert_eq!(pairs, vec![
///     ("limit".to_string(), "5".to_string()),
///     ("order".to_string(), "desc".to_string()),
/// ]);
/// ```
pub fn to_field_map<T>(value: &T) -> OpenAIResult<Vec<(String, String)>>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_value(value)
        .map_err(|e| JsonError::new(format!("Failed to encode query parameters: {}", e)))?;

    let fields = match json {
        Value::Object(fields) => fields,
        other => {
            return Err(ConfigError::new(format!(
                "Query parameters must serialize to an object, got {}",
                value_kind(&other)
            ))
            .into());
        }
    };

    let mut pairs = Vec::with_capacity(fields.len());
    for (name, field) in fields {
        let rendered = match field {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            other @ (Value::Array(_) | Value::Object(_)) => {
                return Err(ConfigError::new(format!(
                    "Field {} has no scalar wire representation (found {})",
                    name,
                    value_kind(&other)
                ))
                .into());
            }
        };
        pairs.push((name, rendered));
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    #[serde(rename_all = "snake_case")]
    enum Filter {
        Recent,
        Since(u64),
    }

    #[derive(Serialize)]
    struct Params {
        run_id: Option<String>,
        filter: Filter,
        include_deleted: bool,
    }

    #[test]
    fn test_unit_variant_uses_wire_name() {
        let params = Params {
            run_id: None,
            filter: Filter::Recent,
            include_deleted: true,
        };
        let pairs = to_field_map(&params).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("filter".to_string(), "recent".to_string()),
                ("include_deleted".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_variant_without_scalar_wire_name_is_config_error() {
        let params = Params {
            run_id: Some("run_1".to_string()),
            filter: Filter::Since(42),
            include_deleted: false,
        };
        let err = to_field_map(&params).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("filter"));
    }

    #[test]
    fn test_non_object_root_is_config_error() {
        let err = to_field_map(&vec![1, 2, 3]).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("array"));
    }
}
