//! List envelopes and cursor parameters.

use serde::{Deserialize, Serialize};

/// Sort order for list endpoints, by `created_at`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Order {
    Asc,
    Desc,
}

/// A page of results from a list endpoint.
///
/// Cursor fields are absent on endpoints that do not paginate (e.g. models).
///
/// # Examples
///
/// ```
/// use simple_openai_core::{Model, Page};
///
/// let page: Page<Model> = serde_json::from_str(r#"{
///     "object": "list",
///     "data": [{"id": "gpt-4o", "object": "model", "created": 1715367049, "owned_by": "system"}]
/// }"#).unwrap();
/// assert_eq!(page.len(), 1);
/// assert!(!page.has_more());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Page<T> {
    /// Object type (always "list")
    object: String,
    /// Items on this page
    data: Vec<T>,
    /// Identifier of the first item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    first_id: Option<String>,
    /// Identifier of the last item, usable as the next `after` cursor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_id: Option<String>,
    /// Whether more items exist past `last_id`
    #[serde(default)]
    #[getter(skip)]
    has_more: bool,
}

impl<T> Page<T> {
    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the page holds no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether more items exist past this page.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Consumes the page, returning its items.
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Iterates over the items on this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
