//! Models available to the account.

use serde::{Deserialize, Serialize};

/// A model offered by the API.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct Model {
    /// Model identifier (e.g. "gpt-4o")
    id: String,
    /// Object type (always "model")
    object: String,
    /// Unix timestamp (seconds) of creation
    created: i64,
    /// Owning organization
    owned_by: String,
}
