//! Deletion status returned by delete endpoints.

use serde::{Deserialize, Serialize};

/// Confirmation that an object was deleted.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct Deleted {
    /// Identifier of the deleted object
    id: String,
    /// Object type (e.g. "thread.message.deleted")
    object: String,
    /// Whether the deletion happened
    deleted: bool,
}
