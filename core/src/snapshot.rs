//! The persisted form of a todo list.
//!
//! The storage contract is a JSON array of `{title, completed}` objects in
//! display order. Transient and derived fields (`editing`, `visible`, the
//! edit buffer, item identity) are never persisted. There is no schema
//! version and no migration path; unknown fields in stored records are
//! ignored on load, missing fields take their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from snapshot (de)serialization.
///
/// A parse failure is recoverable by design: callers hydrate an empty list
/// instead of surfacing the error to the user.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The stored string was not a valid snapshot array.
    #[error("malformed persisted snapshot: {0}")]
    Parse(#[source] serde_json::Error),

    /// The snapshot could not be serialized.
    #[error("failed to serialize snapshot: {0}")]
    Encode(#[source] serde_json::Error),
}

/// One persisted list entry: exactly the two durable fields of an item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedItem {
    /// The item's title.
    #[serde(default)]
    pub title: String,
    /// Whether the item was completed.
    #[serde(default)]
    pub completed: bool,
}

impl PersistedItem {
    /// Creates a persisted entry.
    #[must_use]
    pub const fn new(title: String, completed: bool) -> Self {
        Self { title, completed }
    }
}

/// Parses a stored snapshot string.
///
/// # Errors
///
/// Returns [`SnapshotError::Parse`] when the input is not a JSON array of
/// objects. Callers treat that the same as an absent snapshot.
pub fn parse_snapshot(input: &str) -> Result<Vec<PersistedItem>, SnapshotError> {
    serde_json::from_str(input).map_err(SnapshotError::Parse)
}

/// Serializes a snapshot to its stored string form.
///
/// # Errors
///
/// Returns [`SnapshotError::Encode`] if serialization fails. With this data
/// shape that does not happen in practice, but the writer logs rather than
/// panics if it ever does.
pub fn encode_snapshot(items: &[PersistedItem]) -> Result<String, SnapshotError> {
    serde_json::to_string(items).map_err(SnapshotError::Encode)
}
