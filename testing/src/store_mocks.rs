//! Mock snapshot stores for observing persistence behavior.

use std::sync::Mutex;

use todomvc_runtime::{SnapshotStore, StoreError};

/// A [`SnapshotStore`] that records every write it receives.
///
/// Reads serve the most recent write (or a pre-seeded value), so it also
/// behaves as a working store. The write log is what debounce tests
/// assert against: N rapid triggers must land exactly one entry.
#[derive(Debug, Default)]
pub struct RecordingStore {
    seeded: Option<(String, String)>,
    writes: Mutex<Vec<(String, String)>>,
}

impl RecordingStore {
    /// Creates an empty store with no seeded value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose first read of `key` returns `value`.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            seeded: Some((key.into(), value.into())),
            writes: Mutex::new(Vec::new()),
        }
    }

    /// Every `(key, value)` write, in order.
    #[must_use]
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Number of writes received so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    /// The most recent value written under `key`, if any.
    #[must_use]
    pub fn last_write(&self, key: &str) -> Option<String> {
        self.writes
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }
}

impl SnapshotStore for RecordingStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        if let Some(value) = self.last_write(key) {
            return Ok(Some(value));
        }
        Ok(self
            .seeded
            .as_ref()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone()))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.writes
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push((key.to_owned(), value.to_owned()));
        Ok(())
    }
}
