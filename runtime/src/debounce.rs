//! Trailing-edge coalescing of snapshot writes.
//!
//! Storage is slow compared to the model, so rapid bursts of changes must
//! collapse into a single write of the latest snapshot. Each trigger
//! re-arms the timer and discards whatever write was pending; only when a
//! full window passes without a new trigger does the write fire.

use std::sync::Arc;
use std::time::Duration;

use todomvc_core::{PersistedItem, encode_snapshot};
use tokio::task::JoinHandle;

use crate::store::SnapshotStore;

/// A cancellable scheduled write of the list snapshot.
///
/// `schedule` supersedes any pending write: the old snapshot is simply
/// discarded, never issued. Writes are fire-and-forget — failures are
/// logged, not surfaced.
///
/// Requires a running tokio runtime (the timer task is spawned on it).
pub struct DebouncedWriter {
    store: Arc<dyn SnapshotStore>,
    key: String,
    window: Duration,
    pending: Option<JoinHandle<()>>,
    latest: Option<Vec<PersistedItem>>,
}

impl DebouncedWriter {
    /// Creates a writer targeting `key` in the given store.
    #[must_use]
    pub const fn new(store: Arc<dyn SnapshotStore>, key: String, window: Duration) -> Self {
        Self {
            store,
            key,
            window,
            pending: None,
            latest: None,
        }
    }

    /// Schedules `snapshot` to be written after the debounce window,
    /// cancelling any previously scheduled write.
    pub fn schedule(&mut self, snapshot: Vec<PersistedItem>) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            tracing::trace!(key = %self.key, "superseded pending snapshot write");
        }
        self.latest = Some(snapshot.clone());

        let store = Arc::clone(&self.store);
        let key = self.key.clone();
        let window = self.window;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            write_snapshot(store.as_ref(), &key, &snapshot);
        }));
    }

    /// Cancels the pending timer and writes the latest snapshot
    /// immediately. Used at shutdown so a burst right before exit is not
    /// lost.
    ///
    /// May rewrite a snapshot that already fired; the write is idempotent.
    pub fn flush(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        if let Some(snapshot) = self.latest.take() {
            write_snapshot(self.store.as_ref(), &self.key, &snapshot);
        }
    }

    /// Whether a scheduled write has not fired yet.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for DebouncedWriter {
    fn drop(&mut self) {
        // A pending timer must not outlive the writer.
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

fn write_snapshot(store: &dyn SnapshotStore, key: &str, snapshot: &[PersistedItem]) {
    match encode_snapshot(snapshot) {
        Ok(json) => {
            if let Err(error) = store.write(key, &json) {
                tracing::error!(%key, %error, "snapshot write failed");
            }
        }
        Err(error) => tracing::error!(%key, %error, "snapshot serialization failed"),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)] // Tests unwrap known-good values

    use super::*;
    use crate::store::MemoryStore;
    use todomvc_core::parse_snapshot;

    fn entry(title: &str) -> PersistedItem {
        PersistedItem::new(title.to_owned(), false)
    }

    #[tokio::test(start_paused = true)]
    async fn write_fires_after_the_window() {
        let store = Arc::new(MemoryStore::new());
        let mut writer =
            DebouncedWriter::new(store.clone(), "todos".to_owned(), Duration::from_millis(250));

        writer.schedule(vec![entry("A")]);
        assert!(writer.has_pending());
        assert_eq!(store.read("todos").unwrap(), None);

        tokio::time::sleep(Duration::from_millis(300)).await;
        let stored = store.read("todos").unwrap().unwrap();
        assert_eq!(parse_snapshot(&stored).unwrap(), vec![entry("A")]);
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_triggers_coalesce_to_one_write_of_the_latest() {
        let store = Arc::new(MemoryStore::new());
        let mut writer =
            DebouncedWriter::new(store.clone(), "todos".to_owned(), Duration::from_millis(250));

        writer.schedule(vec![entry("A")]);
        tokio::time::sleep(Duration::from_millis(100)).await;
        writer.schedule(vec![entry("A"), entry("B")]);
        tokio::time::sleep(Duration::from_millis(100)).await;
        writer.schedule(vec![entry("A"), entry("B"), entry("C")]);

        // Two windows after the first trigger: only the last snapshot made
        // it to storage.
        tokio::time::sleep(Duration::from_millis(300)).await;
        let stored = store.read("todos").unwrap().unwrap();
        assert_eq!(
            parse_snapshot(&stored).unwrap(),
            vec![entry("A"), entry("B"), entry("C")]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn flush_writes_immediately() {
        let store = Arc::new(MemoryStore::new());
        let mut writer =
            DebouncedWriter::new(store.clone(), "todos".to_owned(), Duration::from_millis(250));

        writer.schedule(vec![entry("A")]);
        writer.flush();

        let stored = store.read("todos").unwrap().unwrap();
        assert_eq!(parse_snapshot(&stored).unwrap(), vec![entry("A")]);
        assert!(!writer.has_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn flush_without_pending_is_a_noop() {
        let store = Arc::new(MemoryStore::new());
        let mut writer =
            DebouncedWriter::new(store.clone(), "todos".to_owned(), Duration::from_millis(250));
        writer.flush();
        assert_eq!(store.read("todos").unwrap(), None);
    }
}
