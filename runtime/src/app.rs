//! The application-state handle.
//!
//! One [`TodoApp`] is constructed at startup, hydrated from the snapshot
//! store, and handed to the collaborators that drive it: the view layer
//! subscribes to change notifications, the router calls
//! [`TodoApp::set_route_segment`], and persistence happens behind the
//! scenes through the debounced writer.

use std::sync::Arc;
use std::time::Duration;

use todomvc_core::{
    Changes, ItemId, ListChange, Route, TodoList, parse_snapshot,
};
use tokio::sync::broadcast;

use crate::debounce::DebouncedWriter;
use crate::store::SnapshotStore;

/// Tuning for the application handle.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Storage key the snapshot lives under.
    pub storage_key: String,
    /// Trailing-edge debounce window for persistence writes.
    pub debounce_window: Duration,
    /// Capacity of the change broadcast channel.
    pub broadcast_capacity: usize,
}

impl AppConfig {
    /// Creates the default configuration (`"todos"` key, 250 ms window).
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage_key: "todos".to_owned(),
            debounce_window: Duration::from_millis(250),
            broadcast_capacity: 64,
        }
    }

    /// Sets the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Sets the debounce window. Not correctness-critical; purely a
    /// write-rate tuning knob.
    #[must_use]
    pub const fn with_debounce_window(mut self, window: Duration) -> Self {
        self.debounce_window = window;
        self
    }

    /// Sets the broadcast channel capacity.
    #[must_use]
    pub const fn with_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.broadcast_capacity = capacity;
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the [`TodoList`] and wires it to the outside world.
///
/// Every operation forwards to the list, publishes the returned change
/// notifications to subscribers, and — when any change affects the
/// serialized snapshot — schedules a debounced persistence write.
pub struct TodoApp {
    list: TodoList,
    writer: DebouncedWriter,
    changes: broadcast::Sender<ListChange>,
}

impl TodoApp {
    /// Constructs the handle, hydrating the list from the store.
    ///
    /// An absent snapshot, a read failure, or a malformed snapshot all
    /// yield an empty list — never a fatal error (the store is the only
    /// copy of the data; there is nothing better to do than start fresh).
    #[must_use]
    pub fn load(store: Arc<dyn SnapshotStore>, config: AppConfig) -> Self {
        let list = match store.read(&config.storage_key) {
            Ok(Some(raw)) => match parse_snapshot(&raw) {
                Ok(entries) => {
                    tracing::debug!(items = entries.len(), "hydrated persisted todos");
                    TodoList::from_snapshot(entries)
                }
                Err(error) => {
                    tracing::warn!(%error, "malformed persisted snapshot, starting empty");
                    TodoList::new()
                }
            },
            Ok(None) => TodoList::new(),
            Err(error) => {
                tracing::warn!(%error, "snapshot read failed, starting empty");
                TodoList::new()
            }
        };
        let (changes, _) = broadcast::channel(config.broadcast_capacity);
        let writer = DebouncedWriter::new(store, config.storage_key, config.debounce_window);
        Self {
            list,
            writer,
            changes,
        }
    }

    /// Read access to the list.
    #[must_use]
    pub const fn list(&self) -> &TodoList {
        &self.list
    }

    /// Subscribes to change notifications.
    ///
    /// Every notification emitted by subsequent operations is delivered to
    /// every receiver, in emission order.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ListChange> {
        self.changes.subscribe()
    }

    /// Submits a new todo from raw input.
    ///
    /// This is the submission boundary: the text is trimmed here, and
    /// empty input is simply ignored (`None`) — not an error.
    pub fn add_item(&mut self, raw_title: &str) -> Option<ItemId> {
        let title = raw_title.trim();
        if title.is_empty() {
            return None;
        }
        let (id, changes) = self.list.add_item(title);
        self.dispatch(changes);
        Some(id)
    }

    /// Removes an item (explicit delete action).
    pub fn remove_item(&mut self, id: ItemId) {
        let changes = self.list.remove_item(id);
        self.dispatch(changes);
    }

    /// Handles an item's removal intent.
    pub fn request_removal(&mut self, id: ItemId) {
        let changes = self.list.request_removal(id);
        self.dispatch(changes);
    }

    /// Replaces an item's title directly.
    pub fn set_title(&mut self, id: ItemId, title: impl Into<String>) {
        let changes = self.list.set_title(id, title);
        self.dispatch(changes);
    }

    /// Toggles one item's completion flag.
    pub fn set_completed(&mut self, id: ItemId, completed: bool) {
        let changes = self.list.set_completed(id, completed);
        self.dispatch(changes);
    }

    /// Puts an item into edit mode.
    pub fn begin_edit(&mut self, id: ItemId) {
        let changes = self.list.begin_edit(id);
        self.dispatch(changes);
    }

    /// Commits an edit; trimmed-empty input removes the item.
    pub fn commit_edit(&mut self, id: ItemId, raw: &str) {
        let changes = self.list.commit_edit(id, raw);
        self.dispatch(changes);
    }

    /// Cancels an in-progress edit.
    pub fn cancel_edit(&mut self, id: ItemId) {
        let changes = self.list.cancel_edit(id);
        self.dispatch(changes);
    }

    /// Sets every item's completion flag (the toggle-all control).
    pub fn toggle_all_completed(&mut self, completed: bool) {
        let changes = self.list.toggle_all_completed(completed);
        self.dispatch(changes);
    }

    /// Removes every completed item.
    pub fn clear_completed(&mut self) {
        let changes = self.list.clear_completed();
        self.dispatch(changes);
    }

    /// Sets the route filter. The router's entry point.
    pub fn set_route(&mut self, route: Route) {
        let changes = self.list.set_route(route);
        self.dispatch(changes);
    }

    /// Sets the route from a raw router path segment.
    pub fn set_route_segment(&mut self, segment: &str) {
        self.set_route(Route::from_segment(segment));
    }

    /// Writes any pending snapshot immediately. Call before shutdown.
    pub fn flush(&mut self) {
        self.writer.flush();
    }

    fn dispatch(&mut self, changes: Changes) {
        if changes.is_empty() {
            return;
        }
        let persist = changes.iter().any(ListChange::is_persistent);
        for change in changes {
            // Send only fails when no receiver exists, which is fine — the
            // view layer is optional.
            let _ = self.changes.send(change);
        }
        if persist {
            self.writer.schedule(self.list.snapshot());
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)] // Tests unwrap known-good values

    use super::*;
    use crate::store::MemoryStore;
    use todomvc_core::PersistedItem;

    fn drain(rx: &mut broadcast::Receiver<ListChange>) -> Vec<ListChange> {
        let mut out = Vec::new();
        while let Ok(change) = rx.try_recv() {
            out.push(change);
        }
        out
    }

    #[tokio::test(start_paused = true)]
    async fn load_hydrates_from_store() {
        let store = Arc::new(MemoryStore::with_entry(
            "todos",
            r#"[{"title":"A","completed":false},{"title":"B","completed":true}]"#,
        ));
        let app = TodoApp::load(store, AppConfig::default());
        assert_eq!(app.list().len(), 2);
        assert_eq!(app.list().completed_len(), 1);
        assert_eq!(app.list().items()[1].title(), "B");
    }

    #[tokio::test(start_paused = true)]
    async fn load_recovers_from_malformed_snapshot() {
        let store = Arc::new(MemoryStore::with_entry("todos", "{broken"));
        let app = TodoApp::load(store, AppConfig::default());
        assert!(app.list().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn load_with_absent_snapshot_starts_empty() {
        let app = TodoApp::load(Arc::new(MemoryStore::new()), AppConfig::default());
        assert!(app.list().is_empty());
        assert!(app.list().all_completed());
    }

    #[tokio::test(start_paused = true)]
    async fn empty_submission_is_ignored() {
        let mut app = TodoApp::load(Arc::new(MemoryStore::new()), AppConfig::default());
        assert_eq!(app.add_item("   "), None);
        assert!(app.list().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn submission_trims_the_title() {
        let mut app = TodoApp::load(Arc::new(MemoryStore::new()), AppConfig::default());
        let id = app.add_item("  Buy milk  ").unwrap();
        assert_eq!(app.list().get(id).unwrap().title(), "Buy milk");
    }

    #[tokio::test(start_paused = true)]
    async fn changes_reach_subscribers_in_order() {
        let mut app = TodoApp::load(Arc::new(MemoryStore::new()), AppConfig::default());
        let mut rx = app.subscribe();

        let id = app.add_item("Task").unwrap();
        app.set_completed(id, true);

        let seen = drain(&mut rx);
        assert!(matches!(seen[0], ListChange::ItemAdded { .. }));
        assert!(matches!(seen[1], ListChange::CountsChanged { .. }));
        assert!(matches!(
            seen[2],
            ListChange::CompletedChanged {
                completed: true,
                ..
            }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn persistent_changes_schedule_a_coalesced_write() {
        let store = Arc::new(MemoryStore::new());
        let mut app = TodoApp::load(store.clone(), AppConfig::default());

        app.add_item("A");
        app.add_item("B");
        app.toggle_all_completed(true);
        assert_eq!(store.read("todos").unwrap(), None);

        tokio::time::sleep(Duration::from_millis(300)).await;
        let stored = store.read("todos").unwrap().unwrap();
        assert_eq!(
            parse_snapshot(&stored).unwrap(),
            vec![
                PersistedItem::new("A".to_owned(), true),
                PersistedItem::new("B".to_owned(), true),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn route_changes_do_not_touch_storage() {
        let store = Arc::new(MemoryStore::new());
        let mut app = TodoApp::load(store.clone(), AppConfig::default());

        app.set_route_segment("active");
        app.set_route_segment("completed");
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(store.read("todos").unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn flush_persists_before_shutdown() {
        let store = Arc::new(MemoryStore::new());
        let mut app = TodoApp::load(store.clone(), AppConfig::default());

        app.add_item("Task");
        app.flush();
        let stored = store.read("todos").unwrap().unwrap();
        assert_eq!(
            parse_snapshot(&stored).unwrap(),
            vec![PersistedItem::new("Task".to_owned(), false)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn router_segment_round_trip() {
        let mut app = TodoApp::load(Arc::new(MemoryStore::new()), AppConfig::default());
        app.set_route_segment("active");
        assert_eq!(app.list().route(), Route::Active);
        app.set_route_segment("");
        assert_eq!(app.list().route(), Route::All);
    }
}
