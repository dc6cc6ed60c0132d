//! End-to-end persistence behavior: hydration, coalescing, flush.

#![allow(clippy::unwrap_used)] // Tests unwrap known-good values

use std::sync::Arc;
use std::time::Duration;

use todomvc_core::{PersistedItem, parse_snapshot};
use todomvc_runtime::{AppConfig, TodoApp};
use todomvc_testing::RecordingStore;

fn config() -> AppConfig {
    AppConfig::default().with_debounce_window(Duration::from_millis(250))
}

#[tokio::test(start_paused = true)]
async fn burst_of_changes_lands_exactly_one_write() {
    let store = Arc::new(RecordingStore::new());
    let mut app = TodoApp::load(store.clone(), config());

    let a = app.add_item("A").unwrap();
    let b = app.add_item("B").unwrap();
    app.set_completed(a, true);
    app.commit_edit(b, "B renamed");
    app.clear_completed();

    tokio::time::sleep(Duration::from_millis(500)).await;

    assert_eq!(store.write_count(), 1);
    let stored = store.last_write("todos").unwrap();
    assert_eq!(
        parse_snapshot(&stored).unwrap(),
        vec![PersistedItem::new("B renamed".to_owned(), false)]
    );
}

#[tokio::test(start_paused = true)]
async fn spaced_changes_each_get_their_own_write() {
    let store = Arc::new(RecordingStore::new());
    let mut app = TodoApp::load(store.clone(), config());

    app.add_item("A");
    tokio::time::sleep(Duration::from_millis(400)).await;
    app.add_item("B");
    tokio::time::sleep(Duration::from_millis(400)).await;

    assert_eq!(store.write_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn transient_changes_never_reach_the_store() {
    let store = Arc::new(RecordingStore::new());
    let mut app = TodoApp::load(store.clone(), config());
    let id = app.add_item("A").unwrap();
    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(store.write_count(), 1);

    app.begin_edit(id);
    app.cancel_edit(id);
    app.set_route_segment("active");
    app.set_route_segment("");
    tokio::time::sleep(Duration::from_millis(400)).await;

    assert_eq!(store.write_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn hydration_round_trip_through_a_real_write() {
    let store = Arc::new(RecordingStore::new());
    let mut app = TodoApp::load(store.clone(), config());
    let a = app.add_item("Buy milk").unwrap();
    app.add_item("Write docs");
    app.set_completed(a, true);
    app.flush();

    let reloaded = TodoApp::load(store, config());
    assert_eq!(reloaded.list().len(), 2);
    assert_eq!(reloaded.list().completed_len(), 1);
    assert_eq!(reloaded.list().items()[0].title(), "Buy milk");
    assert!(reloaded.list().items()[0].completed());
    assert!(!reloaded.list().items()[1].completed());
}

#[tokio::test(start_paused = true)]
async fn seeded_store_hydrates_before_any_write() {
    let store = Arc::new(RecordingStore::with_entry(
        "todos",
        r#"[{"title":"Seeded","completed":true}]"#,
    ));
    let app = TodoApp::load(store.clone(), config());
    assert_eq!(app.list().len(), 1);
    assert!(app.list().all_completed());
    assert_eq!(store.write_count(), 0);
}
