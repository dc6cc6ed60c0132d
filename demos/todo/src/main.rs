//! Scripted CLI walk-through of the todo model.
//!
//! Hydrates from a JSON file store, performs a typical session (add,
//! complete, filter, edit, clear), prints the change notifications a view
//! layer would receive, and flushes the pending snapshot on exit.
//!
//! Run it twice: the second run starts from the state the first one left
//! behind.

use anyhow::Result;
use todomvc_core::ListChange;
use todomvc_runtime::{AppConfig, JsonFileStore, TodoApp};
use tokio::sync::broadcast;

fn print_list(app: &TodoApp) {
    let list = app.list();
    println!(
        "  {} item(s), {} completed, {} left (route: {})",
        list.len(),
        list.completed_len(),
        list.left_len(),
        list.route()
    );
    for item in list.items() {
        let status = if item.completed() { "✓" } else { " " };
        let hidden = if item.visible() { "" } else { "  (hidden)" };
        println!("  [{}] {}{}", status, item.title(), hidden);
    }
}

fn drain_changes(rx: &mut broadcast::Receiver<ListChange>) {
    while let Ok(change) = rx.try_recv() {
        println!("  -> {change:?}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Todo Demo ===\n");

    let store = std::sync::Arc::new(JsonFileStore::new("demo-data"));
    let mut app = TodoApp::load(store, AppConfig::default());
    let mut changes = app.subscribe();

    println!("Loaded state:");
    print_list(&app);

    println!("\nAdding todos...");
    let milk = app
        .add_item("Buy milk")
        .ok_or_else(|| anyhow::anyhow!("valid title was rejected"))?;
    app.add_item("Write documentation");
    app.add_item("Ship the release");
    drain_changes(&mut changes);
    print_list(&app);

    // Whitespace-only submissions are ignored, not errors.
    assert!(app.add_item("   ").is_none());

    println!("\nCompleting 'Buy milk'...");
    app.set_completed(milk, true);
    drain_changes(&mut changes);
    print_list(&app);

    println!("\nSwitching to the 'active' filter...");
    app.set_route_segment("active");
    drain_changes(&mut changes);
    print_list(&app);

    println!("\nEditing a title (empty commit deletes)...");
    app.begin_edit(milk);
    app.commit_edit(milk, "   ");
    drain_changes(&mut changes);
    print_list(&app);

    println!("\nToggle-all, then clear completed...");
    app.toggle_all_completed(true);
    app.clear_completed();
    drain_changes(&mut changes);
    print_list(&app);

    app.flush();
    println!("\nSnapshot flushed to demo-data/todos.json");
    println!("\n=== Demo Complete ===");
    Ok(())
}
