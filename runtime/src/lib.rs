//! # TodoMVC Runtime
//!
//! The imperative shell around [`todomvc_core`]: everything with a side
//! effect lives here.
//!
//! - [`SnapshotStore`]: the key-value persistence boundary, with an
//!   in-memory and a JSON-file implementation
//! - [`DebouncedWriter`]: trailing-edge coalescing of snapshot writes —
//!   many rapid changes produce exactly one storage write of the latest
//!   state
//! - [`TodoApp`]: the application-state handle that owns the list, fans
//!   typed change notifications out to subscribers, and drives persistence
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use todomvc_runtime::{AppConfig, MemoryStore, TodoApp};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = Arc::new(MemoryStore::new());
//! let mut app = TodoApp::load(store, AppConfig::default());
//!
//! let mut changes = app.subscribe();
//! let id = app.add_item("Buy milk").unwrap();
//! app.set_completed(id, true);
//! app.flush();
//!
//! assert!(changes.try_recv().is_ok());
//! # }
//! ```

pub mod app;
pub mod debounce;
pub mod store;

pub use app::{AppConfig, TodoApp};
pub use debounce::DebouncedWriter;
pub use store::{JsonFileStore, MemoryStore, SnapshotStore, StoreError};
