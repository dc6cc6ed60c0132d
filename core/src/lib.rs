//! # TodoMVC Core
//!
//! Model layer for the reactive todo list.
//!
//! This crate holds the two domain entities — [`TodoItem`] and [`TodoList`] —
//! plus everything they need to stay observable and persistable:
//!
//! - **State**: an ordered list of items, a [`Route`] filter, and the cached
//!   aggregates (`completed_len`, `all_completed`) derived from them
//! - **Change notifications**: every mutating operation returns the typed
//!   [`ListChange`]s it produced, for a view layer to subscribe to
//! - **Snapshots**: the `{title, completed}` persisted form and its
//!   (de)serialization
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell: all mutation is synchronous and
//!   in-place; side effects (rendering, persistence) are driven by the
//!   returned change list, never performed here
//! - Derive on mutation: the handful of derived fields (`visible`,
//!   `completed_len`, `left_len`, `all_completed`) are recomputed at fixed
//!   points inside each operation, not through a generic dependency engine
//! - The list owns its items: an item never removes itself; it signals a
//!   removal intent and the owning list performs the structural change
//!
//! ## Example
//!
//! ```
//! use todomvc_core::{Route, TodoList};
//!
//! let mut list = TodoList::new();
//! let (id, _changes) = list.add_item("Buy milk");
//!
//! let changes = list.set_completed(id, true);
//! assert!(changes.iter().any(|c| c.is_persistent()));
//! assert_eq!(list.completed_len(), 1);
//! assert_eq!(list.left_len(), 0);
//!
//! // Filtering hides the completed item without touching it directly.
//! list.set_route(Route::Active);
//! assert!(!list.items()[0].visible());
//! ```

pub mod change;
pub mod item;
pub mod list;
pub mod route;
pub mod snapshot;

pub use change::{Changes, ListChange};
pub use item::{EditOutcome, ItemId, TodoItem};
pub use list::TodoList;
pub use route::Route;
pub use snapshot::{PersistedItem, SnapshotError, encode_snapshot, parse_snapshot};
