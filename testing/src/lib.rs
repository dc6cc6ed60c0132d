//! # TodoMVC Testing
//!
//! Testing utilities and helpers for the todo model.
//!
//! This crate provides:
//! - [`ListTest`]: a fluent Given-When-Then harness for list operations
//! - [`RecordingStore`]: a snapshot store that records every write, for
//!   debounce-coalescing assertions
//! - [`invariants`]: assertion helpers for the model's derived-state
//!   invariants
//!
//! ## Example
//!
//! ```
//! use todomvc_core::ListChange;
//! use todomvc_testing::ListTest;
//!
//! ListTest::new()
//!     .given_items(&[("Buy milk", false)])
//!     .when(|list| {
//!         let id = list.items()[0].id();
//!         list.set_completed(id, true)
//!     })
//!     .then_state(|list| {
//!         assert_eq!(list.completed_len(), 1);
//!         assert!(list.all_completed());
//!     })
//!     .then_changes(|changes| {
//!         assert!(matches!(changes[0], ListChange::CompletedChanged { .. }));
//!     })
//!     .run();
//! ```

pub mod invariants;
pub mod store_mocks;

pub use list_test::ListTest;
pub use store_mocks::RecordingStore;
