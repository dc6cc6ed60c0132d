//! Typed change notifications emitted by list operations.
//!
//! Every mutating operation on [`TodoList`](crate::TodoList) returns the
//! [`ListChange`]s it produced, in the order they happened. The model never
//! renders or persists anything itself; a shell dispatches these values to
//! whoever subscribed (a view layer) and schedules a persistence write when
//! any of them affects the serialized snapshot.
//!
//! Notifications are only emitted for actual value changes: setting the
//! route to its current value, or toggling a flag to the value it already
//! holds, produces nothing.

use crate::item::ItemId;
use crate::route::Route;
use smallvec::SmallVec;

/// The change list returned by one list operation.
///
/// Most operations emit at most a handful of notifications; bulk operations
/// spill to the heap as needed.
pub type Changes = SmallVec<[ListChange; 4]>;

/// One observable change to the list or one of its items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListChange {
    /// An item was appended to the sequence.
    ItemAdded {
        /// Identity of the new item.
        id: ItemId,
        /// Position it was inserted at (always the end).
        index: usize,
    },
    /// An item left the sequence.
    ItemRemoved {
        /// Identity of the removed item.
        id: ItemId,
        /// Position it occupied at removal time.
        index: usize,
    },
    /// An item's title changed (via direct set or a committed edit).
    TitleChanged {
        /// The item whose title changed.
        id: ItemId,
        /// The new title.
        title: String,
    },
    /// An item's completion flag changed through an individual toggle.
    ///
    /// The bulk toggle writes the flag silently and does not emit this; its
    /// outcome is announced once via [`ListChange::CountsChanged`].
    CompletedChanged {
        /// The item that was toggled.
        id: ItemId,
        /// The new flag value.
        completed: bool,
    },
    /// An item entered or left edit mode.
    EditingChanged {
        /// The item whose edit mode changed.
        id: ItemId,
        /// The new edit-mode flag.
        editing: bool,
    },
    /// An item's derived visibility flipped (its own `completed` changed, or
    /// the list's route did).
    VisibleChanged {
        /// The item whose visibility changed.
        id: ItemId,
        /// The new visibility.
        visible: bool,
    },
    /// The list's route filter changed.
    RouteChanged {
        /// The new route.
        route: Route,
    },
    /// The list's derived aggregates changed.
    ///
    /// Emitted once per operation, after the mutation is fully applied.
    /// `all_completed` has no dedicated notification of its own; it rides
    /// here so a toggle-all control can still bind to it.
    CountsChanged {
        /// Number of items.
        length: usize,
        /// Number of completed items.
        completed_len: usize,
        /// Number of items left to do (`length - completed_len`).
        left_len: usize,
        /// Whether every item is completed (vacuously true when empty).
        all_completed: bool,
    },
}

impl ListChange {
    /// Whether this change alters the persisted `{title, completed}`
    /// snapshot and therefore needs a (debounced) storage write.
    ///
    /// Edit mode, visibility, and the route filter are transient view state
    /// and never persisted.
    #[must_use]
    pub const fn is_persistent(&self) -> bool {
        match self {
            Self::ItemAdded { .. }
            | Self::ItemRemoved { .. }
            | Self::TitleChanged { .. }
            | Self::CompletedChanged { .. }
            | Self::CountsChanged { .. } => true,
            Self::EditingChanged { .. }
            | Self::VisibleChanged { .. }
            | Self::RouteChanged { .. } => false,
        }
    }
}
