//! The ordered todo collection and its derived aggregates.

use crate::change::{Changes, ListChange};
use crate::item::{EditOutcome, ItemId, TodoItem};
use crate::route::Route;
use crate::snapshot::PersistedItem;
use smallvec::smallvec;

/// An ordered sequence of [`TodoItem`]s plus derived aggregate state.
///
/// Insertion order is display order. The aggregates (`completed_len`,
/// `all_completed`) are cached and re-derived inside every mutating
/// operation, strictly after the mutation is applied:
///
/// 1. `all_completed` — every item completed (vacuously true when empty)
/// 2. `completed_len` — count of completed items
/// 3. one [`ListChange::CountsChanged`] notification if anything moved
///
/// `len` and `left_len` are computed on read from the sequence and the
/// cached count.
///
/// Every mutating operation returns the [`Changes`] it produced so an
/// imperative shell can notify subscribers and schedule persistence.
#[derive(Clone, Debug)]
pub struct TodoList {
    items: Vec<TodoItem>,
    route: Route,
    completed_len: usize,
    all_completed: bool,
}

impl TodoList {
    /// Creates an empty list with the [`Route::All`] filter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            route: Route::All,
            completed_len: 0,
            // Vacuous truth on the empty list, matching `every` semantics.
            all_completed: true,
        }
    }

    /// Hydrates a list from persisted entries.
    ///
    /// Transient state resets to defaults: nothing is in edit mode and the
    /// route starts at [`Route::All`], so every item is visible. Hydration
    /// is not a user mutation and emits no change notifications.
    #[must_use]
    pub fn from_snapshot(entries: Vec<PersistedItem>) -> Self {
        let items: Vec<TodoItem> = entries
            .into_iter()
            .map(|entry| TodoItem::with_completed(entry.title, entry.completed))
            .collect();
        let completed_len = items.iter().filter(|item| item.completed()).count();
        let all_completed = completed_len == items.len();
        Self {
            items,
            route: Route::All,
            completed_len,
            all_completed,
        }
    }

    /// Produces the persisted form: the durable fields of every item, in
    /// display order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<PersistedItem> {
        self.items
            .iter()
            .map(|item| PersistedItem::new(item.title().to_owned(), item.completed()))
            .collect()
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of completed items.
    #[must_use]
    pub const fn completed_len(&self) -> usize {
        self.completed_len
    }

    /// Number of items left to do.
    #[must_use]
    pub fn left_len(&self) -> usize {
        self.items.len() - self.completed_len
    }

    /// Whether every item is completed (vacuously true when empty).
    #[must_use]
    pub const fn all_completed(&self) -> bool {
        self.all_completed
    }

    /// The current route filter.
    #[must_use]
    pub const fn route(&self) -> Route {
        self.route
    }

    /// The items in display order.
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Looks up an item by identity.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Appends a new item with the given title.
    ///
    /// The caller validates at the submission boundary: the title must
    /// already be trimmed and non-empty. This operation performs no
    /// trimming of its own.
    pub fn add_item(&mut self, title: impl Into<String>) -> (ItemId, Changes) {
        let title = title.into();
        debug_assert!(
            !title.trim().is_empty(),
            "titles must be validated before insertion"
        );
        let mut item = TodoItem::new(title);
        item.recompute_visible(self.route);
        let id = item.id();
        let index = self.items.len();
        self.items.push(item);

        let mut changes: Changes = smallvec![ListChange::ItemAdded { id, index }];
        self.refresh_aggregates(true, &mut changes);
        (id, changes)
    }

    /// Removes an item by identity.
    ///
    /// The item must belong to this list. Removing a foreign or already
    /// removed id is a contract violation by the caller: it trips a debug
    /// assertion and is a silent no-op in release builds.
    pub fn remove_item(&mut self, id: ItemId) -> Changes {
        let Some(index) = self.items.iter().position(|item| item.id() == id) else {
            debug_assert!(false, "removal of an item that is not a member");
            return Changes::new();
        };
        self.items.remove(index);

        let mut changes: Changes = smallvec![ListChange::ItemRemoved { id, index }];
        self.refresh_aggregates(true, &mut changes);
        changes
    }

    /// Handles an item's removal intent (explicit delete action).
    ///
    /// Items never remove themselves; this is the single path by which an
    /// intent becomes a structural change.
    pub fn request_removal(&mut self, id: ItemId) -> Changes {
        self.remove_item(id)
    }

    /// Replaces an item's title directly (no edit-mode involvement, no
    /// empty-title policy — that lives at the commit boundary).
    pub fn set_title(&mut self, id: ItemId, title: impl Into<String>) -> Changes {
        let Some(item) = self.member_mut(id) else {
            return Changes::new();
        };
        if item.set_title(title.into()) {
            smallvec![ListChange::TitleChanged {
                id,
                title: item.title().to_owned(),
            }]
        } else {
            Changes::new()
        }
    }

    /// Toggles one item's completion flag.
    pub fn set_completed(&mut self, id: ItemId, completed: bool) -> Changes {
        let route = self.route;
        let Some(item) = self.member_mut(id) else {
            return Changes::new();
        };
        if !item.set_completed(completed) {
            return Changes::new();
        }
        let mut changes: Changes = smallvec![ListChange::CompletedChanged { id, completed }];
        if item.recompute_visible(route) {
            changes.push(ListChange::VisibleChanged {
                id,
                visible: item.visible(),
            });
        }
        self.refresh_aggregates(false, &mut changes);
        changes
    }

    /// Puts an item into edit mode, seeding its edit buffer with the
    /// current title.
    pub fn begin_edit(&mut self, id: ItemId) -> Changes {
        let Some(item) = self.member_mut(id) else {
            return Changes::new();
        };
        if item.begin_edit() {
            smallvec![ListChange::EditingChanged { id, editing: true }]
        } else {
            Changes::new()
        }
    }

    /// Commits an edit with the raw text from the view.
    ///
    /// Trimmed non-empty text becomes the new title and the item leaves
    /// edit mode. Trimmed-empty text is a deletion intent: the item is
    /// removed from the list.
    pub fn commit_edit(&mut self, id: ItemId, raw: &str) -> Changes {
        let outcome = {
            let Some(item) = self.member_mut(id) else {
                return Changes::new();
            };
            let was_editing = item.editing();
            let outcome = item.commit_edit(raw);
            (was_editing, outcome)
        };
        match outcome {
            (was_editing, EditOutcome::Committed { title_changed }) => {
                let mut changes = Changes::new();
                if title_changed {
                    if let Some(item) = self.get(id) {
                        changes.push(ListChange::TitleChanged {
                            id,
                            title: item.title().to_owned(),
                        });
                    }
                }
                if was_editing {
                    changes.push(ListChange::EditingChanged { id, editing: false });
                }
                changes
            }
            (_, EditOutcome::RemovalRequested) => self.remove_item(id),
        }
    }

    /// Leaves edit mode without touching the title.
    pub fn cancel_edit(&mut self, id: ItemId) -> Changes {
        let Some(item) = self.member_mut(id) else {
            return Changes::new();
        };
        if item.cancel_edit() {
            smallvec![ListChange::EditingChanged { id, editing: false }]
        } else {
            Changes::new()
        }
    }

    /// Sets every item's completion flag at once.
    ///
    /// Per-item writes are silent — no [`ListChange::CompletedChanged`] per
    /// item; the aggregate outcome is announced once via
    /// [`ListChange::CountsChanged`]. Visibility still re-derives per item.
    ///
    /// The counts are assigned directly from the known outcome instead of
    /// recounting; the recount stays the authoritative definition and is
    /// checked in debug builds.
    pub fn toggle_all_completed(&mut self, completed: bool) -> Changes {
        let route = self.route;
        let mut changes = Changes::new();
        for item in &mut self.items {
            item.set_completed(completed);
            if item.recompute_visible(route) {
                changes.push(ListChange::VisibleChanged {
                    id: item.id(),
                    visible: item.visible(),
                });
            }
        }

        let completed_len = if completed { self.items.len() } else { 0 };
        let all_completed = completed || self.items.is_empty();
        debug_assert_eq!(
            completed_len,
            self.items.iter().filter(|item| item.completed()).count()
        );
        if completed_len != self.completed_len || all_completed != self.all_completed {
            self.completed_len = completed_len;
            self.all_completed = all_completed;
            changes.push(self.counts_change());
        }
        changes
    }

    /// Removes every completed item, preserving the relative order of the
    /// rest.
    pub fn clear_completed(&mut self) -> Changes {
        let mut changes = Changes::new();
        let mut index = 0;
        while index < self.items.len() {
            if self.items[index].completed() {
                let id = self.items[index].id();
                self.items.remove(index);
                changes.push(ListChange::ItemRemoved { id, index });
            } else {
                index += 1;
            }
        }
        if !changes.is_empty() {
            self.refresh_aggregates(true, &mut changes);
        }
        changes
    }

    /// Sets the route filter and re-derives every item's visibility.
    ///
    /// Idempotent: setting the current route again emits nothing.
    pub fn set_route(&mut self, route: Route) -> Changes {
        if route == self.route {
            return Changes::new();
        }
        self.route = route;
        let mut changes: Changes = smallvec![ListChange::RouteChanged { route }];
        for item in &mut self.items {
            if item.recompute_visible(route) {
                changes.push(ListChange::VisibleChanged {
                    id: item.id(),
                    visible: item.visible(),
                });
            }
        }
        changes
    }

    /// Looks up a member for mutation; a foreign id trips a debug
    /// assertion (caller contract violation) and yields `None` in release.
    fn member_mut(&mut self, id: ItemId) -> Option<&mut TodoItem> {
        let item = self.items.iter_mut().find(|item| item.id() == id);
        debug_assert!(item.is_some(), "operation on an item that is not a member");
        item
    }

    /// Re-derives the cached aggregates from the post-mutation sequence, in
    /// the fixed order: `all_completed`, then `completed_len`, then one
    /// counts notification if anything (or the length) moved.
    fn refresh_aggregates(&mut self, length_changed: bool, changes: &mut Changes) {
        let all_completed = self.items.iter().all(TodoItem::completed);
        let completed_len = self.items.iter().filter(|item| item.completed()).count();
        let moved =
            completed_len != self.completed_len || all_completed != self.all_completed;
        self.all_completed = all_completed;
        self.completed_len = completed_len;
        if length_changed || moved {
            changes.push(self.counts_change());
        }
    }

    fn counts_change(&self) -> ListChange {
        ListChange::CountsChanged {
            length: self.items.len(),
            completed_len: self.completed_len,
            left_len: self.items.len() - self.completed_len,
            all_completed: self.all_completed,
        }
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}
