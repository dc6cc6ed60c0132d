//! A single todo entry and its edit lifecycle.

use crate::route::Route;
use uuid::Uuid;

/// Unique identifier for a todo item.
///
/// Items are removed by identity, never by value equality — two items with
/// the same title and completion flag are still distinct entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Creates a new random `ItemId`.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an `ItemId` from a UUID.
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of committing an edit on an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// The trimmed text was non-empty; the title was updated (or kept, if
    /// identical) and the item left edit mode.
    Committed {
        /// Whether the title actually changed.
        title_changed: bool,
    },
    /// The trimmed text was empty. The item keeps its title and asks the
    /// owning list to remove it — committing an emptied edit is a deletion
    /// intent, not a validation error.
    RemovalRequested,
}

/// One todo list entry.
///
/// Items are exclusively owned by one [`TodoList`](crate::TodoList); all
/// mutation goes through the list so that aggregates and change
/// notifications stay consistent. Read access is public.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoItem {
    id: ItemId,
    title: String,
    completed: bool,
    editing: bool,
    edit_draft: Option<String>,
    visible: bool,
}

impl TodoItem {
    pub(crate) fn new(title: String) -> Self {
        Self {
            id: ItemId::new(),
            title,
            completed: false,
            editing: false,
            edit_draft: None,
            visible: true,
        }
    }

    pub(crate) fn with_completed(title: String, completed: bool) -> Self {
        Self {
            completed,
            ..Self::new(title)
        }
    }

    /// This item's identity.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// The item's title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the item is marked as done.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Whether the item is currently in edit mode (transient UI flag).
    #[must_use]
    pub const fn editing(&self) -> bool {
        self.editing
    }

    /// The edit buffer seeded by [`TodoList::begin_edit`](crate::TodoList::begin_edit),
    /// if an edit is in progress.
    #[must_use]
    pub fn edit_draft(&self) -> Option<&str> {
        self.edit_draft.as_deref()
    }

    /// Whether the item passes the owning list's current route filter.
    ///
    /// Derived: always equals `route.allows(self.completed())` after every
    /// mutation of either input.
    #[must_use]
    pub const fn visible(&self) -> bool {
        self.visible
    }

    /// Replaces the title. Returns whether the value changed.
    ///
    /// No validation happens here; the empty-title policy lives at the
    /// edit-commit and submission boundaries.
    pub(crate) fn set_title(&mut self, title: String) -> bool {
        if self.title == title {
            return false;
        }
        self.title = title;
        true
    }

    /// Replaces the completion flag. Returns whether the value changed.
    ///
    /// Whether the change is announced ("silent" bulk writes versus a
    /// per-item notification) is the owning list's call, not the item's.
    pub(crate) fn set_completed(&mut self, completed: bool) -> bool {
        if self.completed == completed {
            return false;
        }
        self.completed = completed;
        true
    }

    /// Enters edit mode, seeding the edit buffer with the current title.
    /// Returns whether the `editing` flag changed.
    pub(crate) fn begin_edit(&mut self) -> bool {
        self.edit_draft = Some(self.title.clone());
        if self.editing {
            return false;
        }
        self.editing = true;
        true
    }

    /// Commits an edit with the raw text from the view.
    ///
    /// The text is trimmed first; whitespace-only input is treated exactly
    /// like empty input and yields [`EditOutcome::RemovalRequested`].
    pub(crate) fn commit_edit(&mut self, raw: &str) -> EditOutcome {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return EditOutcome::RemovalRequested;
        }
        let title_changed = self.set_title(trimmed.to_owned());
        self.editing = false;
        self.edit_draft = None;
        EditOutcome::Committed { title_changed }
    }

    /// Leaves edit mode without touching the title. Returns whether the
    /// `editing` flag changed.
    pub(crate) fn cancel_edit(&mut self) -> bool {
        self.edit_draft = None;
        if !self.editing {
            return false;
        }
        self.editing = false;
        true
    }

    /// Re-derives `visible` from `(completed, route)`. Returns whether the
    /// value changed.
    pub(crate) const fn recompute_visible(&mut self, route: Route) -> bool {
        let visible = route.allows(self.completed);
        if self.visible == visible {
            return false;
        }
        self.visible = visible;
        true
    }
}
