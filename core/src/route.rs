//! The route filter controlling item visibility.

/// The active filter selector for the list.
///
/// Mirrors the three hash routes of the classic todo UI: show everything,
/// only the items still left to do, or only the finished ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Route {
    /// No filtering; every item is visible (the empty hash segment).
    #[default]
    All,
    /// Only items with `completed == false` are visible.
    Active,
    /// Only items with `completed == true` are visible.
    Completed,
}

impl Route {
    /// Parses a router path segment.
    ///
    /// The empty segment selects [`Route::All`]. Unrecognized segments also
    /// fall back to [`Route::All`] — the router owns navigation state and may
    /// hand us anything a user typed into the location bar.
    #[must_use]
    pub fn from_segment(segment: &str) -> Self {
        match segment {
            "active" => Self::Active,
            "completed" => Self::Completed,
            _ => Self::All,
        }
    }

    /// The path segment this route corresponds to.
    #[must_use]
    pub const fn as_segment(self) -> &'static str {
        match self {
            Self::All => "",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Whether an item with the given completion flag is visible under this
    /// route.
    #[must_use]
    pub const fn allows(self, completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => !completed,
            Self::Completed => completed,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
        }
    }
}
