//! Assertion helpers for the model's derived-state invariants.
//!
//! These are the invariants that must hold after every observable
//! operation, stated once so property tests and the fluent harness can
//! share them.

use todomvc_core::TodoList;

/// Asserts every aggregate invariant of the list:
///
/// - `completed_len` equals the recount of completed items
/// - `left_len == len - completed_len`
/// - `all_completed` iff `completed_len == len` (vacuously true when empty)
/// - every item's `visible` equals the route filter applied to its
///   `completed` flag
///
/// # Panics
///
/// Panics when any invariant is violated.
pub fn assert_aggregates(list: &TodoList) {
    let recount = list.items().iter().filter(|item| item.completed()).count();
    assert_eq!(
        list.completed_len(),
        recount,
        "completed_len drifted from the authoritative recount"
    );
    assert_eq!(
        list.left_len(),
        list.len() - list.completed_len(),
        "left_len is not the count difference"
    );
    assert_eq!(
        list.all_completed(),
        list.completed_len() == list.len(),
        "all_completed disagrees with the counts"
    );
    for item in list.items() {
        assert_eq!(
            item.visible(),
            list.route().allows(item.completed()),
            "item {} visibility drifted from the (completed, route) formula",
            item.id()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todomvc_core::Route;

    #[test]
    fn holds_on_empty_list() {
        assert_aggregates(&TodoList::new());
    }

    #[test]
    fn holds_after_a_mixed_sequence() {
        let mut list = TodoList::new();
        let (a, _) = list.add_item("A");
        list.add_item("B");
        list.set_completed(a, true);
        list.set_route(Route::Active);
        list.clear_completed();
        assert_aggregates(&list);
    }
}
