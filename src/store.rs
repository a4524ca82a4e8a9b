//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The sync
//! rules (busy guard, error lifecycle, edit lifecycle, wholesale mirror
//! replacement) live here as plain `&mut` transitions so they stay
//! testable without a browser.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{RemoteTodo, TodoItem};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Local mirror of the remote list, rebuilt wholesale on each refetch
    pub todos: Vec<TodoItem>,
    /// Pending text of the add form
    pub input: String,
    /// True while exactly one mutation is in flight
    pub busy: bool,
    /// Last failed operation, cleared when the next one starts
    pub error: Option<String>,
    /// Session bootstrap succeeded; list operations are allowed
    pub ready: bool,
    /// Todo under in-place edit, if any
    pub editing_id: Option<u32>,
    /// Draft text of the in-place edit
    pub editing_text: String,
}

impl AppState {
    /// Enter the busy section for one mutation and clear the previous
    /// error. Returns false (and changes nothing) when the session is not
    /// ready or another mutation is in flight; callers drop the attempt.
    pub fn begin_mutation(&mut self) -> bool {
        if !self.ready || self.busy {
            return false;
        }
        self.busy = true;
        self.error = None;
        true
    }

    /// Release the busy flag after the mutation settles, success or not.
    pub fn finish_mutation(&mut self) {
        self.busy = false;
    }

    /// Record a failed operation. The mirror is never rolled back on
    /// failure; it simply is not advanced.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Replace the mirror wholesale with a fetched list, mapping wire
    /// field names onto local ones.
    pub fn replace_todos(&mut self, remote: Vec<RemoteTodo>) {
        self.todos = remote.into_iter().map(TodoItem::from).collect();
    }

    /// Empty the mirror without waiting for a refetch.
    pub fn clear_todos(&mut self) {
        self.todos.clear();
    }

    /// Trimmed add-form text, or None when it is only whitespace.
    pub fn pending_label(&self) -> Option<String> {
        let trimmed = self.input.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    /// Begin an in-place edit of one todo.
    pub fn start_edit(&mut self, item: &TodoItem) {
        self.editing_id = Some(item.id);
        self.editing_text = item.label.clone();
    }

    /// Leave edit mode, dropping the draft. A no-op when no edit is
    /// active.
    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.editing_text.clear();
    }

    /// Trimmed draft of the active edit, or None when it is blank.
    pub fn edit_draft(&self) -> Option<String> {
        let trimmed = self.editing_text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

/// Count of todos still open; recomputed on render, never stored.
pub fn pending_count(todos: &[TodoItem]) -> usize {
    todos.iter().filter(|todo| !todo.done).count()
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, label: &str, done: bool) -> TodoItem {
        TodoItem {
            id,
            label: label.to_string(),
            done,
        }
    }

    fn ready_state() -> AppState {
        AppState {
            ready: true,
            ..AppState::default()
        }
    }

    #[test]
    fn whitespace_only_input_yields_no_label() {
        let mut state = ready_state();
        state.input = "   \t  ".to_string();
        assert_eq!(state.pending_label(), None);

        state.input = "  buy milk ".to_string();
        assert_eq!(state.pending_label(), Some("buy milk".to_string()));
    }

    #[test]
    fn whitespace_only_edit_draft_is_rejected() {
        let mut state = ready_state();
        state.start_edit(&item(1, "original", false));
        state.editing_text = "   ".to_string();
        assert_eq!(state.edit_draft(), None);

        state.editing_text = "  renamed  ".to_string();
        assert_eq!(state.edit_draft(), Some("renamed".to_string()));
    }

    #[test]
    fn second_mutation_is_dropped_while_busy() {
        let mut state = ready_state();
        assert!(state.begin_mutation());
        assert!(!state.begin_mutation());

        state.finish_mutation();
        assert!(state.begin_mutation());
    }

    #[test]
    fn mutations_are_dropped_before_bootstrap() {
        let mut state = AppState::default();
        assert!(!state.begin_mutation());
        assert!(!state.busy);
    }

    #[test]
    fn begin_mutation_clears_the_previous_error() {
        let mut state = ready_state();
        assert!(state.begin_mutation());
        state.fail("boom");
        state.finish_mutation();
        assert_eq!(state.error.as_deref(), Some("boom"));

        assert!(state.begin_mutation());
        assert_eq!(state.error, None);
    }

    #[test]
    fn replace_todos_maps_wire_fields_onto_local_ones() {
        let mut state = ready_state();
        state.replace_todos(vec![RemoteTodo {
            id: 1,
            label: "buy milk".into(),
            is_done: false,
        }]);
        assert_eq!(state.todos, vec![item(1, "buy milk", false)]);
    }

    #[test]
    fn replacing_the_mirror_flips_exactly_the_changed_todo() {
        let mut state = ready_state();
        state.replace_todos(vec![
            RemoteTodo {
                id: 1,
                label: "A".into(),
                is_done: false,
            },
            RemoteTodo {
                id: 2,
                label: "B".into(),
                is_done: true,
            },
        ]);
        // The server toggled #1; #2 is untouched.
        state.replace_todos(vec![
            RemoteTodo {
                id: 1,
                label: "A".into(),
                is_done: true,
            },
            RemoteTodo {
                id: 2,
                label: "B".into(),
                is_done: true,
            },
        ]);
        assert_eq!(state.todos, vec![item(1, "A", true), item(2, "B", true)]);
    }

    #[test]
    fn edit_lifecycle_clears_target_and_draft() {
        let mut state = ready_state();
        state.start_edit(&item(3, "original", false));
        assert_eq!(state.editing_id, Some(3));
        assert_eq!(state.editing_text, "original");

        state.cancel_edit();
        assert_eq!(state.editing_id, None);
        assert!(state.editing_text.is_empty());
    }

    #[test]
    fn cancel_edit_without_an_active_edit_changes_nothing() {
        let mut state = ready_state();
        state.cancel_edit();
        assert_eq!(state.editing_id, None);
        assert!(state.editing_text.is_empty());
    }

    #[test]
    fn pending_count_ignores_done_todos() {
        assert_eq!(pending_count(&[]), 0);
        assert_eq!(
            pending_count(&[item(1, "A", false), item(2, "B", true)]),
            1
        );
        assert_eq!(
            pending_count(&[item(1, "A", true), item(2, "B", true)]),
            0
        );
    }

    #[test]
    fn clear_all_recreate_failure_leaves_mirror_empty_with_error() {
        let mut state = ready_state();
        state.replace_todos(vec![
            RemoteTodo {
                id: 1,
                label: "A".into(),
                is_done: false,
            },
            RemoteTodo {
                id: 2,
                label: "B".into(),
                is_done: true,
            },
        ]);

        // Session delete accepted, mirror emptied, recreate failed.
        assert!(state.begin_mutation());
        state.clear_todos();
        state.fail("list cleared but the session could not be recreated");
        state.finish_mutation();

        assert!(state.todos.is_empty());
        assert!(state.error.is_some());
        assert!(!state.busy);
    }
}
