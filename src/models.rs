//! Data Models
//!
//! Local todo shape plus the wire types of the remote list service.

use serde::{Deserialize, Serialize};

/// A todo as the UI renders it.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoItem {
    pub id: u32,
    pub label: String,
    pub done: bool,
}

/// A todo as the list service returns it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteTodo {
    pub id: u32,
    pub label: String,
    pub is_done: bool,
}

impl From<RemoteTodo> for TodoItem {
    fn from(remote: RemoteTodo) -> Self {
        Self {
            id: remote.id,
            label: remote.label,
            done: remote.is_done,
        }
    }
}

/// Response body of `GET /users/{session}`.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub todos: Vec<RemoteTodo>,
}

/// Request body of `POST /todos/{session}`.
#[derive(Debug, Serialize)]
pub struct NewTodo<'a> {
    pub label: &'a str,
    pub is_done: bool,
}

/// Partial body for `PUT /todos/{id}`; only the supplied fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_done: Option<bool>,
}

impl TodoPatch {
    /// Patch that renames a todo.
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Patch that sets the done flag.
    pub fn done(done: bool) -> Self {
        Self {
            is_done: Some(done),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn done_patch_sends_only_the_done_flag() {
        let patch = TodoPatch::done(true);
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"is_done":true}"#);
    }

    #[test]
    fn label_patch_sends_only_the_label() {
        let patch = TodoPatch::label("buy milk");
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"label":"buy milk"}"#
        );
    }

    #[test]
    fn new_todo_serializes_wire_field_names() {
        let body = NewTodo {
            label: "buy milk",
            is_done: false,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"label":"buy milk","is_done":false}"#
        );
    }

    #[test]
    fn user_payload_decodes_and_maps_onto_local_fields() {
        let payload: UserPayload = serde_json::from_str(
            r#"{"todos":[{"id":7,"label":"buy milk","is_done":false},{"id":8,"label":"call mom","is_done":true}]}"#,
        )
        .unwrap();
        let todos: Vec<TodoItem> = payload.todos.into_iter().map(TodoItem::from).collect();
        assert_eq!(
            todos,
            vec![
                TodoItem {
                    id: 7,
                    label: "buy milk".into(),
                    done: false
                },
                TodoItem {
                    id: 8,
                    label: "call mom".into(),
                    done: true
                },
            ]
        );
    }
}
