//! Todo Endpoints

use super::{check_status, send, ApiError};
use crate::config::ApiConfig;
use crate::models::{NewTodo, TodoPatch};

/// `POST /todos/{session}` — create one todo, not done yet.
pub async fn create_todo(config: &ApiConfig, label: &str) -> Result<(), ApiError> {
    let body = serde_json::to_string(&NewTodo {
        label,
        is_done: false,
    })
    .map_err(|e| ApiError::Decode(e.to_string()))?;
    let response = send("POST", &config.todos_url(), Some(&body)).await?;
    check_status(&response)
}

/// `PUT /todos/{id}` — partial update; sends only the fields in the patch.
pub async fn update_todo(config: &ApiConfig, id: u32, patch: &TodoPatch) -> Result<(), ApiError> {
    let body = serde_json::to_string(patch).map_err(|e| ApiError::Decode(e.to_string()))?;
    let response = send("PUT", &config.todo_url(id), Some(&body)).await?;
    check_status(&response)
}

/// `DELETE /todos/{id}` — delete one todo.
pub async fn delete_todo(config: &ApiConfig, id: u32) -> Result<(), ApiError> {
    let response = send("DELETE", &config.todo_url(id), None).await?;
    check_status(&response)
}
