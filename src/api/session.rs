//! Session Endpoints

use super::{check_status, read_text, send, ApiError};
use crate::config::ApiConfig;
use crate::models::{RemoteTodo, UserPayload};

/// `GET /users/{session}` — the full remote list.
///
/// 404 maps to `SessionMissing` so bootstrap can tell "create it" apart
/// from "service is broken".
pub async fn fetch_user(config: &ApiConfig) -> Result<Vec<RemoteTodo>, ApiError> {
    let response = send("GET", &config.user_url(), None).await?;
    if response.status() == 404 {
        return Err(ApiError::SessionMissing);
    }
    check_status(&response)?;
    let text = read_text(&response).await?;
    let payload: UserPayload =
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(payload.todos)
}

/// `POST /users/{session}` with an empty list body.
pub async fn create_user(config: &ApiConfig) -> Result<(), ApiError> {
    let response = send("POST", &config.user_url(), Some("[]")).await?;
    check_status(&response)
}

/// `DELETE /users/{session}` — removes the session and every todo in it.
pub async fn delete_user(config: &ApiConfig) -> Result<(), ApiError> {
    let response = send("DELETE", &config.user_url(), None).await?;
    check_status(&response)
}
