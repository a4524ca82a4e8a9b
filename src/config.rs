//! API Configuration
//!
//! Base endpoint and session name, passed into the controller at
//! construction instead of living in globals.

/// Where the list service lives and which session owns the list.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub session: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://playground.4geeks.com/todo".to_string(),
            session: "demo".to_string(),
        }
    }
}

impl ApiConfig {
    /// `{base}/users/{session}` — probe, create, and delete the session.
    pub fn user_url(&self) -> String {
        format!("{}/users/{}", self.base_url, self.session)
    }

    /// `{base}/todos/{session}` — create a todo in the session.
    pub fn todos_url(&self) -> String {
        format!("{}/todos/{}", self.base_url, self.session)
    }

    /// `{base}/todos/{id}` — update or delete one todo.
    pub fn todo_url(&self, id: u32) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }
}
