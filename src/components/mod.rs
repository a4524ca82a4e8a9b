//! UI Components
//!
//! Reusable Leptos components.

mod error_banner;
mod todo_input;
mod todo_list;
mod todo_row;

pub use error_banner::ErrorBanner;
pub use todo_input::TodoInput;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
