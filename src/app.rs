//! Todo Sync App
//!
//! Root component: provides the store and controller, runs the session
//! bootstrap, and lays out the page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{ErrorBanner, TodoInput, TodoList};
use crate::config::ApiConfig;
use crate::controller::ListSyncController;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    let controller = ListSyncController::new(store, ApiConfig::default());

    // Provide context to all children
    provide_context(store);
    provide_context(controller);

    // Session bootstrap on mount; list operations stay disabled until it
    // succeeds.
    Effect::new(move |_| {
        spawn_local(async move {
            controller.ensure_session().await;
        });
    });

    view! {
        <main class="app-layout">
            <h1>"Todo List"</h1>

            <ErrorBanner />
            <TodoInput />
            <TodoList />
        </main>
    }
}
