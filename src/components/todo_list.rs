//! Todo List Component
//!
//! The list itself plus the count footer and the clear-all control.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::ListSyncController;
use crate::store::{pending_count, use_app_store, AppStateStoreFields};

use super::TodoRow;

#[component]
pub fn TodoList() -> impl IntoView {
    let controller =
        use_context::<ListSyncController>().expect("ListSyncController should be provided");
    let store = use_app_store();

    view! {
        <div class="todo-list">
            <ul>
                <For
                    each=move || store.todos().get()
                    // Key on every mutable field so a refetch that changes
                    // the label or done flag re-renders the row.
                    key=|item| (item.id, item.label.clone(), item.done)
                    children=move |item| view! { <TodoRow item=item /> }
                />
                <Show when=move || store.todos().read().is_empty()>
                    <li class="empty-row">"Nothing to do yet"</li>
                </Show>
            </ul>

            <div class="list-footer">
                <span class="pending-label">
                    {move || {
                        match pending_count(&store.todos().read()) {
                            0 => "All done".to_string(),
                            1 => "1 task pending".to_string(),
                            n => format!("{n} tasks pending"),
                        }
                    }}
                </span>
                <button
                    class="clear-all-btn"
                    disabled=move || store.todos().read().is_empty() || store.busy().get()
                    on:click=move |_| {
                        spawn_local(async move {
                            controller.clear_all().await;
                        });
                    }
                >
                    "Clear all"
                </button>
            </div>
        </div>
    }
}
