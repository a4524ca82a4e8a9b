//! Todo Row Component
//!
//! A single list row: checkbox toggle, double-click in-place edit, and
//! delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::controller::ListSyncController;
use crate::models::TodoItem;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let controller =
        use_context::<ListSyncController>().expect("ListSyncController should be provided");
    let store = use_app_store();

    let id = item.id;
    let done = item.done;
    let label = item.label.clone();
    let toggle_item = item.clone();
    let edit_item = item.clone();

    let editing = move || store.editing_id().get() == Some(id);
    let save = move || {
        spawn_local(async move {
            controller.save_edit(id).await;
        });
    };

    view! {
        <li class=move || if done { "todo-row done" } else { "todo-row" }>
            <input
                type="checkbox"
                checked=done
                disabled=move || store.busy().get()
                on:change=move |_| {
                    let item = toggle_item.clone();
                    spawn_local(async move {
                        controller.toggle_done(&item).await;
                    });
                }
            />

            <Show
                when=editing
                fallback=move || {
                    let item = edit_item.clone();
                    let label = label.clone();
                    view! {
                        <span
                            class="todo-label"
                            on:dblclick=move |_| controller.start_edit(&item)
                        >
                            {label}
                        </span>
                    }
                }
            >
                <input
                    class="edit-input"
                    type="text"
                    prop:value=move || store.editing_text().get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        store.editing_text().set(input.value());
                    }
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        match ev.key().as_str() {
                            "Enter" => save(),
                            "Escape" => controller.cancel_edit(),
                            _ => {}
                        }
                    }
                    on:blur=move |_| save()
                />
            </Show>

            <button
                class="delete-btn"
                disabled=move || store.busy().get()
                on:click=move |_| {
                    spawn_local(async move {
                        controller.delete_item(id).await;
                    });
                }
            >
                "×"
            </button>
        </li>
    }
}
