//! Add-Todo Form Component
//!
//! Text input plus submit button; Enter submits the form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::controller::ListSyncController;
use crate::store::{use_app_store, AppStateStoreFields};

/// Form for creating new todos
#[component]
pub fn TodoInput() -> impl IntoView {
    let controller =
        use_context::<ListSyncController>().expect("ListSyncController should be provided");
    let store = use_app_store();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            controller.add_item().await;
        });
    };

    view! {
        <form class="todo-input" on:submit=submit>
            <input
                type="text"
                placeholder="Add a new task..."
                prop:value=move || store.input().get()
                disabled=move || !store.ready().get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    store.input().set(input.value());
                }
            />
            <button
                type="submit"
                disabled=move || !store.ready().get() || store.busy().get()
            >
                "Add"
            </button>
        </form>
    }
}
