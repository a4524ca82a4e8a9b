//! Error Banner Component
//!
//! Inline message for the last failed operation, with a dismiss control.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || {
            store.error().get().map(|message| view! {
                <div class="error-banner">
                    <span class="error-text">{message}</span>
                    <button
                        class="dismiss-btn"
                        on:click=move |_| store.error().set(None)
                    >
                        "×"
                    </button>
                </div>
            })
        }}
    }
}
