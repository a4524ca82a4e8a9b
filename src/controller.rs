//! List Synchronization Controller
//!
//! Keeps the local mirror consistent with the remote list: every mutation
//! is one remote call followed by a wholesale refetch, serialized through
//! the store's busy flag. Concurrent attempts are dropped, not queued.

use leptos::prelude::*;
use web_sys::console;

use crate::api::{self, ApiError};
use crate::config::ApiConfig;
use crate::models::{TodoItem, TodoPatch};
use crate::store::{AppStore, AppStateStoreFields};

/// App-wide handle provided via context; cheap to copy into event
/// handlers.
#[derive(Clone, Copy)]
pub struct ListSyncController {
    store: AppStore,
    config: StoredValue<ApiConfig>,
}

impl ListSyncController {
    pub fn new(store: AppStore, config: ApiConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    /// Probe the session, creating it with an empty list when missing.
    /// Until this succeeds the store stays not-ready and every list
    /// operation refuses to run.
    pub async fn ensure_session(self) {
        let config = self.config.get_value();
        self.store.error().set(None);
        match api::fetch_user(&config).await {
            Ok(todos) => {
                console::log_1(
                    &format!("[SYNC] session '{}' ready, {} todos", config.session, todos.len())
                        .into(),
                );
                let mut state = self.store.write();
                state.replace_todos(todos);
                state.ready = true;
            }
            Err(ApiError::SessionMissing) => match api::create_user(&config).await {
                Ok(()) => {
                    console::log_1(
                        &format!("[SYNC] created empty session '{}'", config.session).into(),
                    );
                    let mut state = self.store.write();
                    state.clear_todos();
                    state.ready = true;
                }
                Err(err) => self
                    .store
                    .write()
                    .fail(format!("could not create session '{}': {err}", config.session)),
            },
            Err(err) => self
                .store
                .write()
                .fail(format!("could not reach the list service: {err}")),
        }
    }

    /// Replace the mirror with the full remote list. Failure leaves the
    /// mirror untouched and records the error. Runs as a continuation of
    /// the owning mutation, so it takes no busy guard of its own.
    pub async fn refetch(self) {
        let config = self.config.get_value();
        match api::fetch_user(&config).await {
            Ok(todos) => self.store.write().replace_todos(todos),
            Err(err) => self
                .store
                .write()
                .fail(format!("could not refresh the list: {err}")),
        }
    }

    /// Create a todo from the add-form text. Dropped when the text is
    /// blank or another mutation is in flight.
    pub async fn add_item(self) {
        let label = match self.store.read().pending_label() {
            Some(label) => label,
            None => return,
        };
        if !self.store.write().begin_mutation() {
            return;
        }

        let config = self.config.get_value();
        match api::create_todo(&config, &label).await {
            Ok(()) => {
                // The form clears as soon as the create is accepted,
                // before the refetch below settles.
                self.store.input().set(String::new());
                self.refetch().await;
            }
            Err(err) => self
                .store
                .write()
                .fail(format!("could not add \"{label}\": {err}")),
        }
        self.store.write().finish_mutation();
    }

    /// Partial update of one todo; success reconciles via refetch.
    pub async fn update_item(self, id: u32, patch: TodoPatch) {
        if !self.store.write().begin_mutation() {
            return;
        }

        let config = self.config.get_value();
        match api::update_todo(&config, id, &patch).await {
            Ok(()) => self.refetch().await,
            Err(err) => self
                .store
                .write()
                .fail(format!("could not update todo #{id}: {err}")),
        }
        self.store.write().finish_mutation();
    }

    /// Flip one todo's done flag.
    pub async fn toggle_done(self, item: &TodoItem) {
        self.update_item(item.id, TodoPatch::done(!item.done)).await;
    }

    /// Begin an in-place edit. Pure local state, no remote call.
    pub fn start_edit(self, item: &TodoItem) {
        self.store.write().start_edit(item);
    }

    /// Drop the in-place edit. Pure local state, no remote call.
    pub fn cancel_edit(self) {
        self.store.write().cancel_edit();
    }

    /// Persist the in-place edit, then leave edit mode whether or not the
    /// update succeeded. A blank draft is dropped without a remote call.
    pub async fn save_edit(self, id: u32) {
        let draft = match self.store.read().edit_draft() {
            Some(draft) => draft,
            None => return,
        };
        self.update_item(id, TodoPatch::label(draft)).await;
        self.store.write().cancel_edit();
    }

    /// Delete one todo; success reconciles via refetch.
    pub async fn delete_item(self, id: u32) {
        if !self.store.write().begin_mutation() {
            return;
        }

        let config = self.config.get_value();
        match api::delete_todo(&config, id).await {
            Ok(()) => self.refetch().await,
            Err(err) => self
                .store
                .write()
                .fail(format!("could not delete todo #{id}: {err}")),
        }
        self.store.write().finish_mutation();
    }

    /// Drop the whole session remotely, empty the mirror immediately,
    /// then recreate an empty session. There is no compensation when the
    /// recreate fails: the mirror stays empty and the next successful
    /// bootstrap heals the session.
    pub async fn clear_all(self) {
        if self.store.todos().read().is_empty() {
            return;
        }
        if !self.store.write().begin_mutation() {
            return;
        }

        let config = self.config.get_value();
        match api::delete_user(&config).await {
            Ok(()) => {
                self.store.write().clear_todos();
                if let Err(err) = api::create_user(&config).await {
                    self.store.write().fail(format!(
                        "list cleared but session '{}' could not be recreated: {err}",
                        config.session
                    ));
                }
            }
            Err(err) => self
                .store
                .write()
                .fail(format!("could not clear the list: {err}")),
        }
        self.store.write().finish_mutation();
    }
}
