//! Root composition of store, entry form and list view.
//!
//! # Responsibility
//! - Route form submissions into the store's add operation.
//! - Render the whole page model from current state.

use crate::form::entry_form::{EntryForm, FormSubmission, TitlePolicy};
use crate::model::todo::TodoId;
use crate::storage::KeyValueStorage;
use crate::store::todo_store::{StoreResult, TodoStore};
use crate::view::list_view::{render_list, RowAction, TodoRow};

/// Page heading shown above the list.
pub const APP_HEADER: &str = "Todo List";

/// Full page model handed to a front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppView {
    pub header: &'static str,
    pub draft: String,
    pub rows: Vec<TodoRow>,
}

pub struct TodoApp<S: KeyValueStorage> {
    store: TodoStore<S>,
    form: EntryForm,
}

impl<S: KeyValueStorage> TodoApp<S> {
    /// Starts a session over `storage` with the default title policy.
    pub fn start(storage: S) -> StoreResult<Self> {
        Self::start_with_policy(storage, TitlePolicy::default())
    }

    pub fn start_with_policy(storage: S, policy: TitlePolicy) -> StoreResult<Self> {
        Ok(Self {
            store: TodoStore::initialize(storage)?,
            form: EntryForm::with_policy(policy),
        })
    }

    pub fn store(&self) -> &TodoStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TodoStore<S> {
        &mut self.store
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn type_draft(&mut self, text: impl Into<String>) {
        self.form.set_draft(text);
    }

    /// Submits the current draft. Returns the new id, or `None` when the
    /// draft was blank.
    pub fn submit(&mut self) -> StoreResult<Option<TodoId>> {
        let store = &mut self.store;
        match self.form.submit(|title| store.add(title)) {
            FormSubmission::Submitted(result) => result.map(Some),
            FormSubmission::Discarded => Ok(None),
        }
    }

    /// Types `text` and submits it in one step.
    pub fn submit_text(&mut self, text: impl Into<String>) -> StoreResult<Option<TodoId>> {
        self.type_draft(text);
        self.submit()
    }

    pub fn toggle(&mut self, id: &TodoId, completed: bool) -> StoreResult<()> {
        self.store.toggle(id, completed)
    }

    pub fn delete(&mut self, id: &TodoId) -> StoreResult<()> {
        self.store.delete(id)
    }

    pub fn dispatch(&mut self, action: RowAction) -> StoreResult<()> {
        self.store.dispatch(action)
    }

    pub fn view(&self) -> AppView {
        AppView {
            header: APP_HEADER,
            draft: self.form.draft().to_string(),
            rows: render_list(self.store.todos()),
        }
    }

    pub fn into_storage(self) -> S {
        self.store.into_storage()
    }
}
