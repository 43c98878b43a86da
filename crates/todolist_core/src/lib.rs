//! Core domain logic for Todolist.
//! This crate is the single source of truth for collection invariants.

pub mod app;
pub mod db;
pub mod form;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;
pub mod view;

pub use app::{AppView, TodoApp, APP_HEADER};
pub use form::entry_form::{EntryForm, FormSubmission, TitlePolicy};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::collection::TodoCollection;
pub use model::todo::{is_blank_title, Todo, TodoId};
pub use storage::memory::MemoryStorage;
pub use storage::sqlite::SqliteStorage;
pub use storage::{KeyValueStorage, StorageError, StorageResult};
pub use store::todo_store::{StoreError, StoreResult, SubscriptionId, TodoStore, STORAGE_KEY};
pub use view::list_view::{render_list, RowAction, TodoRow};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
