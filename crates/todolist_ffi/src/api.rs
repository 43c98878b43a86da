//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose list/submit/toggle/delete to Dart via FRB.
//! - Map core errors into simple response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every call reloads the collection from the durable store, so the Dart
//!   side never holds authoritative state.

use log::error;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use todolist_core::db::open_db;
use todolist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, SqliteStorage,
    StoreResult, TodoApp, TodoId, TodoRow,
};

const DB_FILE_NAME: &str = "todolist.sqlite3";
const DB_PATH_ENV: &str = "TODOLIST_DB_PATH";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();
// Each call is a load-modify-store cycle on one key; overlapping calls would
// drop each other's writes.
static SESSION_LOCK: Mutex<()> = Mutex::new(());

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One rendered todo row for the Dart list widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItemView {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub class_name: String,
    pub checkbox_label: String,
    pub delete_label: String,
}

/// Full list snapshot returned by every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListResponse {
    pub ok: bool,
    pub items: Vec<TodoItemView>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Result of a mutating call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoActionResponse {
    pub ok: bool,
    /// Created todo id, set only by a successful submit.
    pub todo_id: Option<String>,
    pub message: String,
}

impl TodoActionResponse {
    fn success(message: impl Into<String>, todo_id: Option<TodoId>) -> Self {
        Self {
            ok: true,
            todo_id: todo_id.map(|id| id.to_string()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            todo_id: None,
            message: message.into(),
        }
    }
}

/// Returns the current collection as rendered rows.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_list() -> TodoListResponse {
    match with_app(|app| Ok(app.view().rows)) {
        Ok(rows) => TodoListResponse {
            ok: true,
            message: format!("{} item(s).", rows.len()),
            items: rows.into_iter().map(to_item_view).collect(),
        },
        Err(err) => TodoListResponse {
            ok: false,
            items: Vec::new(),
            message: format!("todo_list failed: {err}"),
        },
    }
}

/// Submits new-item form text.
///
/// Blank text is not an error: the response is `ok` with no `todo_id`.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_submit(text: String) -> TodoActionResponse {
    match with_app(|app| app.submit_text(text)) {
        Ok(Some(id)) => TodoActionResponse::success("Todo added.", Some(id)),
        Ok(None) => TodoActionResponse::success("Nothing to add.", None),
        Err(err) => TodoActionResponse::failure(format!("todo_submit failed: {err}")),
    }
}

/// Sets the completed flag of one todo. Unknown ids are a no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_toggle(id: String, completed: bool) -> TodoActionResponse {
    let id = TodoId::from(id);
    match with_app(|app| app.toggle(&id, completed)) {
        Ok(()) => TodoActionResponse::success("Todo updated.", None),
        Err(err) => TodoActionResponse::failure(format!("todo_toggle failed: {err}")),
    }
}

/// Deletes one todo. Unknown ids are a no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_delete(id: String) -> TodoActionResponse {
    let id = TodoId::from(id);
    match with_app(|app| app.delete(&id)) {
        Ok(()) => TodoActionResponse::success("Todo deleted.", None),
        Err(err) => TodoActionResponse::failure(format!("todo_delete failed: {err}")),
    }
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn with_app<T>(
    f: impl FnOnce(&mut TodoApp<SqliteStorage<'_>>) -> StoreResult<T>,
) -> Result<T, String> {
    let _guard = SESSION_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let conn = open_db(resolve_db_path()).map_err(|err| format!("DB open failed: {err}"))?;
    let mut app = TodoApp::start(SqliteStorage::new(&conn))
        .map_err(|err| format!("store init failed: {err}"))?;
    f(&mut app).map_err(|err| {
        error!("event=ffi_call module=ffi status=error error={err}");
        err.to_string()
    })
}

fn to_item_view(row: TodoRow) -> TodoItemView {
    TodoItemView {
        id: row.key.to_string(),
        title: row.title,
        completed: row.checked,
        class_name: row.class_name.to_string(),
        checkbox_label: row.checkbox_label,
        delete_label: row.delete_label,
    }
}
