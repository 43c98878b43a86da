//! Todo collection store.
//!
//! # Responsibility
//! - Load the collection from durable storage at startup.
//! - Apply add/toggle/delete as whole-collection replacements.
//! - Persist and notify subscribers after every change.
//!
//! # Invariants
//! - The store is the only writer of its collection and its storage key.
//! - Initialization always persists, so storage and memory agree from the
//!   first moment.
//! - Unknown-id toggles and deletes change nothing: no write, no notification.
//! - Subscribers are notified after the durable write, so storage already
//!   holds the collection they receive.
//! - On a failed durable write the in-memory collection has already advanced
//!   and subscribers are still notified; the error is returned so the caller
//!   can surface or ignore it.

use crate::model::collection::TodoCollection;
use crate::model::todo::{Todo, TodoId};
use crate::storage::{KeyValueStorage, StorageError};
use crate::view::list_view::RowAction;
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed durable storage key holding the serialized collection.
pub const STORAGE_KEY: &str = "ITEMS";

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize todo collection: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Handle returned by [`TodoStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&TodoCollection)>;

/// Single source of truth for the todo collection.
pub struct TodoStore<S: KeyValueStorage> {
    storage: S,
    todos: TodoCollection,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S: KeyValueStorage> TodoStore<S> {
    /// Loads the collection from `storage` and writes it straight back.
    ///
    /// A missing key yields an empty collection. A payload that does not
    /// parse as a record array also yields an empty collection and is
    /// overwritten by the initial persist.
    ///
    /// # Errors
    /// - Returns an error when the storage read or the initial write fails.
    pub fn initialize(storage: S) -> StoreResult<Self> {
        let todos = load_collection(&storage)?;
        let mut store = Self {
            storage,
            todos,
            listeners: Vec::new(),
            next_subscription: 0,
        };
        store.persist()?;
        info!(
            "event=store_init module=store status=ok count={}",
            store.todos.len()
        );
        Ok(store)
    }

    /// Current collection snapshot.
    pub fn todos(&self) -> &TodoCollection {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Releases the storage handle, ending the session.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Appends a new open todo and returns its id.
    ///
    /// The title is stored as given; blank-title rejection belongs to the
    /// entry form.
    pub fn add(&mut self, title: impl Into<String>) -> StoreResult<TodoId> {
        let todo = Todo::new(title);
        let id = todo.id.clone();
        let next = self.todos.with_added(todo);
        debug!("event=todo_add module=store status=ok id={id}");
        self.replace(next)?;
        Ok(id)
    }

    /// Sets `completed` on the matching todo. Unknown ids are ignored.
    pub fn toggle(&mut self, id: &TodoId, completed: bool) -> StoreResult<()> {
        match self.todos.with_completed(id, completed) {
            Some(next) => {
                debug!(
                    "event=todo_toggle module=store status=ok id={id} completed={completed}"
                );
                self.replace(next)
            }
            None => {
                debug!("event=todo_toggle module=store status=noop id={id}");
                Ok(())
            }
        }
    }

    /// Removes the matching todo. Unknown ids are ignored.
    pub fn delete(&mut self, id: &TodoId) -> StoreResult<()> {
        match self.todos.without(id) {
            Some(next) => {
                debug!("event=todo_delete module=store status=ok id={id}");
                self.replace(next)
            }
            None => {
                debug!("event=todo_delete module=store status=noop id={id}");
                Ok(())
            }
        }
    }

    /// Applies a row interaction forwarded by the list view.
    pub fn dispatch(&mut self, action: RowAction) -> StoreResult<()> {
        match action {
            RowAction::Toggle { id, completed } => self.toggle(&id, completed),
            RowAction::Delete { id } => self.delete(&id),
        }
    }

    /// Serializes the full collection and overwrites the storage key.
    pub fn persist(&mut self) -> StoreResult<()> {
        let payload = serde_json::to_string(&self.todos)?;
        if let Err(err) = self.storage.set(STORAGE_KEY, &payload) {
            error!(
                "event=store_persist module=store status=error count={} error={}",
                self.todos.len(),
                err
            );
            return Err(err.into());
        }
        Ok(())
    }

    /// Registers a listener called with the new collection after every change.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&TodoCollection) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` when the id is not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        self.listeners.len() != before
    }

    fn replace(&mut self, next: TodoCollection) -> StoreResult<()> {
        self.todos = next;
        let persisted = self.persist();
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.todos);
        }
        persisted
    }
}

fn load_collection(storage: &impl KeyValueStorage) -> StoreResult<TodoCollection> {
    let Some(raw) = storage.get(STORAGE_KEY)? else {
        debug!("event=store_load module=store status=empty reason=missing_key");
        return Ok(TodoCollection::new());
    };

    match serde_json::from_str::<TodoCollection>(&raw) {
        Ok(todos) => {
            debug!(
                "event=store_load module=store status=ok count={}",
                todos.len()
            );
            Ok(todos)
        }
        Err(err) => {
            warn!(
                "event=store_load module=store status=fallback reason=malformed_payload bytes={} error={}",
                raw.len(),
                err
            );
            Ok(TodoCollection::new())
        }
    }
}
