//! Ordered todo collection.
//!
//! # Responsibility
//! - Hold records in insertion order.
//! - Provide the append/map/filter transforms behind add, toggle and delete.
//!
//! # Invariants
//! - Transforms return a new collection and leave `self` untouched.
//! - Transforms addressing an unknown id return `None`, so callers can treat
//!   them as no-ops without comparing contents.
//! - Serialized form is a bare JSON array of records.

use crate::model::todo::{Todo, TodoId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoCollection {
    items: Vec<Todo>,
}

impl TodoCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Todo] {
        &self.items
    }

    /// Finds a record by id.
    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.items.iter().find(|todo| &todo.id == id)
    }

    pub fn contains(&self, id: &TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Returns a collection with `todo` appended at the end.
    pub fn with_added(&self, todo: Todo) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend(self.items.iter().cloned());
        items.push(todo);
        Self { items }
    }

    /// Returns a collection where the record matching `id` has `completed`
    /// replaced, or `None` when no record matches.
    pub fn with_completed(&self, id: &TodoId, completed: bool) -> Option<Self> {
        if !self.contains(id) {
            return None;
        }

        let items = self
            .items
            .iter()
            .map(|todo| {
                if &todo.id == id {
                    todo.with_completed(completed)
                } else {
                    todo.clone()
                }
            })
            .collect();
        Some(Self { items })
    }

    /// Returns a collection without the record matching `id`, or `None` when
    /// no record matches.
    pub fn without(&self, id: &TodoId) -> Option<Self> {
        if !self.contains(id) {
            return None;
        }

        let items = self
            .items
            .iter()
            .filter(|todo| &todo.id != id)
            .cloned()
            .collect();
        Some(Self { items })
    }
}

impl From<Vec<Todo>> for TodoCollection {
    fn from(items: Vec<Todo>) -> Self {
        Self { items }
    }
}

impl FromIterator<Todo> for TodoCollection {
    fn from_iter<T: IntoIterator<Item = Todo>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TodoCollection {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
