//! Todo record model.
//!
//! # Responsibility
//! - Define the canonical record stored in the collection.
//! - Provide the blank-title check shared by entry paths.
//!
//! # Invariants
//! - `id` is stable and never reused for another record.
//! - `completed` starts as `false`.
//! - `title` is checked only at creation time by callers; this type does not
//!   re-validate it.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Opaque identifier of a todo record.
///
/// New ids are random v4 UUIDs, but stored ids are kept as the exact text
/// read back, whatever its shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TodoId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TodoId {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self(value.to_string()))
    }
}

impl From<String> for TodoId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TodoId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One todo entry.
///
/// Field names match the durable storage wire shape
/// `{"id": string, "title": string, "completed": bool}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    /// Display text, stored exactly as handed to the controller.
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Creates a new open todo with a freshly generated identifier.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(TodoId::generate(), title)
    }

    /// Creates a new open todo with a caller-provided identifier.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }

    /// Returns a copy with `completed` replaced.
    pub fn with_completed(&self, completed: bool) -> Self {
        Self {
            completed,
            ..self.clone()
        }
    }
}

/// Returns whether `title` is empty after trimming surrounding whitespace.
pub fn is_blank_title(title: &str) -> bool {
    title.trim().is_empty()
}
