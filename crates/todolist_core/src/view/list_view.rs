//! List and item row rendering.
//!
//! # Responsibility
//! - Project the collection into keyed, display-ready rows.
//! - Express row interactions as actions the store applies.
//!
//! # Invariants
//! - Row order equals collection order; nothing is sorted or filtered.
//! - Rows own no state; they are rebuilt from the collection on every change.

use crate::model::collection::TodoCollection;
use crate::model::todo::{Todo, TodoId};

const ROW_CLASS: &str = "todo-item";
const ROW_CLASS_COMPLETED: &str = "todo-item completed";

/// Interaction raised by a rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Toggle { id: TodoId, completed: bool },
    Delete { id: TodoId },
}

/// One rendered todo row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    /// Stable identity across re-renders.
    pub key: TodoId,
    pub title: String,
    /// Checkbox state; mirrors `completed`.
    pub checked: bool,
    pub class_name: &'static str,
    /// Accessible name of the checkbox.
    pub checkbox_label: String,
    /// Accessible name of the delete control.
    pub delete_label: String,
}

impl TodoRow {
    pub fn from_todo(todo: &Todo) -> Self {
        let checkbox_label = if todo.completed {
            format!("Mark \"{}\" as incomplete", todo.title)
        } else {
            format!("Mark \"{}\" as complete", todo.title)
        };

        Self {
            key: todo.id.clone(),
            title: todo.title.clone(),
            checked: todo.completed,
            class_name: if todo.completed {
                ROW_CLASS_COMPLETED
            } else {
                ROW_CLASS
            },
            checkbox_label,
            delete_label: format!("Delete \"{}\"", todo.title),
        }
    }

    /// Action for a checkbox change to `checked`.
    pub fn on_toggle(&self, checked: bool) -> RowAction {
        RowAction::Toggle {
            id: self.key.clone(),
            completed: checked,
        }
    }

    /// Action for activating the delete control.
    pub fn on_delete(&self) -> RowAction {
        RowAction::Delete {
            id: self.key.clone(),
        }
    }
}

/// Renders one row per record, in collection order.
pub fn render_list(todos: &TodoCollection) -> Vec<TodoRow> {
    todos.iter().map(TodoRow::from_todo).collect()
}

#[cfg(test)]
mod tests {
    use super::{render_list, RowAction, TodoRow};
    use crate::model::collection::TodoCollection;
    use crate::model::todo::Todo;

    #[test]
    fn completed_rows_get_completed_class_and_incomplete_label() {
        let todo = Todo::new("Buy milk").with_completed(true);
        let row = TodoRow::from_todo(&todo);

        assert!(row.checked);
        assert_eq!(row.class_name, "todo-item completed");
        assert_eq!(row.checkbox_label, "Mark \"Buy milk\" as incomplete");
        assert_eq!(row.delete_label, "Delete \"Buy milk\"");
    }

    #[test]
    fn render_list_keeps_collection_order() {
        let todos = TodoCollection::from(vec![Todo::new("b"), Todo::new("a")]);
        let rows = render_list(&todos);

        let keys = rows.iter().map(|row| row.key.clone()).collect::<Vec<_>>();
        let ids = todos.iter().map(|todo| todo.id.clone()).collect::<Vec<_>>();
        assert_eq!(keys, ids);
        assert_eq!(rows[0].class_name, "todo-item");
        assert_eq!(rows[0].checkbox_label, "Mark \"b\" as complete");
    }

    #[test]
    fn row_actions_carry_row_key() {
        let todo = Todo::new("x");
        let row = TodoRow::from_todo(&todo);

        assert_eq!(
            row.on_toggle(true),
            RowAction::Toggle {
                id: todo.id.clone(),
                completed: true
            }
        );
        assert_eq!(row.on_delete(), RowAction::Delete { id: todo.id });
    }
}
