//! Entry form for new todos.

pub mod entry_form;
