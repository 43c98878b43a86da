//! Flutter bridge for the todolist core.

pub mod api;
