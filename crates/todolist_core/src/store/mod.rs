//! Collection controller.
//!
//! # Responsibility
//! - Own the canonical todo collection for one session.
//! - Mirror every change to durable storage and notify subscribed views.

pub mod todo_store;
