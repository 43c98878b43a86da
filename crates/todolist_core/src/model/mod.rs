//! Todo domain model.
//!
//! # Responsibility
//! - Define the canonical todo record and its ordered collection.
//! - Keep every collection transform pure: inputs are never mutated.
//!
//! # Invariants
//! - Every record is identified by a stable `TodoId`.
//! - `completed` is the only field mutated after creation.

pub mod collection;
pub mod todo;
