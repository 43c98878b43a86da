//! Stateless projections of the collection for front-ends.

pub mod list_view;
