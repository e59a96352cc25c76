//! Port traits defining external boundaries.
//!
//! The engine only talks to ClickUp through [`ClickUpApi`]. Implementations
//! live in `src/adapters/`.

pub mod clickup;

pub use clickup::{ApiFuture, ClickUpApi};
