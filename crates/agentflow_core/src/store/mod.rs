//! Durable persistence for the record collections.
//!
//! # Responsibility
//! - Load and atomically replace the single JSON document holding all
//!   users, organizations and projects.
//!
//! # Invariants
//! - A missing document loads as an empty `Database` (first-run state).
//! - `save` is the only mutating operation; readers work on snapshots.

mod json_store;

pub use json_store::{JsonStore, StoreError, StoreResult};
