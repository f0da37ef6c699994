//! Data access over the record collections.
//!
//! # Responsibility
//! - Pure query functions over a loaded JSON `Database` snapshot.
//! - Repository contract and SQLite implementation for workspaces.
//!
//! # Invariants
//! - Query functions never mutate or retain the snapshot they are given.
//! - Workspace repository writes return semantic errors (`NotFound`,
//!   `Conflict`) in addition to transport errors.

pub mod query;
pub mod workspace_repo;
