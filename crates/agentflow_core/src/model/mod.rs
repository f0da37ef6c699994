//! Domain model for AgentFlow records.
//!
//! # Responsibility
//! - Define the canonical record shapes persisted by the JSON store.
//! - Provide explicit field validation evaluated before any mutation.
//!
//! # Invariants
//! - Every record carries a stable `RecordId` assigned at creation and never
//!   reassigned.
//! - Records are immutable by convention; collections change by appending
//!   whole records, never by partial field updates.

pub mod record;
pub mod workspace;
