//! Domain model for assignment tracking.
//!
//! # Responsibility
//! - Define canonical data structures used by the store and view layers.
//! - Keep validation of user-entered data next to the types it protects.
//!
//! # Invariants
//! - Every assignment is identified by a stable `AssignmentId`.
//! - Deletion is a hard removal; the model carries no tombstone state.

pub mod assignment;
pub mod theme;
