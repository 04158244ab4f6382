//! Derived-view computation layer.
//!
//! # Responsibility
//! - Turn the canonical collection into render-ready data: dashboard
//!   lists, pending/completed partitions, the month grid, and relative
//!   due labels.
//!
//! # Invariants
//! - Everything here is a pure function over supplied inputs; the system
//!   clock is never read, keeping views deterministic and testable.
//! - Returned data is owned (cloned snapshots), never a live reference
//!   into the store's collection.

pub mod calendar;
pub mod derive;
pub mod due_label;
