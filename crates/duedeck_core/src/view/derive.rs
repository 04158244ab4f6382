//! Dashboard and list view derivation.
//!
//! # Responsibility
//! - Derive render-ready dashboard/list data from the current collection.
//!
//! # Invariants
//! - Every function is pure over its inputs; `now` is always supplied by
//!   the caller, never read from the system clock.
//! - Result ordering is deterministic: due-date order with id tie-breaks,
//!   so equal due dates render stably across repaints.

use crate::model::assignment::Assignment;
use chrono::NaiveDateTime;

/// Dashboard upcoming-list length.
pub const UPCOMING_LIMIT: usize = 5;

/// Counters for the dashboard stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: usize,
    pub overdue: usize,
    pub completed: usize,
}

/// Incomplete assignments already past due, sorted ascending by due date.
pub fn overdue(assignments: &[Assignment], now: NaiveDateTime) -> Vec<Assignment> {
    let mut result: Vec<Assignment> = assignments
        .iter()
        .filter(|a| !a.is_completed && a.due_date < now)
        .cloned()
        .collect();
    sort_by_due_date(&mut result);
    result
}

/// The next `limit` incomplete assignments due at or after `now`, sorted
/// ascending by due date.
pub fn upcoming(assignments: &[Assignment], now: NaiveDateTime, limit: usize) -> Vec<Assignment> {
    let mut result: Vec<Assignment> = assignments
        .iter()
        .filter(|a| !a.is_completed && a.due_date >= now)
        .cloned()
        .collect();
    sort_by_due_date(&mut result);
    result.truncate(limit);
    result
}

/// All incomplete assignments, sorted ascending by due date.
pub fn pending(assignments: &[Assignment]) -> Vec<Assignment> {
    let mut result: Vec<Assignment> = assignments
        .iter()
        .filter(|a| !a.is_completed)
        .cloned()
        .collect();
    sort_by_due_date(&mut result);
    result
}

/// All completed assignments, most recently completed first.
pub fn completed_sorted(assignments: &[Assignment]) -> Vec<Assignment> {
    let mut result: Vec<Assignment> = assignments
        .iter()
        .filter(|a| a.is_completed)
        .cloned()
        .collect();
    result.sort_by(|a, b| {
        b.updated_at
            .cmp(&a.updated_at)
            .then_with(|| a.id.cmp(&b.id))
    });
    result
}

/// Counters for the dashboard stat cards.
pub fn dashboard_stats(assignments: &[Assignment], now: NaiveDateTime) -> DashboardStats {
    DashboardStats {
        total: assignments.len(),
        overdue: assignments
            .iter()
            .filter(|a| !a.is_completed && a.due_date < now)
            .count(),
        completed: assignments.iter().filter(|a| a.is_completed).count(),
    }
}

fn sort_by_due_date(assignments: &mut [Assignment]) {
    assignments.sort_by(|a, b| a.due_date.cmp(&b.due_date).then_with(|| a.id.cmp(&b.id)));
}
