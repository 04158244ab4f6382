//! Core domain logic for duedeck.
//! This crate is the single source of truth for business invariants.
//!
//! The UI layer is an external collaborator: it calls the store mutators,
//! re-derives views from the `view` module when the store revision
//! changes, and paints whatever comes back. Nothing in this crate touches
//! a display surface.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::assignment::{
    parse_due_date, Assignment, AssignmentDraft, AssignmentId, AssignmentSource, ValidationError,
};
pub use model::theme::{CustomTheme, NamedTheme, ThemeSettings, ThemeValidationError};
pub use repo::assignment_repo::{AssignmentRepository, SqliteAssignmentRepository};
pub use repo::settings_repo::{SettingsRepository, SqliteSettingsRepository};
pub use repo::{RepoError, RepoResult};
pub use service::assignment_store::{AssignmentStore, StoreError};
pub use view::calendar::{calendar_grid, CalendarCell, MonthCursor, CALENDAR_CELLS};
pub use view::derive::{
    completed_sorted, dashboard_stats, overdue, pending, upcoming, DashboardStats, UPCOMING_LIMIT,
};
pub use view::due_label::{classify, DueCategory, DueLabel};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
