//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable that drives the core end to end: open a
//!   store, seed starter data, and print the dashboard a UI would render.
//! - Keep output deterministic enough for quick local sanity checks.

use chrono::Local;
use duedeck_core::db::open_db_in_memory;
use duedeck_core::{
    classify, dashboard_stats, upcoming, AssignmentStore, SqliteAssignmentRepository,
    UPCOMING_LIMIT,
};

fn main() {
    println!("duedeck_core version={}", duedeck_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open database: {err}");
            std::process::exit(1);
        }
    };
    let repo = match SqliteAssignmentRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("failed to construct repository: {err}");
            std::process::exit(1);
        }
    };

    let mut store = AssignmentStore::open(repo);
    store.seed_sample_data();

    let now = Local::now().naive_local();
    let stats = dashboard_stats(store.assignments(), now);
    println!(
        "dashboard total={} overdue={} completed={}",
        stats.total, stats.overdue, stats.completed
    );

    for assignment in upcoming(store.assignments(), now, UPCOMING_LIMIT) {
        let label = classify(assignment.due_date, now);
        println!(
            "upcoming title={:?} course={:?} due={}",
            assignment.title, assignment.course_name, label.text
        );
    }
}
