use duedeck_core::db::open_db_in_memory;
use duedeck_core::{
    AssignmentDraft, AssignmentSource, AssignmentStore, SqliteAssignmentRepository, StoreError,
    ValidationError,
};
use uuid::Uuid;

#[test]
fn create_grows_collection_and_persists() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);
    assert_eq!(store.len(), 0);

    let created = store
        .create(&draft("Math HW", "Algebra", "", "2024-01-10T09:00"))
        .unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(created.source, AssignmentSource::Manual);
    assert!(!created.is_completed);

    let reloaded = open_store(&conn);
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.assignments()[0].id, created.id);
}

#[test]
fn create_assigns_unique_ids() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    let first = store
        .create(&draft("One", "Course", "", "2024-01-10T09:00"))
        .unwrap();
    let second = store
        .create(&draft("Two", "Course", "", "2024-01-10T09:00"))
        .unwrap();

    assert_ne!(first.id, second.id);
}

#[test]
fn create_rejects_invalid_drafts_without_mutating() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    let title_err = store
        .create(&draft("", "Algebra", "", "2024-01-10T09:00"))
        .unwrap_err();
    assert_eq!(
        title_err,
        StoreError::Validation(ValidationError::EmptyTitle)
    );

    let date_err = store
        .create(&draft("Math HW", "Algebra", "", "someday"))
        .unwrap_err();
    assert!(matches!(
        date_err,
        StoreError::Validation(ValidationError::InvalidDueDate(_))
    ));

    assert_eq!(store.len(), 0);
    assert_eq!(store.revision(), 0);
}

#[test]
fn update_replaces_mutable_fields_only() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    let created = store
        .create(&draft("Draft title", "Algebra", "old notes", "2024-01-10T09:00"))
        .unwrap();

    let updated = store
        .update(
            created.id,
            &draft("Final title", "Algebra II", "new notes", "2024-01-12T17:30"),
        )
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.source, created.source);
    assert_eq!(updated.is_completed, created.is_completed);
    assert_eq!(updated.title, "Final title");
    assert_eq!(updated.course_name, "Algebra II");
    assert_eq!(updated.description.as_deref(), Some("new notes"));
    assert!(updated.updated_at >= created.updated_at);

    let reloaded = open_store(&conn);
    assert_eq!(reloaded.assignments()[0].title, "Final title");
}

#[test]
fn update_missing_id_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    let missing = Uuid::new_v4();
    let err = store
        .update(missing, &draft("Title", "Course", "", "2024-01-10T09:00"))
        .unwrap_err();

    assert_eq!(err, StoreError::NotFound(missing));
}

#[test]
fn delete_removes_and_ignores_missing_ids() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    let created = store
        .create(&draft("Math HW", "Algebra", "", "2024-01-10T09:00"))
        .unwrap();

    assert!(store.delete(created.id));
    assert_eq!(store.len(), 0);

    // Deleting again is a silent no-op, not an error.
    assert!(!store.delete(created.id));
    assert!(!store.delete(Uuid::new_v4()));

    let reloaded = open_store(&conn);
    assert_eq!(reloaded.len(), 0);
}

#[test]
fn toggle_twice_round_trips_and_advances_updated_at() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    let created = store
        .create(&draft("Math HW", "Algebra", "", "2024-01-10T09:00"))
        .unwrap();

    let completed = store.toggle_complete(created.id).unwrap();
    assert!(completed.is_completed);
    assert!(completed.updated_at > created.updated_at);

    let reopened = store.toggle_complete(created.id).unwrap();
    assert!(!reopened.is_completed);
    assert!(reopened.updated_at > completed.updated_at);
}

#[test]
fn toggle_missing_id_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    let missing = Uuid::new_v4();
    assert_eq!(
        store.toggle_complete(missing).unwrap_err(),
        StoreError::NotFound(missing)
    );
}

#[test]
fn revision_bumps_once_per_successful_mutation() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);
    assert_eq!(store.revision(), 0);

    let created = store
        .create(&draft("Math HW", "Algebra", "", "2024-01-10T09:00"))
        .unwrap();
    assert_eq!(store.revision(), 1);

    store.toggle_complete(created.id).unwrap();
    assert_eq!(store.revision(), 2);

    store.delete(Uuid::new_v4());
    assert_eq!(store.revision(), 2);

    store.delete(created.id);
    assert_eq!(store.revision(), 3);
}

#[test]
fn seed_sample_data_populates_empty_store_only() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    assert_eq!(store.seed_sample_data(), 3);
    assert_eq!(store.len(), 3);

    let sources: Vec<AssignmentSource> = store
        .assignments()
        .iter()
        .map(|assignment| assignment.source)
        .collect();
    assert!(sources.contains(&AssignmentSource::Manual));
    assert!(sources.contains(&AssignmentSource::Canvas));
    assert!(sources.contains(&AssignmentSource::Classroom));

    assert_eq!(store.seed_sample_data(), 0);
    assert_eq!(store.len(), 3);
}

fn open_store(conn: &rusqlite::Connection) -> AssignmentStore<SqliteAssignmentRepository<'_>> {
    let repo = SqliteAssignmentRepository::try_new(conn).unwrap();
    AssignmentStore::open(repo)
}

fn draft(title: &str, course: &str, description: &str, due: &str) -> AssignmentDraft {
    AssignmentDraft {
        title: title.to_string(),
        course_name: course.to_string(),
        description: if description.is_empty() {
            None
        } else {
            Some(description.to_string())
        },
        due_date: due.to_string(),
    }
}
