// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{SessionStore, StoreError};
use orari::{
    COL_DEPARTMENT, COL_DURATION, COL_GROUP, COL_INSTRUCTOR_ROLE, COL_NAME, COL_REQUIREMENT,
    COL_SESSION_TYPE, DEFAULT_MAX_ROWS, EmptyDirectory, PreparedSession, RawRow, Session,
    prepare_session,
};
use orari_domain::Lecture;
use std::sync::Arc;

fn raw_row(name: &str, dept: &str, group: &str) -> RawRow {
    RawRow::from([
        (COL_NAME, name),
        (COL_DEPARTMENT, dept),
        (COL_GROUP, group),
        (COL_SESSION_TYPE, "L"),
        (COL_REQUIREMENT, "O"),
        (COL_INSTRUCTOR_ROLE, "P"),
        (COL_DURATION, "90"),
    ])
}

fn create_store() -> SessionStore {
    SessionStore::new(Arc::new(EmptyDirectory))
}

fn create_session(store: &SessionStore, rows: &[RawRow]) -> Session {
    let prepared: PreparedSession =
        prepare_session(rows, &EmptyDirectory, DEFAULT_MAX_ROWS).expect("within bounds");
    store
        .create(prepared.lectures, prepared.row_errors)
        .expect("create")
}

#[test]
fn test_create_then_get_round_trip() {
    let store: SessionStore = create_store();
    let created: Session = create_session(
        &store,
        &[raw_row("Mikroekonomia", "EK", "1.2"), raw_row("Calculus", "MK", "1")],
    );

    let fetched: Session = store.get(&created.session_id).expect("get");
    assert_eq!(fetched, created);
    assert_eq!(fetched.lectures.len(), 2);
    assert_eq!(fetched.groups.len(), 1);
}

#[test]
fn test_create_derives_aggregates() {
    let store: SessionStore = create_store();
    let created: Session = create_session(
        &store,
        &[raw_row("Mikroekonomia", "EK", "1.2"), raw_row("Calculus", "MK", "1")],
    );

    assert_eq!(created.departments.len(), 2);
    assert_eq!(created.groups.len(), 1);
    assert_eq!(created.groups[0].lecture_count, 2);
    assert_eq!(created.subgroups.len(), 1);
    assert_eq!(created.subgroups[0].parent_group, "1");
}

#[test]
fn test_get_missing_session_is_not_found() {
    let store: SessionStore = create_store();
    let err: StoreError = store.get("sess_missing").expect_err("absent");
    assert_eq!(
        err,
        StoreError::NotFound {
            resource: "session",
            id: String::from("sess_missing"),
        }
    );
}

#[test]
fn test_session_ids_are_unique() {
    let store: SessionStore = create_store();
    let first: Session = create_session(&store, &[raw_row("A", "EK", "1")]);
    let second: Session = create_session(&store, &[raw_row("A", "EK", "1")]);
    assert_ne!(first.session_id, second.session_id);
}

#[test]
fn test_update_lecture_replaces_fields_and_rederives() {
    let store: SessionStore = create_store();
    let created: Session = create_session(
        &store,
        &[raw_row("Mikroekonomia", "EK", "1.2"), raw_row("Calculus", "MK", "1")],
    );

    let mut patch: Lecture = created.lectures[0].clone();
    patch.department_code = String::from("BF");
    patch.group = String::from("2");
    patch.duration_minutes = 45;

    let updated: Session = store
        .update_lecture(&created.session_id, "lec_0", patch.clone())
        .expect("update");

    let edited: &Lecture = updated
        .lectures
        .iter()
        .find(|l| l.id == "lec_0")
        .expect("lecture present");
    assert_eq!(*edited, patch);

    // Aggregates reflect the new department and group.
    assert!(updated.departments.iter().any(|d| d.code == "BF"));
    assert!(!updated.departments.iter().any(|d| d.code == "EK"));
    assert!(updated.groups.iter().any(|g| g.id == "2"));
    assert!(updated.subgroups.is_empty());

    // Read-after-write sees the same view.
    let fetched: Session = store.get(&created.session_id).expect("get");
    assert_eq!(fetched, updated);
}

#[test]
fn test_update_lecture_rejects_id_change() {
    let store: SessionStore = create_store();
    let created: Session = create_session(&store, &[raw_row("A", "EK", "1")]);

    let mut patch: Lecture = created.lectures[0].clone();
    patch.id = String::from("lec_99");

    let err: StoreError = store
        .update_lecture(&created.session_id, "lec_0", patch)
        .expect_err("id is immutable");
    assert_eq!(err, StoreError::ImmutableField { field: "id" });

    // The failed update changed nothing.
    let fetched: Session = store.get(&created.session_id).expect("get");
    assert_eq!(fetched.lectures[0].id, "lec_0");
    assert_eq!(fetched, created);
}

#[test]
fn test_update_missing_lecture_is_not_found() {
    let store: SessionStore = create_store();
    let created: Session = create_session(&store, &[raw_row("A", "EK", "1")]);

    let mut patch: Lecture = created.lectures[0].clone();
    patch.id = String::from("lec_42");
    let err: StoreError = store
        .update_lecture(&created.session_id, "lec_42", patch)
        .expect_err("absent lecture");
    assert!(matches!(err, StoreError::NotFound { resource: "lecture", .. }));
}

#[test]
fn test_remove_lecture_rederives() {
    let store: SessionStore = create_store();
    let created: Session = create_session(
        &store,
        &[raw_row("Mikroekonomia", "EK", "1.2"), raw_row("Calculus", "MK", "1")],
    );

    let updated: Session = store
        .remove_lecture(&created.session_id, "lec_0")
        .expect("remove");

    assert_eq!(updated.lectures.len(), 1);
    assert!(!updated.departments.iter().any(|d| d.code == "EK"));
    assert!(updated.subgroups.is_empty());
    assert_eq!(updated.groups.len(), 1);
    assert_eq!(updated.groups[0].lecture_count, 1);
}

#[test]
fn test_delete_is_idempotent() {
    let store: SessionStore = create_store();
    let created: Session = create_session(&store, &[raw_row("A", "EK", "1")]);

    assert!(store.delete(&created.session_id).expect("first delete"));
    assert!(!store.delete(&created.session_id).expect("second delete"));
    assert!(store.get(&created.session_id).is_err());
}

#[test]
fn test_capacity_bound_evicts_oldest() {
    let store: SessionStore = SessionStore::with_capacity(2, Arc::new(EmptyDirectory));

    let first: Session = create_session(&store, &[raw_row("A", "EK", "1")]);
    let second: Session = create_session(&store, &[raw_row("B", "EK", "1")]);
    let third: Session = create_session(&store, &[raw_row("C", "EK", "1")]);

    assert_eq!(store.len().expect("len"), 2);
    assert!(store.get(&first.session_id).is_err());
    assert!(store.get(&second.session_id).is_ok());
    assert!(store.get(&third.session_id).is_ok());
}

#[test]
fn test_row_errors_are_retained() {
    let store: SessionStore = create_store();
    let mut bad: RawRow = raw_row("Broken", "EK", "1");
    bad.set(COL_DURATION, "soon");

    let created: Session = create_session(&store, &[raw_row("A", "EK", "1"), bad]);
    assert_eq!(created.lectures.len(), 1);
    assert_eq!(created.row_errors.len(), 1);
    assert_eq!(created.row_errors[0].row_index, 1);
}
