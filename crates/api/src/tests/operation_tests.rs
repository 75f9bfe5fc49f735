// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use crate::handlers::{
    create_classroom, create_time_slot, delete_classroom, delete_session, get_session,
    get_slot_configuration, list_time_slots, remove_lecture, update_lecture, update_slot_configuration,
    update_time_slot, upload_table,
};
use crate::request_response::{
    ClassroomDto, LectureDto, SessionView, SlotConfigDto, TimeSlotDto, UploadResponse,
};
use orari::{DEFAULT_MAX_ROWS, EmptyDirectory};
use orari_store::{ClassroomCatalog, SessionStore, TimeSlotCatalog};
use std::sync::Arc;

const CSV: &str = "Lenda_e_rreg,Dep_reale_rreg,Sem_rreg,Niveli_rreg,Viti_rreg,Prof_rreg,\
                   Grup_rreg,Status_lende_rreg,Qasja_lende_rreg,Mesimdhe_lende_rreg,\
                   Time_per_lec_rreg\n\
                   Mikroekonomia,EK,I,Bachelor,VITI I,A. Hoxha,1.2,L,O,P,90\n\
                   Calculus,MK,II,Bachelor,VITI I,B. Krasniqi,1,U,Z,A,45\n";

fn create_store() -> SessionStore {
    SessionStore::new(Arc::new(EmptyDirectory))
}

fn lecture_payload(name: &str, dept: &str, group: &str) -> LectureDto {
    LectureDto {
        id: None,
        name: name.to_string(),
        department_code: dept.to_string(),
        semester: String::from("I"),
        level: String::from("Bachelor"),
        year: String::from("VITI I"),
        professor: String::from("A. Hoxha"),
        group: group.to_string(),
        session_type: String::from("L"),
        requirement: String::from("O"),
        instructor_role: String::from("P"),
        duration_minutes: 90,
    }
}

fn slot_payload(id: Option<&str>, day: &str, start: &str, end: &str) -> TimeSlotDto {
    TimeSlotDto {
        id: id.map(String::from),
        day: day.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        duration_minutes: None,
        status: None,
    }
}

#[test]
fn test_upload_then_read_round_trip() {
    let store: SessionStore = create_store();
    let response: UploadResponse = upload_table(CSV, &store, DEFAULT_MAX_ROWS).expect("upload");

    assert_eq!(response.summary.total_rows, 2);
    assert_eq!(response.summary.lecture_count, 2);
    assert_eq!(response.summary.group_count, 1);
    assert!(response.row_errors.is_empty());

    let view: SessionView = get_session(&store, &response.session_id).expect("get");
    assert_eq!(view.lectures.len(), 2);
    assert_eq!(view.departments.len(), 2);
    assert_eq!(view.groups[0].lecture_count, 2);
    assert_eq!(view.subgroups[0].id, "1.2");
}

#[test]
fn test_upload_with_invalid_row_still_succeeds() {
    let csv: &str = "Lenda_e_rreg,Dep_reale_rreg,Grup_rreg,Status_lende_rreg,\
                     Qasja_lende_rreg,Mesimdhe_lende_rreg,Time_per_lec_rreg\n\
                     Mikroekonomia,EK,1.2,L,O,P,90\n\
                     Broken,EK,1,L,O,P,\n";
    let store: SessionStore = create_store();
    let response: UploadResponse =
        upload_table(csv, &store, DEFAULT_MAX_ROWS).expect("partial upload succeeds");

    assert_eq!(response.summary.lecture_count, 1);
    assert_eq!(response.summary.invalid_row_count, 1);
    assert_eq!(response.row_errors.len(), 1);
    assert_eq!(response.row_errors[0].row_index, 1);
}

#[test]
fn test_upload_rejects_oversized_table() {
    let store: SessionStore = create_store();
    let err: ApiError = upload_table(CSV, &store, 1).expect_err("over the row cap");
    assert_eq!(err, ApiError::PayloadTooLarge { rows: 2, limit: 1 });
}

#[test]
fn test_upload_rejects_missing_columns() {
    let store: SessionStore = create_store();
    let err: ApiError =
        upload_table("Lenda_e_rreg\nMikroekonomia\n", &store, DEFAULT_MAX_ROWS)
            .expect_err("missing columns");
    assert!(matches!(err, ApiError::InvalidTable { .. }));
}

#[test]
fn test_get_missing_session_is_not_found() {
    let store: SessionStore = create_store();
    let err: ApiError = get_session(&store, "sess_missing").expect_err("absent");
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

#[test]
fn test_update_lecture_returns_full_view() {
    let store: SessionStore = create_store();
    let uploaded: UploadResponse = upload_table(CSV, &store, DEFAULT_MAX_ROWS).expect("upload");

    let view: SessionView = update_lecture(
        &store,
        &uploaded.session_id,
        "lec_0",
        lecture_payload("Mikroekonomia", "BF", "2"),
    )
    .expect("update");

    let edited = view
        .lectures
        .iter()
        .find(|l| l.id == "lec_0")
        .expect("lecture present");
    assert_eq!(edited.department_code, "BF");
    assert_eq!(edited.group, "2");
    assert!(view.departments.iter().any(|d| d.code == "BF"));
    assert!(view.groups.iter().any(|g| g.id == "2"));
}

#[test]
fn test_update_lecture_accepts_long_enum_names() {
    let store: SessionStore = create_store();
    let uploaded: UploadResponse = upload_table(CSV, &store, DEFAULT_MAX_ROWS).expect("upload");

    let mut payload: LectureDto = lecture_payload("Mikroekonomia", "EK", "1.2");
    payload.session_type = String::from("Exercise");
    payload.requirement = String::from("Elective");
    payload.instructor_role = String::from("Assistant");

    let view: SessionView =
        update_lecture(&store, &uploaded.session_id, "lec_0", payload).expect("update");
    let edited = view.lectures.iter().find(|l| l.id == "lec_0").expect("present");
    assert_eq!(edited.session_type, orari_domain::SessionType::Exercise);
}

#[test]
fn test_update_lecture_rejects_id_change() {
    let store: SessionStore = create_store();
    let uploaded: UploadResponse = upload_table(CSV, &store, DEFAULT_MAX_ROWS).expect("upload");

    let mut payload: LectureDto = lecture_payload("Mikroekonomia", "EK", "1.2");
    payload.id = Some(String::from("lec_42"));

    let err: ApiError = update_lecture(&store, &uploaded.session_id, "lec_0", payload)
        .expect_err("id is immutable");
    assert_eq!(
        err,
        ApiError::ImmutableField {
            field: String::from("id"),
        }
    );
}

#[test]
fn test_update_lecture_rejects_bad_enum() {
    let store: SessionStore = create_store();
    let uploaded: UploadResponse = upload_table(CSV, &store, DEFAULT_MAX_ROWS).expect("upload");

    let mut payload: LectureDto = lecture_payload("Mikroekonomia", "EK", "1.2");
    payload.session_type = String::from("W");

    let err: ApiError = update_lecture(&store, &uploaded.session_id, "lec_0", payload)
        .expect_err("bad enum");
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "session_type"));
}

#[test]
fn test_remove_lecture_and_delete_session() {
    let store: SessionStore = create_store();
    let uploaded: UploadResponse = upload_table(CSV, &store, DEFAULT_MAX_ROWS).expect("upload");

    let view: SessionView =
        remove_lecture(&store, &uploaded.session_id, "lec_1").expect("remove");
    assert_eq!(view.lectures.len(), 1);

    delete_session(&store, &uploaded.session_id).expect("delete");
    assert!(get_session(&store, &uploaded.session_id).is_err());

    // Idempotent: deleting again is not an error.
    delete_session(&store, &uploaded.session_id).expect("repeat delete");
}

#[test]
fn test_create_classroom_validates_capacity() {
    let catalog: ClassroomCatalog = ClassroomCatalog::new();
    let payload: ClassroomDto = ClassroomDto {
        id: String::from("S1"),
        name: String::from("Main hall"),
        capacity: 0,
        equipment: None,
        status: None,
    };

    let err: ApiError = create_classroom(&catalog, payload).expect_err("zero capacity");
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "capacity"));
}

#[test]
fn test_classroom_writes_return_full_list() {
    let catalog: ClassroomCatalog = ClassroomCatalog::new();
    let payload: ClassroomDto = ClassroomDto {
        id: String::from("S1"),
        name: String::from("Main hall"),
        capacity: 80,
        equipment: Some(String::from("projector")),
        status: Some(String::from("available")),
    };

    let created = create_classroom(&catalog, payload.clone()).expect("create");
    assert_eq!(created.classrooms.len(), 1);

    let err: ApiError = create_classroom(&catalog, payload).expect_err("duplicate id");
    assert!(matches!(err, ApiError::Conflict { .. }));

    let after_delete = delete_classroom(&catalog, "S1").expect("delete");
    assert!(after_delete.classrooms.is_empty());
}

#[test]
fn test_create_time_slot_derives_duration() {
    let catalog: TimeSlotCatalog = TimeSlotCatalog::new();
    let mut payload: TimeSlotDto = slot_payload(Some("monday_morning"), "Monday", "09:00", "11:00");
    // Caller-supplied duration is never trusted.
    payload.duration_minutes = Some(999);

    let response = create_time_slot(&catalog, payload).expect("create");
    assert_eq!(response.time_slots.len(), 1);
    assert_eq!(response.time_slots[0].duration_minutes, 120);
    assert_eq!(response.time_slots[0].start_time, "09:00");
}

#[test]
fn test_create_time_slot_rejects_empty_range() {
    let catalog: TimeSlotCatalog = TimeSlotCatalog::new();
    let err: ApiError =
        create_time_slot(&catalog, slot_payload(None, "Monday", "09:00", "09:00"))
            .expect_err("empty range");
    assert!(matches!(err, ApiError::InvalidRange { .. }));
}

#[test]
fn test_create_time_slot_generates_id_when_omitted() {
    let catalog: TimeSlotCatalog = TimeSlotCatalog::new();
    let response =
        create_time_slot(&catalog, slot_payload(None, "Wednesday", "09:00", "10:00"))
            .expect("create");
    assert!(response.time_slots[0].id.starts_with("wednesday_"));
}

#[test]
fn test_update_time_slot_path_id_wins() {
    let catalog: TimeSlotCatalog = TimeSlotCatalog::new();
    create_time_slot(&catalog, slot_payload(Some("monday_morning"), "Monday", "09:00", "11:00"))
        .expect("create");

    let mut payload: TimeSlotDto = slot_payload(Some("other_id"), "Tuesday", "10:00", "12:00");
    payload.status = Some(String::from("unavailable"));
    let response = update_time_slot(&catalog, "monday_morning", payload).expect("update");

    assert_eq!(response.time_slots.len(), 1);
    assert_eq!(response.time_slots[0].id, "monday_morning");
    assert_eq!(response.time_slots[0].day, "Tuesday");
    assert_eq!(response.time_slots[0].status, "unavailable");

    let listed = list_time_slots(&catalog).expect("list");
    assert_eq!(listed.time_slots, response.time_slots);
}

#[test]
fn test_slot_configuration_round_trip() {
    let catalog: TimeSlotCatalog = TimeSlotCatalog::new();
    let mut config: SlotConfigDto = get_slot_configuration(&catalog).expect("get");
    assert_eq!(config.standard_slot, 90);
    assert_eq!(config.working_hours_start, "09:00");

    config.standard_slot = 100;
    config.evening_end = String::from("18:00");
    let stored: SlotConfigDto =
        update_slot_configuration(&catalog, config.clone()).expect("update");
    assert_eq!(stored, config);
    assert_eq!(get_slot_configuration(&catalog).expect("get"), config);
}

#[test]
fn test_slot_configuration_rejects_bad_time() {
    let catalog: TimeSlotCatalog = TimeSlotCatalog::new();
    let mut config: SlotConfigDto = get_slot_configuration(&catalog).expect("get");
    config.morning_start = String::from("late");

    let err: ApiError =
        update_slot_configuration(&catalog, config).expect_err("unparseable time");
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "time"));
}
