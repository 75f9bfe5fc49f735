// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ClassroomCatalog, StoreError, TimeSlotCatalog};
use orari_domain::{
    Classroom, ClassroomStatus, SlotConfiguration, SlotStatus, TimeSlot, Weekday, parse_clock,
};

fn classroom(id: &str, capacity: i64, status: ClassroomStatus) -> Classroom {
    Classroom::new(
        id.to_string(),
        format!("Room {id}"),
        capacity,
        None,
        status,
    )
    .expect("valid classroom")
}

fn slot(id: &str, day: Weekday, start: &str, end: &str) -> TimeSlot {
    TimeSlot::new(
        id.to_string(),
        day,
        parse_clock(start).expect("valid start"),
        parse_clock(end).expect("valid end"),
        SlotStatus::Available,
    )
    .expect("valid slot")
}

#[test]
fn test_classroom_create_and_list_in_insertion_order() {
    let catalog: ClassroomCatalog = ClassroomCatalog::new();
    catalog
        .create(classroom("S2", 80, ClassroomStatus::Available))
        .expect("create");
    catalog
        .create(classroom("S1", 40, ClassroomStatus::Available))
        .expect("create");

    let listed: Vec<Classroom> = catalog.list().expect("list");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, "S2");
    assert_eq!(listed[1].id, "S1");
}

#[test]
fn test_classroom_duplicate_id_is_conflict() {
    let catalog: ClassroomCatalog = ClassroomCatalog::new();
    catalog
        .create(classroom("S1", 40, ClassroomStatus::Available))
        .expect("create");
    let err: StoreError = catalog
        .create(classroom("S1", 60, ClassroomStatus::Available))
        .expect_err("duplicate");
    assert_eq!(
        err,
        StoreError::Conflict {
            resource: "classroom",
            id: String::from("S1"),
        }
    );
}

#[test]
fn test_classroom_update_path_id_wins() {
    let catalog: ClassroomCatalog = ClassroomCatalog::new();
    catalog
        .create(classroom("S1", 40, ClassroomStatus::Available))
        .expect("create");

    let mut replacement: Classroom = classroom("S9", 60, ClassroomStatus::Unavailable);
    replacement.equipment = Some(String::from("projector"));
    catalog.update("S1", replacement).expect("update");

    let listed: Vec<Classroom> = catalog.list().expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, "S1");
    assert_eq!(listed[0].capacity, 60);
    assert_eq!(listed[0].status, ClassroomStatus::Unavailable);
}

#[test]
fn test_classroom_update_missing_is_not_found() {
    let catalog: ClassroomCatalog = ClassroomCatalog::new();
    let err: StoreError = catalog
        .update("S1", classroom("S1", 40, ClassroomStatus::Available))
        .expect_err("absent");
    assert!(matches!(err, StoreError::NotFound { resource: "classroom", .. }));
}

#[test]
fn test_classroom_delete_missing_is_not_found() {
    let catalog: ClassroomCatalog = ClassroomCatalog::new();
    assert!(catalog.delete("S1").is_err());

    catalog
        .create(classroom("S1", 40, ClassroomStatus::Available))
        .expect("create");
    catalog.delete("S1").expect("delete");
    assert!(catalog.list().expect("list").is_empty());
}

#[test]
fn test_classroom_filters() {
    let catalog: ClassroomCatalog = ClassroomCatalog::new();
    catalog
        .create(classroom("S1", 40, ClassroomStatus::Available))
        .expect("create");
    catalog
        .create(classroom("S2", 120, ClassroomStatus::Unavailable))
        .expect("create");
    catalog
        .create(classroom("S3", 90, ClassroomStatus::Available))
        .expect("create");

    let available: Vec<Classroom> = catalog.available().expect("available");
    assert_eq!(available.len(), 2);

    let large: Vec<Classroom> = catalog.with_capacity(90).expect("with_capacity");
    assert_eq!(large.len(), 2);
    assert!(large.iter().all(|r| r.capacity >= 90));
}

#[test]
fn test_classroom_utilization_report() {
    let catalog: ClassroomCatalog = ClassroomCatalog::new();
    catalog
        .create(classroom("S1", 40, ClassroomStatus::Available))
        .expect("create");
    catalog
        .create(classroom("S2", 120, ClassroomStatus::Unavailable))
        .expect("create");

    let report = catalog.utilization_report().expect("report");
    assert_eq!(report.total_classrooms, 2);
    assert_eq!(report.available_classrooms, 1);
    assert_eq!(report.unavailable_classrooms, 1);
    assert_eq!(report.total_capacity, 160);
    assert!((report.average_capacity - 80.0).abs() < f64::EPSILON);
    assert!((report.utilization_rate - 50.0).abs() < f64::EPSILON);
}

#[test]
fn test_empty_classroom_report_has_zero_rates() {
    let catalog: ClassroomCatalog = ClassroomCatalog::new();
    let report = catalog.utilization_report().expect("report");
    assert_eq!(report.total_classrooms, 0);
    assert!(report.average_capacity.abs() < f64::EPSILON);
    assert!(report.utilization_rate.abs() < f64::EPSILON);
}

#[test]
fn test_time_slot_create_conflict_and_delete() {
    let catalog: TimeSlotCatalog = TimeSlotCatalog::new();
    catalog
        .create(slot("monday_morning", Weekday::Monday, "09:00", "11:00"))
        .expect("create");

    let err: StoreError = catalog
        .create(slot("monday_morning", Weekday::Monday, "09:00", "10:00"))
        .expect_err("duplicate");
    assert!(matches!(err, StoreError::Conflict { resource: "time slot", .. }));

    catalog.delete("monday_morning").expect("delete");
    assert!(catalog.delete("monday_morning").is_err());
}

#[test]
fn test_time_slot_update_path_id_wins() {
    let catalog: TimeSlotCatalog = TimeSlotCatalog::new();
    catalog
        .create(slot("monday_morning", Weekday::Monday, "09:00", "11:00"))
        .expect("create");

    catalog
        .update(
            "monday_morning",
            slot("renamed", Weekday::Tuesday, "10:00", "12:00"),
        )
        .expect("update");

    let listed: Vec<TimeSlot> = catalog.list().expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, "monday_morning");
    assert_eq!(listed[0].day, Weekday::Tuesday);
    assert_eq!(listed[0].duration_minutes, 120);
}

#[test]
fn test_generated_slot_ids_are_unique_and_keyed_on_day() {
    let catalog: TimeSlotCatalog = TimeSlotCatalog::new();
    let first: String = catalog
        .generate_slot_id(Weekday::Wednesday)
        .expect("generate");
    let second: String = catalog
        .generate_slot_id(Weekday::Wednesday)
        .expect("generate");
    assert!(first.starts_with("wednesday_"));
    assert_ne!(first, second);
}

#[test]
fn test_time_slot_filters() {
    let catalog: TimeSlotCatalog = TimeSlotCatalog::new();
    catalog
        .create(slot("monday_morning", Weekday::Monday, "09:00", "11:00"))
        .expect("create");
    let mut blocked: TimeSlot = slot("monday_midday", Weekday::Monday, "11:00", "15:00");
    blocked.status = SlotStatus::Unavailable;
    catalog.create(blocked).expect("create");
    catalog
        .create(slot("friday_morning", Weekday::Friday, "09:00", "11:00"))
        .expect("create");

    assert_eq!(catalog.available().expect("available").len(), 2);
    assert_eq!(catalog.by_day(Weekday::Monday).expect("by_day").len(), 2);
    assert_eq!(catalog.by_day(Weekday::Tuesday).expect("by_day").len(), 0);
}

#[test]
fn test_time_slot_utilization_report() {
    let catalog: TimeSlotCatalog = TimeSlotCatalog::new();
    catalog
        .create(slot("monday_morning", Weekday::Monday, "09:00", "11:00"))
        .expect("create");
    let mut blocked: TimeSlot = slot("friday_evening", Weekday::Friday, "15:00", "17:00");
    blocked.status = SlotStatus::Unavailable;
    catalog.create(blocked).expect("create");

    let report = catalog.utilization_report().expect("report");
    assert_eq!(report.total_time_slots, 2);
    assert_eq!(report.available_time_slots, 1);
    assert!((report.utilization_rate - 50.0).abs() < f64::EPSILON);
    assert_eq!(report.slots_by_day.len(), 2);
    assert_eq!(report.slots_by_day[0].day, "Monday");
    assert_eq!(report.slots_by_day[1].day, "Friday");
}

#[test]
fn test_seed_standard_week_is_idempotent() {
    let catalog: TimeSlotCatalog = TimeSlotCatalog::new();
    let created: usize = catalog.seed_standard_week().expect("seed");
    assert_eq!(created, 15);

    let again: usize = catalog.seed_standard_week().expect("seed again");
    assert_eq!(again, 0);
    assert_eq!(catalog.list().expect("list").len(), 15);

    let monday: Vec<TimeSlot> = catalog.by_day(Weekday::Monday).expect("by_day");
    assert_eq!(monday.len(), 3);
    assert!(monday.iter().any(|s| s.id == "monday_morning" && s.duration_minutes == 120));
    assert!(monday.iter().any(|s| s.id == "monday_midday" && s.duration_minutes == 240));
}

#[test]
fn test_slot_configuration_round_trip() {
    let catalog: TimeSlotCatalog = TimeSlotCatalog::new();
    let initial: SlotConfiguration = catalog.configuration().expect("configuration");
    assert_eq!(initial, SlotConfiguration::default());

    let mut updated: SlotConfiguration = initial;
    updated.standard_slot = 100;
    updated.working_hours_end = parse_clock("18:00").expect("valid time");
    catalog
        .set_configuration(updated.clone())
        .expect("set configuration");

    assert_eq!(catalog.configuration().expect("configuration"), updated);
}
