// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, SlotConfiguration, SlotStatus, TimeSlot, Weekday, parse_clock};

#[test]
fn test_parse_clock_valid() {
    let t: time::Time = parse_clock("09:00").unwrap();
    assert_eq!(t.hour(), 9);
    assert_eq!(t.minute(), 0);
}

#[test]
fn test_parse_clock_invalid() {
    assert!(matches!(
        parse_clock("25:00"),
        Err(DomainError::TimeParseError { .. })
    ));
    assert!(matches!(
        parse_clock("morning"),
        Err(DomainError::TimeParseError { .. })
    ));
}

#[test]
fn test_weekday_parse_case_insensitive() {
    assert_eq!(Weekday::parse("monday").unwrap(), Weekday::Monday);
    assert_eq!(Weekday::parse("Friday").unwrap(), Weekday::Friday);
    assert!(Weekday::parse("Saturday").is_err());
    assert!(Weekday::parse("Sunday").is_err());
}

#[test]
fn test_time_slot_derives_duration() {
    let slot: TimeSlot = TimeSlot::new(
        String::from("monday_morning"),
        Weekday::Monday,
        parse_clock("09:00").unwrap(),
        parse_clock("11:00").unwrap(),
        SlotStatus::Available,
    )
    .unwrap();
    assert_eq!(slot.duration_minutes, 120);
}

#[test]
fn test_time_slot_rejects_equal_bounds() {
    let start: time::Time = parse_clock("09:00").unwrap();
    let err: DomainError = TimeSlot::new(
        String::from("bad"),
        Weekday::Monday,
        start,
        start,
        SlotStatus::Available,
    )
    .unwrap_err();
    assert!(matches!(err, DomainError::InvalidTimeRange { .. }));
}

#[test]
fn test_time_slot_rejects_inverted_bounds() {
    let result = TimeSlot::new(
        String::from("bad"),
        Weekday::Tuesday,
        parse_clock("11:00").unwrap(),
        parse_clock("09:00").unwrap(),
        SlotStatus::Available,
    );
    assert!(matches!(result, Err(DomainError::InvalidTimeRange { .. })));
}

#[test]
fn test_slot_configuration_defaults() {
    let config: SlotConfiguration = SlotConfiguration::default();
    assert_eq!(config.minimum_slot, 45);
    assert_eq!(config.standard_slot, 90);
    assert_eq!(config.extended_slot, 135);
    assert_eq!(config.working_hours_start, parse_clock("09:00").unwrap());
    assert_eq!(config.evening_end, parse_clock("17:00").unwrap());
}
