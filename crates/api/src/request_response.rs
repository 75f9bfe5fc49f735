// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the API boundary.
//!
//! Write requests carry raw strings and are decoded into domain types
//! exactly once, here. Responses embed domain and aggregate types that
//! already serialize in their wire form; time slots get an explicit view
//! because wall-clock times travel as `HH:MM` strings.

use orari::{Department, Group, IngestSummary, RowError, Session, Subgroup};
use orari_domain::{
    Classroom, ClassroomStatus, DomainError, InstructorRole, Lecture, Requirement, SessionType,
    SlotConfiguration, SlotStatus, TimeSlot, Weekday, parse_clock,
};
use serde::{Deserialize, Serialize};
use time::Time;

use crate::error::{ApiError, translate_domain_error};

/// Formats a wall-clock time as `HH:MM`.
fn format_clock(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// A lecture as sent by callers for create/replace operations.
///
/// `id` may be omitted; the path id wins. Enum fields accept either the
/// single-letter workbook code or the serialized long name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LectureDto {
    /// The lecture id; optional because the path already carries it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The course name.
    pub name: String,
    /// The department code.
    pub department_code: String,
    /// Semester text.
    #[serde(default)]
    pub semester: String,
    /// Academic level.
    #[serde(default)]
    pub level: String,
    /// Academic year text.
    #[serde(default)]
    pub year: String,
    /// Professor name.
    #[serde(default)]
    pub professor: String,
    /// Student group, possibly subgroup-qualified.
    pub group: String,
    /// Session type code or name (`L`/`U`/`Lecture`/`Exercise`).
    pub session_type: String,
    /// Requirement code or name (`O`/`Z`/`Obligatory`/`Elective`).
    pub requirement: String,
    /// Instructor role code or name (`P`/`A`/`Professor`/`Assistant`).
    pub instructor_role: String,
    /// Session length in minutes.
    pub duration_minutes: u32,
}

impl LectureDto {
    /// Decodes this payload into a domain `Lecture` under a known id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` when an enum field or the
    /// duration does not decode. An id mismatch is left for the store to
    /// reject, so identity rules live in one place.
    pub fn into_lecture(self, fallback_id: &str) -> Result<Lecture, ApiError> {
        let session_type: SessionType =
            SessionType::parse(&self.session_type).map_err(translate_domain_error)?;
        let requirement: Requirement =
            Requirement::parse(&self.requirement).map_err(translate_domain_error)?;
        let instructor_role: InstructorRole =
            InstructorRole::parse(&self.instructor_role).map_err(translate_domain_error)?;

        if self.duration_minutes == 0 {
            return Err(translate_domain_error(DomainError::InvalidDuration(
                String::from("0"),
            )));
        }

        Ok(Lecture::new(
            self.id.unwrap_or_else(|| fallback_id.to_string()),
            self.name,
            self.department_code,
            self.semester,
            self.level,
            self.year,
            self.professor,
            self.group,
            session_type,
            requirement,
            instructor_role,
            self.duration_minutes,
        ))
    }
}

/// The full view of one session: lectures, the three aggregate
/// collections, and the retained row errors.
///
/// Every write operation returns this complete post-mutation view, never
/// a partial diff, so callers can replace their local cache wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    /// The opaque session identifier.
    pub session_id: String,
    /// Normalized lectures, in original row order.
    pub lectures: Vec<Lecture>,
    /// Derived department aggregates.
    pub departments: Vec<Department>,
    /// Derived group aggregates.
    pub groups: Vec<Group>,
    /// Derived subgroup aggregates.
    pub subgroups: Vec<Subgroup>,
    /// Per-row validation failures from the original upload.
    pub row_errors: Vec<RowError>,
}

impl From<Session> for SessionView {
    fn from(session: Session) -> Self {
        Self {
            session_id: session.session_id,
            lectures: session.lectures,
            departments: session.departments,
            groups: session.groups,
            subgroups: session.subgroups,
            row_errors: session.row_errors,
        }
    }
}

/// Response to a successful (possibly partial) upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// The id of the newly created session.
    pub session_id: String,
    /// A human-readable status line.
    pub message: String,
    /// Counts over the ingested table.
    pub summary: IngestSummary,
    /// Per-row validation failures; partial success is always observable.
    pub row_errors: Vec<RowError>,
}

/// Generic message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// A human-readable status line.
    pub message: String,
}

/// A classroom as sent by callers for create/replace operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassroomDto {
    /// Caller-assigned identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Capacity; validated to be positive.
    pub capacity: i64,
    /// Special equipment, if any.
    #[serde(default)]
    pub equipment: Option<String>,
    /// Availability; defaults to available.
    #[serde(default)]
    pub status: Option<String>,
}

impl ClassroomDto {
    /// Decodes this payload into a domain `Classroom`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` when the capacity is not positive
    /// or the status is unrecognized.
    pub fn into_classroom(self) -> Result<Classroom, ApiError> {
        let status: ClassroomStatus = match self.status.as_deref() {
            None => ClassroomStatus::Available,
            Some(value) => ClassroomStatus::parse(value).map_err(translate_domain_error)?,
        };

        Classroom::new(self.id, self.name, self.capacity, self.equipment, status)
            .map_err(translate_domain_error)
    }
}

/// The complete classroom list, returned by every classroom write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassroomListResponse {
    /// All classrooms in insertion order.
    pub classrooms: Vec<Classroom>,
}

/// A time slot as sent by callers for create/replace operations.
///
/// `duration_minutes` is accepted for symmetry with the read view but
/// never trusted: the catalog always recomputes it from the bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlotDto {
    /// Identifier; generated from the day and creation time if omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The teaching day (Monday through Friday).
    pub day: String,
    /// Wall-clock start, `HH:MM`.
    pub start_time: String,
    /// Wall-clock end, `HH:MM`.
    pub end_time: String,
    /// Ignored on input; derived server-side.
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    /// Availability; defaults to available.
    #[serde(default)]
    pub status: Option<String>,
}

impl TimeSlotDto {
    /// Decodes this payload into a domain `TimeSlot` under a known id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` for an unrecognized day, time, or
    /// status, and `ApiError::InvalidRange` when the end does not fall
    /// strictly after the start.
    pub fn into_slot(self, id: String) -> Result<TimeSlot, ApiError> {
        let day: Weekday = Weekday::parse(&self.day).map_err(translate_domain_error)?;
        let start_time: Time = parse_clock(&self.start_time).map_err(translate_domain_error)?;
        let end_time: Time = parse_clock(&self.end_time).map_err(translate_domain_error)?;
        let status: SlotStatus = match self.status.as_deref() {
            None => SlotStatus::Available,
            Some(value) => SlotStatus::parse(value).map_err(translate_domain_error)?,
        };

        TimeSlot::new(id, day, start_time, end_time, status).map_err(translate_domain_error)
    }
}

/// A time slot in wire form, with `HH:MM` bounds and derived duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlotView {
    /// Unique identifier.
    pub id: String,
    /// The teaching day name.
    pub day: String,
    /// Wall-clock start, `HH:MM`.
    pub start_time: String,
    /// Wall-clock end, `HH:MM`.
    pub end_time: String,
    /// Derived length in minutes.
    pub duration_minutes: u32,
    /// Availability, lowercase.
    pub status: String,
}

impl From<TimeSlot> for TimeSlotView {
    fn from(slot: TimeSlot) -> Self {
        Self {
            id: slot.id,
            day: slot.day.as_str().to_string(),
            start_time: format_clock(slot.start_time),
            end_time: format_clock(slot.end_time),
            duration_minutes: slot.duration_minutes,
            status: slot.status.as_str().to_string(),
        }
    }
}

/// The complete time-slot list, returned by every time-slot write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlotListResponse {
    /// All slots in insertion order.
    pub time_slots: Vec<TimeSlotView>,
}

/// Slot configuration in wire form (`HH:MM` period bounds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConfigDto {
    /// Minimum slot length in minutes.
    pub minimum_slot: u32,
    /// Standard slot length in minutes.
    pub standard_slot: u32,
    /// Extended slot length in minutes.
    pub extended_slot: u32,
    /// Start of the working day.
    pub working_hours_start: String,
    /// End of the working day.
    pub working_hours_end: String,
    /// Start of the morning period.
    pub morning_start: String,
    /// End of the morning period.
    pub morning_end: String,
    /// Start of the midday period.
    pub midday_start: String,
    /// End of the midday period.
    pub midday_end: String,
    /// Start of the evening period.
    pub evening_start: String,
    /// End of the evening period.
    pub evening_end: String,
}

impl SlotConfigDto {
    /// Decodes this payload into a domain `SlotConfiguration`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` when any period bound fails to
    /// parse as an `HH:MM` time.
    pub fn into_configuration(self) -> Result<SlotConfiguration, ApiError> {
        Ok(SlotConfiguration {
            minimum_slot: self.minimum_slot,
            standard_slot: self.standard_slot,
            extended_slot: self.extended_slot,
            working_hours_start: parse_clock(&self.working_hours_start)
                .map_err(translate_domain_error)?,
            working_hours_end: parse_clock(&self.working_hours_end)
                .map_err(translate_domain_error)?,
            morning_start: parse_clock(&self.morning_start).map_err(translate_domain_error)?,
            morning_end: parse_clock(&self.morning_end).map_err(translate_domain_error)?,
            midday_start: parse_clock(&self.midday_start).map_err(translate_domain_error)?,
            midday_end: parse_clock(&self.midday_end).map_err(translate_domain_error)?,
            evening_start: parse_clock(&self.evening_start).map_err(translate_domain_error)?,
            evening_end: parse_clock(&self.evening_end).map_err(translate_domain_error)?,
        })
    }
}

impl From<SlotConfiguration> for SlotConfigDto {
    fn from(config: SlotConfiguration) -> Self {
        Self {
            minimum_slot: config.minimum_slot,
            standard_slot: config.standard_slot,
            extended_slot: config.extended_slot,
            working_hours_start: format_clock(config.working_hours_start),
            working_hours_end: format_clock(config.working_hours_end),
            morning_start: format_clock(config.morning_start),
            morning_end: format_clock(config.morning_end),
            midday_start: format_clock(config.midday_start),
            midday_end: format_clock(config.midday_end),
            evening_start: format_clock(config.evening_start),
            evening_end: format_clock(config.evening_end),
        }
    }
}
