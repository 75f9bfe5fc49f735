// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Time;
use time::macros::{format_description, time};

/// A teaching day. The timetable covers Monday through Friday only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

/// All teaching days, in week order.
pub const TEACHING_DAYS: [Weekday; 5] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
];

impl Weekday {
    /// Parses a day name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDay` for anything outside Monday-Friday.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value.to_lowercase().as_str() {
            "monday" => Ok(Self::Monday),
            "tuesday" => Ok(Self::Tuesday),
            "wednesday" => Ok(Self::Wednesday),
            "thursday" => Ok(Self::Thursday),
            "friday" => Ok(Self::Friday),
            _ => Err(DomainError::InvalidDay(value.to_string())),
        }
    }

    /// Returns the capitalized day name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Availability status of a time slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    /// The slot may be assigned by a scheduler.
    #[default]
    Available,
    /// The slot is blocked.
    Unavailable,
}

impl SlotStatus {
    /// Parses a status from its lowercase wire form.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatus` if the value is not recognized.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value.to_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "unavailable" => Ok(Self::Unavailable),
            _ => Err(DomainError::InvalidStatus(value.to_string())),
        }
    }

    /// Returns the lowercase wire form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Unavailable => "unavailable",
        }
    }
}

impl std::fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parses an `HH:MM` wall-clock string.
///
/// # Errors
///
/// Returns `DomainError::TimeParseError` if the string is not a valid
/// 24-hour `HH:MM` time.
pub fn parse_clock(value: &str) -> Result<Time, DomainError> {
    Time::parse(value, format_description!("[hour]:[minute]")).map_err(|e| {
        DomainError::TimeParseError {
            value: value.to_string(),
            error: e.to_string(),
        }
    })
}

/// A schedulable block of time on one teaching day.
///
/// `duration_minutes` is always derived from the start and end times and
/// never taken from caller input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    /// Unique identifier (caller-supplied or generated by the catalog).
    pub id: String,
    /// The teaching day.
    pub day: Weekday,
    /// Wall-clock start, inclusive.
    pub start_time: Time,
    /// Wall-clock end, exclusive. Same-day model: no overnight slots.
    pub end_time: Time,
    /// Derived length in minutes (always positive).
    pub duration_minutes: u32,
    /// Current availability.
    pub status: SlotStatus,
}

impl TimeSlot {
    /// Creates a new `TimeSlot`, deriving the duration.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeRange` if `end_time` is not
    /// strictly after `start_time`.
    pub fn new(
        id: String,
        day: Weekday,
        start_time: Time,
        end_time: Time,
        status: SlotStatus,
    ) -> Result<Self, DomainError> {
        let minutes: i64 = (end_time - start_time).whole_minutes();
        let duration_minutes: u32 = u32::try_from(minutes)
            .ok()
            .filter(|m| *m > 0)
            .ok_or(DomainError::InvalidTimeRange {
                start: start_time,
                end: end_time,
            })?;

        Ok(Self {
            id,
            day,
            start_time,
            end_time,
            duration_minutes,
            status,
        })
    }
}

/// Tunable slot lengths and day-period boundaries.
///
/// Consumed by a later scheduler; the catalog stores exactly one of these
/// and replaces it wholesale on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotConfiguration {
    /// Minimum slot length in minutes.
    pub minimum_slot: u32,
    /// Standard slot length in minutes.
    pub standard_slot: u32,
    /// Extended slot length in minutes.
    pub extended_slot: u32,
    /// Start of the working day.
    pub working_hours_start: Time,
    /// End of the working day.
    pub working_hours_end: Time,
    /// Start of the morning period.
    pub morning_start: Time,
    /// End of the morning period.
    pub morning_end: Time,
    /// Start of the midday period.
    pub midday_start: Time,
    /// End of the midday period.
    pub midday_end: Time,
    /// Start of the evening period.
    pub evening_start: Time,
    /// End of the evening period.
    pub evening_end: Time,
}

impl Default for SlotConfiguration {
    fn default() -> Self {
        Self {
            minimum_slot: 45,
            standard_slot: 90,
            extended_slot: 135,
            working_hours_start: time!(09:00),
            working_hours_end: time!(17:00),
            morning_start: time!(09:00),
            morning_end: time!(11:00),
            midday_start: time!(11:00),
            midday_end: time!(15:00),
            evening_start: time!(15:00),
            evening_end: time!(17:00),
        }
    }
}
