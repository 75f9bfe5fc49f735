// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Session type code is not recognized.
    InvalidSessionType(String),
    /// Requirement code is not recognized.
    InvalidRequirement(String),
    /// Instructor role code is not recognized.
    InvalidInstructorRole(String),
    /// Lecture duration is not a positive number of minutes.
    InvalidDuration(String),
    /// Classroom capacity must be a positive integer.
    InvalidCapacity {
        /// The rejected capacity value.
        capacity: i64,
    },
    /// Day of week is not recognized (Monday through Friday only).
    InvalidDay(String),
    /// Availability status is not recognized.
    InvalidStatus(String),
    /// A time slot must end strictly after it starts.
    InvalidTimeRange {
        /// The slot start time.
        start: time::Time,
        /// The slot end time.
        end: time::Time,
    },
    /// Failed to parse a wall-clock time from a string.
    TimeParseError {
        /// The invalid time string.
        value: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSessionType(code) => {
                write!(f, "Invalid session type code '{code}' (must be L or U)")
            }
            Self::InvalidRequirement(code) => {
                write!(f, "Invalid requirement code '{code}' (must be O or Z)")
            }
            Self::InvalidInstructorRole(code) => {
                write!(f, "Invalid instructor role code '{code}' (must be P or A)")
            }
            Self::InvalidDuration(value) => {
                write!(
                    f,
                    "Invalid duration '{value}': must be a positive number of minutes"
                )
            }
            Self::InvalidCapacity { capacity } => {
                write!(f, "Invalid capacity {capacity}: must be greater than 0")
            }
            Self::InvalidDay(value) => {
                write!(
                    f,
                    "Invalid day '{value}': must be Monday through Friday"
                )
            }
            Self::InvalidStatus(value) => {
                write!(
                    f,
                    "Invalid status '{value}': must be 'available' or 'unavailable'"
                )
            }
            Self::InvalidTimeRange { start, end } => {
                write!(
                    f,
                    "Invalid time range: end {end} must be strictly after start {start}"
                )
            }
            Self::TimeParseError { value, error } => {
                write!(f, "Failed to parse time '{value}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
