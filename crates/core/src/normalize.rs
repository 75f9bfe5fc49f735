// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row normalization: raw workbook rows into validated `Lecture` records.
//!
//! The normalizer is pure and order-independent per row. Failures never
//! abort the surrounding ingestion; every problem with a row is collected
//! into structured row errors and the row is skipped.

use orari_domain::{InstructorRole, Lecture, Requirement, SessionType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Workbook column holding the course name.
pub const COL_NAME: &str = "lenda_e_rreg";
/// Workbook column holding the department code.
pub const COL_DEPARTMENT: &str = "dep_reale_rreg";
/// Workbook column holding the semester text.
pub const COL_SEMESTER: &str = "sem_rreg";
/// Workbook column holding the academic level.
pub const COL_LEVEL: &str = "niveli_rreg";
/// Workbook column holding the academic year text.
pub const COL_YEAR: &str = "viti_rreg";
/// Workbook column holding the professor name.
pub const COL_PROFESSOR: &str = "prof_rreg";
/// Workbook column holding the student group.
pub const COL_GROUP: &str = "grup_rreg";
/// Workbook column holding the session type code (`L`/`U`).
pub const COL_SESSION_TYPE: &str = "status_lende_rreg";
/// Workbook column holding the requirement code (`O`/`Z`).
pub const COL_REQUIREMENT: &str = "qasja_lende_rreg";
/// Workbook column holding the instructor role code (`P`/`A`).
pub const COL_INSTRUCTOR_ROLE: &str = "mesimdhe_lende_rreg";
/// Workbook column holding the session length in minutes.
pub const COL_DURATION: &str = "time_per_lec_rreg";

/// Normalizes a column header for case-insensitive, whitespace-tolerant
/// matching.
#[must_use]
pub fn normalize_column(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// One raw input row: recognized column names mapped to raw cell values.
///
/// Column names are normalized on insertion, so lookups match regardless
/// of the casing or spacing the transport delivered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: HashMap<String, String>,
}

impl RawRow {
    /// Creates an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
        }
    }

    /// Sets a cell value under a normalized column name.
    pub fn set(&mut self, column: &str, value: &str) {
        self.cells
            .insert(normalize_column(column), value.to_string());
    }

    /// Returns a trimmed, non-empty cell value for a column, if present.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<String> {
        self.cells
            .get(column)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for RawRow {
    fn from(cells: [(&str, &str); N]) -> Self {
        let mut row: Self = Self::new();
        for (column, value) in cells {
            row.set(column, value);
        }
        row
    }
}

/// The kind of failure a row-level validation produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowErrorKind {
    /// A required field is missing or empty.
    MissingField,
    /// A code field did not map to a known enum variant.
    InvalidEnum,
    /// A numeric field did not parse as a positive integer.
    InvalidNumber,
}

impl RowErrorKind {
    /// Returns the wire form of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingField => "MissingField",
            Self::InvalidEnum => "InvalidEnum",
            Self::InvalidNumber => "InvalidNumber",
        }
    }
}

/// A structured record of why one input row failed normalization.
///
/// Row errors are collected, never thrown: a malformed row is excluded
/// from the session's lectures while ingestion continues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    /// Zero-based index of the failing row in the input table.
    pub row_index: usize,
    /// The normalized column name that failed.
    pub field: String,
    /// The failure classification.
    pub kind: RowErrorKind,
    /// A human-readable description.
    pub message: String,
}

impl RowError {
    fn missing(row_index: usize, field: &str) -> Self {
        Self {
            row_index,
            field: field.to_string(),
            kind: RowErrorKind::MissingField,
            message: format!("{field}: required field is missing or empty"),
        }
    }

    fn invalid_enum(row_index: usize, field: &str, message: String) -> Self {
        Self {
            row_index,
            field: field.to_string(),
            kind: RowErrorKind::InvalidEnum,
            message,
        }
    }

    fn invalid_number(row_index: usize, field: &str, value: &str) -> Self {
        Self {
            row_index,
            field: field.to_string(),
            kind: RowErrorKind::InvalidNumber,
            message: format!("{field}: '{value}' is not a positive number of minutes"),
        }
    }
}

/// Extracts a required field, recording a `MissingField` error if absent.
fn require_field(
    row: &RawRow,
    row_index: usize,
    column: &str,
    errors: &mut Vec<RowError>,
) -> String {
    row.get(column).unwrap_or_else(|| {
        errors.push(RowError::missing(row_index, column));
        String::new()
    })
}

/// Normalizes one raw row into a validated `Lecture`.
///
/// The lecture id is derived from the row index (`lec_{row_index}`) and is
/// immutable for the lifetime of the owning session.
///
/// # Errors
///
/// Returns every row error found; the caller records them and skips the
/// row. At least one error is present in the `Err` case.
pub fn normalize_row(row_index: usize, row: &RawRow) -> Result<Lecture, Vec<RowError>> {
    let mut errors: Vec<RowError> = Vec::new();

    let name: String = require_field(row, row_index, COL_NAME, &mut errors);
    let department_code: String = require_field(row, row_index, COL_DEPARTMENT, &mut errors);
    let group: String = require_field(row, row_index, COL_GROUP, &mut errors);
    let session_type_code: String = require_field(row, row_index, COL_SESSION_TYPE, &mut errors);
    let requirement_code: String = require_field(row, row_index, COL_REQUIREMENT, &mut errors);
    let instructor_code: String = require_field(row, row_index, COL_INSTRUCTOR_ROLE, &mut errors);
    let duration_raw: String = require_field(row, row_index, COL_DURATION, &mut errors);

    // Informational fields are carried as-is and may be empty.
    let semester: String = row.get(COL_SEMESTER).unwrap_or_default();
    let level: String = row.get(COL_LEVEL).unwrap_or_default();
    let year: String = row.get(COL_YEAR).unwrap_or_default();
    let professor: String = row.get(COL_PROFESSOR).unwrap_or_default();

    let session_type: Option<SessionType> = if session_type_code.is_empty() {
        None
    } else {
        match SessionType::parse_code(&session_type_code) {
            Ok(value) => Some(value),
            Err(e) => {
                errors.push(RowError::invalid_enum(
                    row_index,
                    COL_SESSION_TYPE,
                    e.to_string(),
                ));
                None
            }
        }
    };

    let requirement: Option<Requirement> = if requirement_code.is_empty() {
        None
    } else {
        match Requirement::parse_code(&requirement_code) {
            Ok(value) => Some(value),
            Err(e) => {
                errors.push(RowError::invalid_enum(
                    row_index,
                    COL_REQUIREMENT,
                    e.to_string(),
                ));
                None
            }
        }
    };

    let instructor_role: Option<InstructorRole> = if instructor_code.is_empty() {
        None
    } else {
        match InstructorRole::parse_code(&instructor_code) {
            Ok(value) => Some(value),
            Err(e) => {
                errors.push(RowError::invalid_enum(
                    row_index,
                    COL_INSTRUCTOR_ROLE,
                    e.to_string(),
                ));
                None
            }
        }
    };

    let duration_minutes: Option<u32> = if duration_raw.is_empty() {
        None
    } else {
        match duration_raw.parse::<u32>() {
            Ok(value) if value > 0 => Some(value),
            _ => {
                errors.push(RowError::invalid_number(
                    row_index,
                    COL_DURATION,
                    &duration_raw,
                ));
                None
            }
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    match (session_type, requirement, instructor_role, duration_minutes) {
        (Some(session_type), Some(requirement), Some(instructor_role), Some(duration_minutes)) => {
            Ok(Lecture::new(
                format!("lec_{row_index}"),
                name,
                department_code,
                semester,
                level,
                year,
                professor,
                group,
                session_type,
                requirement,
                instructor_role,
                duration_minutes,
            ))
        }
        // Every `None` above pushed an error, so this arm cannot be reached.
        _ => unreachable!("missing values always record a row error"),
    }
}
