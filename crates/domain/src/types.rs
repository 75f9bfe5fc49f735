// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// The kind of teaching session a lecture row describes.
///
/// The source workbook encodes this as a single-letter code:
/// `L` for a lecture, `U` for an exercise session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionType {
    /// A regular lecture.
    Lecture,
    /// An exercise (practice) session.
    Exercise,
}

impl SessionType {
    /// Parses a session type from its single-letter workbook code.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSessionType` if the code is not `L` or `U`.
    pub fn parse_code(code: &str) -> Result<Self, DomainError> {
        match code {
            "L" => Ok(Self::Lecture),
            "U" => Ok(Self::Exercise),
            _ => Err(DomainError::InvalidSessionType(code.to_string())),
        }
    }

    /// Parses a session type from either its code or its long name.
    ///
    /// Accepts what `parse_code` accepts plus the serialized long names,
    /// so round-tripped edit payloads decode without special casing.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSessionType` if the value is not recognized.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "L" | "Lecture" => Ok(Self::Lecture),
            "U" | "Exercise" => Ok(Self::Exercise),
            _ => Err(DomainError::InvalidSessionType(value.to_string())),
        }
    }

    /// Returns the single-letter workbook code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Lecture => "L",
            Self::Exercise => "U",
        }
    }

    /// Returns the long name used in serialized views.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lecture => "Lecture",
            Self::Exercise => "Exercise",
        }
    }
}

impl std::fmt::Display for SessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a course is obligatory or elective.
///
/// Workbook codes: `O` for obligatory, `Z` for elective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Requirement {
    /// The course is mandatory for its group.
    Obligatory,
    /// The course is an elective.
    Elective,
}

impl Requirement {
    /// Parses a requirement from its single-letter workbook code.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRequirement` if the code is not `O` or `Z`.
    pub fn parse_code(code: &str) -> Result<Self, DomainError> {
        match code {
            "O" => Ok(Self::Obligatory),
            "Z" => Ok(Self::Elective),
            _ => Err(DomainError::InvalidRequirement(code.to_string())),
        }
    }

    /// Parses a requirement from either its code or its long name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRequirement` if the value is not recognized.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "O" | "Obligatory" => Ok(Self::Obligatory),
            "Z" | "Elective" => Ok(Self::Elective),
            _ => Err(DomainError::InvalidRequirement(value.to_string())),
        }
    }

    /// Returns the single-letter workbook code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Obligatory => "O",
            Self::Elective => "Z",
        }
    }

    /// Returns the long name used in serialized views.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Obligatory => "Obligatory",
            Self::Elective => "Elective",
        }
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Who delivers a teaching session.
///
/// Workbook codes: `P` for professor, `A` for teaching assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstructorRole {
    /// Delivered by the professor.
    Professor,
    /// Delivered by a teaching assistant.
    Assistant,
}

impl InstructorRole {
    /// Parses an instructor role from its single-letter workbook code.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInstructorRole` if the code is not `P` or `A`.
    pub fn parse_code(code: &str) -> Result<Self, DomainError> {
        match code {
            "P" => Ok(Self::Professor),
            "A" => Ok(Self::Assistant),
            _ => Err(DomainError::InvalidInstructorRole(code.to_string())),
        }
    }

    /// Parses an instructor role from either its code or its long name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInstructorRole` if the value is not recognized.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "P" | "Professor" => Ok(Self::Professor),
            "A" | "Assistant" => Ok(Self::Assistant),
            _ => Err(DomainError::InvalidInstructorRole(value.to_string())),
        }
    }

    /// Returns the single-letter workbook code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Professor => "P",
            Self::Assistant => "A",
        }
    }

    /// Returns the long name used in serialized views.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Professor => "Professor",
            Self::Assistant => "Assistant",
        }
    }
}

impl std::fmt::Display for InstructorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One teaching unit, normalized from one spreadsheet row.
///
/// The `id` is assigned at ingestion from the row index and is immutable
/// for the lifetime of the owning session; every other field may be
/// replaced by a point edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecture {
    /// Unique identifier within the owning session (e.g. `lec_0`).
    pub id: String,
    /// The course name.
    pub name: String,
    /// The code of the department offering the course.
    pub department_code: String,
    /// Semester text as it appears in the workbook (free-form).
    pub semester: String,
    /// Academic level (e.g. "Bachelor", "Master").
    pub level: String,
    /// Academic year text (e.g. "VITI I").
    pub year: String,
    /// The professor responsible for the course.
    pub professor: String,
    /// Student group, possibly with a dotted subgroup suffix (e.g. "1.2").
    pub group: String,
    /// Whether this row is a lecture or an exercise session.
    pub session_type: SessionType,
    /// Whether the course is obligatory or elective.
    pub requirement: Requirement,
    /// Whether a professor or an assistant delivers the session.
    pub instructor_role: InstructorRole,
    /// Session length in minutes (always positive).
    pub duration_minutes: u32,
}

impl Lecture {
    /// Creates a new `Lecture`.
    ///
    /// Field validation happens at the ingestion boundary; this constructor
    /// assumes already-validated values.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        id: String,
        name: String,
        department_code: String,
        semester: String,
        level: String,
        year: String,
        professor: String,
        group: String,
        session_type: SessionType,
        requirement: Requirement,
        instructor_role: InstructorRole,
        duration_minutes: u32,
    ) -> Self {
        Self {
            id,
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
        }
    }
}
