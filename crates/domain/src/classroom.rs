// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Availability status of a classroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClassroomStatus {
    /// The classroom may be assigned by a scheduler.
    #[default]
    Available,
    /// The classroom is out of service.
    Unavailable,
}

impl ClassroomStatus {
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

impl std::fmt::Display for ClassroomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classroom resource a scheduler may assign lectures into.
///
/// The `id` is caller-assigned (e.g. "S1") and immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    /// Unique caller-assigned identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Number of students the room accommodates (always positive).
    pub capacity: u32,
    /// Special equipment available in the room, if any.
    pub equipment: Option<String>,
    /// Current availability.
    pub status: ClassroomStatus,
}

impl Classroom {
    /// Creates a new `Classroom`, validating the capacity.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCapacity` if `capacity` is not positive.
    pub fn new(
        id: String,
        name: String,
        capacity: i64,
        equipment: Option<String>,
        status: ClassroomStatus,
    ) -> Result<Self, DomainError> {
        let capacity: u32 = u32::try_from(capacity)
            .ok()
            .filter(|c| *c > 0)
            .ok_or(DomainError::InvalidCapacity { capacity })?;

        Ok(Self {
            id,
            name,
            capacity,
            equipment,
            status,
        })
    }
}
