// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The classroom catalog: a uniform CRUD store over classroom resources.

use crate::error::StoreError;
use orari_domain::{Classroom, ClassroomStatus};
use serde::Serialize;
use std::sync::Mutex;

/// Utilization figures over the classroom catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassroomUtilization {
    /// Number of classrooms in the catalog.
    pub total_classrooms: usize,
    /// Classrooms currently available.
    pub available_classrooms: usize,
    /// Classrooms currently unavailable.
    pub unavailable_classrooms: usize,
    /// Sum of all capacities.
    pub total_capacity: u64,
    /// Mean capacity, zero for an empty catalog.
    pub average_capacity: f64,
    /// Share of unavailable classrooms, as a percentage.
    pub utilization_rate: f64,
}

/// In-memory CRUD store of classroom resources, in insertion order.
///
/// Identity is the caller-assigned classroom id; it cannot be changed
/// through `update`.
#[derive(Debug, Default)]
pub struct ClassroomCatalog {
    rooms: Mutex<Vec<Classroom>>,
}

impl ClassroomCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a classroom.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if the id already exists, or
    /// `StoreError::Unavailable` on a poisoned lock.
    pub fn create(&self, classroom: Classroom) -> Result<(), StoreError> {
        let mut rooms = self.lock_rooms()?;
        if rooms.iter().any(|r| r.id == classroom.id) {
            return Err(StoreError::Conflict {
                resource: "classroom",
                id: classroom.id,
            });
        }
        rooms.push(classroom);
        Ok(())
    }

    /// Replaces the classroom addressed by `id`.
    ///
    /// The id in the body is ignored; the path id wins, so an entity's
    /// identity cannot be changed via update.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the id is absent, or
    /// `StoreError::Unavailable` on a poisoned lock.
    pub fn update(&self, id: &str, mut classroom: Classroom) -> Result<(), StoreError> {
        let mut rooms = self.lock_rooms()?;
        let position: usize =
            rooms
                .iter()
                .position(|r| r.id == id)
                .ok_or_else(|| StoreError::NotFound {
                    resource: "classroom",
                    id: id.to_string(),
                })?;
        classroom.id = id.to_string();
        rooms[position] = classroom;
        Ok(())
    }

    /// Removes the classroom addressed by `id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the id is absent, or
    /// `StoreError::Unavailable` on a poisoned lock.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut rooms = self.lock_rooms()?;
        let position: usize =
            rooms
                .iter()
                .position(|r| r.id == id)
                .ok_or_else(|| StoreError::NotFound {
                    resource: "classroom",
                    id: id.to_string(),
                })?;
        rooms.remove(position);
        Ok(())
    }

    /// Returns all classrooms in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` on a poisoned lock.
    pub fn list(&self) -> Result<Vec<Classroom>, StoreError> {
        Ok(self.lock_rooms()?.clone())
    }

    /// Returns classrooms currently marked available.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` on a poisoned lock.
    pub fn available(&self) -> Result<Vec<Classroom>, StoreError> {
        Ok(self
            .lock_rooms()?
            .iter()
            .filter(|r| r.status == ClassroomStatus::Available)
            .cloned()
            .collect())
    }

    /// Returns classrooms with capacity of at least `min_capacity`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` on a poisoned lock.
    pub fn with_capacity(&self, min_capacity: u32) -> Result<Vec<Classroom>, StoreError> {
        Ok(self
            .lock_rooms()?
            .iter()
            .filter(|r| r.capacity >= min_capacity)
            .cloned()
            .collect())
    }

    /// Computes utilization figures over the catalog.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` on a poisoned lock.
    #[allow(clippy::cast_precision_loss)]
    pub fn utilization_report(&self) -> Result<ClassroomUtilization, StoreError> {
        let rooms = self.lock_rooms()?;
        let total: usize = rooms.len();
        let available: usize = rooms
            .iter()
            .filter(|r| r.status == ClassroomStatus::Available)
            .count();
        let unavailable: usize = total - available;
        let total_capacity: u64 = rooms.iter().map(|r| u64::from(r.capacity)).sum();

        let (average_capacity, utilization_rate) = if total == 0 {
            (0.0, 0.0)
        } else {
            (
                total_capacity as f64 / total as f64,
                unavailable as f64 / total as f64 * 100.0,
            )
        };

        Ok(ClassroomUtilization {
            total_classrooms: total,
            available_classrooms: available,
            unavailable_classrooms: unavailable,
            total_capacity,
            average_capacity,
            utilization_rate,
        })
    }

    fn lock_rooms(&self) -> Result<std::sync::MutexGuard<'_, Vec<Classroom>>, StoreError> {
        self.rooms
            .lock()
            .map_err(|_| StoreError::Unavailable(String::from("classroom catalog lock poisoned")))
    }
}
