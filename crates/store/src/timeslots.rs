// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The time-slot catalog: CRUD over schedulable slots plus the single
//! slot configuration a later scheduler consumes.

use crate::error::StoreError;
use orari_domain::{
    DomainError, SlotConfiguration, SlotStatus, TEACHING_DAYS, TimeSlot, Weekday,
};
use serde::Serialize;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};
use time::macros::time;

/// Slot count for one teaching day, used in the utilization report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySlotCount {
    /// The day name.
    pub day: String,
    /// Number of slots on that day.
    pub count: usize,
}

/// Utilization figures over the time-slot catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotUtilization {
    /// Number of slots in the catalog.
    pub total_time_slots: usize,
    /// Slots currently available.
    pub available_time_slots: usize,
    /// Slots currently unavailable.
    pub unavailable_time_slots: usize,
    /// Share of unavailable slots, as a percentage.
    pub utilization_rate: f64,
    /// Per-day slot counts, in week order (days with no slots omitted).
    pub slots_by_day: Vec<DaySlotCount>,
}

/// In-memory CRUD store of time slots, in insertion order.
///
/// Also owns the slot configuration, read and replaced as a whole.
#[derive(Debug)]
pub struct TimeSlotCatalog {
    slots: Mutex<Vec<TimeSlot>>,
    config: Mutex<SlotConfiguration>,
}

impl Default for TimeSlotCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSlotCatalog {
    /// Creates an empty catalog with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(Vec::new()),
            config: Mutex::new(SlotConfiguration::default()),
        }
    }

    /// Adds a time slot.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if the id already exists, or
    /// `StoreError::Unavailable` on a poisoned lock.
    pub fn create(&self, slot: TimeSlot) -> Result<(), StoreError> {
        let mut slots = self.lock_slots()?;
        if slots.iter().any(|s| s.id == slot.id) {
            return Err(StoreError::Conflict {
                resource: "time slot",
                id: slot.id,
            });
        }
        slots.push(slot);
        Ok(())
    }

    /// Generates a slot id unique within the catalog.
    ///
    /// Keyed on the day plus the creation timestamp with a random
    /// suffix; a clash is retried rather than surfaced to the caller.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` on a poisoned lock.
    pub fn generate_slot_id(&self, day: Weekday) -> Result<String, StoreError> {
        let slots = self.lock_slots()?;
        loop {
            let timestamp: u128 = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |d| d.as_nanos());
            let candidate: String = format!(
                "{}_{timestamp}_{}",
                day.as_str().to_lowercase(),
                rand::random::<u64>()
            );
            if !slots.iter().any(|s| s.id == candidate) {
                return Ok(candidate);
            }
        }
    }

    /// Replaces the slot addressed by `id`.
    ///
    /// The id in the body is ignored; the path id wins.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the id is absent, or
    /// `StoreError::Unavailable` on a poisoned lock.
    pub fn update(&self, id: &str, mut slot: TimeSlot) -> Result<(), StoreError> {
        let mut slots = self.lock_slots()?;
        let position: usize =
            slots
                .iter()
                .position(|s| s.id == id)
                .ok_or_else(|| StoreError::NotFound {
                    resource: "time slot",
                    id: id.to_string(),
                })?;
        slot.id = id.to_string();
        slots[position] = slot;
        Ok(())
    }

    /// Removes the slot addressed by `id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the id is absent, or
    /// `StoreError::Unavailable` on a poisoned lock.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut slots = self.lock_slots()?;
        let position: usize =
            slots
                .iter()
                .position(|s| s.id == id)
                .ok_or_else(|| StoreError::NotFound {
                    resource: "time slot",
                    id: id.to_string(),
                })?;
        slots.remove(position);
        Ok(())
    }

    /// Returns all slots in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` on a poisoned lock.
    pub fn list(&self) -> Result<Vec<TimeSlot>, StoreError> {
        Ok(self.lock_slots()?.clone())
    }

    /// Returns slots currently marked available.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` on a poisoned lock.
    pub fn available(&self) -> Result<Vec<TimeSlot>, StoreError> {
        Ok(self
            .lock_slots()?
            .iter()
            .filter(|s| s.status == SlotStatus::Available)
            .cloned()
            .collect())
    }

    /// Returns slots on one teaching day.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` on a poisoned lock.
    pub fn by_day(&self, day: Weekday) -> Result<Vec<TimeSlot>, StoreError> {
        Ok(self
            .lock_slots()?
            .iter()
            .filter(|s| s.day == day)
            .cloned()
            .collect())
    }

    /// Computes utilization figures over the catalog.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` on a poisoned lock.
    #[allow(clippy::cast_precision_loss)]
    pub fn utilization_report(&self) -> Result<SlotUtilization, StoreError> {
        let slots = self.lock_slots()?;
        let total: usize = slots.len();
        let available: usize = slots
            .iter()
            .filter(|s| s.status == SlotStatus::Available)
            .count();
        let unavailable: usize = total - available;

        let slots_by_day: Vec<DaySlotCount> = TEACHING_DAYS
            .iter()
            .map(|day| DaySlotCount {
                day: day.as_str().to_string(),
                count: slots.iter().filter(|s| s.day == *day).count(),
            })
            .filter(|entry| entry.count > 0)
            .collect();

        let utilization_rate: f64 = if total == 0 {
            0.0
        } else {
            unavailable as f64 / total as f64 * 100.0
        };

        Ok(SlotUtilization {
            total_time_slots: total,
            available_time_slots: available,
            unavailable_time_slots: unavailable,
            utilization_rate,
            slots_by_day,
        })
    }

    /// Returns the current slot configuration.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` on a poisoned lock.
    pub fn configuration(&self) -> Result<SlotConfiguration, StoreError> {
        Ok(self.lock_config()?.clone())
    }

    /// Replaces the slot configuration wholesale.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` on a poisoned lock.
    pub fn set_configuration(&self, config: SlotConfiguration) -> Result<(), StoreError> {
        *self.lock_config()? = config;
        Ok(())
    }

    /// Seeds the standard teaching week: morning (09:00-11:00), midday
    /// (11:00-15:00), and evening (15:00-17:00) slots for Monday through
    /// Friday, with ids like `monday_morning`.
    ///
    /// Slots whose ids already exist are left untouched, so seeding is
    /// idempotent. Returns the number of slots created.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` on a poisoned lock. Slot
    /// construction cannot fail for the fixed period table, but any
    /// domain error is still propagated rather than swallowed.
    pub fn seed_standard_week(&self) -> Result<usize, StoreError> {
        let periods: [(&str, time::Time, time::Time); 3] = [
            ("morning", time!(09:00), time!(11:00)),
            ("midday", time!(11:00), time!(15:00)),
            ("evening", time!(15:00), time!(17:00)),
        ];

        let mut slots = self.lock_slots()?;
        let mut created: usize = 0;

        for day in TEACHING_DAYS {
            for (suffix, start, end) in periods {
                let id: String = format!("{}_{suffix}", day.as_str().to_lowercase());
                if slots.iter().any(|s| s.id == id) {
                    continue;
                }
                let slot: TimeSlot =
                    TimeSlot::new(id, day, start, end, SlotStatus::Available).map_err(
                        |e: DomainError| StoreError::Unavailable(format!("seeding failed: {e}")),
                    )?;
                slots.push(slot);
                created += 1;
            }
        }

        Ok(created)
    }

    fn lock_slots(&self) -> Result<std::sync::MutexGuard<'_, Vec<TimeSlot>>, StoreError> {
        self.slots
            .lock()
            .map_err(|_| StoreError::Unavailable(String::from("time slot catalog lock poisoned")))
    }

    fn lock_config(&self) -> Result<std::sync::MutexGuard<'_, SlotConfiguration>, StoreError> {
        self.config
            .lock()
            .map_err(|_| StoreError::Unavailable(String::from("slot configuration lock poisoned")))
    }
}
