// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod classrooms;
mod error;
mod sessions;
mod timeslots;

#[cfg(test)]
mod tests;

pub use classrooms::{ClassroomCatalog, ClassroomUtilization};
pub use error::StoreError;
pub use sessions::{DEFAULT_SESSION_CAPACITY, SessionStore};
pub use timeslots::{DaySlotCount, SlotUtilization, TimeSlotCatalog};
