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

mod classroom;
mod error;
mod time_slot;
mod types;

#[cfg(test)]
mod tests;

pub use classroom::{Classroom, ClassroomStatus};
pub use error::DomainError;
pub use time_slot::{TEACHING_DAYS, SlotConfiguration, SlotStatus, TimeSlot, Weekday, parse_clock};
pub use types::{InstructorRole, Lecture, Requirement, SessionType};
