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
    clippy::all
)]

mod error;
mod handlers;
mod request_response;
mod table;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error, translate_pipeline_error, translate_store_error};
pub use handlers::{
    classroom_report, create_classroom, create_time_slot, delete_classroom, delete_session,
    delete_time_slot, get_session, get_slot_configuration, list_classrooms, list_time_slots,
    remove_lecture, time_slot_report, update_classroom, update_lecture, update_slot_configuration,
    update_time_slot, upload_table,
};
pub use request_response::{
    ClassroomDto, ClassroomListResponse, LectureDto, MessageResponse, SessionView, SlotConfigDto,
    TimeSlotDto, TimeSlotListResponse, TimeSlotView, UploadResponse,
};
pub use table::{REQUIRED_COLUMNS, TableDecodeError, decode_table};
