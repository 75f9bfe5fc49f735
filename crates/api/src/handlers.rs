// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API operations over the session store and resource catalogs.
//!
//! Every write operation returns the complete post-mutation view of the
//! affected aggregate (session view or entity list), never a partial
//! diff.

use orari::{PreparedSession, RawRow, Session, prepare_session};
use orari_domain::{Classroom, Lecture, TimeSlot, Weekday};
use orari_store::{
    ClassroomCatalog, ClassroomUtilization, SessionStore, SlotUtilization, TimeSlotCatalog,
};
use tracing::info;

use crate::error::{
    ApiError, translate_domain_error, translate_pipeline_error, translate_store_error,
};
use crate::request_response::{
    ClassroomDto, ClassroomListResponse, LectureDto, MessageResponse, SessionView, SlotConfigDto,
    TimeSlotDto, TimeSlotListResponse, TimeSlotView, UploadResponse,
};
use crate::table::decode_table;

/// Ingests an uploaded CSV table and materializes a new session.
///
/// Invalid rows are excluded but reported; one malformed row never
/// aborts the upload.
///
/// # Errors
///
/// Returns `ApiError::InvalidTable` if the table cannot be decoded,
/// `ApiError::PayloadTooLarge` if it exceeds `max_rows`, and
/// `ApiError::StoreUnavailable` if the store cannot accept the session.
pub fn upload_table(
    csv_content: &str,
    store: &SessionStore,
    max_rows: usize,
) -> Result<UploadResponse, ApiError> {
    let rows: Vec<RawRow> = decode_table(csv_content)?;

    let directory = store.directory();
    let prepared: PreparedSession =
        prepare_session(&rows, directory.as_ref(), max_rows).map_err(translate_pipeline_error)?;

    let summary = prepared.summary;
    let session: Session = store
        .create(prepared.lectures, prepared.row_errors)
        .map_err(translate_store_error)?;

    info!(
        session_id = %session.session_id,
        lectures = summary.lecture_count,
        invalid_rows = summary.invalid_row_count,
        "Ingested uploaded table"
    );

    Ok(UploadResponse {
        session_id: session.session_id,
        message: format!(
            "Parsed {} of {} rows",
            summary.lecture_count, summary.total_rows
        ),
        summary,
        row_errors: session.row_errors,
    })
}

/// Fetches the full view of one session.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the session does not exist.
pub fn get_session(store: &SessionStore, session_id: &str) -> Result<SessionView, ApiError> {
    let session: Session = store.get(session_id).map_err(translate_store_error)?;
    Ok(SessionView::from(session))
}

/// Applies a full-record replacement edit to one lecture.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if either id is absent,
/// `ApiError::ImmutableField` if the payload tries to change the lecture
/// id, and `ApiError::InvalidInput` if the payload does not decode.
pub fn update_lecture(
    store: &SessionStore,
    session_id: &str,
    lecture_id: &str,
    payload: LectureDto,
) -> Result<SessionView, ApiError> {
    let patch: Lecture = payload.into_lecture(lecture_id)?;
    let session: Session = store
        .update_lecture(session_id, lecture_id, patch)
        .map_err(translate_store_error)?;

    info!(session_id, lecture_id, "Updated lecture");
    Ok(SessionView::from(session))
}

/// Removes one lecture from a session, re-deriving the aggregates.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if either id is absent.
pub fn remove_lecture(
    store: &SessionStore,
    session_id: &str,
    lecture_id: &str,
) -> Result<SessionView, ApiError> {
    let session: Session = store
        .remove_lecture(session_id, lecture_id)
        .map_err(translate_store_error)?;

    info!(session_id, lecture_id, "Removed lecture");
    Ok(SessionView::from(session))
}

/// Deletes a session. Removing an absent session is not an error.
///
/// # Errors
///
/// Returns `ApiError::StoreUnavailable` only if the store lock is
/// poisoned.
pub fn delete_session(store: &SessionStore, session_id: &str) -> Result<MessageResponse, ApiError> {
    let removed: bool = store.delete(session_id).map_err(translate_store_error)?;
    if removed {
        info!(session_id, "Deleted session");
    }
    Ok(MessageResponse {
        message: String::from("Session deleted"),
    })
}

/// Creates a classroom and returns the complete list.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for a non-positive capacity or bad
/// status, and `ApiError::Conflict` if the id already exists.
pub fn create_classroom(
    catalog: &ClassroomCatalog,
    payload: ClassroomDto,
) -> Result<ClassroomListResponse, ApiError> {
    let classroom: Classroom = payload.into_classroom()?;
    let id: String = classroom.id.clone();
    catalog.create(classroom).map_err(translate_store_error)?;

    info!(classroom_id = %id, "Created classroom");
    list_classrooms(catalog)
}

/// Returns all classrooms in insertion order.
///
/// # Errors
///
/// Returns `ApiError::StoreUnavailable` only if the catalog lock is
/// poisoned.
pub fn list_classrooms(catalog: &ClassroomCatalog) -> Result<ClassroomListResponse, ApiError> {
    let classrooms: Vec<Classroom> = catalog.list().map_err(translate_store_error)?;
    Ok(ClassroomListResponse { classrooms })
}

/// Replaces the classroom addressed by `id` and returns the complete
/// list. The id in the body is ignored; the path id wins.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the id is absent and
/// `ApiError::InvalidInput` if the payload does not decode.
pub fn update_classroom(
    catalog: &ClassroomCatalog,
    id: &str,
    payload: ClassroomDto,
) -> Result<ClassroomListResponse, ApiError> {
    let classroom: Classroom = payload.into_classroom()?;
    catalog.update(id, classroom).map_err(translate_store_error)?;

    info!(classroom_id = %id, "Updated classroom");
    list_classrooms(catalog)
}

/// Deletes the classroom addressed by `id` and returns the complete list.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the id is absent.
pub fn delete_classroom(
    catalog: &ClassroomCatalog,
    id: &str,
) -> Result<ClassroomListResponse, ApiError> {
    catalog.delete(id).map_err(translate_store_error)?;

    info!(classroom_id = %id, "Deleted classroom");
    list_classrooms(catalog)
}

/// Computes utilization figures over the classroom catalog.
///
/// # Errors
///
/// Returns `ApiError::StoreUnavailable` only if the catalog lock is
/// poisoned.
pub fn classroom_report(catalog: &ClassroomCatalog) -> Result<ClassroomUtilization, ApiError> {
    catalog.utilization_report().map_err(translate_store_error)
}

/// Creates a time slot and returns the complete list.
///
/// When the payload omits an id, one is generated from the day and
/// creation time. The duration is always derived server-side.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for a bad day/time/status,
/// `ApiError::InvalidRange` when the end does not fall strictly after
/// the start, and `ApiError::Conflict` if the id already exists.
pub fn create_time_slot(
    catalog: &TimeSlotCatalog,
    payload: TimeSlotDto,
) -> Result<TimeSlotListResponse, ApiError> {
    let id: String = match payload.id.clone() {
        Some(id) => id,
        None => {
            let day: Weekday = Weekday::parse(&payload.day).map_err(translate_domain_error)?;
            catalog.generate_slot_id(day).map_err(translate_store_error)?
        }
    };

    let slot: TimeSlot = payload.into_slot(id.clone())?;
    catalog.create(slot).map_err(translate_store_error)?;

    info!(slot_id = %id, "Created time slot");
    list_time_slots(catalog)
}

/// Returns all time slots in insertion order.
///
/// # Errors
///
/// Returns `ApiError::StoreUnavailable` only if the catalog lock is
/// poisoned.
pub fn list_time_slots(catalog: &TimeSlotCatalog) -> Result<TimeSlotListResponse, ApiError> {
    let time_slots: Vec<TimeSlotView> = catalog
        .list()
        .map_err(translate_store_error)?
        .into_iter()
        .map(TimeSlotView::from)
        .collect();
    Ok(TimeSlotListResponse { time_slots })
}

/// Replaces the slot addressed by `id` and returns the complete list.
/// The id in the body is ignored; the path id wins.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the id is absent,
/// `ApiError::InvalidInput`/`ApiError::InvalidRange` if the payload does
/// not decode.
pub fn update_time_slot(
    catalog: &TimeSlotCatalog,
    id: &str,
    payload: TimeSlotDto,
) -> Result<TimeSlotListResponse, ApiError> {
    let slot: TimeSlot = payload.into_slot(id.to_string())?;
    catalog.update(id, slot).map_err(translate_store_error)?;

    info!(slot_id = %id, "Updated time slot");
    list_time_slots(catalog)
}

/// Deletes the slot addressed by `id` and returns the complete list.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the id is absent.
pub fn delete_time_slot(
    catalog: &TimeSlotCatalog,
    id: &str,
) -> Result<TimeSlotListResponse, ApiError> {
    catalog.delete(id).map_err(translate_store_error)?;

    info!(slot_id = %id, "Deleted time slot");
    list_time_slots(catalog)
}

/// Computes utilization figures over the time-slot catalog.
///
/// # Errors
///
/// Returns `ApiError::StoreUnavailable` only if the catalog lock is
/// poisoned.
pub fn time_slot_report(catalog: &TimeSlotCatalog) -> Result<SlotUtilization, ApiError> {
    catalog.utilization_report().map_err(translate_store_error)
}

/// Returns the current slot configuration.
///
/// # Errors
///
/// Returns `ApiError::StoreUnavailable` only if the catalog lock is
/// poisoned.
pub fn get_slot_configuration(catalog: &TimeSlotCatalog) -> Result<SlotConfigDto, ApiError> {
    let config = catalog.configuration().map_err(translate_store_error)?;
    Ok(SlotConfigDto::from(config))
}

/// Replaces the slot configuration wholesale and returns the stored
/// value.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if a period bound does not parse.
pub fn update_slot_configuration(
    catalog: &TimeSlotCatalog,
    payload: SlotConfigDto,
) -> Result<SlotConfigDto, ApiError> {
    let config = payload.into_configuration()?;
    catalog
        .set_configuration(config.clone())
        .map_err(translate_store_error)?;

    info!("Updated slot configuration");
    Ok(SlotConfigDto::from(config))
}
