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
#![allow(clippy::multiple_crate_versions)]

mod directory;

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use directory::StaticDepartmentDirectory;
use orari::DEFAULT_MAX_ROWS;
use orari_api::{
    ApiError, ClassroomDto, ClassroomListResponse, LectureDto, MessageResponse, SessionView,
    SlotConfigDto, TimeSlotDto, TimeSlotListResponse, UploadResponse,
};
use orari_store::{
    ClassroomCatalog, ClassroomUtilization, DEFAULT_SESSION_CAPACITY, SessionStore,
    SlotUtilization, TimeSlotCatalog,
};

/// Orari Server - HTTP server for the lecture schedule preparation system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Maximum number of ingestion sessions retained before the oldest
    /// is evicted
    #[arg(long, default_value_t = DEFAULT_SESSION_CAPACITY)]
    session_capacity: usize,

    /// Maximum number of rows accepted in one upload
    #[arg(long, default_value_t = DEFAULT_MAX_ROWS)]
    max_rows: usize,

    /// Seed the standard teaching week (morning/midday/evening slots for
    /// Monday through Friday) into the time-slot catalog on startup
    #[arg(long)]
    seed_standard_slots: bool,
}

/// Application state shared across handlers.
///
/// Each store guards itself; handlers never take an outer lock, so
/// requests against different sessions and catalogs proceed
/// concurrently.
#[derive(Clone)]
struct AppState {
    /// The session store holding ingestion results.
    sessions: Arc<SessionStore>,
    /// The classroom catalog.
    classrooms: Arc<ClassroomCatalog>,
    /// The time-slot catalog.
    time_slots: Arc<TimeSlotCatalog>,
    /// Row bound for one upload.
    max_rows: usize,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::InvalidInput { .. } | ApiError::InvalidTable { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::InvalidRange { .. } | ApiError::ImmutableField { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::StoreUnavailable { .. } => {
                error!(error = %err, "Store unavailable");
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for POST `/api/schedule/upload`.
///
/// Accepts the uploaded table as CSV text and materializes a session.
async fn handle_upload(
    AxumState(app_state): AxumState<AppState>,
    body: String,
) -> Result<Json<UploadResponse>, HttpError> {
    info!(bytes = body.len(), "Handling schedule upload");

    let response: UploadResponse =
        orari_api::upload_table(&body, &app_state.sessions, app_state.max_rows)?;
    Ok(Json(response))
}

/// Handler for GET `/api/data/presentation/{session_id}`.
async fn handle_get_presentation(
    AxumState(app_state): AxumState<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionView>, HttpError> {
    info!(session_id = %session_id, "Handling data presentation request");

    let view: SessionView = orari_api::get_session(&app_state.sessions, &session_id)?;
    Ok(Json(view))
}

/// Handler for PUT `/api/sessions/{session_id}/lectures/{lecture_id}`.
///
/// Applies a full-record replacement edit and returns the complete
/// post-mutation session view.
async fn handle_update_lecture(
    AxumState(app_state): AxumState<AppState>,
    Path((session_id, lecture_id)): Path<(String, String)>,
    Json(payload): Json<LectureDto>,
) -> Result<Json<SessionView>, HttpError> {
    info!(
        session_id = %session_id,
        lecture_id = %lecture_id,
        "Handling lecture update"
    );

    let view: SessionView =
        orari_api::update_lecture(&app_state.sessions, &session_id, &lecture_id, payload)?;
    Ok(Json(view))
}

/// Handler for DELETE `/api/sessions/{session_id}/lectures/{lecture_id}`.
async fn handle_remove_lecture(
    AxumState(app_state): AxumState<AppState>,
    Path((session_id, lecture_id)): Path<(String, String)>,
) -> Result<Json<SessionView>, HttpError> {
    info!(
        session_id = %session_id,
        lecture_id = %lecture_id,
        "Handling lecture removal"
    );

    let view: SessionView =
        orari_api::remove_lecture(&app_state.sessions, &session_id, &lecture_id)?;
    Ok(Json(view))
}

/// Handler for DELETE `/api/sessions/{session_id}`.
///
/// Deleting an absent session is not an error.
async fn handle_delete_session(
    AxumState(app_state): AxumState<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<MessageResponse>, HttpError> {
    info!(session_id = %session_id, "Handling session deletion");

    let response: MessageResponse = orari_api::delete_session(&app_state.sessions, &session_id)?;
    Ok(Json(response))
}

/// Handler for GET `/api/classrooms`.
async fn handle_list_classrooms(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ClassroomListResponse>, HttpError> {
    let response: ClassroomListResponse = orari_api::list_classrooms(&app_state.classrooms)?;
    Ok(Json(response))
}

/// Handler for POST `/api/classrooms`.
async fn handle_create_classroom(
    AxumState(app_state): AxumState<AppState>,
    Json(payload): Json<ClassroomDto>,
) -> Result<Json<ClassroomListResponse>, HttpError> {
    info!(classroom_id = %payload.id, "Handling classroom creation");

    let response: ClassroomListResponse =
        orari_api::create_classroom(&app_state.classrooms, payload)?;
    Ok(Json(response))
}

/// Handler for PUT `/api/classrooms/{classroom_id}`.
async fn handle_update_classroom(
    AxumState(app_state): AxumState<AppState>,
    Path(classroom_id): Path<String>,
    Json(payload): Json<ClassroomDto>,
) -> Result<Json<ClassroomListResponse>, HttpError> {
    info!(classroom_id = %classroom_id, "Handling classroom update");

    let response: ClassroomListResponse =
        orari_api::update_classroom(&app_state.classrooms, &classroom_id, payload)?;
    Ok(Json(response))
}

/// Handler for DELETE `/api/classrooms/{classroom_id}`.
async fn handle_delete_classroom(
    AxumState(app_state): AxumState<AppState>,
    Path(classroom_id): Path<String>,
) -> Result<Json<ClassroomListResponse>, HttpError> {
    info!(classroom_id = %classroom_id, "Handling classroom deletion");

    let response: ClassroomListResponse =
        orari_api::delete_classroom(&app_state.classrooms, &classroom_id)?;
    Ok(Json(response))
}

/// Handler for GET `/api/classrooms/report`.
async fn handle_classroom_report(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ClassroomUtilization>, HttpError> {
    let report: ClassroomUtilization = orari_api::classroom_report(&app_state.classrooms)?;
    Ok(Json(report))
}

/// Handler for GET `/api/timeslots`.
async fn handle_list_time_slots(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<TimeSlotListResponse>, HttpError> {
    let response: TimeSlotListResponse = orari_api::list_time_slots(&app_state.time_slots)?;
    Ok(Json(response))
}

/// Handler for POST `/api/timeslots`.
async fn handle_create_time_slot(
    AxumState(app_state): AxumState<AppState>,
    Json(payload): Json<TimeSlotDto>,
) -> Result<Json<TimeSlotListResponse>, HttpError> {
    info!(day = %payload.day, "Handling time slot creation");

    let response: TimeSlotListResponse =
        orari_api::create_time_slot(&app_state.time_slots, payload)?;
    Ok(Json(response))
}

/// Handler for PUT `/api/timeslots/{slot_id}`.
async fn handle_update_time_slot(
    AxumState(app_state): AxumState<AppState>,
    Path(slot_id): Path<String>,
    Json(payload): Json<TimeSlotDto>,
) -> Result<Json<TimeSlotListResponse>, HttpError> {
    info!(slot_id = %slot_id, "Handling time slot update");

    let response: TimeSlotListResponse =
        orari_api::update_time_slot(&app_state.time_slots, &slot_id, payload)?;
    Ok(Json(response))
}

/// Handler for DELETE `/api/timeslots/{slot_id}`.
async fn handle_delete_time_slot(
    AxumState(app_state): AxumState<AppState>,
    Path(slot_id): Path<String>,
) -> Result<Json<TimeSlotListResponse>, HttpError> {
    info!(slot_id = %slot_id, "Handling time slot deletion");

    let response: TimeSlotListResponse =
        orari_api::delete_time_slot(&app_state.time_slots, &slot_id)?;
    Ok(Json(response))
}

/// Handler for GET `/api/timeslots/report`.
async fn handle_time_slot_report(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<SlotUtilization>, HttpError> {
    let report: SlotUtilization = orari_api::time_slot_report(&app_state.time_slots)?;
    Ok(Json(report))
}

/// Handler for GET `/api/config/timeslot`.
async fn handle_get_slot_configuration(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<SlotConfigDto>, HttpError> {
    let config: SlotConfigDto = orari_api::get_slot_configuration(&app_state.time_slots)?;
    Ok(Json(config))
}

/// Handler for PUT `/api/config/timeslot`.
async fn handle_update_slot_configuration(
    AxumState(app_state): AxumState<AppState>,
    Json(payload): Json<SlotConfigDto>,
) -> Result<Json<SlotConfigDto>, HttpError> {
    info!("Handling slot configuration update");

    let config: SlotConfigDto =
        orari_api::update_slot_configuration(&app_state.time_slots, payload)?;
    Ok(Json(config))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/schedule/upload", post(handle_upload))
        .route(
            "/api/data/presentation/{session_id}",
            get(handle_get_presentation),
        )
        .route("/api/sessions/{session_id}", delete(handle_delete_session))
        .route(
            "/api/sessions/{session_id}/lectures/{lecture_id}",
            put(handle_update_lecture).delete(handle_remove_lecture),
        )
        .route(
            "/api/classrooms",
            get(handle_list_classrooms).post(handle_create_classroom),
        )
        .route("/api/classrooms/report", get(handle_classroom_report))
        .route(
            "/api/classrooms/{classroom_id}",
            put(handle_update_classroom).delete(handle_delete_classroom),
        )
        .route(
            "/api/timeslots",
            get(handle_list_time_slots).post(handle_create_time_slot),
        )
        .route("/api/timeslots/report", get(handle_time_slot_report))
        .route(
            "/api/timeslots/{slot_id}",
            put(handle_update_time_slot).delete(handle_delete_time_slot),
        )
        .route(
            "/api/config/timeslot",
            get(handle_get_slot_configuration).put(handle_update_slot_configuration),
        )
        .with_state(app_state)
}

/// Builds the shared application state.
fn build_app_state(session_capacity: usize, max_rows: usize) -> AppState {
    AppState {
        sessions: Arc::new(SessionStore::with_capacity(
            session_capacity,
            Arc::new(StaticDepartmentDirectory::new()),
        )),
        classrooms: Arc::new(ClassroomCatalog::new()),
        time_slots: Arc::new(TimeSlotCatalog::new()),
        max_rows,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Orari Server");

    let app_state: AppState = build_app_state(args.session_capacity, args.max_rows);

    if args.seed_standard_slots {
        let created: usize = app_state.time_slots.seed_standard_week()?;
        info!(created, "Seeded standard teaching week");
    }

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
