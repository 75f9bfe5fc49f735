// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use orari::PipelineError;
use orari_domain::DomainError;
use orari_store::StoreError;

/// API-level errors.
///
/// These are distinct from domain/store errors and represent the API
/// contract; lower-layer errors are translated explicitly and never
/// leaked directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided for a single field.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A time range rule was violated (end not strictly after start).
    InvalidRange {
        /// A human-readable description of the violation.
        message: String,
    },
    /// The uploaded table could not be decoded.
    InvalidTable {
        /// Why the table was rejected.
        reason: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An entity with the requested identity already exists.
    Conflict {
        /// The type of resource in conflict.
        resource_type: String,
        /// A human-readable description of the conflict.
        message: String,
    },
    /// An attempt was made to change an immutable field.
    ImmutableField {
        /// The field name.
        field: String,
    },
    /// The uploaded table exceeds the configured size bound.
    PayloadTooLarge {
        /// Number of rows in the upload.
        rows: usize,
        /// The configured bound.
        limit: usize,
    },
    /// The backing store cannot serve requests.
    StoreUnavailable {
        /// A description of the store failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::InvalidRange { message } => {
                write!(f, "Invalid range: {message}")
            }
            Self::InvalidTable { reason } => {
                write!(f, "Invalid table: {reason}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} conflict: {message}")
            }
            Self::ImmutableField { field } => {
                write!(f, "Field '{field}' is immutable and cannot be changed")
            }
            Self::PayloadTooLarge { rows, limit } => {
                write!(f, "Table has {rows} rows, exceeding the limit of {limit}")
            }
            Self::StoreUnavailable { message } => {
                write!(f, "Store unavailable: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidSessionType(_) => ApiError::InvalidInput {
            field: String::from("session_type"),
            message: err.to_string(),
        },
        DomainError::InvalidRequirement(_) => ApiError::InvalidInput {
            field: String::from("requirement"),
            message: err.to_string(),
        },
        DomainError::InvalidInstructorRole(_) => ApiError::InvalidInput {
            field: String::from("instructor_role"),
            message: err.to_string(),
        },
        DomainError::InvalidDuration(_) => ApiError::InvalidInput {
            field: String::from("duration_minutes"),
            message: err.to_string(),
        },
        DomainError::InvalidCapacity { .. } => ApiError::InvalidInput {
            field: String::from("capacity"),
            message: err.to_string(),
        },
        DomainError::InvalidDay(_) => ApiError::InvalidInput {
            field: String::from("day"),
            message: err.to_string(),
        },
        DomainError::InvalidStatus(_) => ApiError::InvalidInput {
            field: String::from("status"),
            message: err.to_string(),
        },
        DomainError::InvalidTimeRange { .. } => ApiError::InvalidRange {
            message: err.to_string(),
        },
        DomainError::TimeParseError { .. } => ApiError::InvalidInput {
            field: String::from("time"),
            message: err.to_string(),
        },
    }
}

/// Translates a store error into an API error.
#[must_use]
pub fn translate_store_error(err: StoreError) -> ApiError {
    match err {
        StoreError::NotFound { resource, .. } => ApiError::ResourceNotFound {
            resource_type: resource.to_string(),
            message: err.to_string(),
        },
        StoreError::Conflict { resource, .. } => ApiError::Conflict {
            resource_type: resource.to_string(),
            message: err.to_string(),
        },
        StoreError::ImmutableField { field } => ApiError::ImmutableField {
            field: field.to_string(),
        },
        StoreError::Unavailable(message) => ApiError::StoreUnavailable { message },
    }
}

/// Translates a pipeline error into an API error.
#[must_use]
pub const fn translate_pipeline_error(err: PipelineError) -> ApiError {
    match err {
        PipelineError::PayloadTooLarge { rows, limit } => {
            ApiError::PayloadTooLarge { rows, limit }
        }
    }
}
