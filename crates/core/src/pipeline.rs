// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The ingestion pipeline: a raw table into a prepared session.
//!
//! The pipeline runs the row normalizer over every input row, collects
//! row errors without aborting, and derives the aggregate collections.
//! Materializing the result into the session store is the caller's step,
//! so the pipeline itself stays pure.

use crate::aggregates::{Aggregates, DepartmentDirectory, derive_aggregates};
use crate::normalize::{RawRow, RowError, normalize_row};
use orari_domain::Lecture;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default upper bound on the number of rows accepted in one upload.
pub const DEFAULT_MAX_ROWS: usize = 10_000;

/// Errors that abort an entire ingestion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The uploaded table exceeds the configured row bound.
    PayloadTooLarge {
        /// Number of rows in the upload.
        rows: usize,
        /// The configured bound.
        limit: usize,
    },
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PayloadTooLarge { rows, limit } => {
                write!(f, "Table has {rows} rows, exceeding the limit of {limit}")
            }
        }
    }
}

impl std::error::Error for PipelineError {}

/// Counts reported back to the uploader alongside the row errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestSummary {
    /// Rows in the uploaded table.
    pub total_rows: usize,
    /// Rows that normalized into lectures.
    pub lecture_count: usize,
    /// Rows excluded by validation failures.
    pub invalid_row_count: usize,
    /// Derived department count.
    pub department_count: usize,
    /// Derived group count.
    pub group_count: usize,
    /// Derived subgroup count.
    pub subgroup_count: usize,
}

/// The output of a successful (possibly partial) ingestion, ready to be
/// materialized into the session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedSession {
    /// Normalized lectures, in original row order.
    pub lectures: Vec<Lecture>,
    /// Derived aggregate collections.
    pub aggregates: Aggregates,
    /// Per-row validation failures, in row order.
    pub row_errors: Vec<RowError>,
    /// Counts for the upload response.
    pub summary: IngestSummary,
}

/// Runs the normalizer and deriver over an uploaded table.
///
/// Invalid rows are excluded from the lectures but recorded as row
/// errors; one malformed row never aborts the upload.
///
/// # Errors
///
/// Returns `PipelineError::PayloadTooLarge` if the table exceeds
/// `max_rows`. No other failure aborts the pipeline.
pub fn prepare_session(
    rows: &[RawRow],
    directory: &dyn DepartmentDirectory,
    max_rows: usize,
) -> Result<PreparedSession, PipelineError> {
    if rows.len() > max_rows {
        return Err(PipelineError::PayloadTooLarge {
            rows: rows.len(),
            limit: max_rows,
        });
    }

    let mut lectures: Vec<Lecture> = Vec::new();
    let mut row_errors: Vec<RowError> = Vec::new();

    for (row_index, row) in rows.iter().enumerate() {
        match normalize_row(row_index, row) {
            Ok(lecture) => lectures.push(lecture),
            Err(errors) => row_errors.extend(errors),
        }
    }

    let aggregates: Aggregates = derive_aggregates(&lectures, directory);
    let invalid_rows: HashSet<usize> = row_errors.iter().map(|e| e.row_index).collect();

    let summary: IngestSummary = IngestSummary {
        total_rows: rows.len(),
        lecture_count: lectures.len(),
        invalid_row_count: invalid_rows.len(),
        department_count: aggregates.departments.len(),
        group_count: aggregates.groups.len(),
        subgroup_count: aggregates.subgroups.len(),
    };

    Ok(PreparedSession {
        lectures,
        aggregates,
        row_errors,
        summary,
    })
}
