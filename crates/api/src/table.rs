// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV table decoding for ingestion uploads.
//!
//! The external transport delivers the workbook as CSV text. Decoding
//! validates the header row once and turns every record into a raw row
//! for the normalizer; cell-level validation stays in the core.

use csv::StringRecord;
use orari::{
    COL_DEPARTMENT, COL_DURATION, COL_GROUP, COL_INSTRUCTOR_ROLE, COL_NAME, COL_REQUIREMENT,
    COL_SESSION_TYPE, RawRow, normalize_column,
};
use thiserror::Error;

use crate::error::ApiError;

/// Columns that must be present in the header row.
///
/// Informational columns (semester, level, year, professor) are picked up
/// when present but their absence does not reject the table.
pub const REQUIRED_COLUMNS: &[&str] = &[
    COL_NAME,
    COL_DEPARTMENT,
    COL_GROUP,
    COL_SESSION_TYPE,
    COL_REQUIREMENT,
    COL_INSTRUCTOR_ROLE,
    COL_DURATION,
];

/// Errors rejecting an entire uploaded table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableDecodeError {
    /// The header row could not be read.
    #[error("Failed to read CSV headers: {0}")]
    Headers(String),

    /// One or more required columns are absent.
    #[error("Missing required columns: {missing}")]
    MissingColumns {
        /// Comma-separated missing column names.
        missing: String,
    },

    /// A record could not be read.
    #[error("Failed to read CSV record {row}: {message}")]
    Record {
        /// Zero-based data row index.
        row: usize,
        /// The CSV reader's error message.
        message: String,
    },
}

impl From<TableDecodeError> for ApiError {
    fn from(err: TableDecodeError) -> Self {
        Self::InvalidTable {
            reason: err.to_string(),
        }
    }
}

/// Decodes CSV text into raw rows for the ingestion pipeline.
///
/// Header matching is case-insensitive and whitespace-tolerant; unknown
/// columns are ignored and column order is irrelevant.
///
/// # Errors
///
/// Returns a `TableDecodeError` if the header row is unreadable, a
/// required column is missing, or a record cannot be read.
pub fn decode_table(csv_content: &str) -> Result<Vec<RawRow>, TableDecodeError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_content.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| TableDecodeError::Headers(e.to_string()))?
        .clone();

    let normalized: Vec<String> = headers.iter().map(normalize_column).collect();

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !normalized.iter().any(|h| h == *required))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(TableDecodeError::MissingColumns {
            missing: missing.join(", "),
        });
    }

    let mut rows: Vec<RawRow> = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record: StringRecord = result.map_err(|e| TableDecodeError::Record {
            row: index,
            message: e.to_string(),
        })?;

        let mut row: RawRow = RawRow::new();
        for (column, value) in normalized.iter().zip(record.iter()) {
            row.set(column, value);
        }
        rows.push(row);
    }

    Ok(rows)
}
