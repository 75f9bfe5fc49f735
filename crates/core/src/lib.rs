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

mod aggregates;
mod normalize;
mod pipeline;
mod session;

pub use aggregates::{
    Aggregates, Department, DepartmentDirectory, EmptyDirectory, Group, Subgroup,
    derive_aggregates, group_key,
};
pub use normalize::{
    COL_DEPARTMENT, COL_DURATION, COL_GROUP, COL_INSTRUCTOR_ROLE, COL_LEVEL, COL_NAME,
    COL_PROFESSOR, COL_REQUIREMENT, COL_SEMESTER, COL_SESSION_TYPE, COL_YEAR, RawRow, RowError,
    RowErrorKind, normalize_column, normalize_row,
};
pub use pipeline::{DEFAULT_MAX_ROWS, IngestSummary, PipelineError, PreparedSession, prepare_session};
pub use session::Session;
