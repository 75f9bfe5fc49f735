// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during store operations.
///
/// Every variant is fatal to the single operation that produced it and
/// leaves prior state untouched; there are no partial writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The addressed resource does not exist.
    NotFound {
        /// The resource kind (e.g. "session", "classroom").
        resource: &'static str,
        /// The identifier that failed to resolve.
        id: String,
    },
    /// An entity with this identifier already exists.
    Conflict {
        /// The resource kind.
        resource: &'static str,
        /// The conflicting identifier.
        id: String,
    },
    /// An attempt was made to change an immutable field.
    ImmutableField {
        /// The field name.
        field: &'static str,
    },
    /// The store cannot serve requests (resource exhaustion or a
    /// poisoned lock from a panicked writer).
    Unavailable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { resource, id } => {
                write!(f, "{resource} '{id}' not found")
            }
            Self::Conflict { resource, id } => {
                write!(f, "{resource} '{id}' already exists")
            }
            Self::ImmutableField { field } => {
                write!(f, "Field '{field}' is immutable and cannot be changed")
            }
            Self::Unavailable(msg) => write!(f, "Store unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}
