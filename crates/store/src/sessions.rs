// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The session store: owns every ingested session exclusively.
//!
//! Each session sits behind its own mutex, so mutations to one session
//! serialize while distinct sessions proceed concurrently. The sessions
//! map itself is guarded by a read-write lock that is held only long
//! enough to resolve or insert an entry.

use crate::error::StoreError;
use orari::{DepartmentDirectory, RowError, Session, derive_aggregates};
use orari_domain::Lecture;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};
use time::OffsetDateTime;

/// Default maximum number of retained sessions.
pub const DEFAULT_SESSION_CAPACITY: usize = 64;

type SessionEntry = Arc<Mutex<Session>>;

/// Sessions plus their creation order, guarded together.
#[derive(Default)]
struct Inner {
    /// Session entries by id.
    entries: HashMap<String, SessionEntry>,
    /// Session ids oldest-first; drives capacity eviction.
    order: Vec<String>,
}

/// Capacity-bounded in-memory store of ingestion sessions.
///
/// When the store is full, creating a session evicts the oldest one
/// first. A session is never partially visible: it exists fully formed
/// or not at all.
pub struct SessionStore {
    inner: RwLock<Inner>,
    capacity: usize,
    directory: Arc<dyn DepartmentDirectory>,
}

impl SessionStore {
    /// Creates a store with the default capacity.
    #[must_use]
    pub fn new(directory: Arc<dyn DepartmentDirectory>) -> Self {
        Self::with_capacity(DEFAULT_SESSION_CAPACITY, directory)
    }

    /// Creates a store retaining at most `capacity` sessions.
    ///
    /// A capacity of zero is treated as one.
    #[must_use]
    pub fn with_capacity(capacity: usize, directory: Arc<dyn DepartmentDirectory>) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            capacity: capacity.max(1),
            directory,
        }
    }

    /// Returns the department directory sessions are derived against.
    #[must_use]
    pub fn directory(&self) -> Arc<dyn DepartmentDirectory> {
        Arc::clone(&self.directory)
    }

    /// Number of sessions currently retained.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the store lock is poisoned.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read_inner()?.entries.len())
    }

    /// Whether the store holds no sessions.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the store lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.read_inner()?.entries.is_empty())
    }

    /// Materializes normalized lectures and their row errors as a new
    /// session.
    ///
    /// Assigns a fresh opaque id, derives the aggregate collections,
    /// stamps the creation time, and stores the session atomically.
    /// Evicts the oldest session first when the store is at capacity.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the store lock is poisoned.
    pub fn create(
        &self,
        lectures: Vec<Lecture>,
        row_errors: Vec<RowError>,
    ) -> Result<Session, StoreError> {
        let aggregates = derive_aggregates(&lectures, self.directory.as_ref());

        let mut inner = self.write_inner()?;

        while inner.entries.len() >= self.capacity && !inner.order.is_empty() {
            let evicted: String = inner.order.remove(0);
            inner.entries.remove(&evicted);
        }

        let mut session_id: String = generate_session_id();
        while inner.entries.contains_key(&session_id) {
            session_id = generate_session_id();
        }

        let session: Session = Session {
            session_id: session_id.clone(),
            created_at: OffsetDateTime::now_utc(),
            lectures,
            departments: aggregates.departments,
            groups: aggregates.groups,
            subgroups: aggregates.subgroups,
            row_errors,
        };

        inner.order.push(session_id.clone());
        inner
            .entries
            .insert(session_id, Arc::new(Mutex::new(session.clone())));
        Ok(session)
    }

    /// Returns a snapshot of a session.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the session does not exist, or
    /// `StoreError::Unavailable` on a poisoned lock.
    pub fn get(&self, session_id: &str) -> Result<Session, StoreError> {
        let entry: SessionEntry = self.entry(session_id)?;
        let session = entry
            .lock()
            .map_err(|_| StoreError::Unavailable(String::from("session lock poisoned")))?;
        Ok(session.clone())
    }

    /// Replaces one lecture wholesale and re-derives all aggregates.
    ///
    /// The patch carries a complete replacement record; its `id` must
    /// match the addressed lecture. Returns the full post-mutation
    /// session view.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if either id is absent,
    /// `StoreError::ImmutableField` if the patch tries to change the
    /// lecture id, or `StoreError::Unavailable` on a poisoned lock.
    pub fn update_lecture(
        &self,
        session_id: &str,
        lecture_id: &str,
        patch: Lecture,
    ) -> Result<Session, StoreError> {
        let entry: SessionEntry = self.entry(session_id)?;
        let mut session = entry
            .lock()
            .map_err(|_| StoreError::Unavailable(String::from("session lock poisoned")))?;

        let position: usize = session
            .lectures
            .iter()
            .position(|l| l.id == lecture_id)
            .ok_or_else(|| StoreError::NotFound {
                resource: "lecture",
                id: lecture_id.to_string(),
            })?;

        if patch.id != lecture_id {
            return Err(StoreError::ImmutableField { field: "id" });
        }

        session.lectures[position] = patch;
        Self::rederive(&mut session, self.directory.as_ref());
        Ok(session.clone())
    }

    /// Removes one lecture and re-derives all aggregates.
    ///
    /// Returns the full post-mutation session view.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if either id is absent, or
    /// `StoreError::Unavailable` on a poisoned lock.
    pub fn remove_lecture(
        &self,
        session_id: &str,
        lecture_id: &str,
    ) -> Result<Session, StoreError> {
        let entry: SessionEntry = self.entry(session_id)?;
        let mut session = entry
            .lock()
            .map_err(|_| StoreError::Unavailable(String::from("session lock poisoned")))?;

        let position: usize = session
            .lectures
            .iter()
            .position(|l| l.id == lecture_id)
            .ok_or_else(|| StoreError::NotFound {
                resource: "lecture",
                id: lecture_id.to_string(),
            })?;

        session.lectures.remove(position);
        Self::rederive(&mut session, self.directory.as_ref());
        Ok(session.clone())
    }

    /// Deletes a session. Removing an absent session is not an error.
    ///
    /// Returns whether a session was actually removed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the store lock is poisoned.
    pub fn delete(&self, session_id: &str) -> Result<bool, StoreError> {
        let mut inner = self.write_inner()?;
        let removed: bool = inner.entries.remove(session_id).is_some();
        if removed {
            inner.order.retain(|id| id != session_id);
        }
        Ok(removed)
    }

    fn read_inner(&self) -> Result<std::sync::RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::Unavailable(String::from("session store lock poisoned")))
    }

    fn write_inner(&self) -> Result<std::sync::RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::Unavailable(String::from("session store lock poisoned")))
    }

    /// Resolves a session entry, holding the map lock only briefly.
    fn entry(&self, session_id: &str) -> Result<SessionEntry, StoreError> {
        let inner = self.read_inner()?;
        inner
            .entries
            .get(session_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                resource: "session",
                id: session_id.to_string(),
            })
    }

    /// Recomputes all three aggregate collections in place.
    fn rederive(session: &mut Session, directory: &dyn DepartmentDirectory) {
        let aggregates = derive_aggregates(&session.lectures, directory);
        session.departments = aggregates.departments;
        session.groups = aggregates.groups;
        session.subgroups = aggregates.subgroups;
    }
}

/// Generates an opaque session identifier.
///
/// Timestamp plus random suffix keeps ids unique without coordination;
/// the store still re-generates on the (practically impossible) clash.
fn generate_session_id() -> String {
    let timestamp: u128 = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos());
    format!("sess_{timestamp}_{}", rand::random::<u64>())
}
