// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived aggregates: departments, groups, and subgroups.
//!
//! Aggregates are never written directly. They are recomputed from scratch
//! from the full lecture set after every change, which keeps the
//! derivation total and trivially correct after any edit.

use orari_domain::Lecture;
use serde::{Deserialize, Serialize};

/// Resolves a department code to a display name.
///
/// The mapping is supplied by an external collaborator; the deriver never
/// guesses names. An unresolved code displays as the code itself.
pub trait DepartmentDirectory: Send + Sync {
    /// Returns the display name for a department code, if known.
    fn display_name(&self, code: &str) -> Option<String>;
}

/// A directory that resolves nothing. Every department displays its code.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyDirectory;

impl DepartmentDirectory for EmptyDirectory {
    fn display_name(&self, _code: &str) -> Option<String> {
        None
    }
}

/// A department aggregate, keyed by department code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// The department code (e.g. "EK").
    pub code: String,
    /// Display name; equals the code when unresolved.
    pub name: String,
    /// Number of lectures with this department code.
    pub lecture_count: usize,
}

/// A group aggregate, keyed by the top-level token of the group field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// The top-level group token (e.g. "1" for lectures in "1" or "1.2").
    pub id: String,
    /// Distinct subgroup-qualified values under this group, in first-seen order.
    pub sub_groups: Vec<String>,
    /// Number of lectures in this group, directly or via a subgroup.
    pub lecture_count: usize,
}

/// A subgroup aggregate, keyed by the full dotted group string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subgroup {
    /// The full group string (e.g. "1.2").
    pub id: String,
    /// The top-level token this subgroup belongs to.
    pub parent_group: String,
    /// Number of lectures whose group exactly equals this id.
    pub lecture_count: usize,
}

/// The three derived aggregate collections for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregates {
    /// Departments, in first-seen order.
    pub departments: Vec<Department>,
    /// Groups, in first-seen order.
    pub groups: Vec<Group>,
    /// Subgroups, in first-seen order.
    pub subgroups: Vec<Subgroup>,
}

/// Returns the top-level group token of a group string.
///
/// The token before the first `.`, or the whole string when no separator
/// is present.
#[must_use]
pub fn group_key(group: &str) -> &str {
    group.split_once('.').map_or(group, |(key, _)| key)
}

/// Recomputes all three aggregate collections from the full lecture set.
///
/// Every lecture contributes to exactly one group (by its top-level
/// token). A lecture with a subgroup-qualified group value additionally
/// contributes to that subgroup's count. Department codes are compared
/// exactly after trimming surrounding whitespace.
#[must_use]
pub fn derive_aggregates(lectures: &[Lecture], directory: &dyn DepartmentDirectory) -> Aggregates {
    let mut departments: Vec<Department> = Vec::new();
    let mut groups: Vec<Group> = Vec::new();
    let mut subgroups: Vec<Subgroup> = Vec::new();

    for lecture in lectures {
        let code: &str = lecture.department_code.trim();
        if let Some(existing) = departments.iter_mut().find(|d| d.code == code) {
            existing.lecture_count += 1;
        } else {
            departments.push(Department {
                code: code.to_string(),
                name: directory
                    .display_name(code)
                    .unwrap_or_else(|| code.to_string()),
                lecture_count: 1,
            });
        }

        let group_value: &str = lecture.group.trim();
        let key: &str = group_key(group_value);
        let is_subgroup: bool = group_value.contains('.');

        if let Some(existing) = groups.iter_mut().find(|g| g.id == key) {
            existing.lecture_count += 1;
            if is_subgroup && !existing.sub_groups.iter().any(|s| s == group_value) {
                existing.sub_groups.push(group_value.to_string());
            }
        } else {
            groups.push(Group {
                id: key.to_string(),
                sub_groups: if is_subgroup {
                    vec![group_value.to_string()]
                } else {
                    Vec::new()
                },
                lecture_count: 1,
            });
        }

        if is_subgroup {
            if let Some(existing) = subgroups.iter_mut().find(|s| s.id == group_value) {
                existing.lecture_count += 1;
            } else {
                subgroups.push(Subgroup {
                    id: group_value.to_string(),
                    parent_group: key.to_string(),
                    lecture_count: 1,
                });
            }
        }
    }

    Aggregates {
        departments,
        groups,
        subgroups,
    }
}
