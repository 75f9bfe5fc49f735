// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The department name directory installed by the server.
//!
//! Name resolution is an injected collaborator of the derivation core:
//! the core never guesses display names, it asks the directory. This
//! static table covers the faculty's known department codes; unknown
//! codes fall through and display as the code itself.

use orari::DepartmentDirectory;

/// Known department codes and their display names.
const DEPARTMENT_NAMES: &[(&str, &str)] = &[
    ("AEM", "Applied Economics and Management"),
    ("EK", "Economics"),
    ("BF", "Business Finance"),
    ("MXH", "Management and Human Resources"),
    ("Kon", "Accounting"),
];

/// A directory backed by the static department table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDepartmentDirectory;

impl StaticDepartmentDirectory {
    /// Creates the directory.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DepartmentDirectory for StaticDepartmentDirectory {
    fn display_name(&self, code: &str) -> Option<String> {
        DEPARTMENT_NAMES
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, name)| (*name).to_string())
    }
}
