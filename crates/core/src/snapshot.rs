// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Serializable views of the registry.

use registrar_domain::{Course, Instructor, Report, ReportBlock, Section, Student};
use registrar_repository::{Keyed, Repository};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Entity counts per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryOverview {
    /// Number of students.
    pub students: usize,
    /// Number of instructors.
    pub instructors: usize,
    /// Number of courses.
    pub courses: usize,
    /// Number of sections.
    pub sections: usize,
}

impl RegistryOverview {
    /// Renders the counts as a report block.
    #[must_use]
    pub fn block(&self) -> ReportBlock {
        ReportBlock::titled("Totals")
            .line("Students", self.students)
            .line("Instructors", self.instructors)
            .line("Courses", self.courses)
            .line("Sections", self.sections)
    }

    /// Renders the counts as a standalone report.
    #[must_use]
    pub fn report(&self) -> Report {
        Report::new("System Overview").block(self.block())
    }
}

/// Every repository as a mapping from unique key to entity fields.
///
/// Sections hold the keys of their instructor, course, roster members and
/// evaluation owners rather than copies of those entities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrySnapshot {
    /// Students by enrollment identifier.
    pub students: BTreeMap<String, Student>,
    /// Instructors by registration identifier.
    pub instructors: BTreeMap<String, Instructor>,
    /// Courses by code.
    pub courses: BTreeMap<String, Course>,
    /// Sections by code.
    pub sections: BTreeMap<String, Section>,
}

/// Copies a repository into a key-ordered map.
pub(crate) fn keyed_map<V: Keyed>(repository: &Repository<V>) -> BTreeMap<String, V> {
    repository
        .iter()
        .map(|entity| (entity.key().to_owned(), entity.clone()))
        .collect()
}
