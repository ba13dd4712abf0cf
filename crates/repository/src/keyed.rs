// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Key extraction and update rules per entity kind.

use registrar_domain::{Course, Instructor, Section, Student};

/// An entity that can be stored in a [`Repository`](crate::Repository).
pub trait Keyed: Clone {
    /// Human readable name of the entity kind, used in errors and logs.
    const KIND: &'static str;

    /// Returns the unique key.
    fn key(&self) -> &str;

    /// Copies the descriptive fields of `updated` into `self`.
    ///
    /// The key is never overwritten.
    fn apply_update(&mut self, updated: &Self);
}

impl Keyed for Student {
    const KIND: &'static str = "Student";

    fn key(&self) -> &str {
        self.enrollment_id.as_str()
    }

    fn apply_update(&mut self, updated: &Self) {
        self.identity = updated.identity.clone();
        self.course_name.clone_from(&updated.course_name);
    }
}

impl Keyed for Instructor {
    const KIND: &'static str = "Instructor";

    fn key(&self) -> &str {
        self.registration_id.as_str()
    }

    fn apply_update(&mut self, updated: &Self) {
        self.identity = updated.identity.clone();
        self.specialty.clone_from(&updated.specialty);
    }
}

impl Keyed for Course {
    const KIND: &'static str = "Course";

    fn key(&self) -> &str {
        self.code.as_str()
    }

    fn apply_update(&mut self, updated: &Self) {
        self.name.clone_from(&updated.name);
        self.duration_hours = updated.duration_hours;
        // The variant is fixed for life; only its room or platform may change
        if self.same_modality(updated) {
            self.modality = updated.modality.clone();
        }
    }
}

impl Keyed for Section {
    const KIND: &'static str = "Section";

    fn key(&self) -> &str {
        self.code().as_str()
    }

    // Roster and evaluations belong to the stored section and are kept
    fn apply_update(&mut self, updated: &Self) {
        self.reassign(
            updated.instructor_id().clone(),
            updated.course_code().clone(),
        );
    }
}
