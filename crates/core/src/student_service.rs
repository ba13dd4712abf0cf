// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::RegistryError;
use registrar_domain::{Report, Reportable, Student};
use registrar_repository::{Keyed, StudentRepository};
use tracing::{info, warn};

/// Validation and orchestration for students.
#[derive(Debug, Clone, Default)]
pub struct StudentService {
    repository: StudentRepository,
}

impl StudentService {
    /// Creates a service over an empty repository.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            repository: StudentRepository::new(),
        }
    }

    /// Returns the underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &StudentRepository {
        &self.repository
    }

    /// Validates and registers a new student.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Validation` if any field is blank, or
    /// `RegistryError::DuplicateKey` if the enrollment identifier is taken.
    /// The repository is untouched on failure.
    pub fn register(
        &mut self,
        name: &str,
        login: &str,
        password: &str,
        enrollment_id: &str,
        course_name: &str,
    ) -> Result<(), RegistryError> {
        let student: Student = Student::new(name, login, password, enrollment_id, course_name);
        student
            .validate()
            .inspect_err(|err| warn!(%err, "Rejected student registration"))?;
        self.repository
            .add(student)
            .inspect_err(|err| warn!(%err, "Rejected student registration"))?;
        info!(enrollment_id, "Registered student");
        Ok(())
    }

    /// Validates new descriptive fields and applies them to a stored student.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Validation` for blank fields and
    /// `RegistryError::NotFound` if no student has `enrollment_id`.
    pub fn update(
        &mut self,
        enrollment_id: &str,
        name: &str,
        login: &str,
        password: &str,
        course_name: &str,
    ) -> Result<(), RegistryError> {
        let updated: Student = Student::new(name, login, password, enrollment_id, course_name);
        updated.validate()?;
        self.repository.update(enrollment_id, &updated)?;
        info!(enrollment_id, "Updated student");
        Ok(())
    }

    /// Returns the student with this enrollment identifier.
    #[must_use]
    pub fn find(&self, enrollment_id: &str) -> Option<&Student> {
        self.repository.find(enrollment_id)
    }

    /// Returns a copy of every student.
    #[must_use]
    pub fn list(&self) -> Vec<Student> {
        self.repository.list()
    }

    /// Removes a student after checking that it exists.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if no student has `enrollment_id`.
    pub fn remove(&mut self, enrollment_id: &str) -> Result<Student, RegistryError> {
        if self.find(enrollment_id).is_none() {
            warn!(enrollment_id, "Student not found for removal");
            return Err(RegistryError::not_found(Student::KIND, enrollment_id));
        }
        let student: Student = self.repository.remove(enrollment_id)?;
        info!(enrollment_id, name = student.name(), "Removed student");
        Ok(student)
    }

    /// Returns the number of registered students.
    #[must_use]
    pub fn count(&self) -> usize {
        self.repository.count()
    }

    /// Renders every student's report under a header carrying the total.
    #[must_use]
    pub fn report_all(&self) -> Report {
        Report::aggregate(
            "All Students",
            self.repository.iter().map(Reportable::report).collect(),
        )
    }
}
