// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::RegistryError;
use registrar_domain::{Report, Reportable, Instructor};
use registrar_repository::{Keyed, InstructorRepository};
use tracing::{info, warn};

/// Validation and orchestration for instructors.
#[derive(Debug, Clone, Default)]
pub struct InstructorService {
    repository: InstructorRepository,
}

impl InstructorService {
    /// Creates a service over an empty repository.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            repository: InstructorRepository::new(),
        }
    }

    /// Returns the underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &InstructorRepository {
        &self.repository
    }

    /// Validates and registers a new instructor.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Validation` if any field is blank, or
    /// `RegistryError::DuplicateKey` if the registration identifier is taken.
    /// The repository is untouched on failure.
    pub fn register(
        &mut self,
        name: &str,
        login: &str,
        password: &str,
        specialty: &str,
        registration_id: &str,
    ) -> Result<(), RegistryError> {
        let instructor: Instructor =
            Instructor::new(name, login, password, specialty, registration_id);
        instructor
            .validate()
            .inspect_err(|err| warn!(%err, "Rejected instructor registration"))?;
        self.repository
            .add(instructor)
            .inspect_err(|err| warn!(%err, "Rejected instructor registration"))?;
        info!(registration_id, "Registered instructor");
        Ok(())
    }

    /// Validates new descriptive fields and applies them to a stored instructor.
    ///
    /// The registration identifier itself is never changed.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Validation` for blank fields and
    /// `RegistryError::NotFound` if no instructor has `registration_id`.
    pub fn update(
        &mut self,
        registration_id: &str,
        name: &str,
        login: &str,
        password: &str,
        specialty: &str,
    ) -> Result<(), RegistryError> {
        let updated: Instructor =
            Instructor::new(name, login, password, specialty, registration_id);
        updated.validate()?;
        self.repository.update(registration_id, &updated)?;
        info!(registration_id, "Updated instructor");
        Ok(())
    }

    /// Returns the instructor with this registration identifier.
    #[must_use]
    pub fn find(&self, registration_id: &str) -> Option<&Instructor> {
        self.repository.find(registration_id)
    }

    /// Returns a copy of every instructor.
    #[must_use]
    pub fn list(&self) -> Vec<Instructor> {
        self.repository.list()
    }

    /// Removes an instructor after checking that it exists.
    ///
    /// Sections still pointing at the instructor are not touched; the
    /// coordinating registry refuses such removals instead.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if no instructor has `registration_id`.
    pub fn remove(&mut self, registration_id: &str) -> Result<Instructor, RegistryError> {
        if self.find(registration_id).is_none() {
            warn!(registration_id, "Instructor not found for removal");
            return Err(RegistryError::not_found(Instructor::KIND, registration_id));
        }
        let instructor: Instructor = self.repository.remove(registration_id)?;
        info!(registration_id, name = instructor.name(), "Removed instructor");
        Ok(instructor)
    }

    /// Returns the number of registered instructors.
    #[must_use]
    pub fn count(&self) -> usize {
        self.repository.count()
    }

    /// Renders every instructor's report under a header carrying the total.
    #[must_use]
    pub fn report_all(&self) -> Report {
        Report::aggregate(
            "All Instructors",
            self.repository.iter().map(Reportable::report).collect(),
        )
    }
}
