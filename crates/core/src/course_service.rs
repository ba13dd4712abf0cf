// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::RegistryError;
use registrar_domain::{Course, Report, ReportBlock, Reportable};
use registrar_repository::{CourseRepository, Keyed};
use tracing::{info, warn};

/// Validation and orchestration for courses.
#[derive(Debug, Clone, Default)]
pub struct CourseService {
    repository: CourseRepository,
}

impl CourseService {
    /// Creates a service over an empty repository.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            repository: CourseRepository::new(),
        }
    }

    /// Returns the underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &CourseRepository {
        &self.repository
    }

    /// Validates and registers an on-site course.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Validation` for a blank name, code or room or
    /// a non-positive duration, and `RegistryError::DuplicateKey` if the code
    /// is taken.
    pub fn register_on_site(
        &mut self,
        name: &str,
        code: &str,
        duration_hours: f64,
        room: &str,
    ) -> Result<(), RegistryError> {
        self.register(Course::on_site(name, code, duration_hours, room))
    }

    /// Validates and registers a remote course.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Validation` for a blank name, code or platform
    /// or a non-positive duration, and `RegistryError::DuplicateKey` if the
    /// code is taken.
    pub fn register_remote(
        &mut self,
        name: &str,
        code: &str,
        duration_hours: f64,
        platform: &str,
    ) -> Result<(), RegistryError> {
        self.register(Course::remote(name, code, duration_hours, platform))
    }

    fn register(&mut self, course: Course) -> Result<(), RegistryError> {
        course
            .validate()
            .inspect_err(|err| warn!(%err, "Rejected course registration"))?;
        let code: String = course.code.to_string();
        let modality: &'static str = course.modality.label();
        self.repository
            .add(course)
            .inspect_err(|err| warn!(%err, "Rejected course registration"))?;
        info!(code = %code, modality, "Registered course");
        Ok(())
    }

    /// Validates a replacement course and applies its name, duration and
    /// room or platform to the stored course with `code`.
    ///
    /// A course keeps its modality for life.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Validation` for invalid fields or a change of
    /// modality, and `RegistryError::NotFound` if no course has `code`.
    pub fn update(&mut self, code: &str, updated: &Course) -> Result<(), RegistryError> {
        updated.validate()?;
        let stored: &Course = self
            .repository
            .find(code)
            .ok_or_else(|| RegistryError::not_found(Course::KIND, code))?;
        stored
            .check_same_modality(updated)
            .inspect_err(|err| warn!(code, %err, "Rejected course update"))?;
        self.repository.update(code, updated)?;
        info!(code, "Updated course");
        Ok(())
    }

    /// Returns the course with this code.
    #[must_use]
    pub fn find(&self, code: &str) -> Option<&Course> {
        self.repository.find(code)
    }

    /// Returns a copy of every course.
    #[must_use]
    pub fn list(&self) -> Vec<Course> {
        self.repository.list()
    }

    /// Removes a course after checking that it exists.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if no course has `code`.
    pub fn remove(&mut self, code: &str) -> Result<Course, RegistryError> {
        if !self.repository.contains(code) {
            warn!(code, "Course not found for removal");
            return Err(RegistryError::not_found(Course::KIND, code));
        }
        let course: Course = self.repository.remove(code)?;
        info!(code, name = %course.name, "Removed course");
        Ok(course)
    }

    /// Returns the number of registered courses.
    #[must_use]
    pub fn count(&self) -> usize {
        self.repository.count()
    }

    /// Renders every course's report under a header carrying the total,
    /// followed by the split between on-site and remote courses.
    #[must_use]
    pub fn report_all(&self) -> Report {
        let on_site: usize = self
            .repository
            .iter()
            .filter(|course| course.is_on_site())
            .count();
        let remote: usize = self.repository.count() - on_site;

        Report::aggregate(
            "All Courses",
            self.repository.iter().map(Reportable::report).collect(),
        )
        .block(
            ReportBlock::titled("By Modality")
                .line("On-site", on_site)
                .line("Remote", remote),
        )
    }
}
