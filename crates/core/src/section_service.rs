// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::RegistryError;
use registrar_domain::{
    Course, Directory, DomainError, EnrollmentId, Evaluation, EvaluationStatus, Instructor,
    Report, Section, Student, require_text,
};
use registrar_repository::{CourseRepository, InstructorRepository, Keyed, SectionRepository};
use tracing::{info, warn};

/// Validation and orchestration for sections.
///
/// Operations that need the instructor or course repositories take them as
/// arguments; the section service never owns them.
#[derive(Debug, Clone, Default)]
pub struct SectionService {
    repository: SectionRepository,
}

/// Confirms that both referenced entities exist and returns them.
fn resolve_references<'a>(
    registration_id: &str,
    course_code: &str,
    instructors: &'a InstructorRepository,
    courses: &'a CourseRepository,
) -> Result<(&'a Instructor, &'a Course), RegistryError> {
    require_text("registration id", registration_id)?;
    require_text("course code", course_code)?;

    let instructor: &Instructor = instructors.find(registration_id).ok_or_else(|| {
        RegistryError::referential(format!(
            "{} '{registration_id}' does not exist",
            Instructor::KIND
        ))
    })?;
    let course: &Course = courses.find(course_code).ok_or_else(|| {
        RegistryError::referential(format!("{} '{course_code}' does not exist", Course::KIND))
    })?;
    Ok((instructor, course))
}

impl SectionService {
    /// Creates a service over an empty repository.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            repository: SectionRepository::new(),
        }
    }

    /// Returns the underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &SectionRepository {
        &self.repository
    }

    fn section_mut(&mut self, code: &str) -> Result<&mut Section, RegistryError> {
        self.repository
            .find_mut(code)
            .ok_or_else(|| RegistryError::not_found(Section::KIND, code))
    }

    fn section(&self, code: &str) -> Result<&Section, RegistryError> {
        self.repository
            .find(code)
            .ok_or_else(|| RegistryError::not_found(Section::KIND, code))
    }

    /// Creates a section once its instructor and course are confirmed to exist.
    ///
    /// # Errors
    ///
    /// - `RegistryError::Validation` if any key is blank
    /// - `RegistryError::Referential` if the instructor or course is missing
    /// - `RegistryError::DuplicateKey` if the section code is taken
    pub fn create(
        &mut self,
        code: &str,
        registration_id: &str,
        course_code: &str,
        instructors: &InstructorRepository,
        courses: &CourseRepository,
    ) -> Result<(), RegistryError> {
        require_text("section code", code)?;
        let (instructor, course) =
            resolve_references(registration_id, course_code, instructors, courses)
                .inspect_err(|err| warn!(code, %err, "Rejected section creation"))?;
        self.repository
            .add(Section::new(code, instructor, course))
            .inspect_err(|err| warn!(code, %err, "Rejected section creation"))?;
        info!(code, registration_id, course_code, "Created section");
        Ok(())
    }

    /// Points an existing section at a different instructor and course.
    ///
    /// The roster and evaluations are kept.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if the section is missing and the
    /// same errors as [`SectionService::create`] for the new references.
    pub fn update(
        &mut self,
        code: &str,
        registration_id: &str,
        course_code: &str,
        instructors: &InstructorRepository,
        courses: &CourseRepository,
    ) -> Result<(), RegistryError> {
        let (instructor, course) =
            resolve_references(registration_id, course_code, instructors, courses)?;
        self.repository
            .update(code, &Section::new(code, instructor, course))?;
        info!(code, registration_id, course_code, "Updated section");
        Ok(())
    }

    /// Adds a student to a section's roster.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if the section is missing and
    /// `RegistryError::DuplicateKey` if the student is already enrolled.
    pub fn enroll(&mut self, code: &str, student: &Student) -> Result<(), RegistryError> {
        self.section_mut(code)?.add_student(student)?;
        info!(
            section = code,
            enrollment_id = %student.enrollment_id,
            "Enrolled student"
        );
        Ok(())
    }

    /// Removes a student from a section's roster.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if the section is missing or the
    /// student is not enrolled.
    pub fn withdraw(
        &mut self,
        code: &str,
        enrollment_id: &str,
    ) -> Result<EnrollmentId, RegistryError> {
        let removed: EnrollmentId = self.section_mut(code)?.remove_student(enrollment_id)?;
        info!(section = code, enrollment_id, "Withdrew student");
        Ok(removed)
    }

    /// Records a new, ungraded evaluation for an enrolled student.
    ///
    /// # Errors
    ///
    /// - `RegistryError::Validation` if the description is blank
    /// - `RegistryError::NotFound` if the section is missing or the student
    ///   is not enrolled
    /// - `RegistryError::DuplicateKey` if the student already has an
    ///   evaluation with this description in the section
    pub fn record_evaluation(
        &mut self,
        code: &str,
        description: &str,
        student: &Student,
    ) -> Result<(), RegistryError> {
        require_text("description", description)?;
        let section: &mut Section = self.section_mut(code)?;
        let enrollment_id: &str = student.enrollment_id.as_str();

        if !section.is_enrolled(enrollment_id) {
            return Err(DomainError::NotEnrolled {
                section: code.to_owned(),
                enrollment_id: enrollment_id.to_owned(),
            }
            .into());
        }
        if section
            .evaluations_for(enrollment_id)
            .any(|evaluation| evaluation.description() == description)
        {
            return Err(RegistryError::DuplicateKey {
                kind: "Evaluation",
                key: format!("{code}/{enrollment_id}/{description}"),
            });
        }

        section.add_evaluation(Evaluation::new(description, student));
        info!(section = code, enrollment_id, description, "Recorded evaluation");
        Ok(())
    }

    /// Assigns a score to a recorded evaluation and returns the new status.
    ///
    /// # Errors
    ///
    /// - `RegistryError::NotFound` if the section or evaluation is missing
    /// - `RegistryError::Validation` if the score is out of range; the
    ///   previous score is kept
    pub fn assign_score(
        &mut self,
        code: &str,
        enrollment_id: &str,
        description: &str,
        score: f64,
    ) -> Result<EvaluationStatus, RegistryError> {
        let evaluation: &mut Evaluation = self
            .section_mut(code)?
            .evaluation_mut(enrollment_id, description)
            .ok_or_else(|| DomainError::EvaluationNotFound {
                section: code.to_owned(),
                enrollment_id: enrollment_id.to_owned(),
                description: description.to_owned(),
            })?;
        evaluation
            .assign_score(score)
            .inspect_err(|err| warn!(section = code, enrollment_id, %err, "Rejected score"))?;
        let status: EvaluationStatus = evaluation.status();
        info!(section = code, enrollment_id, description, score, %status, "Assigned score");
        Ok(status)
    }

    /// Returns a student's average score in a section (0.0 without evaluations).
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if the section is missing.
    pub fn average_for(&self, code: &str, enrollment_id: &str) -> Result<f64, RegistryError> {
        Ok(self.section(code)?.average_for(enrollment_id))
    }

    /// Returns the section with this code.
    #[must_use]
    pub fn find(&self, code: &str) -> Option<&Section> {
        self.repository.find(code)
    }

    /// Returns a copy of every section.
    #[must_use]
    pub fn list(&self) -> Vec<Section> {
        self.repository.list()
    }

    /// Removes a section after checking that it exists.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if no section has `code`.
    pub fn remove(&mut self, code: &str) -> Result<Section, RegistryError> {
        if !self.repository.contains(code) {
            warn!(code, "Section not found for removal");
            return Err(RegistryError::not_found(Section::KIND, code));
        }
        let section: Section = self.repository.remove(code)?;
        info!(code, roster = section.roster_size(), "Removed section");
        Ok(section)
    }

    /// Returns the number of sections.
    #[must_use]
    pub fn count(&self) -> usize {
        self.repository.count()
    }

    /// Returns the first section that has the student on its roster.
    #[must_use]
    pub fn enrolling(&self, enrollment_id: &str) -> Option<&Section> {
        self.repository
            .iter()
            .find(|section| section.is_enrolled(enrollment_id))
    }

    /// Returns the first section led by the instructor.
    #[must_use]
    pub fn led_by(&self, registration_id: &str) -> Option<&Section> {
        self.repository
            .iter()
            .find(|section| section.instructor_id().as_str() == registration_id)
    }

    /// Returns the first section teaching the course.
    #[must_use]
    pub fn teaching(&self, course_code: &str) -> Option<&Section> {
        self.repository
            .iter()
            .find(|section| section.course_code().as_str() == course_code)
    }

    /// Renders every section's summary under a header carrying the total.
    #[must_use]
    pub fn report_all(&self, directory: &dyn Directory) -> Report {
        Report::aggregate(
            "All Sections",
            self.repository
                .iter()
                .map(|section| section.summary(directory))
                .collect(),
        )
    }
}
