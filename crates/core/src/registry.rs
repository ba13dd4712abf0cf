// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The coordinating service.
//!
//! `Registry` owns one service per entity kind and implements the operations
//! that span kinds: section creation and enrollment by key, login across all
//! people, full reporting, and guarded removal. A student, instructor or
//! course cannot be removed while a section still refers to it.
//!
//! Services are only handed out by shared reference, so every mutation goes
//! through the registry.

use crate::course_service::CourseService;
use crate::error::RegistryError;
use crate::instructor_service::InstructorService;
use crate::section_service::SectionService;
use crate::snapshot::{RegistryOverview, RegistrySnapshot, keyed_map};
use crate::student_service::StudentService;
use registrar_domain::{
    Account, Course, Directory, EvaluationStatus, Instructor, Profile, Report, Section, Student,
};
use registrar_repository::Keyed;
use tracing::{debug, info, warn};

/// All services of the registrar behind one entry point.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    students: StudentService,
    instructors: InstructorService,
    courses: CourseService,
    sections: SectionService,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            students: StudentService::new(),
            instructors: InstructorService::new(),
            courses: CourseService::new(),
            sections: SectionService::new(),
        }
    }

    /// Returns the student service.
    #[must_use]
    pub const fn students(&self) -> &StudentService {
        &self.students
    }

    /// Returns the instructor service.
    #[must_use]
    pub const fn instructors(&self) -> &InstructorService {
        &self.instructors
    }

    /// Returns the course service.
    #[must_use]
    pub const fn courses(&self) -> &CourseService {
        &self.courses
    }

    /// Validates and registers a new student.
    ///
    /// # Errors
    ///
    /// See [`StudentService::register`].
    pub fn register_student(
        &mut self,
        name: &str,
        login: &str,
        password: &str,
        enrollment_id: &str,
        course_name: &str,
    ) -> Result<(), RegistryError> {
        self.students
            .register(name, login, password, enrollment_id, course_name)
    }

    /// Replaces a student's descriptive fields.
    ///
    /// # Errors
    ///
    /// See [`StudentService::update`].
    pub fn update_student(
        &mut self,
        enrollment_id: &str,
        name: &str,
        login: &str,
        password: &str,
        course_name: &str,
    ) -> Result<(), RegistryError> {
        self.students
            .update(enrollment_id, name, login, password, course_name)
    }

    /// Validates and registers a new instructor.
    ///
    /// # Errors
    ///
    /// See [`InstructorService::register`].
    pub fn register_instructor(
        &mut self,
        name: &str,
        login: &str,
        password: &str,
        specialty: &str,
        registration_id: &str,
    ) -> Result<(), RegistryError> {
        self.instructors
            .register(name, login, password, specialty, registration_id)
    }

    /// Replaces an instructor's descriptive fields.
    ///
    /// # Errors
    ///
    /// See [`InstructorService::update`].
    pub fn update_instructor(
        &mut self,
        registration_id: &str,
        name: &str,
        login: &str,
        password: &str,
        specialty: &str,
    ) -> Result<(), RegistryError> {
        self.instructors
            .update(registration_id, name, login, password, specialty)
    }

    /// Validates and registers an on-site course.
    ///
    /// # Errors
    ///
    /// See [`CourseService::register_on_site`].
    pub fn register_on_site_course(
        &mut self,
        name: &str,
        code: &str,
        duration_hours: f64,
        room: &str,
    ) -> Result<(), RegistryError> {
        self.courses
            .register_on_site(name, code, duration_hours, room)
    }

    /// Validates and registers a remote course.
    ///
    /// # Errors
    ///
    /// See [`CourseService::register_remote`].
    pub fn register_remote_course(
        &mut self,
        name: &str,
        code: &str,
        duration_hours: f64,
        platform: &str,
    ) -> Result<(), RegistryError> {
        self.courses
            .register_remote(name, code, duration_hours, platform)
    }

    /// Replaces a course's name, duration and room or platform.
    ///
    /// # Errors
    ///
    /// See [`CourseService::update`].
    pub fn update_course(&mut self, code: &str, updated: &Course) -> Result<(), RegistryError> {
        self.courses.update(code, updated)
    }

    /// Returns the section service.
    #[must_use]
    pub const fn sections(&self) -> &SectionService {
        &self.sections
    }

    /// Creates a section for an existing instructor and course.
    ///
    /// # Errors
    ///
    /// See [`SectionService::create`].
    pub fn create_section(
        &mut self,
        code: &str,
        registration_id: &str,
        course_code: &str,
    ) -> Result<(), RegistryError> {
        self.sections.create(
            code,
            registration_id,
            course_code,
            self.instructors.repository(),
            self.courses.repository(),
        )
    }

    /// Re-points a section at another existing instructor and course.
    ///
    /// # Errors
    ///
    /// See [`SectionService::update`].
    pub fn update_section(
        &mut self,
        code: &str,
        registration_id: &str,
        course_code: &str,
    ) -> Result<(), RegistryError> {
        self.sections.update(
            code,
            registration_id,
            course_code,
            self.instructors.repository(),
            self.courses.repository(),
        )
    }

    /// Enrolls a registered student in a section.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if the student or section is missing
    /// and `RegistryError::DuplicateKey` if the student is already enrolled.
    pub fn enroll(&mut self, section_code: &str, enrollment_id: &str) -> Result<(), RegistryError> {
        let student: &Student = self
            .students
            .find(enrollment_id)
            .ok_or_else(|| RegistryError::not_found(Student::KIND, enrollment_id))?;
        self.sections.enroll(section_code, student)
    }

    /// Removes a student from a section's roster.
    ///
    /// # Errors
    ///
    /// See [`SectionService::withdraw`].
    pub fn withdraw(&mut self, section_code: &str, enrollment_id: &str) -> Result<(), RegistryError> {
        self.sections.withdraw(section_code, enrollment_id).map(drop)
    }

    /// Records an ungraded evaluation for a student enrolled in a section.
    ///
    /// # Errors
    ///
    /// See [`SectionService::record_evaluation`]; also `NotFound` for an
    /// unregistered student.
    pub fn record_evaluation(
        &mut self,
        section_code: &str,
        enrollment_id: &str,
        description: &str,
    ) -> Result<(), RegistryError> {
        let student: &Student = self
            .students
            .find(enrollment_id)
            .ok_or_else(|| RegistryError::not_found(Student::KIND, enrollment_id))?;
        self.sections
            .record_evaluation(section_code, description, student)
    }

    /// Assigns a score to a recorded evaluation.
    ///
    /// # Errors
    ///
    /// See [`SectionService::assign_score`].
    pub fn assign_score(
        &mut self,
        section_code: &str,
        enrollment_id: &str,
        description: &str,
        score: f64,
    ) -> Result<EvaluationStatus, RegistryError> {
        self.sections
            .assign_score(section_code, enrollment_id, description, score)
    }

    /// Returns a student's average in a section.
    ///
    /// # Errors
    ///
    /// See [`SectionService::average_for`].
    pub fn average_for(&self, section_code: &str, enrollment_id: &str) -> Result<f64, RegistryError> {
        self.sections.average_for(section_code, enrollment_id)
    }

    /// Renders one section's summary.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if the section is missing.
    pub fn section_summary(&self, section_code: &str) -> Result<Report, RegistryError> {
        self.sections
            .find(section_code)
            .map(|section| section.summary(self))
            .ok_or_else(|| RegistryError::not_found(Section::KIND, section_code))
    }

    /// Removes a student that no section has enrolled.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if the student is missing and
    /// `RegistryError::Referential` if a section still enrolls it.
    pub fn remove_student(&mut self, enrollment_id: &str) -> Result<Student, RegistryError> {
        if self.students.find(enrollment_id).is_none() {
            return Err(RegistryError::not_found(Student::KIND, enrollment_id));
        }
        if let Some(section) = self.sections.enrolling(enrollment_id) {
            warn!(enrollment_id, section = %section.code(), "Student still enrolled");
            return Err(RegistryError::referential(format!(
                "Student '{enrollment_id}' is enrolled in section '{}'",
                section.code()
            )));
        }
        self.students.remove(enrollment_id)
    }

    /// Removes an instructor that leads no section.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if the instructor is missing and
    /// `RegistryError::Referential` if a section still refers to it.
    pub fn remove_instructor(&mut self, registration_id: &str) -> Result<Instructor, RegistryError> {
        if self.instructors.find(registration_id).is_none() {
            return Err(RegistryError::not_found(Instructor::KIND, registration_id));
        }
        if let Some(section) = self.sections.led_by(registration_id) {
            warn!(registration_id, section = %section.code(), "Instructor still leads a section");
            return Err(RegistryError::referential(format!(
                "Instructor '{registration_id}' leads section '{}'",
                section.code()
            )));
        }
        self.instructors.remove(registration_id)
    }

    /// Removes a course that no section teaches.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if the course is missing and
    /// `RegistryError::Referential` if a section still refers to it.
    pub fn remove_course(&mut self, code: &str) -> Result<Course, RegistryError> {
        if self.courses.find(code).is_none() {
            return Err(RegistryError::not_found(Course::KIND, code));
        }
        if let Some(section) = self.sections.teaching(code) {
            warn!(code, section = %section.code(), "Course still taught by a section");
            return Err(RegistryError::referential(format!(
                "Course '{code}' is taught in section '{}'",
                section.code()
            )));
        }
        self.courses.remove(code)
    }

    /// Removes a section together with its roster and evaluations.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if the section is missing.
    pub fn remove_section(&mut self, code: &str) -> Result<Section, RegistryError> {
        self.sections.remove(code)
    }

    /// Finds the student or instructor whose credentials match.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` when no registered person accepts
    /// the credentials.
    pub fn authenticate(&self, login: &str, password: &str) -> Result<Profile, RegistryError> {
        let people = self
            .students
            .repository()
            .iter()
            .map(|student| student as &dyn Account)
            .chain(
                self.instructors
                    .repository()
                    .iter()
                    .map(|instructor| instructor as &dyn Account),
            );

        for person in people {
            match person.check_credentials(login, password) {
                Ok(()) => {
                    info!(login, profile = %person.profile(), "Authenticated");
                    return Ok(person.profile());
                }
                Err(reason) => debug!(login, %reason, "Credentials rejected"),
            }
        }
        warn!(login, "No account accepted the credentials");
        Err(RegistryError::not_found("Account", login))
    }

    /// Returns the number of entities of each kind.
    #[must_use]
    pub fn overview(&self) -> RegistryOverview {
        RegistryOverview {
            students: self.students.count(),
            instructors: self.instructors.count(),
            courses: self.courses.count(),
            sections: self.sections.count(),
        }
    }

    /// Renders the totals followed by each non-empty kind's report.
    #[must_use]
    pub fn full_report(&self) -> Report {
        let overview: RegistryOverview = self.overview();
        let mut report: Report = Report::new("Full Registry Report").block(overview.block());

        if overview.students > 0 {
            report = report.child(self.students.report_all());
        }
        if overview.instructors > 0 {
            report = report.child(self.instructors.report_all());
        }
        if overview.courses > 0 {
            report = report.child(self.courses.report_all());
        }
        if overview.sections > 0 {
            report = report.child(self.sections.report_all(self));
        }
        report
    }

    /// Copies every repository into a serializable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            students: keyed_map(self.students.repository()),
            instructors: keyed_map(self.instructors.repository()),
            courses: keyed_map(self.courses.repository()),
            sections: keyed_map(self.sections.repository()),
        }
    }
}

impl Directory for Registry {
    fn student(&self, enrollment_id: &str) -> Option<&Student> {
        self.students.find(enrollment_id)
    }

    fn instructor(&self, registration_id: &str) -> Option<&Instructor> {
        self.instructors.find(registration_id)
    }

    fn course(&self, code: &str) -> Option<&Course> {
        self.courses.find(code)
    }
}
