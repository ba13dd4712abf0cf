// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The section aggregate.
//!
//! A section binds one instructor and one course to a roster of students and
//! owns the evaluations recorded for them. It refers to the instructor,
//! course and students by key only; rendering resolves those keys through a
//! [`Directory`].

use crate::course::Course;
use crate::error::DomainError;
use crate::evaluation::Evaluation;
use crate::person::{Instructor, Student};
use crate::report::{Report, ReportBlock};
use crate::types::{CourseCode, EnrollmentId, RegistrationId, SectionCode};
use serde::Serialize;

/// Read access to the entities a section refers to.
pub trait Directory {
    /// Looks up a student by enrollment identifier.
    fn student(&self, enrollment_id: &str) -> Option<&Student>;
    /// Looks up an instructor by registration identifier.
    fn instructor(&self, registration_id: &str) -> Option<&Instructor>;
    /// Looks up a course by code.
    fn course(&self, code: &str) -> Option<&Course>;
}

/// Placeholder rendered for a key that no longer resolves.
const UNLISTED: &str = "(unlisted)";

/// A class section.
///
/// Sections are exported but never deserialized: a roster only grows
/// through [`Section::add_student`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    code: SectionCode,
    instructor: RegistrationId,
    course: CourseCode,
    roster: Vec<EnrollmentId>,
    evaluations: Vec<Evaluation>,
}

impl Section {
    /// Creates an empty section led by `instructor` and teaching `course`.
    #[must_use]
    pub fn new(code: &str, instructor: &Instructor, course: &Course) -> Self {
        Self {
            code: SectionCode::new(code),
            instructor: instructor.registration_id.clone(),
            course: course.code.clone(),
            roster: Vec::new(),
            evaluations: Vec::new(),
        }
    }

    /// Returns the section code.
    #[must_use]
    pub const fn code(&self) -> &SectionCode {
        &self.code
    }

    /// Returns the registration identifier of the instructor.
    #[must_use]
    pub const fn instructor_id(&self) -> &RegistrationId {
        &self.instructor
    }

    /// Returns the code of the course.
    #[must_use]
    pub const fn course_code(&self) -> &CourseCode {
        &self.course
    }

    /// Returns the roster in enrollment order.
    #[must_use]
    pub fn roster(&self) -> &[EnrollmentId] {
        &self.roster
    }

    /// Returns the number of enrolled students.
    #[must_use]
    pub fn roster_size(&self) -> usize {
        self.roster.len()
    }

    /// Returns every recorded evaluation in insertion order.
    #[must_use]
    pub fn evaluations(&self) -> &[Evaluation] {
        &self.evaluations
    }

    /// Returns whether a student with this enrollment identifier is enrolled.
    #[must_use]
    pub fn is_enrolled(&self, enrollment_id: &str) -> bool {
        self.roster.iter().any(|id| id.as_str() == enrollment_id)
    }

    /// Points the section at a different instructor and course.
    ///
    /// Code, roster and evaluations are left untouched.
    pub fn reassign(&mut self, instructor: RegistrationId, course: CourseCode) {
        self.instructor = instructor;
        self.course = course;
    }

    /// Appends a student to the roster.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AlreadyEnrolled` if a student with the same
    /// enrollment identifier is already on the roster.
    pub fn add_student(&mut self, student: &Student) -> Result<(), DomainError> {
        if self.is_enrolled(student.enrollment_id.as_str()) {
            return Err(DomainError::AlreadyEnrolled {
                section: self.code.to_string(),
                enrollment_id: student.enrollment_id.to_string(),
            });
        }
        self.roster.push(student.enrollment_id.clone());
        Ok(())
    }

    /// Removes the roster entry with this enrollment identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotEnrolled` if no roster entry matches.
    pub fn remove_student(&mut self, enrollment_id: &str) -> Result<EnrollmentId, DomainError> {
        let position: usize = self
            .roster
            .iter()
            .position(|id| id.as_str() == enrollment_id)
            .ok_or_else(|| DomainError::NotEnrolled {
                section: self.code.to_string(),
                enrollment_id: enrollment_id.to_owned(),
            })?;
        Ok(self.roster.remove(position))
    }

    /// Removes the roster entry for this student.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotEnrolled` if the student is not on the roster.
    pub fn remove_student_record(&mut self, student: &Student) -> Result<EnrollmentId, DomainError> {
        self.remove_student(student.enrollment_id.as_str())
    }

    /// Appends an evaluation.
    pub fn add_evaluation(&mut self, evaluation: Evaluation) {
        self.evaluations.push(evaluation);
    }

    /// Returns the evaluations of one student, in insertion order.
    ///
    /// The iterator borrows the section and can be cloned to restart it.
    pub fn evaluations_for<'a>(
        &'a self,
        enrollment_id: &'a str,
    ) -> impl Iterator<Item = &'a Evaluation> + Clone + 'a {
        self.evaluations
            .iter()
            .filter(move |evaluation| evaluation.belongs_to(enrollment_id))
    }

    /// Returns the first evaluation of a student with the given description.
    pub fn evaluation_mut(
        &mut self,
        enrollment_id: &str,
        description: &str,
    ) -> Option<&mut Evaluation> {
        self.evaluations.iter_mut().find(|evaluation| {
            evaluation.belongs_to(enrollment_id) && evaluation.description() == description
        })
    }

    /// Returns the mean score of a student's evaluations, or 0.0 when the
    /// student has none.
    #[must_use]
    pub fn average_for(&self, enrollment_id: &str) -> f64 {
        let (sum, count): (f64, u32) = self
            .evaluations_for(enrollment_id)
            .fold((0.0, 0), |(sum, count), evaluation| {
                (sum + evaluation.score(), count + 1)
            });
        if count == 0 {
            return 0.0;
        }
        sum / f64::from(count)
    }

    /// Renders the full section summary.
    ///
    /// Keys that do not resolve in `directory` are rendered as `(unlisted)`.
    #[must_use]
    pub fn summary(&self, directory: &dyn Directory) -> Report {
        let instructor: String = directory.instructor(self.instructor.as_str()).map_or_else(
            || format!("{UNLISTED} [{}]", self.instructor),
            |instructor| format!("{} (Specialty: {})", instructor.name(), instructor.specialty),
        );
        let course: String = directory.course(self.course.as_str()).map_or_else(
            || format!("{UNLISTED} [{}]", self.course),
            |course| {
                format!(
                    "{} (Code: {}, Duration: {:.1}h)",
                    course.name, course.code, course.duration_hours
                )
            },
        );

        let overview: ReportBlock = ReportBlock::untitled()
            .line("Section", &self.code)
            .line("Instructor", instructor)
            .line("Course", course)
            .line("Students", self.roster.len());

        let mut roster: ReportBlock = ReportBlock::titled("Enrolled Students");
        for (index, enrollment_id) in self.roster.iter().enumerate() {
            let name: &str = directory
                .student(enrollment_id.as_str())
                .map_or(UNLISTED, Student::name);
            roster = roster.line(&(index + 1).to_string(), format!("{name} ({enrollment_id})"));
        }

        Report::new("Section Summary").block(overview).block(roster)
    }
}
