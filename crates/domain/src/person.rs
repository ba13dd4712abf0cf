// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! People known to the registrar.
//!
//! Students, instructors and administrators share an `Identity` (name and
//! credentials) and differ in their role-specific fields. `Person` is the
//! closed sum over the three; each variant is also usable on its own so that
//! repositories can be typed per kind.

use crate::error::DomainError;
use crate::report::{Report, ReportBlock, Reportable};
use crate::types::{AccessLevel, EnrollmentId, RegistrationId};
use crate::validation::require_text;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Actions a `Medium` administrator may never perform.
pub const MEDIUM_DENIED_ACTIONS: [&str; 2] = ["delete_user", "reset_system"];
/// The only actions a `Low` administrator may perform.
pub const LOW_ALLOWED_ACTIONS: [&str; 2] = ["view_report", "query_data"];

/// Why a credential check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// The supplied login was empty.
    #[error("Login must not be empty")]
    EmptyLogin,
    /// The supplied password was empty.
    #[error("Password must not be empty")]
    EmptyPassword,
    /// The supplied login does not match.
    #[error("Login does not match")]
    LoginMismatch,
    /// The supplied password does not match.
    #[error("Password does not match")]
    PasswordMismatch,
}

/// Fixed profile tag of a person variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profile {
    /// A student.
    Student,
    /// An instructor.
    Instructor,
    /// An administrator.
    Administrator,
}

impl Profile {
    /// Returns the profile tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Instructor => "INSTRUCTOR",
            Self::Administrator => "ADMINISTRATOR",
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capabilities shared by every person variant.
pub trait Account: Reportable {
    /// Returns the shared identity record.
    fn identity(&self) -> &Identity;

    /// Returns the fixed profile tag for this variant.
    fn profile(&self) -> Profile;

    /// Checks the supplied credentials, naming the reason on failure.
    ///
    /// # Errors
    ///
    /// Returns a `CredentialError` describing the first mismatch found.
    fn check_credentials(&self, login: &str, password: &str) -> Result<(), CredentialError> {
        self.identity().verify(login, password)
    }

    /// Returns true only when both login and password match exactly.
    ///
    /// Never fails loudly: any mismatch or empty input yields `false`.
    fn authenticate(&self, login: &str, password: &str) -> bool {
        self.check_credentials(login, password).is_ok()
    }
}

/// Name and credentials common to every person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Display name.
    pub name: String,
    /// Login used for authentication.
    pub login: String,
    /// Password used for authentication (compared by equality only).
    pub password: String,
}

impl Identity {
    /// Creates a new identity.
    #[must_use]
    pub fn new(name: &str, login: &str, password: &str) -> Self {
        Self {
            name: name.to_owned(),
            login: login.to_owned(),
            password: password.to_owned(),
        }
    }

    /// Compares the supplied credentials with the stored ones.
    ///
    /// # Errors
    ///
    /// Returns `LoginMismatch` or `PasswordMismatch`, checked in that order.
    /// Empty input never matches, even against empty stored credentials.
    pub fn verify(&self, login: &str, password: &str) -> Result<(), CredentialError> {
        if login.is_empty() || self.login != login {
            return Err(CredentialError::LoginMismatch);
        }
        if password.is_empty() || self.password != password {
            return Err(CredentialError::PasswordMismatch);
        }
        Ok(())
    }

    /// Validates that no identity field is blank.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::BlankField` naming the first blank field.
    pub fn validate(&self) -> Result<(), DomainError> {
        require_text("name", &self.name)?;
        require_text("login", &self.login)?;
        require_text("password", &self.password)?;
        Ok(())
    }

    fn access_block(&self, profile: Profile) -> ReportBlock {
        ReportBlock::titled("Access")
            .line("Name", &self.name)
            .line("Login", &self.login)
            .line("Profile", profile)
    }
}

/// A student enrolled in a program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Shared identity.
    pub identity: Identity,
    /// Unique enrollment identifier.
    pub enrollment_id: EnrollmentId,
    /// Name of the program the student follows.
    pub course_name: String,
}

impl Student {
    /// Creates a new `Student`. Fields are not validated here; see
    /// [`Student::validate`].
    #[must_use]
    pub fn new(
        name: &str,
        login: &str,
        password: &str,
        enrollment_id: &str,
        course_name: &str,
    ) -> Self {
        Self {
            identity: Identity::new(name, login, password),
            enrollment_id: EnrollmentId::new(enrollment_id),
            course_name: course_name.to_owned(),
        }
    }

    /// Returns the student's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.identity.name
    }

    /// Validates that every required field is present.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::BlankField` naming the first blank field.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.identity.validate()?;
        require_text("enrollment id", self.enrollment_id.as_str())?;
        require_text("course name", &self.course_name)?;
        Ok(())
    }
}

impl Account for Student {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn profile(&self) -> Profile {
        Profile::Student
    }
}

impl Reportable for Student {
    fn report(&self) -> Report {
        Report::new("Student Report")
            .block(self.identity.access_block(self.profile()))
            .block(
                ReportBlock::titled("Academic")
                    .line("Enrollment", &self.enrollment_id)
                    .line("Course", &self.course_name),
            )
    }
}

/// An instructor who can lead sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    /// Shared identity.
    pub identity: Identity,
    /// Area of expertise.
    pub specialty: String,
    /// Unique registration identifier.
    pub registration_id: RegistrationId,
}

impl Instructor {
    /// Creates a new `Instructor`. Fields are not validated here; see
    /// [`Instructor::validate`].
    #[must_use]
    pub fn new(
        name: &str,
        login: &str,
        password: &str,
        specialty: &str,
        registration_id: &str,
    ) -> Self {
        Self {
            identity: Identity::new(name, login, password),
            specialty: specialty.to_owned(),
            registration_id: RegistrationId::new(registration_id),
        }
    }

    /// Returns the instructor's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.identity.name
    }

    /// Validates that every required field is present.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::BlankField` naming the first blank field.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.identity.validate()?;
        require_text("specialty", &self.specialty)?;
        require_text("registration id", self.registration_id.as_str())?;
        Ok(())
    }
}

impl Account for Instructor {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn profile(&self) -> Profile {
        Profile::Instructor
    }
}

impl Reportable for Instructor {
    fn report(&self) -> Report {
        Report::new("Instructor Report")
            .block(self.identity.access_block(self.profile()))
            .block(
                ReportBlock::titled("Professional")
                    .line("Registration", &self.registration_id)
                    .line("Specialty", &self.specialty),
            )
    }
}

/// An administrator with a department and an access level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Administrator {
    /// Shared identity.
    pub identity: Identity,
    /// Department the administrator belongs to.
    pub department: String,
    /// Granted access level.
    pub access_level: AccessLevel,
}

impl Administrator {
    /// Creates a new `Administrator`.
    #[must_use]
    pub fn new(
        name: &str,
        login: &str,
        password: &str,
        department: &str,
        access_level: AccessLevel,
    ) -> Self {
        Self {
            identity: Identity::new(name, login, password),
            department: department.to_owned(),
            access_level,
        }
    }

    /// Returns whether this administrator may perform `action`.
    ///
    /// - `High`: every action
    /// - `Medium`: every action except those in [`MEDIUM_DENIED_ACTIONS`]
    /// - `Low`: only the actions in [`LOW_ALLOWED_ACTIONS`]
    #[must_use]
    pub fn has_permission(&self, action: &str) -> bool {
        match self.access_level {
            AccessLevel::High => true,
            AccessLevel::Medium => !MEDIUM_DENIED_ACTIONS.contains(&action),
            AccessLevel::Low => LOW_ALLOWED_ACTIONS.contains(&action),
        }
    }
}

impl Account for Administrator {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn profile(&self) -> Profile {
        Profile::Administrator
    }

    fn check_credentials(&self, login: &str, password: &str) -> Result<(), CredentialError> {
        // Empty input is reported as such rather than as a mismatch
        if login.is_empty() {
            return Err(CredentialError::EmptyLogin);
        }
        if password.is_empty() {
            return Err(CredentialError::EmptyPassword);
        }
        self.identity.verify(login, password)
    }
}

impl Reportable for Administrator {
    fn report(&self) -> Report {
        Report::new("Administrator Report")
            .block(self.identity.access_block(self.profile()))
            .block(
                ReportBlock::titled("Administrative")
                    .line("Department", &self.department)
                    .line("Access Level", self.access_level),
            )
    }
}

/// Any person known to the registrar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Person {
    /// A student.
    Student(Student),
    /// An instructor.
    Instructor(Instructor),
    /// An administrator.
    Administrator(Administrator),
}

impl Person {
    fn account(&self) -> &dyn Account {
        match self {
            Self::Student(student) => student,
            Self::Instructor(instructor) => instructor,
            Self::Administrator(administrator) => administrator,
        }
    }
}

impl Account for Person {
    fn identity(&self) -> &Identity {
        self.account().identity()
    }

    fn profile(&self) -> Profile {
        self.account().profile()
    }

    fn check_credentials(&self, login: &str, password: &str) -> Result<(), CredentialError> {
        self.account().check_credentials(login, password)
    }
}

impl Reportable for Person {
    fn report(&self) -> Report {
        self.account().report()
    }
}

impl From<Student> for Person {
    fn from(student: Student) -> Self {
        Self::Student(student)
    }
}

impl From<Instructor> for Person {
    fn from(instructor: Instructor) -> Self {
        Self::Instructor(instructor)
    }
}

impl From<Administrator> for Person {
    fn from(administrator: Administrator) -> Self {
        Self::Administrator(administrator)
    }
}
