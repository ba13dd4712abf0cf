// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A required text field is empty or whitespace only.
    #[error("Invalid {field}: must not be blank")]
    BlankField {
        /// The name of the offending field.
        field: &'static str,
    },
    /// Course duration is zero, negative, or not a finite number.
    #[error("Invalid duration: {hours} hours. Must be greater than 0")]
    InvalidDuration {
        /// The rejected duration.
        hours: f64,
    },
    /// Score lies outside the accepted range.
    #[error("Invalid score: {value}. Must be between {min} and {max}")]
    ScoreOutOfRange {
        /// The rejected score.
        value: f64,
        /// The lowest accepted score.
        min: f64,
        /// The highest accepted score.
        max: f64,
    },
    /// The student is already on the section roster.
    #[error("Student '{enrollment_id}' is already enrolled in section '{section}'")]
    AlreadyEnrolled {
        /// The section code.
        section: String,
        /// The student's enrollment identifier.
        enrollment_id: String,
    },
    /// The student is not on the section roster.
    #[error("Student '{enrollment_id}' is not enrolled in section '{section}'")]
    NotEnrolled {
        /// The section code.
        section: String,
        /// The student's enrollment identifier.
        enrollment_id: String,
    },
    /// No evaluation with the given description exists for the student.
    #[error("No evaluation '{description}' for student '{enrollment_id}' in section '{section}'")]
    EvaluationNotFound {
        /// The section code.
        section: String,
        /// The student's enrollment identifier.
        enrollment_id: String,
        /// The evaluation description.
        description: String,
    },
    /// An update tried to switch a course to another modality.
    #[error("Course '{code}' is {current}; it cannot become {requested}")]
    ModalityChanged {
        /// The course code.
        code: String,
        /// Label of the stored modality.
        current: &'static str,
        /// Label of the requested modality.
        requested: &'static str,
    },
    /// Access level string is not one of the known tags.
    #[error("Unknown access level: {0}")]
    UnknownAccessLevel(String),
}
