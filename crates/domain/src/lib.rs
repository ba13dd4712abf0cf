// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod course;
mod error;
mod evaluation;
mod person;
mod report;
mod section;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use course::{Course, Modality};
pub use error::DomainError;
pub use evaluation::{Evaluation, EvaluationStatus, PASSING_SCORE, REMEDIAL_SCORE};
pub use person::{
    Account, Administrator, CredentialError, Identity, Instructor, LOW_ALLOWED_ACTIONS,
    MEDIUM_DENIED_ACTIONS, Person, Profile, Student,
};
pub use report::{Report, ReportBlock, ReportLine, Reportable};
pub use section::{Directory, Section};

// Re-export public types
pub use types::{AccessLevel, CourseCode, EnrollmentId, RegistrationId, SectionCode};
pub use validation::{SCORE_MAX, SCORE_MIN, require_positive_hours, require_text, validate_score};
