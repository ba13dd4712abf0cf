// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::person::Student;
use crate::report::{Report, ReportBlock, Reportable};
use crate::types::EnrollmentId;
use crate::validation::validate_score;
use serde::{Deserialize, Serialize};

/// Lowest score that counts as passed.
pub const PASSING_SCORE: f64 = 7.0;
/// Lowest score that qualifies for remedial work.
pub const REMEDIAL_SCORE: f64 = 5.0;

/// Classification derived from an evaluation score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvaluationStatus {
    /// Score of at least `PASSING_SCORE`.
    Passed,
    /// Score in `REMEDIAL_SCORE..PASSING_SCORE`.
    Remedial,
    /// Score below `REMEDIAL_SCORE`.
    Failed,
}

impl EvaluationStatus {
    /// Classifies a score.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= PASSING_SCORE {
            Self::Passed
        } else if score >= REMEDIAL_SCORE {
            Self::Remedial
        } else {
            Self::Failed
        }
    }

    /// Returns the status label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "Passed",
            Self::Remedial => "Remedial",
            Self::Failed => "Failed",
        }
    }
}

impl std::fmt::Display for EvaluationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scored assessment of one student.
///
/// The score starts at 0.0 and can only change through
/// [`Evaluation::assign_score`], which keeps it within range. For that
/// reason the type serializes but does not deserialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    description: String,
    score: f64,
    student: EnrollmentId,
}

impl Evaluation {
    /// Creates an ungraded evaluation for a student.
    #[must_use]
    pub fn new(description: &str, student: &Student) -> Self {
        Self {
            description: description.to_owned(),
            score: 0.0,
            student: student.enrollment_id.clone(),
        }
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the current score.
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    /// Returns the enrollment identifier of the evaluated student.
    #[must_use]
    pub const fn student(&self) -> &EnrollmentId {
        &self.student
    }

    /// Returns whether this evaluation belongs to the given student.
    #[must_use]
    pub fn belongs_to(&self, enrollment_id: &str) -> bool {
        self.student.as_str() == enrollment_id
    }

    /// Assigns a score.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ScoreOutOfRange` if `value` is outside
    /// 0.0..=10.0; the previous score is kept.
    pub fn assign_score(&mut self, value: f64) -> Result<(), DomainError> {
        validate_score(value)?;
        self.score = value;
        Ok(())
    }

    /// Returns the status derived from the current score.
    #[must_use]
    pub fn status(&self) -> EvaluationStatus {
        EvaluationStatus::from_score(self.score)
    }
}

impl Reportable for Evaluation {
    fn report(&self) -> Report {
        Report::new("Evaluation Details").block(
            ReportBlock::untitled()
                .line("Enrollment", &self.student)
                .line("Description", &self.description)
                .line("Score", format!("{:.1}", self.score))
                .line("Status", self.status()),
        )
    }
}
