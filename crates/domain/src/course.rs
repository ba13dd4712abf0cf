// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::report::{Report, ReportBlock, Reportable};
use crate::types::CourseCode;
use crate::validation::{require_positive_hours, require_text};
use serde::{Deserialize, Serialize};

/// How a course is delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modality {
    /// Taught in a physical room.
    OnSite {
        /// The room the course is held in.
        room: String,
    },
    /// Taught through an online platform.
    Remote {
        /// The platform the course is delivered on.
        platform: String,
    },
}

impl Modality {
    /// Returns the modality label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::OnSite { .. } => "On-site",
            Self::Remote { .. } => "Remote",
        }
    }

    fn block(&self) -> ReportBlock {
        match self {
            Self::OnSite { room } => ReportBlock::titled("On-site Delivery")
                .line("Modality", self.label())
                .line("Room", room),
            Self::Remote { platform } => ReportBlock::titled("Remote Delivery")
                .line("Modality", self.label())
                .line("Platform", platform),
        }
    }
}

/// A course offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course name.
    pub name: String,
    /// Unique course code.
    pub code: CourseCode,
    /// Workload in hours; strictly positive once validated.
    pub duration_hours: f64,
    /// Delivery modality with its specific field.
    pub modality: Modality,
}

impl Course {
    /// Creates an on-site course.
    #[must_use]
    pub fn on_site(name: &str, code: &str, duration_hours: f64, room: &str) -> Self {
        Self {
            name: name.to_owned(),
            code: CourseCode::new(code),
            duration_hours,
            modality: Modality::OnSite {
                room: room.to_owned(),
            },
        }
    }

    /// Creates a remote course.
    #[must_use]
    pub fn remote(name: &str, code: &str, duration_hours: f64, platform: &str) -> Self {
        Self {
            name: name.to_owned(),
            code: CourseCode::new(code),
            duration_hours,
            modality: Modality::Remote {
                platform: platform.to_owned(),
            },
        }
    }

    /// Returns true for on-site courses.
    #[must_use]
    pub const fn is_on_site(&self) -> bool {
        matches!(self.modality, Modality::OnSite { .. })
    }

    /// Returns true when both courses are delivered the same way, whatever
    /// their room or platform.
    #[must_use]
    pub fn same_modality(&self, other: &Self) -> bool {
        std::mem::discriminant(&self.modality) == std::mem::discriminant(&other.modality)
    }

    /// Checks that `updated` keeps this course's modality.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ModalityChanged` if the variants differ.
    pub fn check_same_modality(&self, updated: &Self) -> Result<(), DomainError> {
        if self.same_modality(updated) {
            return Ok(());
        }
        Err(DomainError::ModalityChanged {
            code: self.code.to_string(),
            current: self.modality.label(),
            requested: updated.modality.label(),
        })
    }

    /// Validates the common fields and the modality-specific field.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::BlankField` for a blank name, code, room or
    /// platform, and `DomainError::InvalidDuration` for a non-positive duration.
    pub fn validate(&self) -> Result<(), DomainError> {
        require_text("course name", &self.name)?;
        require_text("course code", self.code.as_str())?;
        require_positive_hours(self.duration_hours)?;
        match &self.modality {
            Modality::OnSite { room } => require_text("room", room),
            Modality::Remote { platform } => require_text("platform", platform),
        }
    }

    /// Renders the short detail view: common fields plus the modality.
    #[must_use]
    pub fn detail(&self) -> Report {
        Report::new("Course Details")
            .block(self.common_block())
            .block(self.modality.block())
    }

    fn common_block(&self) -> ReportBlock {
        ReportBlock::titled("Course")
            .line("Name", &self.name)
            .line("Code", &self.code)
            .line("Duration", format!("{:.1} hours", self.duration_hours))
    }
}

impl Reportable for Course {
    fn report(&self) -> Report {
        let title: String = format!("{} Course Report", self.modality.label());
        Report::new(&title)
            .block(self.common_block())
            .block(self.modality.block())
    }
}
