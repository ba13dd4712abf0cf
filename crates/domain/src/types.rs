// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Declares a string-backed identifier newtype.
///
/// Identifiers compare by exact string equality; no normalization is applied.
macro_rules! string_key {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name {
            value: String,
        }

        impl $name {
            /// Creates a new identifier from the given value.
            #[must_use]
            pub fn new(value: &str) -> Self {
                Self {
                    value: value.to_owned(),
                }
            }

            /// Returns the identifier value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.value
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.value)
            }
        }
    };
}

string_key!(
    /// A student's enrollment identifier, unique across all students.
    EnrollmentId
);

string_key!(
    /// An instructor's registration identifier, unique across all instructors.
    RegistrationId
);

string_key!(
    /// A course code, unique across all courses.
    CourseCode
);

string_key!(
    /// A section code, unique across all sections.
    SectionCode
);

/// Access level granted to an administrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessLevel {
    /// Read-only access to reports and queries.
    Low,
    /// Everything except destructive system actions.
    Medium,
    /// Unrestricted access.
    High,
}

impl AccessLevel {
    /// Returns the tag used for this access level.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl FromStr for AccessLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            _ => Err(DomainError::UnknownAccessLevel(s.to_owned())),
        }
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
