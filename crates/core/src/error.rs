// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use registrar_domain::DomainError;
use registrar_repository::RepositoryError;
use thiserror::Error;

/// Broad category of a registry failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field is blank or a number is out of range.
    Validation,
    /// A unique key is already in use.
    DuplicateKey,
    /// A lookup, update or removal targeted a missing key.
    NotFound,
    /// An operation would create or leave a reference to a missing entity.
    Referential,
}

/// Errors returned by the domain services.
///
/// Every variant is recoverable; the `Display` output is the message meant
/// for the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// Input failed domain validation.
    #[error("Validation failed: {0}")]
    Validation(DomainError),
    /// A unique key is already in use.
    #[error("{kind} with key '{key}' already exists")]
    DuplicateKey {
        /// The entity kind.
        kind: &'static str,
        /// The conflicting key.
        key: String,
    },
    /// No entity with the key exists.
    #[error("{kind} with key '{key}' not found")]
    NotFound {
        /// The entity kind.
        kind: &'static str,
        /// The missing key.
        key: String,
    },
    /// A section would reference a missing entity, or an entity is still
    /// referenced by a section.
    #[error("Referential integrity violation: {message}")]
    Referential {
        /// Description of the violated reference.
        message: String,
    },
}

impl RegistryError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Referential { .. } => ErrorKind::Referential,
        }
    }

    pub(crate) fn not_found(kind: &'static str, key: &str) -> Self {
        Self::NotFound {
            kind,
            key: key.to_owned(),
        }
    }

    pub(crate) fn referential(message: String) -> Self {
        Self::Referential { message }
    }
}

impl From<DomainError> for RegistryError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::AlreadyEnrolled {
                section,
                enrollment_id,
            } => Self::DuplicateKey {
                kind: "Enrollment",
                key: format!("{section}/{enrollment_id}"),
            },
            DomainError::NotEnrolled {
                section,
                enrollment_id,
            } => Self::NotFound {
                kind: "Enrollment",
                key: format!("{section}/{enrollment_id}"),
            },
            DomainError::EvaluationNotFound {
                section,
                enrollment_id,
                description,
            } => Self::NotFound {
                kind: "Evaluation",
                key: format!("{section}/{enrollment_id}/{description}"),
            },
            other => Self::Validation(other),
        }
    }
}

impl From<RepositoryError> for RegistryError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateKey { kind, key } => Self::DuplicateKey { kind, key },
            RepositoryError::NotFound { kind, key } => Self::NotFound { kind, key },
        }
    }
}
