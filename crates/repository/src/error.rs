// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// An entity with the same key is already stored.
    #[error("{kind} with key '{key}' already exists")]
    DuplicateKey {
        /// The entity kind.
        kind: &'static str,
        /// The conflicting key.
        key: String,
    },
    /// No entity with the key is stored.
    #[error("{kind} with key '{key}' not found")]
    NotFound {
        /// The entity kind.
        kind: &'static str,
        /// The missing key.
        key: String,
    },
}
