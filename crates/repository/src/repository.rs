// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::RepositoryError;
use crate::keyed::Keyed;
use tracing::debug;

/// An in-memory collection of entities with unique keys.
///
/// Entities are kept in insertion order and looked up linearly; keys are
/// compared by exact string equality.
#[derive(Debug, Clone)]
pub struct Repository<V: Keyed> {
    entries: Vec<V>,
}

impl<V: Keyed> Repository<V> {
    /// Creates an empty repository.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts an entity.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DuplicateKey` if an entity with the same key
    /// is already stored; the repository is left unchanged.
    pub fn add(&mut self, entity: V) -> Result<(), RepositoryError> {
        if self.contains(entity.key()) {
            debug!(kind = V::KIND, key = entity.key(), "Rejected duplicate key");
            return Err(RepositoryError::DuplicateKey {
                kind: V::KIND,
                key: entity.key().to_owned(),
            });
        }
        debug!(kind = V::KIND, key = entity.key(), "Stored entity");
        self.entries.push(entity);
        Ok(())
    }

    /// Returns the entity with the given key.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|entity| entity.key() == key)
    }

    /// Returns the entity with the given key for in-place mutation.
    ///
    /// Callers must not change the key field.
    pub fn find_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries.iter_mut().find(|entity| entity.key() == key)
    }

    /// Returns whether an entity with the given key is stored.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Returns an independent copy of every stored entity, in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<V> {
        self.entries.clone()
    }

    /// Iterates over the stored entities without copying them.
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.entries.iter()
    }

    /// Overwrites the descriptive fields of the entity with the given key.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no entity has that key.
    pub fn update(&mut self, key: &str, updated: &V) -> Result<(), RepositoryError> {
        let entity: &mut V = self.find_mut(key).ok_or_else(|| not_found::<V>(key))?;
        entity.apply_update(updated);
        debug!(kind = V::KIND, key, "Updated entity");
        Ok(())
    }

    /// Removes and returns the entity with the given key.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no entity has that key.
    pub fn remove(&mut self, key: &str) -> Result<V, RepositoryError> {
        let position: usize = self
            .entries
            .iter()
            .position(|entity| entity.key() == key)
            .ok_or_else(|| not_found::<V>(key))?;
        debug!(kind = V::KIND, key, "Removed entity");
        Ok(self.entries.remove(position))
    }

    /// Returns the number of stored entities.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every stored entity.
    pub fn clear(&mut self) {
        debug!(kind = V::KIND, removed = self.entries.len(), "Cleared repository");
        self.entries.clear();
    }
}

impl<V: Keyed> Default for Repository<V> {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found<V: Keyed>(key: &str) -> RepositoryError {
    RepositoryError::NotFound {
        kind: V::KIND,
        key: key.to_owned(),
    }
}
