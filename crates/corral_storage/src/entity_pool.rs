//! Entity storage: the contiguous pool, the id guard, and the existence index.

use std::collections::BTreeSet;

use corral_foundation::{EntityId, Error, Result};

use crate::entity::Entity;
use crate::id_guard::IdGuard;
use crate::pool::{ContiguousPool, PoolIndex};

/// Owns entity lifetime: slots in a compacting [`ContiguousPool`], ids from
/// an [`IdGuard`], and a secondary set of stored ids for cheap existence
/// checks.
///
/// Entity lookup by id is a linear scan over the live prefix; the existence
/// set answers `contains` in O(log n) without touching the pool. The set is
/// keyed by the id assigned at creation, so entity ids must never be
/// reassigned behind the pool's back.
#[derive(Debug)]
pub struct EntityPool {
    pool: ContiguousPool<Entity>,
    id_guard: IdGuard,
    stored_ids: BTreeSet<EntityId>,
}

impl EntityPool {
    /// Creates a pool holding up to `capacity` entities, with an id space of
    /// the same size.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            pool: ContiguousPool::new(capacity),
            id_guard: IdGuard::new(u32::try_from(capacity).unwrap_or(u32::MAX)),
            stored_ids: BTreeSet::new(),
        }
    }

    /// Creates a new entity and returns its id.
    ///
    /// # Panics
    ///
    /// Panics if the id space is exhausted or the pool is full; with the
    /// id space sized to the capacity, both mean the same configuration
    /// error.
    pub fn create(&mut self) -> EntityId {
        let id = self.id_guard.next_id();
        assert!(!id.is_undefined(), "entity id space exhausted");
        self.pool.allocate(Entity::new(id));
        self.stored_ids.insert(id);
        id
    }

    /// Removes the entity with the given id, releasing its slot and
    /// returning the id for reuse. Returns false if the id is not stored.
    pub fn remove(&mut self, id: EntityId) -> bool {
        if !self.stored_ids.remove(&id) {
            return false;
        }
        if let Some(index) = self.position(id) {
            self.pool.deallocate(index);
        }
        self.id_guard.free_id(id);
        true
    }

    /// Looks up an entity by id.
    ///
    /// # Errors
    ///
    /// Returns an error naming the missing id; probing callers should use
    /// [`contains`](Self::contains) instead of relying on the error.
    pub fn get(&self, id: EntityId) -> Result<&Entity> {
        self.pool
            .iter()
            .find(|entity| entity.id == id)
            .ok_or_else(|| Error::entity_not_found(id))
    }

    /// Mutable lookup by id.
    ///
    /// # Errors
    ///
    /// Returns an error naming the missing id.
    pub fn get_mut(&mut self, id: EntityId) -> Result<&mut Entity> {
        self.pool
            .iter_mut()
            .find(|entity| entity.id == id)
            .ok_or_else(|| Error::entity_not_found(id))
    }

    /// Returns true if an entity with this id is stored.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.stored_ids.contains(&id)
    }

    /// Number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    /// Returns true if no entity is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Maximum number of entities.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Iterates over the live entities in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.pool.iter()
    }

    /// Removes every entity and returns the id guard to its initial state.
    pub fn clear(&mut self) {
        self.pool.clear();
        self.stored_ids.clear();
        self.id_guard.reset();
    }

    fn position(&self, id: EntityId) -> Option<PoolIndex> {
        self.pool
            .iter()
            .position(|entity| entity.id == id)
            .map(PoolIndex::new)
    }
}
