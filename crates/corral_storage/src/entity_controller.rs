//! Top-level façade over entity storage and component attachment.

use corral_foundation::{ComponentKind, EntityId, KindSet, Result};

use crate::component::ComponentProvider;
use crate::controller::{ComponentController, EntityChangeDistributor};
use crate::entity::Entity;
use crate::entity_pool::EntityPool;

/// Creates and removes entities, delegates component connection to the
/// attachment controller, and notifies a change distributor after every
/// successful structural mutation.
///
/// Failed operations (unknown id, already attached, empty batch) return
/// false and are never distributed.
#[derive(Debug)]
pub struct EntityController<P, D> {
    entities: EntityPool,
    components: ComponentController<P>,
    distributor: D,
}

impl<P: ComponentProvider, D: EntityChangeDistributor> EntityController<P, D> {
    /// Creates a controller over up to `capacity` entities, with component
    /// storage supplied by `provider` and changes reported to `distributor`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize, provider: P, distributor: D) -> Self {
        Self {
            entities: EntityPool::new(capacity),
            components: ComponentController::new(provider),
            distributor,
        }
    }

    /// Creates an empty entity and returns its id.
    ///
    /// # Panics
    ///
    /// Panics if the entity capacity is exhausted.
    pub fn create_entity(&mut self) -> EntityId {
        self.entities.create()
    }

    /// Creates an entity and attaches the requested component kinds.
    ///
    /// The distributor is notified iff at least one kind was actually
    /// attached.
    pub fn create_entity_with(&mut self, kinds: KindSet) -> EntityId {
        let id = self.entities.create();
        if let Ok(entity) = self.entities.get_mut(id) {
            if self.components.attach_many(entity, kinds) {
                self.distributor.entity_changed(id);
            }
        }
        id
    }

    /// Removes the entity, detaching all of its components first.
    ///
    /// Returns false if the id is unknown. A detach of at least one
    /// component is distributed before the entity disappears; the id goes
    /// back to the allocator for reuse.
    pub fn remove_entity(&mut self, id: EntityId) -> bool {
        let Ok(entity) = self.entities.get_mut(id) else {
            return false;
        };
        let attached = entity.attached;
        if self.components.detach_many(entity, attached) {
            self.distributor.entity_changed(id);
        }
        self.entities.remove(id)
    }

    /// Looks up an entity by id.
    ///
    /// # Errors
    ///
    /// A miss is a diagnosed condition, not a failure: the error's display
    /// is the human-readable line naming the missing id. Callers probing
    /// for existence should use [`has_entity`](Self::has_entity).
    pub fn entity(&self, id: EntityId) -> Result<&Entity> {
        self.entities.get(id)
    }

    /// Returns true if an entity with this id exists.
    #[must_use]
    pub fn has_entity(&self, id: EntityId) -> bool {
        self.entities.contains(id)
    }

    /// Number of live entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Connects a component of the given kind to the entity.
    ///
    /// Returns false for an unknown id or an already-attached kind; the
    /// distributor is notified only on success.
    pub fn connect_component(&mut self, id: EntityId, kind: ComponentKind) -> bool {
        let Ok(entity) = self.entities.get_mut(id) else {
            return false;
        };
        let changed = self.components.attach(entity, kind);
        if changed {
            self.distributor.entity_changed(id);
        }
        changed
    }

    /// Disconnects a component of the given kind from the entity.
    ///
    /// Returns false for an unknown id or a kind that is not attached; the
    /// distributor is notified only on success.
    pub fn disconnect_component(&mut self, id: EntityId, kind: ComponentKind) -> bool {
        let Ok(entity) = self.entities.get_mut(id) else {
            return false;
        };
        let changed = self.components.detach(entity, kind);
        if changed {
            self.distributor.entity_changed(id);
        }
        changed
    }

    /// Connects every requested kind not yet attached. Notifies on success
    /// only.
    pub fn connect_components(&mut self, id: EntityId, kinds: KindSet) -> bool {
        let Ok(entity) = self.entities.get_mut(id) else {
            return false;
        };
        let changed = self.components.attach_many(entity, kinds);
        if changed {
            self.distributor.entity_changed(id);
        }
        changed
    }

    /// Disconnects every requested kind currently attached. Notifies on
    /// success only.
    pub fn disconnect_components(&mut self, id: EntityId, kinds: KindSet) -> bool {
        let Ok(entity) = self.entities.get_mut(id) else {
            return false;
        };
        let changed = self.components.detach_many(entity, kinds);
        if changed {
            self.distributor.entity_changed(id);
        }
        changed
    }

    /// The component controller, for chain inspection.
    #[must_use]
    pub fn components(&self) -> &ComponentController<P> {
        &self.components
    }

    /// The change distributor.
    #[must_use]
    pub fn distributor(&self) -> &D {
        &self.distributor
    }
}
