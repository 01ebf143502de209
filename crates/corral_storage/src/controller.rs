//! Attachment and detachment of components on entities.
//!
//! The controller keeps an entity's component chain and kind bitset mutually
//! consistent while delegating instance construction and destruction to a
//! [`ComponentProvider`]. Within one entity, components stay linked in the
//! order they were first attached; batch operations process kinds in
//! ascending enumeration index regardless of how the request was assembled.

use corral_foundation::{ComponentKind, EntityId, KindSet};

use crate::component::{ComponentNode, ComponentProvider, ComponentSlot};
use crate::entity::Entity;

/// Attaches and detaches component kinds on entities, one or many at a time.
#[derive(Debug)]
pub struct ComponentController<P> {
    provider: P,
}

impl<P: ComponentProvider> ComponentController<P> {
    /// Creates a controller backed by the given provider.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The backing provider.
    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Mutable access to the backing provider.
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// Attaches a component of the given kind to the entity.
    ///
    /// Returns false, leaving the entity untouched, if the kind is already
    /// attached. Otherwise a fresh instance is appended at the tail of the
    /// entity's chain and the kind bit is set.
    pub fn attach(&mut self, entity: &mut Entity, kind: ComponentKind) -> bool {
        if entity.attached.contains(kind) {
            return false;
        }
        let tail = self.tail_of(entity);
        self.append(entity, tail, kind);
        true
    }

    /// Attaches every requested kind that is not attached yet.
    ///
    /// Returns false if nothing was attached. Kinds are processed in
    /// ascending enumeration order, appending at an incrementally advanced
    /// tail so the chain is scanned once, not once per kind.
    pub fn attach_many(&mut self, entity: &mut Entity, requested: KindSet) -> bool {
        let to_attach = (requested ^ entity.attached) & requested;
        if to_attach.is_empty() {
            return false;
        }
        if let Some(kind) = to_attach.single() {
            return self.attach(entity, kind);
        }

        let mut tail = self.tail_of(entity);
        for kind in ComponentKind::ALL {
            if to_attach.contains(kind) {
                tail = Some(self.append(entity, tail, kind));
            }
        }
        true
    }

    /// Detaches the component of the given kind from the entity.
    ///
    /// Returns false, leaving the entity untouched, if the kind is not
    /// attached. Otherwise the node is unlinked from the chain, handed back
    /// to the provider, and the kind bit is cleared.
    pub fn detach(&mut self, entity: &mut Entity, kind: ComponentKind) -> bool {
        if !entity.attached.contains(kind) {
            return false;
        }

        let mut prev: Option<ComponentSlot> = None;
        let mut current = entity.head;
        while let Some(slot) = current {
            let node = self.provider.node(slot);
            let next = node.next;
            if node.kind() == kind {
                match prev {
                    None => entity.head = next,
                    Some(p) => self.provider.node_mut(p).next = next,
                }
                self.provider.destroy(slot);
                entity.attached.remove(kind);
                return true;
            }
            prev = current;
            current = next;
        }

        debug_assert!(false, "kind bit set but no node of that kind in chain");
        false
    }

    /// Detaches every requested kind that is currently attached.
    ///
    /// Returns false if nothing was detached. Kinds are processed in
    /// ascending enumeration order.
    pub fn detach_many(&mut self, entity: &mut Entity, requested: KindSet) -> bool {
        let to_detach = entity.attached & requested;
        if to_detach.is_empty() {
            return false;
        }
        if let Some(kind) = to_detach.single() {
            return self.detach(entity, kind);
        }

        for kind in ComponentKind::ALL {
            if to_detach.contains(kind) {
                self.detach(entity, kind);
            }
        }
        true
    }

    /// Walks the entity's chain, yielding each node with its slot in link
    /// order.
    pub fn components<'a>(
        &'a self,
        entity: &Entity,
    ) -> impl Iterator<Item = (ComponentSlot, &'a ComponentNode)> {
        let mut current = entity.head;
        std::iter::from_fn(move || {
            let slot = current?;
            let node = self.provider.node(slot);
            current = node.next;
            Some((slot, node))
        })
    }

    /// Creates an instance of `kind` and links it after `tail` (or at the
    /// head for an empty chain), returning its slot.
    fn append(
        &mut self,
        entity: &mut Entity,
        tail: Option<ComponentSlot>,
        kind: ComponentKind,
    ) -> ComponentSlot {
        let slot = self.provider.create(kind);
        {
            let node = self.provider.node_mut(slot);
            node.owner = entity.id;
            node.next = None;
        }
        match tail {
            None => entity.head = Some(slot),
            Some(t) => self.provider.node_mut(t).next = Some(slot),
        }
        entity.attached.insert(kind);
        slot
    }

    /// Last slot of the entity's chain, scanning from the head.
    fn tail_of(&self, entity: &Entity) -> Option<ComponentSlot> {
        let mut tail = entity.head?;
        while let Some(next) = self.provider.node(tail).next {
            tail = next;
        }
        Some(tail)
    }
}

/// Observer notified after each successful structural change to an entity.
///
/// Fire-and-forget: the controller never consults a result, and failed
/// operations are never reported.
pub trait EntityChangeDistributor {
    /// Called once per successful attach, detach, or removal-with-detach on
    /// the entity with the given id.
    fn entity_changed(&mut self, id: EntityId);
}
