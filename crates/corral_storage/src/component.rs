//! Component records and the provider collaborators that store them.
//!
//! Components are a closed tagged union over [`ComponentKind`]; the variant
//! discriminant is the kind tag, set at construction and never reassigned.
//! Instances live inside a provider and are referred to by [`ComponentSlot`]
//! handles; the chain of components attached to one entity is threaded
//! through the nodes' `next` handles rather than raw pointers.

use std::fmt;

use corral_foundation::{ComponentKind, EntityId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Payload data for one component instance.
///
/// The variant set is fixed per build; modules supplying richer payloads are
/// external collaborators and only need their data to fit a variant here.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ComponentPayload {
    /// Placement in the world.
    Position {
        /// Horizontal coordinate.
        x: f32,
        /// Vertical coordinate.
        y: f32,
    },
    /// Velocity and steering.
    Movable {
        /// Horizontal velocity.
        dx: f32,
        /// Vertical velocity.
        dy: f32,
    },
    /// Render layer membership.
    Visible {
        /// Draw-order layer.
        layer: u8,
    },
    /// Collision mass.
    Tangible {
        /// Mass in simulation units.
        mass: f32,
    },
}

impl ComponentPayload {
    /// Builds the zeroed default payload for a kind.
    #[must_use]
    pub fn new(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Position => Self::Position { x: 0.0, y: 0.0 },
            ComponentKind::Movable => Self::Movable { dx: 0.0, dy: 0.0 },
            ComponentKind::Visible => Self::Visible { layer: 0 },
            ComponentKind::Tangible => Self::Tangible { mass: 0.0 },
        }
    }

    /// The kind tag carried by the variant.
    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Position { .. } => ComponentKind::Position,
            Self::Movable { .. } => ComponentKind::Movable,
            Self::Visible { .. } => ComponentKind::Visible,
            Self::Tangible { .. } => ComponentKind::Tangible,
        }
    }
}

/// Handle identifying one component instance inside its provider.
///
/// Handles stay valid until the instance is explicitly destroyed; the
/// provider contract forbids relocating an instance out from under a live
/// handle.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComponentSlot(usize);

impl ComponentSlot {
    pub(crate) const fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// The raw slab offset.
    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }
}

impl fmt::Debug for ComponentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentSlot({})", self.0)
    }
}

/// One stored component instance: payload, owner back-reference, and the
/// forward link of the owning entity's chain.
///
/// The owner field is managed by the attachment logic, not by the provider;
/// it is a back-reference, never ownership. An unattached node carries
/// [`EntityId::UNDEFINED`] and no link.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComponentNode {
    /// The component's data; the variant is the kind tag.
    pub payload: ComponentPayload,
    /// Entity this instance is linked into, if any.
    pub owner: EntityId,
    /// Next component in the owning entity's chain.
    pub next: Option<ComponentSlot>,
}

impl ComponentNode {
    /// Creates an unattached node with the zeroed payload for `kind`.
    #[must_use]
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            payload: ComponentPayload::new(kind),
            owner: EntityId::UNDEFINED,
            next: None,
        }
    }

    /// The node's kind tag.
    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        self.payload.kind()
    }
}

/// External collaborator supplying component storage.
///
/// The attachment logic does not know how instances are stored; it requires
/// only that a created slot stays valid until [`destroy`](Self::destroy) and
/// that node access is cheap.
pub trait ComponentProvider {
    /// Creates a fresh instance of the given kind and returns its handle.
    fn create(&mut self, kind: ComponentKind) -> ComponentSlot;

    /// Destroys the instance behind a handle. Returns false if the slot was
    /// already vacant.
    fn destroy(&mut self, slot: ComponentSlot) -> bool;

    /// Read access to a live instance.
    ///
    /// Implementations treat a vacant slot as a caller contract violation.
    fn node(&self, slot: ComponentSlot) -> &ComponentNode;

    /// Write access to a live instance.
    fn node_mut(&mut self, slot: ComponentSlot) -> &mut ComponentNode;
}

/// Capacity-bounded slab provider with free-list reuse.
///
/// Vacated slots go on a free list and are reissued last-in first-out;
/// occupied slots never move, so handles stay stable for the life of the
/// instance. This is the in-tree [`ComponentProvider`] used by the entity
/// controller and the test suites.
#[derive(Debug)]
pub struct SlabProvider {
    nodes: Vec<Option<ComponentNode>>,
    free: Vec<usize>,
    live: usize,
    capacity: usize,
}

impl SlabProvider {
    /// Creates a provider able to hold `capacity` component instances.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "provider capacity must be positive");
        Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            live: 0,
            capacity,
        }
    }

    /// Number of live instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns true if no instance is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Maximum number of instances.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if the slot holds a live instance.
    #[must_use]
    pub fn contains(&self, slot: ComponentSlot) -> bool {
        matches!(self.nodes.get(slot.0), Some(Some(_)))
    }
}

impl ComponentProvider for SlabProvider {
    fn create(&mut self, kind: ComponentKind) -> ComponentSlot {
        let node = ComponentNode::new(kind);
        let raw = if let Some(raw) = self.free.pop() {
            self.nodes[raw] = Some(node);
            raw
        } else {
            assert!(
                self.nodes.len() < self.capacity,
                "component provider capacity exhausted"
            );
            self.nodes.push(Some(node));
            self.nodes.len() - 1
        };
        self.live += 1;
        ComponentSlot::new(raw)
    }

    fn destroy(&mut self, slot: ComponentSlot) -> bool {
        match self.nodes.get_mut(slot.0) {
            Some(occupied @ Some(_)) => {
                *occupied = None;
                self.free.push(slot.0);
                self.live -= 1;
                true
            }
            _ => false,
        }
    }

    fn node(&self, slot: ComponentSlot) -> &ComponentNode {
        match self.nodes.get(slot.0) {
            Some(Some(node)) => node,
            _ => panic!("access to vacant component slot {slot:?}"),
        }
    }

    fn node_mut(&mut self, slot: ComponentSlot) -> &mut ComponentNode {
        match self.nodes.get_mut(slot.0) {
            Some(Some(node)) => node,
            _ => panic!("access to vacant component slot {slot:?}"),
        }
    }
}
