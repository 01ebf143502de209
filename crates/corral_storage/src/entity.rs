//! The entity record stored inline in the entity pool.

use corral_foundation::{ComponentKind, EntityId, KindSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::component::ComponentSlot;

/// Identity plus attachment state of one entity.
///
/// Entities are plain values stored inline in a compacting pool, so the
/// record is `Copy` and carries nothing tied to its slot address. The kind
/// bitset and the chain head are kept mutually consistent by the attachment
/// logic: bit *i* is set iff a component of kind *i* is linked into the
/// chain starting at `head`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entity {
    /// The entity's identifier; unique among live entities.
    pub id: EntityId,
    /// Which component kinds are currently attached.
    pub attached: KindSet,
    /// Head of the chain of attached components, threaded through the
    /// provider's nodes.
    pub head: Option<ComponentSlot>,
}

impl Entity {
    /// Creates an entity with no components attached.
    #[must_use]
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            attached: KindSet::EMPTY,
            head: None,
        }
    }

    /// Returns true if a component of the given kind is attached.
    #[must_use]
    pub fn has(&self, kind: ComponentKind) -> bool {
        self.attached.contains(kind)
    }

    /// Number of attached components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.attached.len()
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::new(EntityId::UNDEFINED)
    }
}
