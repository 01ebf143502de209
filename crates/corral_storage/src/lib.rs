//! Fixed-capacity pools, id allocation, and entity-component attachment for Corral.
//!
//! This crate provides:
//! - [`ContiguousPool`] - Contiguous arena with swap-remove compaction and
//!   self-repairing [`SafeCursor`]s
//! - [`IdGuard`] - Recyclable monotonic id allocation
//! - [`EntityPool`] - Entity slots, ids, and the existence index
//! - [`ComponentController`] - Attach/detach of component kinds on entities
//! - [`EntityController`] - The façade tying storage, attachment, and change
//!   distribution together

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod component;
mod controller;
mod entity;
mod entity_controller;
mod entity_pool;
mod id_guard;
mod pool;

pub use component::{
    ComponentNode, ComponentPayload, ComponentProvider, ComponentSlot, SlabProvider,
};
pub use controller::{ComponentController, EntityChangeDistributor};
pub use entity::Entity;
pub use entity_controller::EntityController;
pub use entity_pool::EntityPool;
pub use id_guard::IdGuard;
pub use pool::{ContiguousPool, PoolIndex, SafeCursor};
