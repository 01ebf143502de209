//! Corral - Fixed-capacity entity-component identity and storage core
//!
//! This crate re-exports both layers of the Corral system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: corral_storage    — Pools, id allocation, attachment controllers
//! Layer 0: corral_foundation — Core types (EntityId, ComponentKind, Error)
//! ```

pub use corral_foundation as foundation;
pub use corral_storage as storage;
