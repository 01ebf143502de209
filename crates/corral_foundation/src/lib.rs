//! Core identity types, component kinds, and errors for Corral.
//!
//! This crate provides:
//! - [`EntityId`] - Recyclable entity identifiers with a reserved sentinel
//! - [`ComponentKind`] - The closed enumeration of component kinds
//! - [`KindSet`] - Fixed-width bitset over component kinds
//! - [`Error`] - Error types with human-readable diagnostics

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod id;
mod kind;

pub use error::{Error, ErrorKind, Result};
pub use id::EntityId;
pub use kind::{ComponentKind, KindSet};
