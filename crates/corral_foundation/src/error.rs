//! Error types for the Corral system.
//!
//! Uses `thiserror` for ergonomic error definition. Expected negative
//! outcomes (already attached, nothing to detach) are boolean returns at the
//! call sites; `Error` covers the diagnosed conditions such as looking up an
//! entity id that is not stored.

use thiserror::Error;

use crate::id::EntityId;

/// Result alias used across the Corral crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Corral operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an entity not found error.
    ///
    /// Its `Display` output is the human-readable diagnostic line emitted for
    /// a lookup miss.
    #[must_use]
    pub fn entity_not_found(id: EntityId) -> Self {
        Self::new(ErrorKind::EntityNotFound(id))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Entity was not found in storage.
    #[error("entity not found: {0}")]
    EntityNotFound(EntityId),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
