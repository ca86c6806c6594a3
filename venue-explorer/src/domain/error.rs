//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from SDK and web errors.

use super::{InvalidId, LocationId};

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// An identifier failed validation
    #[error(transparent)]
    InvalidId(#[from] InvalidId),

    /// Two locations in one site share an id
    #[error("duplicate location id: {0}")]
    DuplicateLocation(LocationId),
}
