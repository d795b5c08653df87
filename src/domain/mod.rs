// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod dog;
pub mod snapshot;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Dog Domain
pub use dog::{validate_dog, validate_dog_name, Dog, DogKey};

// Snapshot Domain (Derived Data)
pub use snapshot::{favorite_count, visible_dogs, RegistrySnapshot};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("a dog with this name already exists")]
    DuplicateName { name: String },
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
