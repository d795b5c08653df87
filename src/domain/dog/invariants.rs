use super::entity::Dog;
use crate::domain::{DomainError, DomainResult};

/// Validates all Dog invariants
pub fn validate_dog(dog: &Dog) -> DomainResult<()> {
    validate_dog_name(dog.name())
}

/// Name cannot be empty; whitespace is a valid name
pub fn validate_dog_name(name: &str) -> DomainResult<()> {
    if name.is_empty() {
        return Err(DomainError::InvariantViolation(
            "Dog name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for the Dog domain:
///
/// 1. Name is never empty
/// 2. Name never changes after creation
/// 3. New dogs start as non-favorites
/// 4. No two dogs in a registry share a name ignoring case
///    (checked by the registry at add time, not here)
