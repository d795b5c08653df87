// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO event emission

pub mod dog_repository;

pub use dog_repository::{DogRepository, InMemoryDogRepository};

#[cfg(test)]
pub use dog_repository::MockDogRepository;
