// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod dog_registry;


pub use dog_registry::DogRegistry;
