// src/lib.rs
// DogList - Local-first dog list registry
//
// Architecture:
// - Domain-centric: dog rules and derived views live in `domain`
// - Event-driven: the registry announces changes on the event bus
// - Explicit: every mutation returns the snapshot to render
// - Session-scoped: nothing outlives the app session
// - Application Layer: Tauri plugin boundary

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    favorite_count, validate_dog, validate_dog_name, visible_dogs, Dog, DogKey, DomainError,
    DomainResult, RegistrySnapshot,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    register_snapshot_forwarder, DogAdded, DogFavoriteToggled, DogRemoved, DomainEvent,
    EventBus, EventLogEntry, SearchQueryChanged, SnapshotSink, EVENT_LOG_CAPACITY,
};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{DogRepository, InMemoryDogRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::DogRegistry;

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{init, AppState, PluginConfig, PLUGIN_NAME};

pub use application::commands;
pub use application::dto;
