// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No-op operations emit nothing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// DOG EVENTS
// ============================================================================

/// Emitted when a new dog is added to the registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DogAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub name: String,
}

impl DogAdded {
    pub fn new(name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            name,
        }
    }
}

impl DomainEvent for DogAdded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "DogAdded" }
}

/// Emitted when a dog is removed from the registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DogRemoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub name: String,
    pub was_favorite: bool,
}

impl DogRemoved {
    pub fn new(name: String, was_favorite: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            name,
            was_favorite,
        }
    }
}

impl DomainEvent for DogRemoved {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "DogRemoved" }
}

/// Emitted when a dog's favorite flag flips
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DogFavoriteToggled {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub name: String,
    /// Flag value after the toggle
    pub is_favorite: bool,
}

impl DogFavoriteToggled {
    pub fn new(name: String, is_favorite: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            name,
            is_favorite,
        }
    }
}

impl DomainEvent for DogFavoriteToggled {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "DogFavoriteToggled" }
}

// ============================================================================
// SEARCH EVENTS
// ============================================================================

/// Emitted when the active search query changes value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQueryChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub query: String,
}

impl SearchQueryChanged {
    pub fn new(query: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            query,
        }
    }
}

impl DomainEvent for SearchQueryChanged {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "SearchQueryChanged" }
}
