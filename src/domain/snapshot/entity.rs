use serde::{Deserialize, Serialize};

use crate::domain::dog::Dog;

/// Render-ready view of a registry at one point in time
/// Snapshots are derived data and are NEVER a source of truth
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Dogs matching the active query, favorites first
    pub dogs: Vec<Dog>,

    /// Number of dogs in the registry, ignoring the query
    pub total_count: usize,

    /// Number of favorite dogs in the registry, ignoring the query
    pub favorite_count: usize,

    /// Query the visible list was filtered with
    pub search_query: String,
}

impl RegistrySnapshot {
    /// Derive a snapshot from every dog in the registry and the active query
    pub fn derive(all_dogs: &[Dog], search_query: &str) -> Self {
        Self {
            dogs: visible_dogs(all_dogs, search_query),
            total_count: all_dogs.len(),
            favorite_count: favorite_count(all_dogs),
            search_query: search_query.to_string(),
        }
    }
}

/// Filter by query, then place favorites before non-favorites.
/// The sort is stable, so each group keeps the order of `dogs`.
pub fn visible_dogs(dogs: &[Dog], search_query: &str) -> Vec<Dog> {
    let mut visible: Vec<Dog> = dogs
        .iter()
        .filter(|dog| dog.matches_query(search_query))
        .cloned()
        .collect();

    visible.sort_by_key(|dog| !dog.is_favorite());
    visible
}

pub fn favorite_count(dogs: &[Dog]) -> usize {
    dogs.iter().filter(|dog| dog.is_favorite()).count()
}
