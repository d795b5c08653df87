// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{Dog, RegistrySnapshot};

// ============================================================================
// DOG DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DogDto {
    pub name: String,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddDogDto {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchDogsDto {
    pub query: String,
}

// ============================================================================
// REGISTRY DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySnapshotDto {
    pub dogs: Vec<DogDto>,
    pub total_count: usize,
    pub favorite_count: usize,
    pub search_query: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountsDto {
    pub total_count: usize,
    pub favorite_count: usize,
}

// ============================================================================
// CONVERSION HELPERS (Domain → DTO)
// ============================================================================

impl From<Dog> for DogDto {
    fn from(dog: Dog) -> Self {
        Self {
            name: dog.name().to_string(),
            is_favorite: dog.is_favorite(),
        }
    }
}

impl From<RegistrySnapshot> for RegistrySnapshotDto {
    fn from(snapshot: RegistrySnapshot) -> Self {
        Self {
            dogs: snapshot.dogs.into_iter().map(DogDto::from).collect(),
            total_count: snapshot.total_count,
            favorite_count: snapshot.favorite_count,
            search_query: snapshot.search_query,
        }
    }
}

impl From<&RegistrySnapshot> for CountsDto {
    fn from(snapshot: &RegistrySnapshot) -> Self {
        Self {
            total_count: snapshot.total_count,
            favorite_count: snapshot.favorite_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_dto_uses_camel_case() {
        let mut rex = Dog::new("Rex");
        rex.toggle_favorite();
        let snapshot = RegistrySnapshot::derive(&[rex, Dog::new("Fido")], "");

        let json = serde_json::to_value(RegistrySnapshotDto::from(snapshot)).unwrap();

        assert_eq!(json["totalCount"], 2);
        assert_eq!(json["favoriteCount"], 1);
        assert_eq!(json["searchQuery"], "");
        assert_eq!(json["dogs"][0]["name"], "Rex");
        assert_eq!(json["dogs"][0]["isFavorite"], true);
    }

    #[test]
    fn test_counts_from_snapshot() {
        let snapshot = RegistrySnapshot::derive(&[Dog::new("Rex")], "zzz");
        let counts = CountsDto::from(&snapshot);

        assert_eq!(
            counts,
            CountsDto {
                total_count: 1,
                favorite_count: 0
            }
        );
    }
}
