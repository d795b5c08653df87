// src/application/commands/dog_commands.rs
//
// Dog Command Handlers
//
// RULES:
// - Accept DTOs
// - Call the registry
// - Return DTOs
// - Never contain business logic
//
// Each `#[tauri::command]` forwards to a plain `handle_*` function over
// `&AppState`, which is what the tests drive.

use tauri::State;

use crate::application::error_handling::ToErrorResponse;
use crate::application::{dto::*, state::AppState};

// ============================================================================
// HANDLERS
// ============================================================================

pub fn handle_list_dogs(state: &AppState) -> Result<RegistrySnapshotDto, String> {
    let snapshot = state.dog_registry.snapshot().to_error_response()?;
    Ok(snapshot.into())
}

pub fn handle_add_dog(state: &AppState, dto: AddDogDto) -> Result<RegistrySnapshotDto, String> {
    let snapshot = state.dog_registry.add(&dto.name).to_error_response()?;
    Ok(snapshot.into())
}

pub fn handle_remove_dog(state: &AppState, name: &str) -> Result<RegistrySnapshotDto, String> {
    let snapshot = state.dog_registry.remove(name).to_error_response()?;
    Ok(snapshot.into())
}

pub fn handle_toggle_favorite(
    state: &AppState,
    name: &str,
) -> Result<RegistrySnapshotDto, String> {
    let snapshot = state.dog_registry.toggle_favorite(name).to_error_response()?;
    Ok(snapshot.into())
}

/// Apply a search query and return the filtered snapshot
pub fn handle_search_dogs(
    state: &AppState,
    dto: SearchDogsDto,
) -> Result<RegistrySnapshotDto, String> {
    state
        .dog_registry
        .set_search_query(&dto.query)
        .to_error_response()?;

    handle_list_dogs(state)
}

pub fn handle_get_counts(state: &AppState) -> Result<CountsDto, String> {
    let snapshot = state.dog_registry.snapshot().to_error_response()?;
    Ok(CountsDto::from(&snapshot))
}

// ============================================================================
// TAURI COMMANDS
// ============================================================================

/// Current snapshot, used for the first render
#[tauri::command]
pub async fn list_dogs(state: State<'_, AppState>) -> Result<RegistrySnapshotDto, String> {
    handle_list_dogs(&state)
}

/// Add a dog; fails with a `duplicate_name` error response on collision
#[tauri::command]
pub async fn add_dog(
    dto: AddDogDto,
    state: State<'_, AppState>,
) -> Result<RegistrySnapshotDto, String> {
    handle_add_dog(&state, dto)
}

#[tauri::command]
pub async fn remove_dog(
    name: String,
    state: State<'_, AppState>,
) -> Result<RegistrySnapshotDto, String> {
    handle_remove_dog(&state, &name)
}

#[tauri::command]
pub async fn toggle_favorite(
    name: String,
    state: State<'_, AppState>,
) -> Result<RegistrySnapshotDto, String> {
    handle_toggle_favorite(&state, &name)
}

#[tauri::command]
pub async fn search_dogs(
    dto: SearchDogsDto,
    state: State<'_, AppState>,
) -> Result<RegistrySnapshotDto, String> {
    handle_search_dogs(&state, dto)
}

#[tauri::command]
pub async fn get_counts(state: State<'_, AppState>) -> Result<CountsDto, String> {
    handle_get_counts(&state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error_handling::{ErrorResponse, ErrorType};

    fn add(state: &AppState, name: &str) -> Result<RegistrySnapshotDto, String> {
        handle_add_dog(
            state,
            AddDogDto {
                name: name.to_string(),
            },
        )
    }

    fn names(snapshot: &RegistrySnapshotDto) -> Vec<&str> {
        snapshot.dogs.iter().map(|dog| dog.name.as_str()).collect()
    }

    #[test]
    fn test_list_dogs_starts_empty() {
        let state = AppState::new();
        let snapshot = handle_list_dogs(&state).unwrap();

        assert!(snapshot.dogs.is_empty());
        assert_eq!(snapshot.total_count, 0);
        assert_eq!(snapshot.search_query, "");
    }

    #[test]
    fn test_add_dog_returns_snapshot() {
        let state = AppState::new();
        let snapshot = add(&state, "Rex").unwrap();

        assert_eq!(names(&snapshot), vec!["Rex"]);
        assert_eq!(snapshot.total_count, 1);
        assert!(!snapshot.dogs[0].is_favorite);
    }

    #[test]
    fn test_add_dog_duplicate_returns_error_response() {
        let state = AppState::new();
        add(&state, "Rex").unwrap();

        let json = add(&state, "REX").unwrap_err();
        let response: ErrorResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(response.error_type, ErrorType::DuplicateName);
        assert_eq!(response.message, "A dog with this name already exists");
        assert_eq!(handle_get_counts(&state).unwrap().total_count, 1);
    }

    #[test]
    fn test_add_dog_empty_name_is_validation_error() {
        let state = AppState::new();

        let json = add(&state, "").unwrap_err();
        let response: ErrorResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(response.error_type, ErrorType::Validation);
    }

    #[test]
    fn test_search_dogs_sets_query_and_filters() {
        let state = AppState::new();
        add(&state, "Rex").unwrap();
        add(&state, "Fido").unwrap();

        let snapshot = handle_search_dogs(
            &state,
            SearchDogsDto {
                query: "re".to_string(),
            },
        )
        .unwrap();

        assert_eq!(names(&snapshot), vec!["Rex"]);
        assert_eq!(snapshot.search_query, "re");
        assert_eq!(snapshot.total_count, 2);
        assert_eq!(names(&handle_list_dogs(&state).unwrap()), vec!["Rex"]);
    }

    #[test]
    fn test_toggle_and_remove_update_counts() {
        let state = AppState::new();
        add(&state, "Rex").unwrap();
        add(&state, "Fido").unwrap();

        let snapshot = handle_toggle_favorite(&state, "Fido").unwrap();
        assert_eq!(names(&snapshot), vec!["Fido", "Rex"]);
        assert_eq!(
            handle_get_counts(&state).unwrap(),
            CountsDto {
                total_count: 2,
                favorite_count: 1
            }
        );

        let snapshot = handle_remove_dog(&state, "Fido").unwrap();
        assert_eq!(names(&snapshot), vec!["Rex"]);
        assert_eq!(snapshot.favorite_count, 0);
    }

    #[test]
    fn test_missing_targets_are_noops() {
        let state = AppState::new();
        add(&state, "Rex").unwrap();

        assert_eq!(handle_remove_dog(&state, "Ghost").unwrap().total_count, 1);
        assert_eq!(handle_toggle_favorite(&state, "Ghost").unwrap().favorite_count, 0);
    }
}
