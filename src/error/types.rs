// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use std::sync::PoisonError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Tauri error: {0}")]
    Tauri(#[from] tauri::Error),
}

impl AppError {
    /// True when the error is a rejected add because of a name collision
    pub fn is_duplicate_name(&self) -> bool {
        matches!(self, AppError::Domain(DomainError::DuplicateName { .. }))
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<T> From<PoisonError<T>> for AppError {
    fn from(err: PoisonError<T>) -> Self {
        AppError::Storage(format!("lock poisoned: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_display() {
        let err = AppError::from(DomainError::DuplicateName {
            name: "Rex".to_string(),
        });
        assert!(err.is_duplicate_name());
        assert_eq!(
            err.to_string(),
            "Domain error: a dog with this name already exists"
        );
    }

    #[test]
    fn test_serializes_as_string() {
        let err = AppError::Storage("lock poisoned".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"Storage error: lock poisoned\"");
        assert!(!err.is_duplicate_name());
    }
}
