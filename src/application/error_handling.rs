// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-friendly responses
// - Provides consistent error format for UI
// - Never exposes internal implementation details
// - Logs errors for debugging

use log::{error, warn};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// A dog with the same name (ignoring case) already exists
    DuplicateName,

    /// Invalid input, e.g. an empty name
    Validation,

    /// Anything the user cannot fix
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Domain(DomainError::DuplicateName { name }) => {
                warn!("Rejected duplicate dog name '{}'", name);

                Self {
                    success: false,
                    error_type: ErrorType::DuplicateName,
                    message: "A dog with this name already exists".to_string(),
                    details: Some(name),
                }
            }

            AppError::Domain(DomainError::InvariantViolation(reason)) => {
                Self::validation(reason)
            }

            AppError::Storage(reason) => {
                error!("Storage error: {}", reason);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "Dog list is unavailable".to_string(),
                    details: Some("Check logs for details".to_string()),
                }
            }

            AppError::Tauri(tauri_error) => {
                error!("Tauri error: {:?}", tauri_error);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "Dog list is unavailable".to_string(),
                    details: None,
                }
            }
        }
    }

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self {
            success: false,
            error_type: ErrorType::Validation,
            message,
            details: None,
        }
    }
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let error_response = ErrorResponse::from_app_error(e);
            serde_json::to_string(&error_response)
                .unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}
