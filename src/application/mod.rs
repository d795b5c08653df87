// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between the UI (Tauri webview) and the registry
// - Translates between DTOs and domain values
// - Holds no business rules of its own

pub mod commands;
pub mod config;
pub mod dto;
pub mod error_handling;
pub mod plugin;
pub mod state;

pub use config::PluginConfig;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use plugin::{init, COMMANDS, PLUGIN_NAME};
pub use state::AppState;
