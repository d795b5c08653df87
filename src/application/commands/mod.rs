// src/application/commands/mod.rs
//
// Tauri Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between UI and the registry
// - Commands accept DTOs, return DTOs
// - Commands handle error conversion for Tauri

pub mod dog_commands;

pub use dog_commands::*;
