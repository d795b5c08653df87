// src/application/plugin.rs
//
// Tauri plugin wiring
//
// Registers the dog commands, manages AppState and, when enabled, pushes a
// snapshot to the webview after every registry change.

use std::sync::Arc;

use log::info;
use tauri::plugin::{Builder, TauriPlugin};
use tauri::{AppHandle, Emitter, Manager, Runtime};

use crate::application::commands::dog_commands;
use crate::application::config::PluginConfig;
use crate::application::dto::RegistrySnapshotDto;
use crate::application::state::AppState;
use crate::domain::RegistrySnapshot;
use crate::error::AppResult;
use crate::events::{register_snapshot_forwarder, SnapshotSink};

pub const PLUGIN_NAME: &str = "dogs";

/// Commands registered by [`init`]; `build.rs` generates a permission for each
/// and `permissions/default.toml` grants them all.
pub const COMMANDS: &[&str] = &[
    "list_dogs",
    "add_dog",
    "remove_dog",
    "toggle_favorite",
    "search_dogs",
    "get_counts",
];

/// Emits snapshots as a global Tauri event
struct WebviewSink<R: Runtime> {
    app: AppHandle<R>,
    event: String,
}

impl<R: Runtime> SnapshotSink for WebviewSink<R> {
    fn publish(&self, snapshot: &RegistrySnapshot) -> AppResult<()> {
        self.app
            .emit(&self.event, RegistrySnapshotDto::from(snapshot.clone()))?;
        Ok(())
    }
}

/// Build the `dogs` plugin.
///
/// ```ignore
/// tauri::Builder::default()
///     .plugin(doglist::init())
///     .run(tauri::generate_context!())?;
/// ```
pub fn init<R: Runtime>() -> TauriPlugin<R, Option<PluginConfig>> {
    Builder::<R, Option<PluginConfig>>::new(PLUGIN_NAME)
        .invoke_handler(tauri::generate_handler![
            dog_commands::list_dogs,
            dog_commands::add_dog,
            dog_commands::remove_dog,
            dog_commands::toggle_favorite,
            dog_commands::search_dogs,
            dog_commands::get_counts,
        ])
        .setup(|app, api| {
            let config = api.config().clone().unwrap_or_default();
            let state = AppState::new();

            if config.forward_changes {
                let sink = Arc::new(WebviewSink {
                    app: app.clone(),
                    event: config.change_event.clone(),
                });
                register_snapshot_forwarder(&state.event_bus, &state.dog_registry, sink);
            }

            app.manage(state);

            info!(
                "[{}] Plugin ready (forward_changes: {}, event: {})",
                PLUGIN_NAME, config.forward_changes, config.change_event
            );
            Ok(())
        })
        .build()
}
