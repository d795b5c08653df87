// src/application/config.rs
//
// Plugin configuration, read from `plugins.dogs` in the host's
// tauri.conf.json. Missing keys fall back to the defaults below.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CHANGE_EVENT: &str = "dogs://changed";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginConfig {
    /// Event name the snapshot is emitted under after each change
    pub change_event: String,

    /// Push snapshots to the webview on change
    pub forward_changes: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            change_event: DEFAULT_CHANGE_EVENT.to_string(),
            forward_changes: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: PluginConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PluginConfig::default());
        assert_eq!(config.change_event, "dogs://changed");
        assert!(config.forward_changes);
    }

    #[test]
    fn test_partial_override() {
        let config: PluginConfig =
            serde_json::from_str(r#"{ "forwardChanges": false }"#).unwrap();
        assert!(!config.forward_changes);
        assert_eq!(config.change_event, DEFAULT_CHANGE_EVENT);
    }

    #[test]
    fn test_missing_plugin_section() {
        let config: Option<PluginConfig> = serde_json::from_str("null").unwrap();
        assert_eq!(config.unwrap_or_default(), PluginConfig::default());
    }
}
