use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Widget settings. Missing fields fall back to their defaults.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WidgetConfig {
    /// Followers/following list endpoint
    pub users_endpoint: String,
    /// Activity feed endpoint, shared by page 1 and the paginator
    pub activities_endpoint: String,
    /// "error", "warn", "info", "debug" or "trace"
    pub log_level: String,
    /// Bring the follow button back when a toggle request fails
    pub restore_on_failure: bool,
    /// How early the next activity page is requested, in pixels before the end
    pub scroll_margin_px: u32,
    /// How long error notices stay on screen
    pub toast_timeout_ms: u32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            users_endpoint: "/ajax/users/".to_string(),
            activities_endpoint: "/ajax/activities/".to_string(),
            log_level: "info".to_string(),
            restore_on_failure: true,
            scroll_margin_px: 300,
            toast_timeout_ms: 5000,
        }
    }
}

impl WidgetConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid widget config: {}", e))
    }

    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }
}

/// LocalStorage key holding a JSON override of the defaults
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const STORAGE_KEY: &str = "profile_widgets_config";

/// Config resolved by `main` before the logger starts
static STARTUP_CONFIG: OnceLock<WidgetConfig> = OnceLock::new();

/// Global widget config, read once from LocalStorage
pub static CONFIG: GlobalSignal<WidgetConfig> = Signal::global(load_config);

/// Read the stored override, if any
///
/// `Ok(None)` means nothing is stored; an invalid override is an error so the
/// caller can report it once logging is up.
pub fn read_stored_config() -> Result<Option<WidgetConfig>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_storage::{LocalStorage, Storage};

        if let Ok(Some(raw)) = LocalStorage::raw().get_item(STORAGE_KEY) {
            return WidgetConfig::from_json(&raw).map(Some);
        }
    }

    Ok(None)
}

/// Fold a stored override into the config to run with
pub fn resolve_config(stored: Result<Option<WidgetConfig>, String>) -> (WidgetConfig, Option<String>) {
    match stored {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(e) => (WidgetConfig::default(), Some(e)),
    }
}

/// Pin the startup config; later calls keep the first value
pub fn install_config(config: WidgetConfig) -> WidgetConfig {
    STARTUP_CONFIG.get_or_init(|| config).clone()
}

/// Config installed at startup, falling back to a fresh read
pub fn load_config() -> WidgetConfig {
    if let Some(config) = STARTUP_CONFIG.get() {
        return config.clone();
    }
    let (config, warning) = resolve_config(read_stored_config());
    if let Some(e) = warning {
        log::warn!("Ignoring stored widget config: {}", e);
    }
    config
}
