use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Name of the optional global the host page can define before the module
/// loads: `window.__FOLIO_CONFIG = { storage_key: "...", modal: null }`.
pub const WINDOW_CONFIG_KEY: &str = "__FOLIO_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub storage_key: String,
    pub attribute: String,
    pub toggle_id: String,
    /// Seed the initial theme from `prefers-color-scheme` when nothing valid
    /// is stored.
    pub follow_system: bool,
    pub log_level: String,
    /// `null` turns the contact modal off entirely.
    #[serde(default = "default_modal")]
    pub modal: Option<ModalConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub trigger_id: String,
    pub overlay_id: String,
    pub close_id: String,
    pub active_class: String,
}

fn default_modal() -> Option<ModalConfig> {
    Some(ModalConfig::default())
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".into(),
            attribute: "data-theme".into(),
            toggle_id: "theme-toggle".into(),
            follow_system: false,
            log_level: "info".into(),
            modal: default_modal(),
        }
    }
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            trigger_id: "contact-btn".into(),
            overlay_id: "contact-overlay".into(),
            close_id: "contact-close".into(),
            active_class: "active".into(),
        }
    }
}

impl RuntimeConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.log_level()?;
        Ok(config)
    }

    pub fn without_modal(mut self) -> Self {
        self.modal = None;
        self
    }

    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .trim()
            .parse::<log::Level>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_window() -> Option<String> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &WINDOW_CONFIG_KEY.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    js_sys::JSON::stringify(&any)
        .ok()
        .and_then(|s| s.as_string())
}

/// Reads the host page's config object, falling back to defaults when it is
/// absent or malformed.
#[cfg(target_arch = "wasm32")]
pub fn load() -> RuntimeConfig {
    match snapshot_from_window() {
        Some(raw) => RuntimeConfig::from_json(&raw).unwrap_or_else(|err| {
            log::warn!("ignoring window.{}: {}", WINDOW_CONFIG_KEY, err);
            RuntimeConfig::default()
        }),
        None => RuntimeConfig::default(),
    }
}
