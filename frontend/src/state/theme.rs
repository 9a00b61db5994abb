use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::RuntimeConfig;
use crate::surface::{PreferenceStore, UiSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}`")]
pub struct ThemeParseError(pub String);

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Theme for a persisted value; anything unrecognized means [`Theme::Light`].
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    /// Theme that follows the value currently applied to the document.
    /// An applied value outside the enum resets to the baseline.
    pub fn next_after(applied: Option<&str>) -> Self {
        match applied.and_then(|v| v.parse::<Theme>().ok()) {
            Some(theme) => theme.toggled(),
            None => Theme::default(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

/// Applies and persists the light/dark preference.
#[derive(Debug, Clone)]
pub struct ThemeController {
    storage_key: String,
    attribute: String,
    follow_system: bool,
}

impl ThemeController {
    pub fn new(storage_key: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
            attribute: attribute.into(),
            follow_system: false,
        }
    }

    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self {
            follow_system: config.follow_system,
            ..Self::new(config.storage_key.clone(), config.attribute.clone())
        }
    }

    pub fn with_follow_system(mut self, follow_system: bool) -> Self {
        self.follow_system = follow_system;
        self
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    fn stored(&self, store: &impl PreferenceStore) -> Option<Theme> {
        match store.load(&self.storage_key) {
            Ok(value) => value.and_then(|v| v.parse().ok()),
            Err(err) => {
                log::debug!("theme preference unreadable, using default: {}", err);
                None
            }
        }
    }

    fn apply(&self, surface: &impl UiSurface, theme: Theme) {
        if let Err(err) = surface.set_root_attribute(&self.attribute, theme.as_str()) {
            log::warn!("failed to apply {} theme: {}", theme, err);
        }
    }

    /// Reads the persisted preference and applies it to the document root.
    pub fn initialize(&self, surface: &impl UiSurface, store: &impl PreferenceStore) -> Theme {
        let theme = self.stored(store).unwrap_or_else(|| {
            if self.follow_system && surface.prefers_dark() {
                Theme::Dark
            } else {
                Theme::default()
            }
        });
        self.apply(surface, theme);
        log::debug!("initial theme: {}", theme);
        theme
    }

    /// Flips the applied theme and persists the result. Persistence failures
    /// are logged; the document still switches.
    pub fn toggle(&self, surface: &impl UiSurface, store: &impl PreferenceStore) -> Theme {
        let applied = surface.root_attribute(&self.attribute);
        let next = Theme::next_after(applied.as_deref());
        self.apply(surface, next);
        if let Err(err) = store.save(&self.storage_key, next.as_str()) {
            log::warn!("theme preference not persisted: {}", err);
        }
        log::info!("theme switched to {}", next);
        next
    }

    pub fn current(&self, surface: &impl UiSurface) -> Theme {
        Theme::from_stored(surface.root_attribute(&self.attribute).as_deref())
    }
}
