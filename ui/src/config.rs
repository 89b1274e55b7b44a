//! Typed widget configuration and override merging.
//!
//! SYSTEM CONTEXT
//! ==============
//! Host pages may define `window.ERP_CHAT_CONFIG` before the integration
//! bootstrap runs. That object is decoded into [`ConfigOverrides`] and merged
//! over [`WidgetConfig::default`]. Unknown keys are ignored. A known key with
//! a bad value is dropped on its own, so one typo never discards the host's
//! `apiUrl`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_Z_INDEX: i32 = 10_000;

/// Errors raised while validating caller-supplied overrides.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("override object is not valid: {0}")]
    Malformed(String),
    #[error("{key}: {reason}")]
    InvalidField { key: String, reason: String },
    #[error("apiUrl must not be empty")]
    EmptyApiUrl,
    #[error("zIndex must be non-negative, got {0}")]
    NegativeZIndex(i32),
}

/// Screen corner the widget docks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    BottomRight,
    BottomLeft,
}

impl Position {
    /// CSS class applied to the widget root.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::BottomRight => "bottom-right",
            Self::BottomLeft => "bottom-left",
        }
    }
}

/// Visual theme; each ERP family gets its own gradient palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Professional,
    SapFiori,
    Oracle,
    Microsoft,
}

impl Theme {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::SapFiori => "sap-fiori",
            Self::Oracle => "oracle",
            Self::Microsoft => "microsoft",
        }
    }
}

/// Fully resolved widget configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Base URL of the chat backend; `/chat` is appended per request.
    pub api_url: String,
    pub position: Position,
    pub theme: Theme,
    /// Start collapsed when no persisted state exists.
    pub minimized: bool,
    pub z_index: i32,
    pub auto_init: bool,
    pub avoid_conflicts: bool,
    pub persist_across_pages: bool,
    #[serde(rename = "respectExistingUI")]
    pub respect_existing_ui: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            position: Position::BottomRight,
            theme: Theme::Professional,
            minimized: true,
            z_index: DEFAULT_Z_INDEX,
            auto_init: true,
            avoid_conflicts: true,
            persist_across_pages: true,
            respect_existing_ui: true,
        }
    }
}

/// Partial configuration supplied by the host page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub api_url: Option<String>,
    pub position: Option<Position>,
    pub theme: Option<Theme>,
    pub minimized: Option<bool>,
    pub z_index: Option<i32>,
    pub auto_init: Option<bool>,
    pub avoid_conflicts: Option<bool>,
    pub persist_across_pages: Option<bool>,
    pub respect_existing_ui: Option<bool>,
}

impl ConfigOverrides {
    /// Decode overrides from the JSON text of the host's global object.
    ///
    /// Each recognized key is decoded and validated on its own. Keys with a
    /// wrong type, an unknown enum variant or an out-of-range value are left
    /// unset and reported in the returned list; the remaining keys still
    /// apply. `null` counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] when `raw` is not a JSON object.
    pub fn from_json(raw: &str) -> Result<(Self, Vec<ConfigError>), ConfigError> {
        let map: Map<String, Value> = serde_json::from_str(raw).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        let mut overrides = Self::default();
        let mut rejected = Vec::new();

        for (key, value) in map {
            if value.is_null() {
                continue;
            }
            let applied = match key.as_str() {
                "apiUrl" => field::<String>(&key, value).and_then(|url| {
                    if url.trim().is_empty() {
                        return Err(ConfigError::EmptyApiUrl);
                    }
                    overrides.api_url = Some(url);
                    Ok(())
                }),
                "position" => field(&key, value).map(|v| overrides.position = Some(v)),
                "theme" => field(&key, value).map(|v| overrides.theme = Some(v)),
                "minimized" => field(&key, value).map(|v| overrides.minimized = Some(v)),
                "zIndex" => field::<i32>(&key, value).and_then(|z| {
                    if z < 0 {
                        return Err(ConfigError::NegativeZIndex(z));
                    }
                    overrides.z_index = Some(z);
                    Ok(())
                }),
                "autoInit" => field(&key, value).map(|v| overrides.auto_init = Some(v)),
                "avoidConflicts" => field(&key, value).map(|v| overrides.avoid_conflicts = Some(v)),
                "persistAcrossPages" => field(&key, value).map(|v| overrides.persist_across_pages = Some(v)),
                "respectExistingUI" => field(&key, value).map(|v| overrides.respect_existing_ui = Some(v)),
                _ => Ok(()),
            };
            if let Err(e) = applied {
                rejected.push(e);
            }
        }
        Ok((overrides, rejected))
    }
}

fn field<T: DeserializeOwned>(key: &str, value: Value) -> Result<T, ConfigError> {
    serde_json::from_value(value).map_err(|e| ConfigError::InvalidField { key: key.to_owned(), reason: e.to_string() })
}

impl WidgetConfig {
    /// Merge `overrides` over the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when the merged values fail validation.
    pub fn from_overrides(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        Self::default().merge(overrides)
    }

    /// Merge `overrides` over `self`, validating the result.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty `apiUrl` or a negative `zIndex`.
    pub fn merge(self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let merged = Self {
            api_url: overrides.api_url.unwrap_or(self.api_url),
            position: overrides.position.unwrap_or(self.position),
            theme: overrides.theme.unwrap_or(self.theme),
            minimized: overrides.minimized.unwrap_or(self.minimized),
            z_index: overrides.z_index.unwrap_or(self.z_index),
            auto_init: overrides.auto_init.unwrap_or(self.auto_init),
            avoid_conflicts: overrides.avoid_conflicts.unwrap_or(self.avoid_conflicts),
            persist_across_pages: overrides.persist_across_pages.unwrap_or(self.persist_across_pages),
            respect_existing_ui: overrides.respect_existing_ui.unwrap_or(self.respect_existing_ui),
        };
        merged.validate()?;
        Ok(merged)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::EmptyApiUrl);
        }
        if self.z_index < 0 {
            return Err(ConfigError::NegativeZIndex(self.z_index));
        }
        Ok(())
    }

    /// Chat endpoint derived from `api_url`.
    pub fn chat_endpoint(&self) -> String {
        format!("{}/chat", self.api_url.trim_end_matches('/'))
    }
}
