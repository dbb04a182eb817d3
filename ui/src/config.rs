//! Site-wide tunables. Every field has a default matching the shipped page, so
//! a config file only needs to list the values it overrides.

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Language used when neither storage nor the browser yields a supported one.
    pub default_language: Language,
    /// When set, dictionaries are fetched from `{base}/{code}.json` instead of
    /// the copies embedded in the binary.
    pub dictionary_base_url: Option<String>,
    pub storage_keys: StorageKeys,
    pub submit_delay_ms: u64,
    pub toast_duration_ms: u64,
    pub captcha_length: usize,
    pub resize_debounce_ms: u64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub fab_base_offset_px: f64,
    pub tilt_max_degrees: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub theme: String,
    pub language: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            theme: "theme".into(),
            language: "language".into(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_language: Language::En,
            dictionary_base_url: None,
            storage_keys: StorageKeys::default(),
            submit_delay_ms: 650,
            toast_duration_ms: 4000,
            captcha_length: 6,
            resize_debounce_ms: 150,
            reveal_threshold: 0.16,
            reveal_root_margin: "0px 0px -10% 0px".into(),
            fab_base_offset_px: 24.0,
            tilt_max_degrees: 6.0,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse `raw`, falling back to defaults (with a warning) when it is malformed.
    pub fn from_json_or_default(raw: &str) -> Self {
        Self::from_json(raw).unwrap_or_else(|err| {
            tracing::warn!("[config] {err}; using defaults");
            Self::default()
        })
    }
}
