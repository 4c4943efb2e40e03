//! App Configuration
//!
//! Remote endpoint settings, persisted in `localStorage` so a user can point
//! the table at another collection without rebuilding.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// `localStorage` key holding the JSON config
pub const STORAGE_KEY: &str = "objects-table.config";

const DEFAULT_API_BASE: &str = "https://api.restful-api.dev";

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub collection: String,
    /// How long the status line stays visible
    pub status_timeout_ms: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("OBJECTS_API_BASE")
                .unwrap_or(DEFAULT_API_BASE)
                .to_string(),
            collection: "objects".to_string(),
            status_timeout_ms: 3000,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// `{base}/{collection}`
    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            self.collection.trim_matches('/')
        )
    }

    /// `{base}/{collection}/{id}` with the id escaped as one segment
    pub fn record_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), utf8_percent_encode(id, SEGMENT))
    }

    /// Parse stored JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Config from the stored value; nothing stored means defaults
    pub fn from_stored(stored: Option<&str>) -> Result<Self, ConfigError> {
        stored.map_or_else(|| Ok(Self::default()), Self::from_json)
    }

    /// Load from `localStorage`. A missing store or key gives defaults;
    /// unparseable JSON is an error so the caller can log it.
    pub fn load() -> Result<Self, ConfigError> {
        let stored = local_storage().and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        Self::from_stored(stored.as_deref())
    }

    /// Persist to `localStorage`
    pub fn save(&self) -> Result<(), ConfigError> {
        let storage = local_storage().ok_or(ConfigError::StorageUnavailable)?;
        let json = self.to_json()?;
        storage
            .set_item(STORAGE_KEY, &json)
            .map_err(|e| ConfigError::Storage(format!("{:?}", e)))
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
