use crate::error::ConfigError;
use crate::palette::ColorPalette;
use serde::{Deserialize, Serialize};
use std::fs;

pub const DEFAULT_BASE_URL: &str = "https://quickchart.io";

/// Settings shared by every formula in a pack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PackConfig {
    /// Scheme and host of the rendering service, without a trailing slash.
    pub base_url: String,
    /// Colors handed out to node groups by the graph formula.
    pub palette: ColorPalette,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            palette: ColorPalette::default(),
        }
    }
}

impl PackConfig {
    /// Load a config from a JSON file. Missing fields keep their defaults.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(json)?;
        config.base_url = normalize_base_url(&config.base_url);
        Ok(config)
    }

    /// Full URL of a service endpoint, e.g. `endpoint("qr?")`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

pub(crate) fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
