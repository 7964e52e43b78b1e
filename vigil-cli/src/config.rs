//! CLI configuration file
//!
//! Optional TOML file with `[settings]` and `[intel]` sections. Every
//! field has a default, so a partial file works and command-line flags
//! still override what it sets.

use serde::Deserialize;
use std::path::Path;

use vigil_core::Settings;
use vigil_intel::{IntelConfig, DEFAULT_ENDPOINT};

/// Parsed configuration file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub intel: IntelSection,
}

/// The `[intel]` section
#[derive(Debug, Clone, Deserialize)]
pub struct IntelSection {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: i64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_cache_ttl_secs() -> i64 {
    vigil_core::CACHE_TTL_SECS
}

impl Default for IntelSection {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

impl IntelSection {
    /// Fold the section into a lookup config
    pub fn into_config(self) -> IntelConfig {
        IntelConfig {
            endpoint: self.endpoint,
            api_key: self.api_key,
            timeout_secs: self.timeout_secs,
            cache_ttl_secs: self.cache_ttl_secs,
            ..IntelConfig::default()
        }
    }
}

impl FileConfig {
    /// Load a TOML configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }
}
