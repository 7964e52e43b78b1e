//! Threat lookup configuration

use std::time::Duration;
use thiserror::Error;

/// Default threat match endpoint
pub const DEFAULT_ENDPOINT: &str = "https://safebrowsing.googleapis.com/v4/threatMatches:find";

/// Client id reported to the provider
pub const CLIENT_ID: &str = "vigil";

/// Threat lookup configuration
#[derive(Debug, Clone)]
pub struct IntelConfig {
    /// Threat match endpoint
    pub endpoint: String,
    /// Provider API key; without one, remote lookups are skipped
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Cache TTL in seconds
    pub cache_ttl_secs: i64,
    /// Client id sent in the request body
    pub client_id: String,
    /// Client version sent in the request body
    pub client_version: String,
}

impl Default for IntelConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            timeout_secs: 10,
            cache_ttl_secs: vigil_core::CACHE_TTL_SECS,
            client_id: CLIENT_ID.to_string(),
            client_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl IntelConfig {
    /// Config with an API key set
    pub fn with_key(api_key: &str) -> Self {
        Self {
            api_key: Some(api_key.to_string()),
            ..Default::default()
        }
    }

    /// Whether remote lookups can be attempted
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}

/// Errors from the threat lookup boundary.
///
/// These classify failures for logging; the lookup itself degrades to an
/// empty result and never surfaces them to callers.
#[derive(Debug, Error)]
pub enum IntelError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Provider returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Malformed response body: {0}")]
    Decode(String),
}

/// Create the HTTP client used for lookups
pub fn create_http_client(config: &IntelConfig) -> Result<reqwest::Client, IntelError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| IntelError::ClientBuild(e.to_string()))
}
