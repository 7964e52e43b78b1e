//! TTL-cached threat lookups
//!
//! The lookup never fails: transport errors, bad statuses, and malformed
//! bodies all degrade to an empty result so scoring can proceed on local
//! signals alone. Successful responses are cached by exact URL string,
//! including "no matches" responses.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use vigil_core::{classify_threat_type, factor, RiskFactor, TtlCache};

use crate::{
    create_http_client, IntelConfig, IntelError, LookupRequest, LookupResponse, ThreatMatch,
};

/// Outcome of a threat lookup
#[derive(Debug, Clone)]
pub struct LookupResult {
    /// One factor per provider match, in response order
    pub factors: Vec<RiskFactor>,
    /// Raw matches as reported by the provider
    pub raw: Value,
}

impl LookupResult {
    /// Result carrying no provider verdicts
    pub fn empty() -> Self {
        Self {
            factors: Vec::new(),
            raw: Value::Array(Vec::new()),
        }
    }

    /// Map provider matches into weighted factors
    pub fn from_matches(matches: &[ThreatMatch]) -> Self {
        let factors = matches
            .iter()
            .map(|m| factor(classify_threat_type(m.threat_type.as_deref())))
            .collect();
        let raw = serde_json::to_value(matches).unwrap_or(Value::Array(Vec::new()));
        Self { factors, raw }
    }
}

/// Boundary trait for threat intelligence lookups
#[async_trait]
pub trait ThreatIntel: Send + Sync {
    /// Look up provider verdicts for a URL.
    ///
    /// Implementations must not fail; missing intelligence reads as an
    /// empty result.
    async fn lookup(&self, url: &str) -> LookupResult;

    /// Drop expired cached intelligence; returns the removed count.
    /// Backends without a cache have nothing to do.
    fn sweep(&self) -> usize {
        0
    }
}

/// Thread-safe reference to a threat intelligence backend
pub type SharedIntel = Arc<dyn ThreatIntel>;

/// Caching threat lookup client
pub struct ThreatLookup {
    http: reqwest::Client,
    cache: RwLock<TtlCache<String, Vec<ThreatMatch>>>,
    config: IntelConfig,
}

impl ThreatLookup {
    /// Build a client from config
    pub fn new(config: IntelConfig) -> Result<Self, IntelError> {
        let http = create_http_client(&config)?;
        let cache = RwLock::new(TtlCache::new(config.cache_ttl_secs));
        Ok(Self { http, cache, config })
    }

    /// Build a client behind the shared trait handle
    pub fn shared(config: IntelConfig) -> Result<SharedIntel, IntelError> {
        Ok(Arc::new(Self::new(config)?))
    }

    /// Drop expired cache entries; returns the removed count
    pub fn sweep_cache(&self) -> usize {
        let mut cache = self.cache.write();
        let removed = cache.sweep(Utc::now());
        debug!(
            "Lookup cache sweep removed {} entries, {} remain",
            removed,
            cache.len()
        );
        removed
    }

    /// Stored cache entries, including expired ones awaiting a sweep
    pub fn cache_len(&self) -> usize {
        self.cache.read().len()
    }

    async fn fetch_matches(&self, url: &str) -> Result<Vec<ThreatMatch>, IntelError> {
        let key = self.config.api_key.as_deref().unwrap_or_default();
        let request =
            LookupRequest::for_url(url, &self.config.client_id, &self.config.client_version);

        let response = self
            .http
            .post(&self.config.endpoint)
            .query(&[("key", key)])
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(IntelError::Status(response.status()));
        }

        let body: LookupResponse = response
            .json()
            .await
            .map_err(|e| IntelError::Decode(e.to_string()))?;

        Ok(body.matches)
    }
}

#[async_trait]
impl ThreatIntel for ThreatLookup {
    async fn lookup(&self, url: &str) -> LookupResult {
        if !self.config.is_configured() {
            debug!("No API key configured, skipping remote lookup");
            return LookupResult::empty();
        }

        if let Some(matches) = self.cache.read().get(url, Utc::now()) {
            debug!("Lookup cache hit for {}", url);
            return LookupResult::from_matches(&matches);
        }

        match self.fetch_matches(url).await {
            Ok(matches) => {
                self.cache
                    .write()
                    .insert(url.to_string(), matches.clone(), Utc::now());
                LookupResult::from_matches(&matches)
            }
            Err(e) => {
                warn!("Threat lookup for {} failed, reading as clean: {}", url, e);
                LookupResult::empty()
            }
        }
    }

    fn sweep(&self) -> usize {
        self.sweep_cache()
    }
}
