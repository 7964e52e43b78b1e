//! Display collaborators
//!
//! The pipeline drives presentation through these capability traits.
//! Badge and redirect calls are fire-and-forget; warning delivery is
//! best-effort and its failures are swallowed by the caller.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use vigil_core::{RiskAssessment, RiskTier};

use crate::TabId;

/// Warning delivery failure; logged by the pipeline, never propagated
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("No receiver in tab {0}")]
    NoReceiver(TabId),

    #[error("Delivery failed: {0}")]
    Failed(String),
}

/// Shows the current risk tier for a tab
pub trait BadgeSink: Send + Sync {
    fn update(&self, tab: TabId, tier: RiskTier);
}

/// Delivers a warning into the page context
#[async_trait]
pub trait WarningSink: Send + Sync {
    async fn deliver(&self, tab: TabId, assessment: &RiskAssessment)
        -> Result<(), DeliveryError>;
}

/// Redirects a tab to the interstitial page
pub trait Redirector: Send + Sync {
    fn redirect(&self, tab: TabId, target: &str);
}

pub type SharedBadge = Arc<dyn BadgeSink>;
pub type SharedWarning = Arc<dyn WarningSink>;
pub type SharedRedirect = Arc<dyn Redirector>;

/// Default interstitial page for blocked navigations
pub const DEFAULT_INTERSTITIAL: &str = "vigil://warning";

/// Compose the interstitial URL carrying the blocked URL and its score
pub fn interstitial_url(base: &str, blocked_url: &str, score: f64) -> String {
    format!(
        "{}?blocked_url={}&score={}",
        base,
        urlencoding::encode(blocked_url),
        score
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interstitial_url_encodes_blocked_url() {
        let target = interstitial_url(
            DEFAULT_INTERSTITIAL,
            "http://bad.example/path?q=1",
            10.0,
        );
        assert_eq!(
            target,
            "vigil://warning?blocked_url=http%3A%2F%2Fbad.example%2Fpath%3Fq%3D1&score=10"
        );
    }

    #[test]
    fn test_interstitial_url_fractional_score() {
        let target = interstitial_url("vigil://warning", "http://x.example/", 7.5);
        assert!(target.ends_with("&score=7.5"));
    }
}
