//! Risk scorer
//!
//! Combines remote threat verdicts with local heuristics into a bounded
//! score. Factor order is fixed: remote matches in response order, then
//! NO_HTTPS, SUSPICIOUS_DOMAIN, SUSPICIOUS_TLD.

use chrono::Utc;
use tracing::{debug, warn};
use url::Url;

use vigil_core::{
    factor, has_suspicious_tld, is_suspicious_hostname, is_unencrypted, FactorKind,
    RiskAssessment, RiskFactor, RiskTier, MAX_SCORE,
};
use vigil_intel::SharedIntel;

/// Scores URLs by combining remote intelligence with local heuristics
pub struct RiskScorer {
    intel: SharedIntel,
}

impl RiskScorer {
    pub fn new(intel: SharedIntel) -> Self {
        Self { intel }
    }

    /// Assess a single URL.
    ///
    /// A URL that cannot be parsed scores zero with no factors; that is
    /// the only input the scorer refuses to evaluate, and it swallows the
    /// parse error rather than propagating it.
    pub async fn score(&self, url: &str) -> RiskAssessment {
        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Unparseable URL {:?}, scoring as safe: {}", url, e);
                return RiskAssessment::safe(url);
            }
        };

        let lookup = self.intel.lookup(url).await;
        let mut factors: Vec<RiskFactor> = lookup.factors;

        if is_unencrypted(&parsed) {
            factors.push(factor(FactorKind::NoHttps));
        }

        // A URL without a host contributes no hostname-based risk
        if let Some(host) = parsed.host_str() {
            if is_suspicious_hostname(host) {
                factors.push(factor(FactorKind::SuspiciousDomain));
            }
            if has_suspicious_tld(host) {
                factors.push(factor(FactorKind::SuspiciousTld));
            }
        }

        let total: f64 = factors.iter().map(|f| f.weight as f64).sum();
        let score = total.min(MAX_SCORE);
        let tier = RiskTier::from_score(score);

        debug!("Scored {} -> {:.1} ({})", url, score, tier);

        RiskAssessment {
            url: url.to_string(),
            score,
            tier,
            factors,
            raw_matches: lookup.raw,
            assessed_at: Utc::now(),
        }
    }

    /// Assess a batch with bounded concurrency, preserving input order
    pub async fn score_all(&self, urls: &[String], max_concurrent: usize) -> Vec<RiskAssessment> {
        use futures::stream::{self, StreamExt};

        stream::iter(urls)
            .map(|url| self.score(url))
            .buffered(max_concurrent.max(1))
            .collect()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use vigil_intel::{LookupResult, ThreatIntel, ThreatMatch};

    /// Canned-response intel that counts lookups
    struct StubIntel {
        matches: Vec<ThreatMatch>,
        calls: AtomicUsize,
    }

    impl StubIntel {
        fn clean() -> Arc<Self> {
            Self::with_threats(&[])
        }

        fn with_threats(types: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                matches: types
                    .iter()
                    .map(|t| ThreatMatch {
                        threat_type: Some(t.to_string()),
                        platform_type: None,
                        threat_entry_type: None,
                        threat: None,
                    })
                    .collect(),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl ThreatIntel for StubIntel {
        async fn lookup(&self, _url: &str) -> LookupResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            LookupResult::from_matches(&self.matches)
        }
    }

    #[tokio::test]
    async fn test_clean_https_scores_zero() {
        let scorer = RiskScorer::new(StubIntel::clean());
        let assessment = scorer.score("https://example.com/").await;

        assert_eq!(assessment.score, 0.0);
        assert_eq!(assessment.tier, RiskTier::Safe);
        assert!(assessment.factors.is_empty());
    }

    #[tokio::test]
    async fn test_http_ip_host_scores_high() {
        let scorer = RiskScorer::new(StubIntel::clean());
        let assessment = scorer.score("http://192.168.1.1").await;

        let kinds: Vec<_> = assessment.factors.iter().map(|f| f.kind).collect();
        assert_eq!(kinds, vec![FactorKind::NoHttps, FactorKind::SuspiciousDomain]);
        assert_eq!(assessment.score, 8.0);
        assert_eq!(assessment.tier, RiskTier::High);
    }

    #[tokio::test]
    async fn test_http_suspicious_tld_is_medium() {
        let scorer = RiskScorer::new(StubIntel::clean());
        let assessment = scorer.score("http://example.tk/").await;

        assert_eq!(assessment.score, 5.0);
        assert_eq!(assessment.tier, RiskTier::Medium);
    }

    #[tokio::test]
    async fn test_factor_order_remote_then_heuristics() {
        let scorer = RiskScorer::new(StubIntel::with_threats(&["SOCIAL_ENGINEERING"]));
        let assessment = scorer.score("http://secure-paypal.example.tk/").await;

        let kinds: Vec<_> = assessment.factors.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                FactorKind::SocialEngineering,
                FactorKind::NoHttps,
                FactorKind::SuspiciousDomain,
                FactorKind::SuspiciousTld,
            ]
        );
        assert_eq!(assessment.score, 10.0);
        assert_eq!(assessment.tier, RiskTier::High);
    }

    #[tokio::test]
    async fn test_malware_verdict_alone_is_high() {
        let scorer = RiskScorer::new(StubIntel::with_threats(&["MALWARE"]));
        let assessment = scorer.score("https://example.com/").await;

        assert_eq!(assessment.score, 10.0);
        assert_eq!(assessment.tier, RiskTier::High);
    }

    #[tokio::test]
    async fn test_duplicate_verdicts_keep_duplicate_factors() {
        let scorer =
            RiskScorer::new(StubIntel::with_threats(&["UNWANTED_SOFTWARE", "UNWANTED_SOFTWARE"]));
        let assessment = scorer.score("https://example.com/").await;

        assert_eq!(assessment.factors.len(), 2);
        assert_eq!(assessment.score, 10.0);
    }

    #[tokio::test]
    async fn test_unparseable_url_skips_lookup() {
        let stub = StubIntel::clean();
        let scorer = RiskScorer::new(stub.clone());
        let assessment = scorer.score("not a url").await;

        assert_eq!(assessment.score, 0.0);
        assert_eq!(assessment.tier, RiskTier::Safe);
        assert!(assessment.factors.is_empty());
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_score_all_preserves_order() {
        let scorer = RiskScorer::new(StubIntel::clean());
        let urls = vec![
            "https://one.example/".to_string(),
            "http://two.example/".to_string(),
            "https://three.example/".to_string(),
        ];

        let assessments = scorer.score_all(&urls, 2).await;
        let back: Vec<_> = assessments.iter().map(|a| a.url.as_str()).collect();
        assert_eq!(
            back,
            vec![
                "https://one.example/",
                "http://two.example/",
                "https://three.example/"
            ]
        );
        assert_eq!(assessments[1].score, 3.0);
    }
}
