//! Risk assessment records and display helpers

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::{RiskFactor, RiskTier, BLOCK_THRESHOLD};

/// Longest URL rendered in logs and console output before truncation
const DISPLAY_URL_MAX: usize = 35;

/// The scored outcome of a single URL check
#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    /// The URL exactly as it was checked
    pub url: String,
    /// Total risk score, 0.0 to 10.0
    pub score: f64,
    /// Tier derived from the score
    pub tier: RiskTier,
    /// Contributing signals in detection order
    pub factors: Vec<RiskFactor>,
    /// Raw provider verdicts, kept opaque
    pub raw_matches: Value,
    /// When the assessment was made
    pub assessed_at: DateTime<Utc>,
}

impl RiskAssessment {
    /// Zero-risk assessment, used when the URL cannot be parsed
    pub fn safe(url: &str) -> Self {
        Self {
            url: url.to_string(),
            score: 0.0,
            tier: RiskTier::Safe,
            factors: Vec::new(),
            raw_matches: Value::Null,
            assessed_at: Utc::now(),
        }
    }

    /// Whether the score reaches the block threshold
    pub fn is_blockable(&self) -> bool {
        self.score >= BLOCK_THRESHOLD
    }

    /// Short display form of the URL
    pub fn display_url(&self) -> String {
        truncate_url(&self.url)
    }
}

/// Shorten a URL for log and console output: host plus path, capped at
/// [`DISPLAY_URL_MAX`] characters. Unparseable input is truncated as-is.
pub fn truncate_url(url: &str) -> String {
    let display = match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => {
                if parsed.path() == "/" {
                    host.to_string()
                } else {
                    format!("{}{}", host, parsed.path())
                }
            }
            None => url.to_string(),
        },
        Err(_) => url.to_string(),
    };

    if display.chars().count() > DISPLAY_URL_MAX {
        let mut shortened: String = display.chars().take(DISPLAY_URL_MAX).collect();
        shortened.push_str("...");
        shortened
    } else {
        display
    }
}

/// Relative age label for scan freshness ("3h ago", "5m ago", "Just now")
pub fn relative_age(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;

    if hours > 0 {
        format!("{}h ago", hours)
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else if seconds > 30 {
        format!("{}s ago", seconds)
    } else {
        "Just now".to_string()
    }
}
