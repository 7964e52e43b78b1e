//! Score-to-tier classification

use serde::{Deserialize, Serialize};

use crate::{BLOCK_THRESHOLD, LOW_THRESHOLD, WARN_THRESHOLD};

/// Risk tier for a scored URL, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Safe,
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Classify a score into a tier
    pub fn from_score(score: f64) -> Self {
        if score >= BLOCK_THRESHOLD {
            RiskTier::High
        } else if score >= WARN_THRESHOLD {
            RiskTier::Medium
        } else if score >= LOW_THRESHOLD {
            RiskTier::Low
        } else {
            RiskTier::Safe
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Safe => "Secure",
            RiskTier::Low => "Low Risk",
            RiskTier::Medium => "Medium Risk",
            RiskTier::High => "High Risk",
        }
    }

    /// Badge glyph
    pub fn glyph(&self) -> &'static str {
        match self {
            RiskTier::Safe => "✓",
            RiskTier::Low => "?",
            RiskTier::Medium => "!",
            RiskTier::High => "⚠",
        }
    }

    /// Badge background color
    pub fn badge_color(&self) -> &'static str {
        match self {
            RiskTier::Safe => "#44AA44",
            RiskTier::Low => "#FFAA00",
            RiskTier::Medium => "#FF8800",
            RiskTier::High => "#FF4444",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(RiskTier::from_score(0.0), RiskTier::Safe);
        assert_eq!(RiskTier::from_score(1.9), RiskTier::Safe);
        assert_eq!(RiskTier::from_score(2.0), RiskTier::Low);
        assert_eq!(RiskTier::from_score(4.9), RiskTier::Low);
        assert_eq!(RiskTier::from_score(5.0), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(7.999), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(8.0), RiskTier::High);
        assert_eq!(RiskTier::from_score(10.0), RiskTier::High);
    }

    #[test]
    fn test_tier_ordering() {
        assert!(RiskTier::High > RiskTier::Medium);
        assert!(RiskTier::Medium > RiskTier::Low);
        assert!(RiskTier::Low > RiskTier::Safe);
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(RiskTier::Safe.to_string(), "Secure");
        assert_eq!(RiskTier::High.to_string(), "High Risk");
    }

    #[test]
    fn test_badge_vocabulary() {
        assert_eq!(RiskTier::High.glyph(), "⚠");
        assert_eq!(RiskTier::Safe.glyph(), "✓");
        assert_eq!(RiskTier::High.badge_color(), "#FF4444");
        assert_eq!(RiskTier::Safe.badge_color(), "#44AA44");
    }
}
