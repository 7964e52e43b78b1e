//! Risk factor registry
//!
//! Every signal the scorer can attach to a URL comes from this fixed table:
//! remote threat verdicts and local hostname heuristics, each with a weight
//! and a display description.

use serde::{Deserialize, Serialize};

/// Categories of risk signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FactorKind {
    /// Remote verdict: known malware distribution
    Malware,
    /// Remote verdict: phishing / social engineering
    SocialEngineering,
    /// Remote verdict: unwanted software
    UnwantedSoftware,
    /// Remote verdict: potentially harmful application
    PotentiallyHarmfulApplication,
    /// Hostname matches suspicious patterns
    SuspiciousDomain,
    /// Connection is not HTTPS
    NoHttps,
    /// Recently registered domain (reserved, nothing produces it yet)
    NewDomain,
    /// Top-level domain with poor reputation
    SuspiciousTld,
}

impl FactorKind {
    /// Wire name, matching the remote API's threat type strings
    pub fn as_str(&self) -> &'static str {
        match self {
            FactorKind::Malware => "MALWARE",
            FactorKind::SocialEngineering => "SOCIAL_ENGINEERING",
            FactorKind::UnwantedSoftware => "UNWANTED_SOFTWARE",
            FactorKind::PotentiallyHarmfulApplication => "POTENTIALLY_HARMFUL_APPLICATION",
            FactorKind::SuspiciousDomain => "SUSPICIOUS_DOMAIN",
            FactorKind::NoHttps => "NO_HTTPS",
            FactorKind::NewDomain => "NEW_DOMAIN",
            FactorKind::SuspiciousTld => "SUSPICIOUS_TLD",
        }
    }
}

/// A weighted risk signal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskFactor {
    /// Signal category
    pub kind: FactorKind,
    /// Contribution to the risk score
    pub weight: u8,
    /// Human-readable description
    pub description: &'static str,
}

/// The fixed factor registry, one entry per kind
pub static RISK_FACTORS: &[RiskFactor] = &[
    RiskFactor {
        kind: FactorKind::Malware,
        weight: 10,
        description: "Malware detected",
    },
    RiskFactor {
        kind: FactorKind::SocialEngineering,
        weight: 8,
        description: "Phishing attempt detected",
    },
    RiskFactor {
        kind: FactorKind::UnwantedSoftware,
        weight: 6,
        description: "Unwanted software",
    },
    RiskFactor {
        kind: FactorKind::PotentiallyHarmfulApplication,
        weight: 7,
        description: "Potentially harmful application",
    },
    RiskFactor {
        kind: FactorKind::SuspiciousDomain,
        weight: 5,
        description: "Suspicious domain characteristics",
    },
    RiskFactor {
        kind: FactorKind::NoHttps,
        weight: 3,
        description: "Unencrypted connection",
    },
    RiskFactor {
        kind: FactorKind::NewDomain,
        weight: 4,
        description: "Recently registered domain",
    },
    RiskFactor {
        kind: FactorKind::SuspiciousTld,
        weight: 2,
        description: "Suspicious top-level domain",
    },
];

/// Remote threat kinds requested from the boundary API, in wire order
pub static REMOTE_THREAT_KINDS: &[FactorKind] = &[
    FactorKind::Malware,
    FactorKind::SocialEngineering,
    FactorKind::UnwantedSoftware,
    FactorKind::PotentiallyHarmfulApplication,
];

/// Look up the registry entry for a kind
pub fn factor(kind: FactorKind) -> RiskFactor {
    RISK_FACTORS
        .iter()
        .copied()
        .find(|f| f.kind == kind)
        .expect("registry covers every kind")
}

/// Map a provider threat type string to a registry kind.
///
/// `MALWARE` and any missing or unrecognized type map to [`FactorKind::Malware`].
pub fn classify_threat_type(threat_type: Option<&str>) -> FactorKind {
    match threat_type {
        Some("SOCIAL_ENGINEERING") => FactorKind::SocialEngineering,
        Some("UNWANTED_SOFTWARE") => FactorKind::UnwantedSoftware,
        Some("POTENTIALLY_HARMFUL_APPLICATION") => FactorKind::PotentiallyHarmfulApplication,
        _ => FactorKind::Malware,
    }
}
