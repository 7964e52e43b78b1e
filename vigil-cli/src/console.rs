//! Terminal display collaborators
//!
//! Stand-ins for the browser surfaces: the badge becomes a status line,
//! the warning overlay a printed notice, the redirect a printed
//! interstitial target.

use async_trait::async_trait;

use vigil_core::{RiskAssessment, RiskTier};
use vigil_runtime::{BadgeSink, DeliveryError, Redirector, TabId, WarningSink};

/// Badge rendered as a status line
pub struct ConsoleBadge;

impl BadgeSink for ConsoleBadge {
    fn update(&self, tab: TabId, tier: RiskTier) {
        println!("[tab {}] {} {}", tab, tier.glyph(), tier.label());
    }
}

/// Warning overlay rendered as a printed notice
pub struct ConsoleWarning;

#[async_trait]
impl WarningSink for ConsoleWarning {
    async fn deliver(&self, tab: TabId, assessment: &RiskAssessment) -> Result<(), DeliveryError> {
        println!(
            "⚠️  [tab {}] {} scored {:.1}/10",
            tab,
            assessment.display_url(),
            assessment.score
        );
        for factor in &assessment.factors {
            println!("    - {}", factor.description);
        }
        Ok(())
    }
}

/// Redirect rendered as the interstitial target
pub struct ConsoleRedirect;

impl Redirector for ConsoleRedirect {
    fn redirect(&self, tab: TabId, target: &str) {
        println!("⛔ [tab {}] redirected to {}", tab, target);
    }
}
