//! Navigation pipeline
//!
//! One entry point per navigation: score the URL, remember the result
//! for the tab, drive the badge, then apply the decision policy. The
//! pipeline owns the per-tab store and the activity log; callers read
//! both through it.

use chrono::Utc;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use vigil_analysis::{decide, Action, RiskScorer};
use vigil_core::{ActivityLog, ActivityRecord, Settings};
use vigil_intel::SharedIntel;

use crate::{
    interstitial_url, SharedBadge, SharedRedirect, SharedWarning, TabId, TabRegistry, TabSnapshot,
};

/// Display collaborators and the interstitial base URL
pub struct PipelineConfig {
    pub badge: SharedBadge,
    pub warning: SharedWarning,
    pub redirect: SharedRedirect,
    pub interstitial: String,
}

/// Scores navigations and applies the decision policy
pub struct Pipeline {
    scorer: RiskScorer,
    intel: SharedIntel,
    tabs: TabRegistry,
    activity: RwLock<ActivityLog>,
    badge: SharedBadge,
    warning: SharedWarning,
    redirect: SharedRedirect,
    interstitial: String,
}

impl Pipeline {
    pub fn new(intel: SharedIntel, config: PipelineConfig) -> Self {
        Self {
            scorer: RiskScorer::new(intel.clone()),
            intel,
            tabs: TabRegistry::new(),
            activity: RwLock::new(ActivityLog::new()),
            badge: config.badge,
            warning: config.warning,
            redirect: config.redirect,
            interstitial: config.interstitial,
        }
    }

    /// Handle a completed navigation in `tab`.
    ///
    /// Returns `None` when protection is disabled; the URL is then never
    /// scored and no collaborator is touched. Otherwise returns the
    /// reported outcome of the decision policy.
    pub async fn handle_navigation(
        &self,
        tab: TabId,
        url: &str,
        settings: &Settings,
    ) -> Option<Action> {
        if !settings.enabled {
            debug!("Protection disabled, ignoring {}", url);
            return None;
        }

        let assessment = self.scorer.score(url).await;
        info!(
            "Tab {}: {} scored {:.1} ({})",
            tab,
            assessment.display_url(),
            assessment.score,
            assessment.tier
        );

        self.tabs.record(tab, assessment.clone());
        self.badge.update(tab, assessment.tier);

        let decision = decide(&assessment, settings);
        match decision.action {
            Action::Block => {
                let target =
                    interstitial_url(&self.interstitial, &assessment.url, assessment.score);
                warn!("Blocking tab {}: {}", tab, assessment.url);
                self.redirect.redirect(tab, &target);
            }
            Action::Warn => {
                if let Err(e) = self.warning.deliver(tab, &assessment).await {
                    debug!("Warning delivery to tab {} failed: {}", tab, e);
                }
            }
            Action::None | Action::Log => {}
        }

        if decision.record {
            self.activity
                .write()
                .append(ActivityRecord::from_assessment(&assessment, Utc::now()));
        }

        Some(decision.outcome())
    }

    /// Latest assessment recorded for `tab`
    pub fn risk_data(&self, tab: TabId) -> Option<TabSnapshot> {
        self.tabs.latest(tab)
    }

    /// Drop the snapshot for a closed tab
    pub fn tab_closed(&self, tab: TabId) {
        self.tabs.forget(tab);
        debug!("Forgot tab {}", tab);
    }

    /// Activity records, oldest first
    pub fn activity(&self) -> Vec<ActivityRecord> {
        self.activity.read().records().cloned().collect()
    }

    pub fn clear_activity(&self) {
        self.activity.write().clear();
    }

    /// Evict expired lookup cache entries, returning how many were dropped
    pub fn sweep_intel(&self) -> usize {
        self.intel.sweep()
    }
}
