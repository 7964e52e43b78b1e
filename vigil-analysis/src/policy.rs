//! Decision policy
//!
//! Maps an assessment plus settings to the action the runtime takes.
//! Score bands are checked first and the toggle inside the band second,
//! so a blockable score with blocking disabled stays at NONE instead of
//! falling through to a warning.

use serde::Serialize;

use vigil_core::{RiskAssessment, Settings, BLOCK_THRESHOLD, WARN_THRESHOLD};

/// Enforcement action for a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// No intervention
    None,
    /// Only an activity record was produced
    Log,
    /// Deliver a warning; the navigation proceeds
    Warn,
    /// Redirect to the interstitial
    Block,
}

/// Outcome of the decision policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Intervention to apply
    pub action: Action,
    /// Whether to append an activity record
    pub record: bool,
}

impl Decision {
    /// Reported outcome: [`Action::Log`] stands in for `None` when the
    /// only effect was an activity record
    pub fn outcome(&self) -> Action {
        match self.action {
            Action::None if self.record => Action::Log,
            action => action,
        }
    }
}

/// Decide what to do about a scored navigation.
///
/// Disabled settings produce no action and no record. The record flag is
/// independent of the action: it fires for every scored navigation when
/// `log_activity` is on, whatever the tier.
pub fn decide(assessment: &RiskAssessment, settings: &Settings) -> Decision {
    if !settings.enabled {
        return Decision {
            action: Action::None,
            record: false,
        };
    }

    let action = if assessment.score >= BLOCK_THRESHOLD {
        if settings.block_malicious {
            Action::Block
        } else {
            Action::None
        }
    } else if assessment.score >= WARN_THRESHOLD {
        if settings.show_warnings {
            Action::Warn
        } else {
            Action::None
        }
    } else {
        Action::None
    };

    Decision {
        action,
        record: settings.log_activity,
    }
}
