//! Per-invocation behavior switches

use serde::{Deserialize, Serialize};

/// Behavior switches injected into every pipeline invocation.
///
/// Every field defaults to `true`; a missing field in a config source
/// means the feature stays on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Master switch; when false the pipeline does nothing at all
    #[serde(default = "default_on")]
    pub enabled: bool,
    /// Redirect-block navigations at or above the block threshold
    #[serde(default = "default_on")]
    pub block_malicious: bool,
    /// Deliver warnings at or above the warn threshold
    #[serde(default = "default_on")]
    pub show_warnings: bool,
    /// Append an activity record for every scored navigation
    #[serde(default = "default_on")]
    pub log_activity: bool,
}

fn default_on() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            block_malicious: true,
            show_warnings: true,
            log_activity: true,
        }
    }
}
