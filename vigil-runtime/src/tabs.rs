//! Per-tab result store
//!
//! Holds the latest assessment per tab. Each navigation overwrites the
//! previous snapshot; closing a tab drops it.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;

use vigil_core::RiskAssessment;

/// Browser tab identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TabId(pub u32);

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Latest scored navigation for a tab
#[derive(Debug, Clone, Serialize)]
pub struct TabSnapshot {
    pub url: String,
    pub assessment: RiskAssessment,
    pub recorded_at: DateTime<Utc>,
}

/// Concurrent map of tab id to latest snapshot
#[derive(Debug, Default)]
pub struct TabRegistry {
    tabs: DashMap<TabId, TabSnapshot>,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self {
            tabs: DashMap::new(),
        }
    }

    /// Store the latest assessment for a tab, replacing any previous one
    pub fn record(&self, tab: TabId, assessment: RiskAssessment) {
        let snapshot = TabSnapshot {
            url: assessment.url.clone(),
            assessment,
            recorded_at: Utc::now(),
        };
        self.tabs.insert(tab, snapshot);
    }

    /// Latest snapshot for a tab
    pub fn latest(&self, tab: TabId) -> Option<TabSnapshot> {
        self.tabs.get(&tab).map(|entry| entry.value().clone())
    }

    /// Drop a closed tab's snapshot
    pub fn forget(&self, tab: TabId) {
        self.tabs.remove(&tab);
    }

    /// Number of tracked tabs
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_read_back() {
        let registry = TabRegistry::new();
        registry.record(TabId(1), RiskAssessment::safe("https://example.com/"));

        let snapshot = registry.latest(TabId(1)).unwrap();
        assert_eq!(snapshot.url, "https://example.com/");
        assert!(registry.latest(TabId(2)).is_none());
    }

    #[test]
    fn test_navigation_overwrites_snapshot() {
        let registry = TabRegistry::new();
        registry.record(TabId(1), RiskAssessment::safe("https://first.example/"));
        registry.record(TabId(1), RiskAssessment::safe("https://second.example/"));

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.latest(TabId(1)).unwrap().url,
            "https://second.example/"
        );
    }

    #[test]
    fn test_forget_closed_tab() {
        let registry = TabRegistry::new();
        registry.record(TabId(1), RiskAssessment::safe("https://example.com/"));
        registry.forget(TabId(1));

        assert!(registry.latest(TabId(1)).is_none());
        assert!(registry.is_empty());
    }
}
