//! Long-running protection service
//!
//! Consumes navigation events from a channel and feeds them through the
//! pipeline, sweeping the lookup cache on a fixed interval. Each
//! navigation scores on its own task, so one slow lookup never delays
//! the next event. The loop stops when the event channel closes, after
//! in-flight scores finish.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, info};

use vigil_core::{Settings, SWEEP_INTERVAL_SECS};

use crate::{Pipeline, TabId};

/// Browser-side events the service reacts to
#[derive(Debug, Clone)]
pub enum NavigationEvent {
    /// A top-level navigation finished loading
    Navigated { tab: TabId, url: String },
    /// The tab went away
    TabClosed { tab: TabId },
}

/// Service configuration
pub struct ServiceConfig {
    /// Settings applied to every navigation
    pub settings: Settings,
    /// Seconds between lookup cache sweeps
    pub sweep_interval_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            sweep_interval_secs: SWEEP_INTERVAL_SECS,
        }
    }
}

/// Drives the pipeline from a navigation event stream
pub struct Service {
    pipeline: Arc<Pipeline>,
    config: ServiceConfig,
}

impl Service {
    pub fn new(pipeline: Arc<Pipeline>, config: ServiceConfig) -> Self {
        Self { pipeline, config }
    }

    /// Run until the event channel closes
    pub async fn run(
        self,
        mut events: mpsc::Receiver<NavigationEvent>,
    ) -> Result<(), anyhow::Error> {
        let mut sweeper = interval(Duration::from_secs(self.config.sweep_interval_secs.max(1)));
        // The first tick completes immediately
        sweeper.tick().await;

        info!(
            "Service started, sweeping lookup cache every {}s",
            self.config.sweep_interval_secs
        );

        let mut in_flight: Vec<JoinHandle<()>> = Vec::new();

        loop {
            tokio::select! {
                maybe_event = events.recv() => {
                    match maybe_event {
                        Some(NavigationEvent::Navigated { tab, url }) => {
                            let pipeline = self.pipeline.clone();
                            let settings = self.config.settings;
                            in_flight.retain(|task| !task.is_finished());
                            in_flight.push(tokio::spawn(async move {
                                pipeline.handle_navigation(tab, &url, &settings).await;
                            }));
                        }
                        Some(NavigationEvent::TabClosed { tab }) => {
                            self.pipeline.tab_closed(tab);
                        }
                        None => {
                            info!("Event channel closed, stopping");
                            break;
                        }
                    }
                }
                _ = sweeper.tick() => {
                    let evicted = self.pipeline.sweep_intel();
                    if evicted > 0 {
                        debug!("Swept {} expired lookup entries", evicted);
                    }
                }
            }
        }

        // Let outstanding scores finish before returning
        for task in in_flight {
            let _ = task.await;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use vigil_core::{RiskAssessment, RiskTier};
    use vigil_intel::{LookupResult, ThreatIntel};

    use crate::{
        BadgeSink, DeliveryError, PipelineConfig, Redirector, WarningSink, DEFAULT_INTERSTITIAL,
    };

    struct NullIntel;

    #[async_trait]
    impl ThreatIntel for NullIntel {
        async fn lookup(&self, _url: &str) -> LookupResult {
            LookupResult::empty()
        }
    }

    struct NullBadge;

    impl BadgeSink for NullBadge {
        fn update(&self, _tab: TabId, _tier: RiskTier) {}
    }

    struct NullWarning;

    #[async_trait]
    impl WarningSink for NullWarning {
        async fn deliver(
            &self,
            _tab: TabId,
            _assessment: &RiskAssessment,
        ) -> Result<(), DeliveryError> {
            Ok(())
        }
    }

    struct NullRedirect;

    impl Redirector for NullRedirect {
        fn redirect(&self, _tab: TabId, _target: &str) {}
    }

    fn test_pipeline() -> Arc<Pipeline> {
        Arc::new(Pipeline::new(
            Arc::new(NullIntel),
            PipelineConfig {
                badge: Arc::new(NullBadge),
                warning: Arc::new(NullWarning),
                redirect: Arc::new(NullRedirect),
                interstitial: DEFAULT_INTERSTITIAL.to_string(),
            },
        ))
    }

    #[tokio::test]
    async fn test_run_drains_navigations_then_stops() {
        let pipeline = test_pipeline();
        let service = Service::new(pipeline.clone(), ServiceConfig::default());
        let (tx, rx) = mpsc::channel(8);

        tx.send(NavigationEvent::Navigated {
            tab: TabId(1),
            url: "https://example.com/".to_string(),
        })
        .await
        .unwrap();
        tx.send(NavigationEvent::Navigated {
            tab: TabId(2),
            url: "http://example.tk/".to_string(),
        })
        .await
        .unwrap();
        tx.send(NavigationEvent::TabClosed { tab: TabId(3) })
            .await
            .unwrap();
        drop(tx);

        service.run(rx).await.unwrap();

        // Both navigations completed before run returned
        let activity = pipeline.activity();
        assert_eq!(activity.len(), 2);
        let urls: Vec<_> = activity.iter().map(|r| r.url.as_str()).collect();
        assert!(urls.contains(&"https://example.com/"));
        assert!(urls.contains(&"http://example.tk/"));
        assert!(pipeline.risk_data(TabId(1)).is_some());
        assert!(pipeline.risk_data(TabId(2)).is_some());
        assert!(pipeline.risk_data(TabId(3)).is_none());
    }

    #[tokio::test]
    async fn test_disabled_settings_score_nothing() {
        let pipeline = test_pipeline();
        let config = ServiceConfig {
            settings: Settings {
                enabled: false,
                ..Settings::default()
            },
            ..ServiceConfig::default()
        };
        let service = Service::new(pipeline.clone(), config);
        let (tx, rx) = mpsc::channel(8);

        tx.send(NavigationEvent::Navigated {
            tab: TabId(1),
            url: "http://bad.example/".to_string(),
        })
        .await
        .unwrap();
        drop(tx);

        service.run(rx).await.unwrap();

        assert!(pipeline.activity().is_empty());
        assert!(pipeline.risk_data(TabId(1)).is_none());
    }
}
