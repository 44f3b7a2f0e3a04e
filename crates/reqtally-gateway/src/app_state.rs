//! Shared application state for the reqtally gateway.
//!
//! The aggregator is created by the caller (the binary's composition root or
//! a test) and handed in, so the recording middleware and the read endpoint
//! share one explicit instance instead of a process-wide static.

use std::sync::Arc;

use reqtally_core::error::Result;
use reqtally_core::{MetricsAggregator, StatusClassifier};

use crate::config::GatewayConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<MetricsAggregator>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    classifier: StatusClassifier,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: GatewayConfig, metrics: Arc<MetricsAggregator>) -> Result<Self> {
        cfg.validate()?;
        let classifier = cfg.metrics.success_status.classifier()?;

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, classifier }),
            metrics,
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn classifier(&self) -> &StatusClassifier {
        &self.inner.classifier
    }

    pub fn metrics(&self) -> Arc<MetricsAggregator> {
        Arc::clone(&self.metrics)
    }
}
