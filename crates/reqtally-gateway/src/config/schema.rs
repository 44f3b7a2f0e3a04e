use std::net::SocketAddr;

use serde::Deserialize;
use reqtally_core::error::{Result, ReqTallyError};
use reqtally_core::StatusClassifier;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub metrics: MetricsSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
            metrics: MetricsSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ReqTallyError::UnsupportedVersion(self.version));
        }

        self.gateway.validate()?;
        self.metrics.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            ReqTallyError::BadRequest(format!(
                "gateway.listen must be a valid socket address ({}): {e}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    /// Route serving the snapshot.
    #[serde(default = "default_metrics_path")]
    pub path: String,

    /// Metric family prefix for the Prometheus text format.
    #[serde(default = "default_prometheus_prefix")]
    pub prometheus_prefix: String,

    #[serde(default)]
    pub success_status: SuccessStatus,
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self {
            path: default_metrics_path(),
            prometheus_prefix: default_prometheus_prefix(),
            success_status: SuccessStatus::default(),
        }
    }
}

impl MetricsSection {
    pub fn validate(&self) -> Result<()> {
        if !self.path.starts_with('/') {
            return Err(ReqTallyError::BadRequest(
                "metrics.path must start with '/'".into(),
            ));
        }

        let p = &self.prometheus_prefix;
        let valid_chars = p.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        let leading_digit = p.chars().next().is_some_and(|c| c.is_ascii_digit());
        if p.is_empty() || !valid_chars || leading_digit {
            return Err(ReqTallyError::BadRequest(format!(
                "metrics.prometheus_prefix must match [A-Za-z_][A-Za-z0-9_]* (got {p:?})"
            )));
        }

        self.success_status.classifier().map(|_| ())
    }
}

fn default_metrics_path() -> String {
    "/metrics/".into()
}
fn default_prometheus_prefix() -> String {
    "reqtally".into()
}

/// Half-open status range `[min, max)` counted as success.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuccessStatus {
    #[serde(default = "default_success_min")]
    pub min: u16,
    #[serde(default = "default_success_max")]
    pub max: u16,
}

impl Default for SuccessStatus {
    fn default() -> Self {
        Self {
            min: default_success_min(),
            max: default_success_max(),
        }
    }
}

impl SuccessStatus {
    pub fn classifier(&self) -> Result<StatusClassifier> {
        StatusClassifier::new(self.min, self.max)
    }
}

fn default_success_min() -> u16 {
    200
}
fn default_success_max() -> u16 {
    400
}
