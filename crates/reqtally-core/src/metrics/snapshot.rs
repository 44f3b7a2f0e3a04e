use std::collections::btree_map::{self, BTreeMap};
use std::fmt::Write;

use serde::{Deserialize, Serialize};

/// Point-in-time counters for one endpoint.
///
/// `total_calls` is always `success_count + error_count`; the constructor
/// derives it and deserialization rejects payloads that disagree.
///
/// Wire names differ from the accessor names: `total_calls`, `success`,
/// `errors`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireMetrics")]
pub struct EndpointMetrics {
    total_calls: u64,
    #[serde(rename = "success")]
    success_count: u64,
    #[serde(rename = "errors")]
    error_count: u64,
}

impl EndpointMetrics {
    pub fn new(success_count: u64, error_count: u64) -> Self {
        Self {
            total_calls: success_count.saturating_add(error_count),
            success_count,
            error_count,
        }
    }

    pub fn total_calls(&self) -> u64 {
        self.total_calls
    }

    pub fn success_count(&self) -> u64 {
        self.success_count
    }

    pub fn error_count(&self) -> u64 {
        self.error_count
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct WireMetrics {
    total_calls: u64,
    success: u64,
    errors: u64,
}

impl TryFrom<WireMetrics> for EndpointMetrics {
    type Error = String;

    fn try_from(w: WireMetrics) -> Result<Self, Self::Error> {
        if w.success.checked_add(w.errors) != Some(w.total_calls) {
            return Err(format!(
                "total_calls ({}) must equal success ({}) + errors ({})",
                w.total_calls, w.success, w.errors
            ));
        }
        Ok(Self::new(w.success, w.errors))
    }
}

/// By-value copy of every tracked endpoint, ordered by endpoint key.
///
/// Serializes as a flat JSON object keyed by endpoint:
/// `{"/orders/": {"total_calls": 2, "success": 1, "errors": 1}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricsSnapshot {
    entries: BTreeMap<String, EndpointMetrics>,
}

impl MetricsSnapshot {
    pub fn get(&self, endpoint: &str) -> Option<&EndpointMetrics> {
        self.entries.get(endpoint)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, EndpointMetrics> {
        self.entries.iter()
    }

    pub fn into_inner(self) -> BTreeMap<String, EndpointMetrics> {
        self.entries
    }

    /// Render in Prometheus text exposition format.
    ///
    /// One counter family, `<prefix>_requests_total`, labelled by endpoint and
    /// outcome. Totals are implied by summing the two outcomes.
    pub fn render_prometheus(&self, prefix: &str) -> String {
        let name = format!("{prefix}_requests_total");
        let mut out = String::new();
        let _ = writeln!(out, "# TYPE {name} counter");
        for (endpoint, m) in &self.entries {
            let endpoint = escape_label(endpoint);
            let _ = writeln!(
                out,
                "{name}{{endpoint=\"{endpoint}\",outcome=\"success\"}} {}",
                m.success_count
            );
            let _ = writeln!(
                out,
                "{name}{{endpoint=\"{endpoint}\",outcome=\"error\"}} {}",
                m.error_count
            );
        }
        out
    }
}

impl FromIterator<(String, EndpointMetrics)> for MetricsSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, EndpointMetrics)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MetricsSnapshot {
    type Item = (String, EndpointMetrics);
    type IntoIter = btree_map::IntoIter<String, EndpointMetrics>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a MetricsSnapshot {
    type Item = (&'a String, &'a EndpointMetrics);
    type IntoIter = btree_map::Iter<'a, String, EndpointMetrics>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}
