//! Per-endpoint request counters.
//!
//! Storage is a `DashMap` from endpoint key to a pair of atomic counters
//! (success, error). `total_calls` is never stored: it is derived as the sum
//! of the two when an entry is read, so a reader can never observe a total
//! that disagrees with its parts, and each `record` is a single atomic add.
//!
//! Locking:
//! - `record` on a known endpoint takes only a shard *read* lock plus one
//!   `fetch_add`, so concurrent writers never exclude each other.
//! - `record` on a new endpoint takes the shard write lock once to insert.
//! - `snapshot` walks shards under read locks. It delays only inserts of new
//!   keys into the shard currently being copied, never increments.
//!
//! A single `Mutex<HashMap<..>>` would be simpler but serialises every writer
//! against each other and against the whole snapshot traversal.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use super::outcome::Outcome;
use super::snapshot::{EndpointMetrics, MetricsSnapshot};

#[derive(Debug, Default)]
struct EndpointCounters {
    success: AtomicU64,
    errors: AtomicU64,
}

impl EndpointCounters {
    fn bump(&self, outcome: Outcome) {
        let counter = match outcome {
            Outcome::Success => &self.success,
            Outcome::Error => &self.errors,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn load(&self) -> EndpointMetrics {
        EndpointMetrics::new(
            self.success.load(Ordering::Relaxed),
            self.errors.load(Ordering::Relaxed),
        )
    }
}

/// In-process request metrics aggregator.
///
/// Construct once at startup and share via `Arc`. Endpoint keys are opaque:
/// no validation or normalization happens here, and the key set grows with
/// every distinct endpoint the caller reports.
#[derive(Debug, Default)]
pub struct MetricsAggregator {
    endpoints: DashMap<String, EndpointCounters>,
}

impl MetricsAggregator {
    pub fn new() -> Self {
        Self {
            endpoints: DashMap::new(),
        }
    }

    /// Count one completed request for `endpoint`.
    pub fn record(&self, endpoint: &str, succeeded: bool) {
        self.record_outcome(endpoint, Outcome::from(succeeded));
    }

    pub fn record_outcome(&self, endpoint: &str, outcome: Outcome) {
        // Known key: shared shard lock, no allocation.
        if let Some(counters) = self.endpoints.get(endpoint) {
            counters.bump(outcome);
            return;
        }

        let counters = self
            .endpoints
            .entry(endpoint.to_owned())
            .or_insert_with(|| {
                tracing::debug!(endpoint, "tracking new endpoint");
                EndpointCounters::default()
            });
        counters.bump(outcome);
    }

    /// Copy the current counters of every endpoint seen so far.
    ///
    /// Each entry is internally consistent; entries for different endpoints
    /// may be read at slightly different moments.
    pub fn snapshot(&self) -> MetricsSnapshot {
        self.endpoints
            .iter()
            .map(|r| (r.key().clone(), r.value().load()))
            .collect()
    }

    /// Counters for a single endpoint, if it has been recorded.
    pub fn get(&self, endpoint: &str) -> Option<EndpointMetrics> {
        self.endpoints.get(endpoint).map(|r| r.value().load())
    }

    /// Number of distinct endpoints tracked.
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Drop every tracked endpoint. Increments racing with the reset land
    /// either before it (and are discarded) or after it (in a fresh entry).
    pub fn reset(&self) {
        let dropped = self.endpoints.len();
        self.endpoints.clear();
        tracing::info!(dropped, "metrics reset");
    }
}
