//! Request metrics (aggregator, snapshots, outcome classification).
//!
//! The aggregator is the only writer of endpoint counters. Callers decide
//! what an endpoint key is and whether a request succeeded; this module only
//! counts and reports.

pub mod aggregator;
pub mod outcome;
pub mod snapshot;

pub use aggregator::MetricsAggregator;
pub use outcome::{Outcome, StatusClassifier};
pub use snapshot::{EndpointMetrics, MetricsSnapshot};
