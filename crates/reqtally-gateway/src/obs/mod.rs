//! Request observation.
//!
//! Every request passing through the gateway router is counted once in the
//! shared `MetricsAggregator`, keyed by its raw URI path.

pub mod track;
