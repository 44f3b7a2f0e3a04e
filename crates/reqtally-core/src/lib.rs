//! reqtally core: per-endpoint request counters and their reporting types.
//!
//! This crate holds the concurrency-safe aggregator plus the snapshot and
//! error types shared with the gateway. It carries no HTTP or async runtime
//! dependencies so any request-handling layer can feed it.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Recording and snapshotting cannot fail; configuration problems surface as
//! `ReqTallyError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;

/// Shared result type.
pub use error::{Result, ReqTallyError};
pub use metrics::{EndpointMetrics, MetricsAggregator, MetricsSnapshot, Outcome, StatusClassifier};
