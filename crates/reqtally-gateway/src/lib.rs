//! reqtally gateway library entry.
//!
//! This crate wires config, shared state, the request-recording middleware,
//! and the metrics read endpoint into an axum router. It is intended to be
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
